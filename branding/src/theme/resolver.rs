use super::types::{ResolvedTheme, fallback_colors};
use crate::tenant::types::TenantBranding;

/// Derive a concrete theme from an optional branding row.
///
/// An absent row means "no theme" and yields `None`; consumers render their
/// product defaults in that case. Given any branding row, resolution is pure
/// and total: supplied colors pass through unchanged and missing ones take
/// the documented [`fallback_colors`] values, so the result always has all
/// five fields populated. Never signals failure.
pub fn resolve_theme(branding: Option<&TenantBranding>) -> Option<ResolvedTheme> {
    let branding = branding?;

    Some(ResolvedTheme {
        primary: branding
            .primary_color
            .clone()
            .unwrap_or_else(|| fallback_colors::PRIMARY.to_string()),
        secondary: branding
            .secondary_color
            .clone()
            .unwrap_or_else(|| fallback_colors::SECONDARY.to_string()),
        accent: branding
            .accent_color
            .clone()
            .unwrap_or_else(|| fallback_colors::ACCENT.to_string()),
        background: branding
            .background_color
            .clone()
            .unwrap_or_else(|| fallback_colors::BACKGROUND.to_string()),
        foreground: branding
            .text_color
            .clone()
            .unwrap_or_else(|| fallback_colors::FOREGROUND.to_string()),
    })
}
