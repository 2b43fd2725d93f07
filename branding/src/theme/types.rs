use serde::{Deserialize, Serialize};

/// Fallback color values used verbatim when a branding field is missing.
///
/// Values are `"H S% L%"` triples. These are the documented defaults; tests
/// assert against them literally.
pub mod fallback_colors {
    pub const PRIMARY: &str = "142 76% 36%";
    pub const SECONDARY: &str = "210 40% 98%";
    pub const ACCENT: &str = "210 40% 96%";
    pub const BACKGROUND: &str = "0 0% 100%";
    pub const FOREGROUND: &str = "222.2 84% 4.9%";
}

/// Fully-resolved color theme ready to hand to a presentation layer.
///
/// Invariant: all five fields are always populated. A theme is never
/// partially built; missing branding fields are substituted with the
/// [`fallback_colors`] defaults at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
}

impl Default for ResolvedTheme {
    /// The all-defaults theme, equal to resolving an empty branding row.
    fn default() -> Self {
        Self {
            primary: fallback_colors::PRIMARY.to_string(),
            secondary: fallback_colors::SECONDARY.to_string(),
            accent: fallback_colors::ACCENT.to_string(),
            background: fallback_colors::BACKGROUND.to_string(),
            foreground: fallback_colors::FOREGROUND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_uses_documented_fallbacks() {
        let theme = ResolvedTheme::default();
        assert_eq!(theme.primary, "142 76% 36%");
        assert_eq!(theme.secondary, "210 40% 98%");
        assert_eq!(theme.accent, "210 40% 96%");
        assert_eq!(theme.background, "0 0% 100%");
        assert_eq!(theme.foreground, "222.2 84% 4.9%");
    }
}
