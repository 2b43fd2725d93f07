use super::types::{
    BrandingProfile, DEFAULT_APP_NAME, DEFAULT_APP_TAGLINE, DEFAULT_LOGO_URL, DEFAULT_SPLASH_URL,
    DEFAULT_SUBSCRIPTION_PLAN, DEFAULT_TENANT_KEY, DEFAULT_TENANT_STATUS, DEFAULT_TENANT_TYPE,
    FeatureSet, SimpleTenantData, TenantBranding, TenantFeatures, TenantRow,
};
use crate::theme::types::fallback_colors;

/// Build a fully-defaulted [`SimpleTenantData`] from raw backend rows.
///
/// Pure and total: any combination of absent rows and missing fields yields
/// a complete structure. Feature flags follow nullish-coalescing semantics,
/// so an explicit `false` is respected while absence defaults to `true`.
pub fn build_tenant_data(
    tenant: &TenantRow,
    branding: Option<&TenantBranding>,
    features: Option<&TenantFeatures>,
) -> SimpleTenantData {
    let name = tenant
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
    let slug = tenant.slug.clone().unwrap_or_else(|| slugify(&name));

    SimpleTenantData {
        id: tenant
            .id
            .clone()
            .unwrap_or_else(|| DEFAULT_TENANT_KEY.to_string()),
        slug,
        tenant_type: tenant
            .tenant_type
            .clone()
            .unwrap_or_else(|| DEFAULT_TENANT_TYPE.to_string()),
        status: tenant
            .status
            .clone()
            .unwrap_or_else(|| DEFAULT_TENANT_STATUS.to_string()),
        subscription_plan: tenant
            .subscription_plan
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBSCRIPTION_PLAN.to_string()),
        branding: build_branding_profile(&name, branding),
        features: build_feature_set(features),
        name,
    }
}

fn build_branding_profile(tenant_name: &str, branding: Option<&TenantBranding>) -> BrandingProfile {
    let raw = branding.cloned().unwrap_or_default();

    BrandingProfile {
        primary_color: raw
            .primary_color
            .unwrap_or_else(|| fallback_colors::PRIMARY.to_string()),
        secondary_color: raw
            .secondary_color
            .unwrap_or_else(|| fallback_colors::SECONDARY.to_string()),
        accent_color: raw
            .accent_color
            .unwrap_or_else(|| fallback_colors::ACCENT.to_string()),
        background_color: raw
            .background_color
            .unwrap_or_else(|| fallback_colors::BACKGROUND.to_string()),
        text_color: raw
            .text_color
            .unwrap_or_else(|| fallback_colors::FOREGROUND.to_string()),
        logo_url: raw.logo_url.unwrap_or_else(|| DEFAULT_LOGO_URL.to_string()),
        splash_url: DEFAULT_SPLASH_URL.to_string(),
        // App name prefers the tenant's own name over the product default
        app_name: raw.app_name.unwrap_or_else(|| tenant_name.to_string()),
        app_tagline: raw
            .app_tagline
            .unwrap_or_else(|| DEFAULT_APP_TAGLINE.to_string()),
    }
}

fn build_feature_set(features: Option<&TenantFeatures>) -> FeatureSet {
    let flag = |pick: fn(&TenantFeatures) -> Option<bool>| {
        features.and_then(pick).unwrap_or(true)
    };

    FeatureSet {
        ai_chat: flag(|f| f.ai_chat),
        weather_forecast: flag(|f| f.weather_forecast),
        marketplace: flag(|f| f.marketplace),
        community_forum: flag(|f| f.community_forum),
        satellite_imagery: flag(|f| f.satellite_imagery),
        soil_testing: flag(|f| f.soil_testing),
        basic_analytics: flag(|f| f.basic_analytics),
    }
}

/// Derive a slug from a display name: lowercased, runs of non-alphanumerics
/// collapsed to a single hyphen, no leading or trailing separators.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
