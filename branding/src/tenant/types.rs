use serde::{Deserialize, Serialize};

/// Sentinel identity for requests carrying no tenant id.
pub const DEFAULT_TENANT_KEY: &str = "default";

/// Fixed product identity, used when a tenant supplies no branding of its own.
pub const DEFAULT_APP_NAME: &str = "AgriReach";
pub const DEFAULT_APP_TAGLINE: &str = "Grow smarter together";
pub const DEFAULT_LOGO_URL: &str = "/assets/logo.png";
pub const DEFAULT_SPLASH_URL: &str = "/assets/splash.png";

/// Identity defaults applied by the builder.
pub const DEFAULT_TENANT_TYPE: &str = "default";
pub const DEFAULT_TENANT_STATUS: &str = "active";
pub const DEFAULT_SUBSCRIPTION_PLAN: &str = "basic";

/// Raw tenant identity row as delivered by the backend.
///
/// Every field is optional; the builder supplies defaults. Typed precisely
/// on purpose: call sites never reach into loosely-typed maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tenant_type: Option<String>,
    pub status: Option<String>,
    pub subscription_plan: Option<String>,
}

/// Raw branding row. May be partially populated or absent entirely;
/// an absent row means "no theme" to the resolver.
///
/// Color values are `"H S% L%"` triples stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantBranding {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub logo_url: Option<String>,
    pub app_name: Option<String>,
    pub app_tagline: Option<String>,
}

/// Raw feature-flag row. `None` means the flag was never set, which the
/// builder treats as enabled; an explicit `false` is respected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantFeatures {
    pub ai_chat: Option<bool>,
    pub weather_forecast: Option<bool>,
    pub marketplace: Option<bool>,
    pub community_forum: Option<bool>,
    pub satellite_imagery: Option<bool>,
    pub soil_testing: Option<bool>,
    pub basic_analytics: Option<bool>,
}

/// Fully-defaulted branding nested in [`SimpleTenantData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingProfile {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub logo_url: String,
    pub splash_url: String,
    pub app_name: String,
    pub app_tagline: String,
}

/// Concrete feature switches with every flag populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub ai_chat: bool,
    pub weather_forecast: bool,
    pub marketplace: bool,
    pub community_forum: bool,
    pub satellite_imagery: bool,
    pub soil_testing: bool,
    pub basic_analytics: bool,
}

/// Normalized tenant shape handed to consumers.
///
/// Invariant: every field is populated. Downstream code never checks for
/// missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTenantData {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub tenant_type: String,
    pub status: String,
    pub subscription_plan: String,
    pub branding: BrandingProfile,
    pub features: FeatureSet,
}
