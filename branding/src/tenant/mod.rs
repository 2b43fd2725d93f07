//! Tenant row normalization.
//!
//! Raw rows arriving from the backend are partially populated at best: the
//! branding row may be absent entirely, feature flags may carry nulls, and
//! even the identity row can miss fields. This module turns those rows into
//! a [`types::SimpleTenantData`] with every field defaulted, so downstream
//! consumers never branch on missing-field checks.
//!
//! - [`types`] - Raw row shapes and the fully-defaulted output shapes
//! - [`builder`] - The defaulting function itself
//! - [`validation`] - Tenant identifier validation for application boundaries

pub mod builder;
pub mod types;
pub mod validation;

pub use builder::build_tenant_data;
pub use types::{SimpleTenantData, TenantBranding, TenantFeatures, TenantRow};
