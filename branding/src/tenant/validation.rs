use crate::validation::Validator;
use thiserror::Error;

/// Validation errors for tenant identifiers crossing an application boundary.
#[derive(Error, Debug, Clone)]
pub enum TenantValidationError {
    #[error("Invalid tenant id '{id}': {reason}")]
    InvalidTenantId { id: String, reason: String },
}

/// Validator for tenant identifiers.
///
/// The cache itself is total over any string it is handed; this validator
/// exists so boundaries (CLI arguments, request parameters) can reject
/// malformed ids with a useful message before they reach the cache key.
pub struct TenantIdValidator;

const MAX_TENANT_ID_LEN: usize = 64;

impl Validator<str> for TenantIdValidator {
    type Error = TenantValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(TenantValidationError::InvalidTenantId {
                id: input.to_string(),
                reason: "id cannot be empty".to_string(),
            });
        }

        if input.len() > MAX_TENANT_ID_LEN {
            return Err(TenantValidationError::InvalidTenantId {
                id: input.to_string(),
                reason: format!("id too long (max {MAX_TENANT_ID_LEN} characters)"),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TenantValidationError::InvalidTenantId {
                id: input.to_string(),
                reason: "only alphanumerics, hyphens and underscores allowed".to_string(),
            });
        }

        if input.starts_with('-')
            || input.starts_with('_')
            || input.ends_with('-')
            || input.ends_with('_')
        {
            return Err(TenantValidationError::InvalidTenantId {
                id: input.to_string(),
                reason: "id cannot start or end with a separator".to_string(),
            });
        }

        Ok(())
    }
}
