use branding::error::StoreError;
use branding::tenant::validation::TenantValidationError;
use std::fmt::Display;

/// Application-wide error types for the Tenantry command line.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Storage`] - Theme store failures surfaced by explicit operations
/// - [`Input`] - Bad fixture files or rejected command arguments
///
/// Resolution itself never produces an error: the branding library degrades
/// gracefully inside the cache. Errors here come from the boundaries around
/// it.
///
/// [`Config`]: AppError::Config
/// [`Storage`]: AppError::Storage
/// [`Input`]: AppError::Input
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    Config(String),

    /// Storage failures from explicit operations such as `clear`.
    Storage(String),

    /// Invalid fixture files or command arguments.
    Input(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Input(msg) => write!(f, "Input Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<TenantValidationError> for AppError {
    fn from(err: TenantValidationError) -> Self {
        AppError::Input(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
