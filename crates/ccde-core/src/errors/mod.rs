use std::error::Error;

/// Base trait for all ccde errors
pub trait CcdeError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the library
pub type CcdeResult<T> = Result<T, Box<dyn CcdeError>>;

impl CcdeError for ccde_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            ccde_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}
