use crate::errors::CcdeError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout configuration must have a 'layout' property")]
    MissingLayout,

    #[error(
        "Container at {path} must have type 'horizontal' or 'vertical' (found {found})"
    )]
    InvalidContainerType { path: String, found: String },

    #[error("Container at {path} must have a 'panes' array")]
    MissingPanes { path: String },

    #[error(
        "Configuration error at {path}: ratio array length ({ratio_len}) must match panes array length ({panes_len})"
    )]
    RatioLengthMismatch {
        path: String,
        ratio_len: usize,
        panes_len: usize,
    },

    #[error("Multiple panes marked with focus: {}", paths.join(", "))]
    MultipleFocus { paths: Vec<String> },

    #[error("Invalid '{field}' at {path}: {message}")]
    InvalidField {
        path: String,
        field: String,
        message: String,
    },
}

impl CcdeError for LayoutError {
    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::MissingLayout => "LAYOUT_MISSING",
            LayoutError::InvalidContainerType { .. } => "INVALID_CONTAINER_TYPE",
            LayoutError::MissingPanes { .. } => "MISSING_PANES",
            LayoutError::RatioLengthMismatch { .. } => "RATIO_LENGTH_MISMATCH",
            LayoutError::MultipleFocus { .. } => "MULTIPLE_FOCUS",
            LayoutError::InvalidField { .. } => "INVALID_FIELD",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
