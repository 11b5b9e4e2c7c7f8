//! The default layout applied by `ccde --default`.

use ccde_paths::{CcdePaths, PathError};
use tracing::{debug, info};

use crate::errors::CcdeError;
use crate::layout::LayoutSpec;
use crate::loading::{LoadError, parse_layout_file};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Paths(#[from] PathError),

    #[error("Failed to load default layout: {0}")]
    Load(#[from] LoadError),
}

impl CcdeError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Paths(inner) => inner.error_code(),
            ConfigError::Load(inner) => inner.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ConfigError::Paths(inner) => inner.is_user_error(),
            ConfigError::Load(inner) => inner.is_user_error(),
        }
    }
}

/// Load the default layout from the user's config directory.
///
/// Returns `Ok(None)` when no default layout exists.
pub fn load_default_layout() -> Result<Option<LayoutSpec>, ConfigError> {
    let paths = CcdePaths::resolve()?;
    load_default_layout_from(&paths)
}

/// Load the default layout from an explicit config directory.
pub fn load_default_layout_from(paths: &CcdePaths) -> Result<Option<LayoutSpec>, ConfigError> {
    let path = paths.default_layout();
    if !path.exists() {
        debug!(
            event = "core.config.default_layout_missing",
            path = %path.display()
        );
        return Ok(None);
    }

    let layout = parse_layout_file(&path)?;
    info!(
        event = "core.config.default_layout_loaded",
        path = %path.display(),
        panes = layout.pane_count()
    );
    Ok(Some(layout))
}
