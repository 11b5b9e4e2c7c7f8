//! Reading layout documents from YAML or JSON.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, error, info};

use crate::errors::CcdeError;
use crate::layout::{LayoutError, LayoutSpec, parse_layout};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Layout file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read layout file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file extension: {extension}")]
    UnsupportedExtension { extension: String },

    #[error("Invalid YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl CcdeError for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => "LAYOUT_FILE_NOT_FOUND",
            LoadError::Io { .. } => "LAYOUT_IO_ERROR",
            LoadError::UnsupportedExtension { .. } => "UNSUPPORTED_EXTENSION",
            LoadError::Yaml { .. } => "YAML_PARSE_ERROR",
            LoadError::Json { .. } => "JSON_PARSE_ERROR",
            LoadError::Layout(inner) => inner.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, LoadError::Io { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Yaml,
    Json,
}

impl LayoutFormat {
    /// Pick the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(LayoutFormat::Yaml),
            "json" => Ok(LayoutFormat::Json),
            _ => Err(LoadError::UnsupportedExtension { extension }),
        }
    }
}

/// Parse `content` into a raw document without checking its structure.
///
/// Empty or whitespace-only YAML is a null document.
pub fn parse_document(content: &str, format: LayoutFormat) -> Result<Value, LoadError> {
    match format {
        LayoutFormat::Yaml if content.trim().is_empty() => Ok(Value::Null),
        LayoutFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        LayoutFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Parse and validate a layout held in memory.
pub fn parse_layout_str(content: &str, format: LayoutFormat) -> Result<LayoutSpec, LoadError> {
    let document = parse_document(content, format)?;
    Ok(parse_layout(&document)?)
}

/// Read, parse and validate the layout file at `path`.
///
/// The extension is checked before the file is read.
pub fn parse_layout_file(path: &Path) -> Result<LayoutSpec, LoadError> {
    info!(event = "core.loading.parse_started", path = %path.display());

    let result = LayoutFormat::from_path(path).and_then(|format| {
        let content = read_layout_file(path)?;
        debug!(
            event = "core.loading.file_read",
            path = %path.display(),
            format = ?format,
            bytes = content.len()
        );
        parse_layout_str(&content, format)
    });

    match &result {
        Ok(layout) => info!(
            event = "core.loading.parse_completed",
            path = %path.display(),
            name = ?layout.name,
            panes = layout.pane_count()
        ),
        Err(e) => error!(
            event = "core.loading.parse_failed",
            path = %path.display(),
            error = %e,
            error_code = e.error_code()
        ),
    }

    result
}

fn read_layout_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
