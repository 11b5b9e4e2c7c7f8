use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME or $XDG_CONFIG_HOME")]
    HomeNotFound,
}

/// File name of the layout applied when no layout file is given.
pub const DEFAULT_LAYOUT_FILE: &str = "default.yml";

/// Centralized path construction for the ccde config directory.
///
/// The directory is `$XDG_CONFIG_HOME/ccde` when that variable is set and
/// non-empty, otherwise `~/.config/ccde`. Use `resolve()` in production code
/// and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct CcdePaths {
    config_dir: PathBuf,
}

impl CcdePaths {
    /// Resolve paths from `$XDG_CONFIG_HOME` or the user's home directory.
    pub fn resolve() -> Result<Self, PathError> {
        let base = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
            _ => dirs::home_dir()
                .ok_or(PathError::HomeNotFound)?
                .join(".config"),
        };
        Ok(Self {
            config_dir: base.join("ccde"),
        })
    }

    /// Create paths from an explicit config directory. Use in tests.
    pub fn from_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// The base `ccde` config directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Layout used when the CLI is invoked with `--default`.
    pub fn default_layout(&self) -> PathBuf {
        self.config_dir.join(DEFAULT_LAYOUT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env::with_vars;

    fn test_paths() -> CcdePaths {
        CcdePaths::from_dir(PathBuf::from("/home/user/.config/ccde"))
    }

    #[test]
    fn test_resolve_prefers_xdg_config_home() {
        with_vars([("XDG_CONFIG_HOME", Some("/tmp/xdg"))], || {
            let paths = CcdePaths::resolve().unwrap();
            assert_eq!(paths.config_dir(), Path::new("/tmp/xdg/ccde"));
        });
    }

    #[test]
    fn test_resolve_ignores_empty_xdg_config_home() {
        with_vars(
            [("XDG_CONFIG_HOME", Some("")), ("HOME", Some("/home/tester"))],
            || {
                let paths = CcdePaths::resolve().unwrap();
                assert_eq!(
                    paths.config_dir(),
                    Path::new("/home/tester/.config/ccde")
                );
            },
        );
    }

    #[test]
    fn test_resolve_falls_back_to_home() {
        with_vars(
            [
                ("XDG_CONFIG_HOME", None::<&str>),
                ("HOME", Some("/home/tester")),
            ],
            || {
                let paths = CcdePaths::resolve().unwrap();
                assert_eq!(
                    paths.default_layout(),
                    PathBuf::from("/home/tester/.config/ccde/default.yml")
                );
            },
        );
    }

    #[test]
    fn test_from_dir() {
        let paths = CcdePaths::from_dir(PathBuf::from("/tmp/test-ccde"));
        assert_eq!(paths.config_dir(), Path::new("/tmp/test-ccde"));
    }

    #[test]
    fn test_default_layout() {
        assert_eq!(
            test_paths().default_layout(),
            PathBuf::from("/home/user/.config/ccde/default.yml")
        );
    }
}
