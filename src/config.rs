//! Configuration for line queries.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::error::{Error, Result};
use crate::raster::LineMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied to line queries that do not specify them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefaults {
    /// Line mode used when none is given.
    #[serde(default)]
    pub mode: LineMode,

    /// Whether endpoints are dropped by default.
    #[serde(default)]
    pub exclusive: bool,
}

impl Default for LineDefaults {
    fn default() -> Self {
        Self {
            mode: LineMode::Diagonal,
            exclusive: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Query defaults.
    #[serde(default)]
    pub defaults: LineDefaults,
}

fn default_version() -> u32 {
    1
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            defaults: LineDefaults::default(),
        }
    }
}

impl LineConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::Io`] if it cannot be read, and [`Error::ConfigParse`] if it
    /// is not valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        let config = Self::parse(&content)?;
        log::debug!("loaded line config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default line config: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = LineConfig::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.defaults.mode, LineMode::Diagonal);
        assert!(!config.defaults.exclusive);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = LineConfig::parse("version: 1").unwrap();

        assert_eq!(config, LineConfig::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
version: 1
defaults:
  mode: covering
  exclusive: true
"#;

        let config = LineConfig::parse(yaml).unwrap();

        assert_eq!(config.defaults.mode, LineMode::Covering);
        assert!(config.defaults.exclusive);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
defaults:
  mode: bresenham
"#;

        let err = LineConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults:\n  mode: covering").unwrap();

        let config = LineConfig::load(file.path()).unwrap();
        assert_eq!(config.defaults.mode, LineMode::Covering);
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_config_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = LineConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err}");
    }

    #[test]
    fn test_config_load_missing() {
        let err = LineConfig::load("/nonexistent/tile-lines.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
        assert_eq!(
            LineConfig::load_or_default("/nonexistent/tile-lines.yaml"),
            LineConfig::default()
        );
    }
}
