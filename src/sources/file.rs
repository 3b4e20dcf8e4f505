//! File-based configuration source.

use super::ConfigSource;
use super::flatten::flatten;
use crate::core::ConfigValue;
use crate::error::{ConfigError, Result};
use config::{File, FileFormat, Source};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based configuration source.
///
/// Loads configuration from YAML, TOML, or JSON files with format detection
/// based on file extension. Nested tables are flattened to dotted keys, so
///
/// ```yaml
/// server:
///   port: 8080
/// ```
///
/// produces the key `server.port`.
///
/// # Examples
///
/// ```rust,no_run
/// use layered_config::sources::FileSource;
///
/// let source = FileSource::new("config/default.yaml");
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    ///
    /// The format is detected from the file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Determine the file format from the extension.
    fn format(&self) -> Result<FileFormat> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::UnsupportedFormat(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(format!(
                "{}. Supported: .yaml, .yml, .toml, .json",
                other
            ))),
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<HashMap<String, ConfigValue>> {
        let format = self.format()?;

        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound(self.path.clone()),
            _ => ConfigError::Io(e),
        })?;

        let table = File::from_str(&contents, format)
            .collect()
            .map_err(|e| ConfigError::Parse(format!("{}: {}", self.path.display(), e)))?;

        flatten(table)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
