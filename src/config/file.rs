//! JSON configuration file loading.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::ConfigError;
use super::error::json_type_name;
use super::options::ProxyOptions;
use super::path::absolutize;

/// Options read from a JSON config file.
///
/// Any object is accepted; keys the rest of the program does not know are
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileConfig {
    /// Absolute path the options were read from
    pub path: PathBuf,

    /// Parsed options
    pub options: ProxyOptions,
}

impl FileConfig {
    /// Loads the config file at `path`, resolved against `cwd` if relative.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file does not exist ([`ConfigError::FileNotFound`], naming the absolute path)
    /// - the file cannot be read
    /// - the content is not valid JSON
    /// - the top-level JSON value is not an object
    pub fn load(path: &Path, cwd: &Path) -> Result<Self, ConfigError> {
        let path = absolutize(cwd, path);

        if !path.try_exists().unwrap_or(false) {
            return Err(ConfigError::FileNotFound { path });
        }

        tracing::info!(path = %path.display(), "Loading config file");
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            source: e,
        })?;

        let options = Self::parse(&content)?;
        Ok(Self { path, options })
    }

    /// Parses options from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::InvalidType`] if the document is not an object.
    pub fn parse(content: &str) -> Result<ProxyOptions, ConfigError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => Ok(ProxyOptions::from(map)),
            other => Err(ConfigError::InvalidType {
                what: "config file",
                found: json_type_name(&other),
            }),
        }
    }
}
