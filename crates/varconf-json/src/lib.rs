//! JSON source loading for Varconf
//!
//! Decodes JSON text or a JSON file into the generic value tree and hands
//! back a ready [`Config`]. Source problems are reported before the core
//! ever sees data, with "not found" kept distinct from "malformed":
//!
//! - [`Error::NotFound`]: the file does not exist
//! - [`Error::Io`]: the file exists but could not be read
//! - [`Error::Malformed`]: the text is not valid JSON
//!
//! Any well-formed JSON root is accepted; traversal semantics take care of
//! non-object roots.
//!
//! # Example
//!
//! ```
//! let config = varconf_json::from_str(r#"{
//!     "app": {"name": "demo"},
//!     "banner": "%app.name% %version%"
//! }"#).unwrap();
//!
//! assert!(config.has("app.name"));
//! assert!(!config.has("app.missing"));
//! ```

use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

use varconf_core::{Config, VariableTable};

pub mod error;

pub use error::{Error, Result};

/// Loader for JSON configuration sources.
///
/// Carries construction options for the [`Config`]s it produces; the
/// zero-option loader behind [`from_str`] and [`from_file`] covers most
/// uses.
///
/// # Example
///
/// ```
/// use varconf_core::VariableTable;
/// use varconf_json::JsonLoader;
///
/// let defaults: VariableTable = [("best_framework", "TEST")].into_iter().collect();
/// let config = JsonLoader::new()
///     .with_defaults(defaults)
///     .load_str(r#"{"v": "%best_framework%"}"#)
///     .unwrap();
///
/// assert_eq!(config.get("v").unwrap(), "TEST");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonLoader {
    defaults: Option<VariableTable>,
    max_depth: Option<usize>,
}

impl JsonLoader {
    /// Create a loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default-variable table injected into produced configs
    /// (instead of [`VariableTable::host`]).
    pub fn with_defaults(mut self, defaults: VariableTable) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Override the substitution pass bound of produced configs.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Decode JSON text into a ready [`Config`].
    ///
    /// # Errors
    ///
    /// [`Error::Malformed`] when the text is not valid JSON.
    pub fn load_str(&self, source: &str) -> Result<Config> {
        let root: Value = serde_json::from_str(source).map_err(|e| Error::Malformed {
            message: e.to_string(),
        })?;
        tracing::debug!(bytes = source.len(), "decoded JSON configuration source");

        let mut config = match &self.defaults {
            Some(defaults) => Config::with_defaults(root, defaults.clone()),
            None => Config::new(root),
        };
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        Ok(config)
    }

    /// Read and decode a JSON file into a ready [`Config`].
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the file does not exist; [`Error::Io`] for
    /// other read failures; [`Error::Malformed`] when the content is not
    /// valid JSON.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        tracing::debug!(?path, "read JSON configuration file");
        self.load_str(&source)
    }
}

/// Decode JSON text into a [`Config`] with default options.
pub fn from_str(source: &str) -> Result<Config> {
    JsonLoader::new().load_str(source)
}

/// Load a JSON file into a [`Config`] with default options.
pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
    JsonLoader::new().load_file(path)
}
