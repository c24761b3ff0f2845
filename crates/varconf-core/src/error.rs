//! Error types for varconf-core

/// Result type for varconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested key path has no entry and no default was supplied
    #[error("Key not found in configuration: {path:?}")]
    NotFound { path: String },

    /// Placeholder resolution failed inside a value that was found.
    ///
    /// `path` is the key path the caller originally asked for, not the
    /// placeholder that failed; the precise cause is kept as the source.
    #[error("Unable to resolve {path:?} in configuration: {source}")]
    Resolution {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// Placeholder name matched neither variable table nor any key path
    #[error("Unknown placeholder {name:?}")]
    UnknownPlaceholder { name: String },

    /// Placeholder expanded to a map or list, which has no string form
    #[error("Placeholder {name:?} expands to a non-scalar value")]
    NonScalar { name: String },

    /// Substitution passes ran out before the value became placeholder-free
    #[error("Substitution exceeded {limit} passes; placeholder cycle suspected")]
    DepthExceeded { limit: usize },

    /// A substitution pass grew the working text past the size backstop
    #[error("Substitution produced a value over {limit} bytes; placeholder cycle suspected")]
    SizeExceeded { limit: usize },
}

impl Error {
    /// Wrap a substitution failure with the key path the caller asked for.
    pub(crate) fn at_path(self, path: &str) -> Self {
        Self::Resolution {
            path: path.to_string(),
            source: Box::new(self),
        }
    }
}
