//! Error types for resource resolution.

use thiserror::Error;

/// Result type alias for resolution operations.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Error types for resource resolution
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// No resolver is registered for the lookup prefix of the path
    #[error("no resolver registered for lookup '{lookup}' (path: {path})")]
    NoResolver { lookup: String, path: String },

    /// The resolver for the scheme has no resource under the path
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// Reading the resource content failed
    #[error("failed to read resource at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
