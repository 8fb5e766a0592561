//! Error types for the inlining passes.

use thiserror::Error;

/// Error types for HTML inlining
#[derive(Debug, Error)]
pub enum InlineError {
    /// A stylesheet link references a path missing from the supplied resources
    #[error("no stylesheet resource matches link href '{href}'")]
    MissingStylesheet { href: String },

    /// Resolved stylesheet bytes are not readable as UTF-8 text
    #[error("stylesheet at '{path}' is not valid UTF-8 text")]
    InvalidCssText {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Writing the rewritten document failed
    #[error("failed to serialize rewritten document")]
    Serialize(#[from] std::io::Error),

    /// The serializer produced bytes that are not valid UTF-8
    #[error("rewritten document is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
