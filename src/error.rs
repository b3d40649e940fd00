//! Error types for glyphlight
//!
//! Only construction can fail. Coloring a line never returns an error.

use thiserror::Error;

/// Result type alias for glyphlight operations
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Highlighter construction and language loading errors
#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern `{pattern}` in language {language}: {source}")]
    InvalidPattern {
        language: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("empty pattern in language {0}")]
    EmptyPattern(String),

    #[error("language {0} has a comment start marker but no end marker")]
    MissingCommentEnd(String),

    #[error("language definition has no name")]
    MissingName,

    #[error("unknown color category: {0}")]
    UnknownColor(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("invalid language file {path}: {source}")]
    InvalidLanguageFile {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Message(String),
}
