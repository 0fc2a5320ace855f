//! Error types for pointer navigation and document parsing.

use thiserror::Error;

/// Errors that can occur while navigating, updating, parsing or writing a
/// [`Value`](crate::Value) tree.
///
/// The lenient entry points (`find_pointer`, `set_at_pointer`, `parse`, ...)
/// log these and collapse them into `None`; the `try_*` variants hand them
/// back to the caller.
#[derive(Error, Debug)]
pub enum DictError {
    /// A pointer path was empty where a segment was required.
    #[error("path is empty")]
    EmptyPath,

    /// A pointer path did not begin with `/`.
    #[error("path must start with /: {0}")]
    MissingLeadingSlash(String),

    /// Navigation reached a leaf (string, number, bool, null) with path left over.
    #[error("only objects and vectors supported")]
    NotNavigable,

    /// An object had no member with the requested key.
    #[error("{0} not found")]
    KeyNotFound(String),

    /// An array segment was not a base-10 non-negative integer.
    #[error("invalid index {0}")]
    InvalidIndex(String),

    /// An array segment was past the end of the array.
    #[error("index beyond end of vector {index}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The format name or file extension is neither JSON nor YAML.
    #[error("invalid format {0}")]
    UnsupportedFormat(String),

    /// The document held a number the value model cannot represent.
    ///
    /// Raised inside deserialization, so it reaches callers wrapped in
    /// [`DictError::Json`] or [`DictError::Yaml`] with this message.
    #[error("unsupported number {0}: only 64-bit signed integers are supported")]
    UnsupportedNumber(String),

    /// The input was not valid JSON, or the value could not be written as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not valid YAML, or the value could not be written as YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A document file could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout dict-core.
pub type Result<T> = std::result::Result<T, DictError>;
