use std::path::PathBuf;

/// Failure to populate a block-list from a source document.
///
/// The engine never substitutes a default word list for a failed load; the
/// caller decides whether to abort or continue with an empty list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in word list {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("word list document must be an array or an object")]
    UnsupportedFormat,

    #[error("word list contains no words")]
    Empty,
}

/// Bad argument shape or range. Always surfaced to the caller, never
/// silently corrected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("message must be a non-empty string")]
    EmptyMessage,

    #[error("message too long (max {max} characters)")]
    MessageTooLong { max: usize },

    #[error("message too short (min {min} character)")]
    MessageTooShort { min: usize },

    #[error("replacement character must be exactly one character")]
    ReplacementChar,

    #[error("unknown filter level: {value}")]
    UnknownLevel { value: String },

    #[error("word must be a non-empty string")]
    EmptyWord,
}

/// Failure to serialize the block-list to a file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot write word list {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
