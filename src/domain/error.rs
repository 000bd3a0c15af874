use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for set-property operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure while reading or replacing the target properties file.
    #[error("Unable to {action} properties file {}: {source}", path.display())]
    PropertyIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure on the scratch file that stages a rewrite.
    #[error("Unable to {action} temporary file for modifications: {source}")]
    TempFile {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// Resolved value is not a member of the property's allow-list.
    #[error("Value '{value}' for property {property} is not in allowed list: {allowed:?}")]
    ValueNotAllowed { property: String, value: String, allowed: Vec<String> },

    /// Property name would not read back as the same key once written.
    #[error(
        "Invalid property name '{0}': must be non-empty, without surrounding whitespace, line breaks, or unescaped '=' or '#'"
    )]
    InvalidPropertyName(String),

    /// Resolved value cannot be written on a single line.
    #[error("Value {value:?} for property {property} contains a line break")]
    UnwritableValue { property: String, value: String },

    /// Bulk definitions file could not be opened.
    #[error("Unable to open bulk definitions file {}: {source}", path.display())]
    BulkDefinitionsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bulk definitions file is not valid JSON of the expected shape.
    #[error("Unable to decode bulk definitions in {}: {source}", path.display())]
    BulkDefinitionsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `from=to` value mapping could not be parsed.
    #[error("Invalid mapping '{0}': expected syntax from=to")]
    InvalidMapping(String),

    /// Command line did not describe a runnable invocation.
    #[error("{0}")]
    Usage(String),
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit statuses.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::PropertyIo { source, .. }
            | AppError::TempFile { source, .. }
            | AppError::BulkDefinitionsRead { source, .. } => source.kind(),
            AppError::ValueNotAllowed { .. }
            | AppError::InvalidPropertyName(_)
            | AppError::UnwritableValue { .. }
            | AppError::BulkDefinitionsParse { .. }
            | AppError::InvalidMapping(_)
            | AppError::Usage(_) => io::ErrorKind::InvalidInput,
        }
    }

    /// Whether this failure is a rejected value rather than an environmental problem.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValueNotAllowed { .. })
    }
}
