//! Error types for timeago operations.

use thiserror::Error;

/// The main error type for timeago operations.
///
/// Formatting a resolved distance never fails; every variant here comes from
/// turning caller input into an instant, or from reading and writing
/// settings files.
#[derive(Error, Debug)]
pub enum TimeagoError {
    /// Input is not a timestamp shape the resolver understands
    #[error("Invalid input kind: {0}")]
    InvalidInputKind(String),

    /// Timestamp string could not be turned into an instant
    #[error("Unparseable timestamp: {0}")]
    UnparseableTimestamp(String),

    /// Timestamp string was empty or only whitespace
    #[error("Empty timestamp")]
    EmptyInput,

    /// Epoch value cannot be represented as an instant
    #[error("Timestamp out of range: {0}")]
    OutOfRange(String),

    /// Settings error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for timeago operations.
pub type Result<T> = std::result::Result<T, TimeagoError>;

/// Helper macro to bail out with a TimeagoError
///
/// # Example
///
/// ```ignore
/// if text.is_empty() {
///     bail!(EmptyInput);
/// }
/// bail!(UnparseableTimestamp, "bad month in '{}'", text);
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident) => {
        return Err($crate::TimeagoError::$variant)
    };
    ($variant:ident, $msg:expr) => {
        return Err($crate::TimeagoError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::TimeagoError::$variant(format!($fmt, $($arg)*)))
    };
}
