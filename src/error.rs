//! Error types for list cleanup

use thiserror::Error;

/// Errors that can surface from a cleanup call.
///
/// Fields that fail the grammars are not errors: they are dropped from
/// the output (and optionally reported through `tracing` when
/// `log_garbage` is set).
#[derive(Error, Debug)]
pub enum CleanupError {
    /// Address-only output and display-name output were both requested
    #[error(
        "`only_return_emails` cannot be combined with `add_display_names` or `only_return_names`"
    )]
    ConflictingOptions,

    /// An options document could not be deserialized
    #[error("Invalid options document: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type for cleanup operations
pub type Result<T> = std::result::Result<T, CleanupError>;
