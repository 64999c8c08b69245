//! Error types for statement building and rendering.

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur while loading, building or rendering statements.
#[derive(Error, Debug)]
pub enum BillingError {
    /// A performance references a play identifier absent from the catalog
    #[error("unknown play: {play_id}")]
    UnknownPlay { play_id: String },

    /// A play's genre has no registered pricing policy
    #[error("unknown genre: {genre}")]
    UnknownGenre { genre: String },

    /// Failed to open or read an input file, or to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input or failed JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BillingError {
    /// Returns `true` for errors caused by invalid invoice or catalog data.
    ///
    /// These are deterministic: retrying the same input always fails the same way.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            BillingError::UnknownPlay { .. } | BillingError::UnknownGenre { .. }
        )
    }
}
