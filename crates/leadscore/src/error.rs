//! Errors surfaced by scoring.

use leadscore_features::ValidationError;
use leadscore_model::PipelineError;
use thiserror::Error;

/// Failure to score one record.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Required fields are missing; nothing was computed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A stage after validation failed.
    #[error("Inference failed: {0}")]
    Failed(#[source] PipelineError),
}

impl InferenceError {
    /// Whether the record was rejected before any pipeline work.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Failure to score a CSV batch as a whole.
///
/// Individual bad rows do not fail the batch; they are reported in the
/// batch's invalid rows.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Unreadable CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header lacks required fields.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upload exceeds the row cap.
    #[error("Batch has {rows} rows, the limit is {limit}")]
    TooManyRows {
        /// Data rows in the upload.
        rows: usize,
        /// Configured cap.
        limit: usize,
    },

    /// No data rows.
    #[error("Batch has no data rows")]
    Empty,

    /// I/O error reading the upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
