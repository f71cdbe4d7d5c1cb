//! Error types for NEO record construction and serialization.

/// Result type for NEO operations.
pub type NeoResult<T> = Result<T, NeoError>;

/// Error type covering record validation, field parsing, and writer I/O.
///
/// Every variant is fatal to the record or write in progress. Nothing here is
/// retried or defaulted; the empty-field normalization rules live in the
/// entity constructors, not in error recovery.
#[derive(Debug, thiserror::Error)]
pub enum NeoError {
    /// The hazardous flag was outside the accepted `Y`/`y`/`N`/`n`/empty set.
    #[error("unsupported hazardous flag {value:?} for designation {designation:?}")]
    InvalidHazardFlag { designation: String, value: String },

    /// A numeric field contained a non-empty, non-numeric value.
    #[error("invalid numeric value {value:?} for field {field}")]
    InvalidNumber { field: &'static str, value: String },

    /// A calendar date string matched neither the date-time nor the
    /// date-only source format.
    #[error("unparseable calendar date {value:?}")]
    InvalidCalendarDate { value: String },

    /// Destination file could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
