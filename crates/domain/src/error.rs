//! Common error types used across the workspace.
//!
//! Each failure carries a typed source and converts into
//! [`PatternbookError`] via `#[from]`. None of them are fatal: callers report
//! the message and carry on.

/// Base error for every fallible operation in patternbook.
#[derive(Debug, thiserror::Error)]
pub enum PatternbookError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
}

/// Input rejected by a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Room capacity must be strictly positive.
    #[error("invalid capacity {value}, expected a positive number")]
    InvalidCapacity { value: i64 },

    /// Booking start time is not `HH:MM`.
    #[error("invalid start time {value:?}, expected HH:MM")]
    InvalidStartTime { value: String },

    /// Booking duration must be at least one minute.
    #[error("booking duration must be at least one minute")]
    InvalidDuration,

    /// No shape is registered under the given key.
    #[error("unknown shape {value:?}")]
    UnknownShape { value: String },
}

/// A referenced object does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} does not exist")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
