use thiserror::Error;

/// Error taxonomy for the crate. Every failure is local to one request's
/// computation; nothing here is fatal to the process. Authorization
/// failures are the identity layer's concern and never appear here.
///
/// A reconciliation requested for a future month is NOT an error — it is
/// reported through [`crate::model::report::MonthlyReport::NotYetAvailable`].
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed date, out-of-range month, missing required field.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No such user, leave request, or holiday.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate holiday date, duplicate attendance punch.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Failure inside a backing store implementation.
    #[error("store failure: {0}")]
    Store(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
