use thiserror::Error;

/// Error type that captures common ledger and goal failures.
///
/// Every variant is terminal for the originating call: no error here is
/// recoverable by retrying inside the core, and a failed operation leaves the
/// stores untouched.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
