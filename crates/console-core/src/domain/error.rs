//! Domain-level errors
//!
//! Validation problems are reported per field by `FieldErrors` and never
//! reach this type; everything here crosses a component boundary.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the key/value persistence backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Target record does not exist; carries the entity name
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    /// Injected or network-level failure, safe to resubmit
    #[error("{0}")]
    Transient(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DomainError {
    /// Whether resubmitting the same request is a reasonable recovery.
    ///
    /// Retries are manual only: callers surface a retry control, nothing
    /// resubmits on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::Transient(_))
    }
}
