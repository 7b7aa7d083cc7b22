//! Backend error types.
//!
//! `KeyspaceMissing` and `NotFound` are deliberately distinct: the
//! first means the bucket was never created, the second means the
//! bucket exists but the key is absent.

use thiserror::Error;

/// Result type for all backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("failed to encode record: {0}")]
    Encode(String),
    #[error("failed to decode record: {0}")]
    Decode(String),
    #[error("bucket {0:?} not found")]
    KeyspaceMissing(String),
    #[error("key {0:?} not found")]
    NotFound(String),
    #[error("write failed: {0}")]
    Write(String),
}

impl BackendError {
    /// True for the expected absent-key case, which callers usually
    /// handle without logging.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound(_))
    }
}

impl From<redb::TransactionError> for BackendError {
    fn from(e: redb::TransactionError) -> Self {
        BackendError::Write(e.to_string())
    }
}

impl From<redb::TableError> for BackendError {
    fn from(e: redb::TableError) -> Self {
        BackendError::Write(e.to_string())
    }
}

impl From<redb::StorageError> for BackendError {
    fn from(e: redb::StorageError) -> Self {
        BackendError::Write(e.to_string())
    }
}

impl From<redb::CommitError> for BackendError {
    fn from(e: redb::CommitError) -> Self {
        BackendError::Write(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(e: bcrypt::BcryptError) -> Self {
        BackendError::Encode(e.to_string())
    }
}
