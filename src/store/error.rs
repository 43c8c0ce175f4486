//! Store error types
//!
//! Defines all errors that can occur while reading the observation store.

use thiserror::Error;

/// Errors that can occur in the store layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file is missing or could not be opened
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A query against the database failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database does not have the expected tables or columns
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// A stored date is not in `YYYY-MM-DD` form
    #[error("Corrupt stored date: {0:?}")]
    CorruptDate(String),

    /// The blocking task running the session was cancelled or panicked
    #[error("Store task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Task(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Unavailable("no such file".to_string());
        assert_eq!(err.to_string(), "Store unavailable: no such file");

        let err = StoreError::CorruptDate("08/23/2017".to_string());
        assert_eq!(err.to_string(), "Corrupt stored date: \"08/23/2017\"");
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let store_err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(store_err, StoreError::Sqlite(_)));
    }
}
