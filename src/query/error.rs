//! Query error types
//!
//! Defines all error conditions that can occur while answering a climate query.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// No observations exist, so no date window or ranking can be computed
    #[error("Empty dataset: the store contains no observations")]
    EmptyDataset,

    /// A caller-supplied date is not a canonical `YYYY-MM-DD` date
    #[error("Malformed date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),

    /// Date arithmetic left the representable calendar range
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Store layer error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    /// True when the underlying store could not be reached
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self,
            QueryError::Store(StoreError::Unavailable(_)) | QueryError::Store(StoreError::Task(_))
        )
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_detection() {
        let err: QueryError = StoreError::Unavailable("gone".to_string()).into();
        assert!(err.is_store_unavailable());

        let err: QueryError = StoreError::Schema("missing table".to_string()).into();
        assert!(!err.is_store_unavailable());

        assert!(!QueryError::EmptyDataset.is_store_unavailable());
    }

    #[test]
    fn test_malformed_date_message() {
        let err = QueryError::MalformedDate("2017-1-1".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed date \"2017-1-1\": expected YYYY-MM-DD"
        );
    }
}
