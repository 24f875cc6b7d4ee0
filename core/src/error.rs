// shopcore/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate identifier on add: {id}")]
    Duplicate { id: String },

    #[error("Store backend failed during '{operation}'. Source: {source}")]
    Backend {
        operation: &'static str,
        #[source]
        source: AnyhowError,
    },
}

impl StoreError {
    /// Wraps an arbitrary backend error, tagging it with the store operation
    /// that was in flight.
    pub fn backend<E>(operation: &'static str, source: E) -> Self
    where
        E: Into<AnyhowError>,
    {
        StoreError::Backend {
            operation,
            source: source.into(),
        }
    }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
