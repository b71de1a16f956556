//! Store error types

use thiserror::Error;

use crate::error::ValidationError;

/// Errors returned by [`Store`](super::Store) operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid payload: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
