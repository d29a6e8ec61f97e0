use thiserror::Error;

use crate::store::post::PostId;

/// Errors surfaced by [`PostStore`](crate::store::PostStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("post not found: {0}")]
    NotFound(PostId),
}

pub type StoreResult<T> = Result<T, StoreError>;
