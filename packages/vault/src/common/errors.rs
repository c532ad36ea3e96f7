use thiserror::Error;

use crate::common::PostId;
use crate::domains::posts::models::PostStatus;

/// Errors raised by post stores and status parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Post {0} not found")]
    PostNotFound(PostId),

    #[error("Post {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: PostId,
        from: PostStatus,
        to: PostStatus,
    },

    #[error("Duplicate post id {0}")]
    DuplicatePostId(PostId),

    #[error("Invalid post status: {0}")]
    InvalidStatus(String),
}

pub type Result<T, E = VaultError> = std::result::Result<T, E>;
