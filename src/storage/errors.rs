use thiserror::Error;

use crate::common::CommentId;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Comment not found: {comment_id}")]
    CommentNotFound { comment_id: CommentId },

    #[error("Duplicate comment id in snapshot: {comment_id}")]
    DuplicateComment { comment_id: CommentId },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn comment_not_found(comment_id: impl AsRef<str>) -> Self {
        StorageError::CommentNotFound {
            comment_id: comment_id.as_ref().to_string(),
        }
    }

    pub fn duplicate_comment(comment_id: impl AsRef<str>) -> Self {
        StorageError::DuplicateComment {
            comment_id: comment_id.as_ref().to_string(),
        }
    }
}

// Result type alias for convenience
pub type StorageResult<T> = Result<T, StorageError>;
