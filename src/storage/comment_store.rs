use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::errors::{StorageError, StorageResult};
use crate::common::Comment;

/// Read-only snapshot of comment records, the collaborator that feeds the ranker
///
/// `CommentStore` holds every comment in fetch order and answers the two
/// lookups a listing needs: all comments of a video and all direct replies of
/// a comment. Counters are never modified here; the ranking engine only reads
/// them.
///
/// ## Snapshot format
///
/// A JSON array of comment objects using camelCase field names:
///
/// ```json
/// [
///   {
///     "id": "11111111-1111-1111-1111-111111111111",
///     "videoId": "video_123",
///     "userId": "user_1",
///     "content": "Great video!",
///     "likes": 10,
///     "dislikes": 2,
///     "replyCount": 4,
///     "createdAt": "2025-06-01T11:30:00Z"
///   }
/// ]
/// ```
///
/// Replies carry an additional `parentCommentId`.
///
/// ## Example Usage
///
/// ```rust,no_run
/// use comment_rank::common::Limit;
/// use comment_rank::ranking::thread_comments;
/// use comment_rank::storage::CommentStore;
///
/// let store = CommentStore::open("comments.json")?;
/// let comments = store.comments_for_video("video_123");
/// let threaded = thread_comments(&comments, Limit::AtMost(10), Limit::AtMost(3), chrono::Utc::now());
/// println!("{} threads", threaded.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    comments: Vec<Comment>,
}

impl CommentStore {
    /// Load a snapshot file
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let comments: Vec<Comment> = serde_json::from_str(&raw)?;
        debug!("Loaded {} comments from {}", comments.len(), path.display());
        Self::from_comments(comments)
    }

    /// Build a store from already-fetched records
    ///
    /// Fails with `StorageError::DuplicateComment` if two records share an id.
    pub fn from_comments(comments: Vec<Comment>) -> StorageResult<Self> {
        let mut seen = HashSet::with_capacity(comments.len());
        for comment in &comments {
            if !seen.insert(comment.id.as_str()) {
                return Err(StorageError::duplicate_comment(&comment.id));
            }
        }
        Ok(Self { comments })
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Every comment attached to a video, top-level and replies, in fetch order
    pub fn comments_for_video(&self, video_id: &str) -> Vec<Comment> {
        let found: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.video_id == video_id)
            .cloned()
            .collect();

        if found.is_empty() {
            warn!("No comments found for video {}", video_id);
        }
        found
    }

    /// Direct replies to a comment, in fetch order
    pub fn replies_to(&self, parent_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.is_reply_to(parent_id))
            .cloned()
            .collect()
    }

    /// Retrieve a comment by ID
    ///
    /// Returns `StorageError::CommentNotFound` if the comment doesn't exist.
    pub fn get_comment(&self, comment_id: &str) -> StorageResult<&Comment> {
        self.comments
            .iter()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| StorageError::comment_not_found(comment_id))
    }
}
