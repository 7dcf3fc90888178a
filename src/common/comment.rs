use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CommentId = String;

/// A comment record as fetched for a video, top-level or reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub video_id: String,
    pub user_id: String,
    pub content: String,
    pub likes: u64,
    pub dislikes: u64,
    pub reply_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_top_level(&self) -> bool {
        self.parent_comment_id.is_none()
    }

    /// True when this comment is a direct reply to `parent_id`.
    pub fn is_reply_to(&self, parent_id: &str) -> bool {
        self.parent_comment_id.as_deref() == Some(parent_id)
    }
}

/// A comment with its derived ranking fields.
///
/// Nothing here is persisted: `score` and `time_ago` depend on the instant
/// the ranking ran at, so they are recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub net_score: i64,
    pub score: f64,
    pub time_ago: String,
    /// Direct replies, only present on threaded output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<RankedComment>>,
}

impl RankedComment {
    pub fn id(&self) -> &str {
        &self.comment.id
    }

    pub fn with_replies(mut self, replies: Vec<RankedComment>) -> Self {
        self.replies = Some(replies);
        self
    }
}
