//! Comment ranking engine.
//!
//! Everything in here is a pure function of its input comments and a single
//! `now` instant. Callers sample the clock once per request and pass it down,
//! so every comment in one listing is scored against the same moment.

pub mod formatter;
pub mod ranker;
pub mod scorer;
pub mod threader;

pub use formatter::time_ago;
pub use ranker::{rank_comments, to_ranked, top_comments};
pub use scorer::{net_score, recency_factor, reply_boost, score};
pub use threader::thread_comments;

use chrono::{DateTime, Utc};

use crate::common::{Comment, Limit, RankedComment, ViewMode};

/// Produce one of the listing shapes for a video's comments.
///
/// `replies_limit` only affects [`ViewMode::Nested`].
pub fn rank_view(
    mode: ViewMode,
    comments: &[Comment],
    top_level_limit: Limit,
    replies_limit: Limit,
    now: DateTime<Utc>,
) -> Vec<RankedComment> {
    match mode {
        ViewMode::All => rank_comments(comments, now),
        ViewMode::Top => {
            let top_level: Vec<Comment> = comments
                .iter()
                .filter(|c| c.is_top_level())
                .cloned()
                .collect();
            top_comments(&top_level, top_level_limit, now)
        }
        ViewMode::Nested => thread_comments(comments, top_level_limit, replies_limit, now),
    }
}
