use chrono::{DateTime, Utc};
use log::debug;

use super::formatter::time_ago;
use super::scorer::{net_score, score};
use crate::common::{Comment, Limit, RankedComment};

/// Attach the derived ranking fields to one comment without reordering anything
pub fn to_ranked(comment: &Comment, now: DateTime<Utc>) -> RankedComment {
    RankedComment {
        net_score: net_score(comment),
        score: score(comment, now),
        time_ago: time_ago(comment.created_at, now),
        comment: comment.clone(),
        replies: None,
    }
}

/// Score every comment against the same `now` and sort by score, highest first.
///
/// The sort is stable, so comments with equal scores keep their input order.
pub fn rank_comments(comments: &[Comment], now: DateTime<Utc>) -> Vec<RankedComment> {
    let mut ranked: Vec<RankedComment> = comments.iter().map(|c| to_ranked(c, now)).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// The `limit` highest-scoring comments
pub fn top_comments(comments: &[Comment], limit: Limit, now: DateTime<Utc>) -> Vec<RankedComment> {
    let mut ranked = rank_comments(comments, now);
    limit.apply(&mut ranked);
    debug!(
        "Ranked {} comments, kept {} (limit: {})",
        comments.len(),
        ranked.len(),
        limit
    );
    ranked
}
