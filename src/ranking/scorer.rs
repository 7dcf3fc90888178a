//! Popularity score for a single comment.
//!
//! `score = max(0, likes - dislikes) + recency_factor + reply_boost`
//!
//! Only the net-score term is clamped. A heavily disliked comment can never
//! outrank a neutral one of the same age and reply count.

use chrono::{DateTime, Utc};

use crate::common::Comment;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Recency buckets as (upper bound in hours, inclusive; points).
const RECENCY_BUCKETS: [(f64, f64); 5] = [
    (1.0, 10.0),
    (6.0, 8.0),
    (24.0, 6.0),
    (168.0, 4.0),
    (672.0, 2.0),
];

const REPLY_BOOST_PER_REPLY: f64 = 0.5;
const REPLY_BOOST_CAP: f64 = 5.0;

/// Likes minus dislikes, may be negative. Saturates at the `i64` bounds.
pub fn net_score(comment: &Comment) -> i64 {
    let net = i128::from(comment.likes) - i128::from(comment.dislikes);
    net.clamp(i64::MIN.into(), i64::MAX.into()) as i64
}

/// Step bonus for how recently the comment was created.
///
/// Timestamps in the future (clock skew) count as brand new.
pub fn recency_factor(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let hours = (now - created_at).num_milliseconds() as f64 / MILLIS_PER_HOUR;

    RECENCY_BUCKETS
        .iter()
        .find(|(max_hours, _)| hours <= *max_hours)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

/// Half a point per direct reply, capped at five
pub fn reply_boost(reply_count: u64) -> f64 {
    (reply_count as f64 * REPLY_BOOST_PER_REPLY).min(REPLY_BOOST_CAP)
}

/// Ranking key: clamped net score plus recency and reply bonuses
pub fn score(comment: &Comment, now: DateTime<Utc>) -> f64 {
    net_score(comment).max(0) as f64
        + recency_factor(comment.created_at, now)
        + reply_boost(comment.reply_count)
}
