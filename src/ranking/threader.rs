use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, trace};

use super::ranker::{rank_comments, to_ranked};
use crate::common::{Comment, Limit, RankedComment};

/// Two-level display structure: ranked top-level comments, each with its replies.
///
/// Top-level comments are sorted by score and cut to `top_level_limit`. Replies
/// are scored too but ordered newest first so a conversation reads in
/// chronological order, then cut to `replies_limit` per parent.
///
/// Only direct replies to a retained top-level comment are attached. A reply
/// to a reply has no top-level parent and is dropped, which keeps the nesting
/// depth at one.
pub fn thread_comments(
    comments: &[Comment],
    top_level_limit: Limit,
    replies_limit: Limit,
    now: DateTime<Utc>,
) -> Vec<RankedComment> {
    let (top_level, replies): (Vec<Comment>, Vec<Comment>) =
        comments.iter().cloned().partition(Comment::is_top_level);

    debug!(
        "Threading {} top-level comments and {} replies (limits: {}/{})",
        top_level.len(),
        replies.len(),
        top_level_limit,
        replies_limit
    );

    let mut ranked_top = rank_comments(&top_level, now);
    top_level_limit.apply(&mut ranked_top);

    let mut replies_by_parent: HashMap<&str, Vec<&Comment>> = HashMap::new();
    for reply in &replies {
        if let Some(parent_id) = reply.parent_comment_id.as_deref() {
            replies_by_parent.entry(parent_id).or_default().push(reply);
        }
    }

    ranked_top
        .into_iter()
        .map(|parent| {
            let mut children: Vec<RankedComment> = replies_by_parent
                .get(parent.id())
                .map(|group| group.iter().map(|r| to_ranked(r, now)).collect())
                .unwrap_or_default();

            children.sort_by(|a, b| b.comment.created_at.cmp(&a.comment.created_at));
            replies_limit.apply(&mut children);

            trace!("Attached {} replies to {}", children.len(), parent.id());
            parent.with_replies(children)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn top(id: &str, likes: u64, age: Duration) -> Comment {
        Comment {
            id: id.to_string(),
            video_id: "video_123".to_string(),
            user_id: "user".to_string(),
            content: format!("comment {}", id),
            likes,
            dislikes: 0,
            reply_count: 0,
            parent_comment_id: None,
            created_at: now() - age,
        }
    }

    fn reply(id: &str, parent: &str, likes: u64, age: Duration) -> Comment {
        Comment {
            parent_comment_id: Some(parent.to_string()),
            ..top(id, likes, age)
        }
    }

    fn ids(ranked: &[RankedComment]) -> Vec<&str> {
        ranked.iter().map(|r| r.id()).collect()
    }

    fn reply_ids(parent: &RankedComment) -> Vec<&str> {
        ids(parent.replies.as_deref().unwrap_or_default())
    }

    #[test]
    fn test_thread_attaches_replies_to_matching_parent() {
        let old = Duration::days(60);
        let comments = vec![
            top("p1", 10, old),
            reply("r1", "p1", 0, Duration::hours(2)),
            top("p2", 20, old),
            reply("r2", "p2", 0, Duration::hours(3)),
            reply("r3", "p1", 0, Duration::hours(1)),
        ];

        let threaded = thread_comments(&comments, Limit::Unlimited, Limit::Unlimited, now());

        assert_eq!(ids(&threaded), vec!["p2", "p1"]);
        assert_eq!(reply_ids(&threaded[0]), vec!["r2"]);
        assert_eq!(reply_ids(&threaded[1]), vec!["r3", "r1"]);

        for parent in &threaded {
            for child in parent.replies.as_ref().unwrap() {
                assert_eq!(child.comment.parent_comment_id.as_deref(), Some(parent.id()));
                assert!(child.replies.is_none());
            }
        }
    }

    #[test]
    fn test_replies_sorted_by_time_not_score() {
        let comments = vec![
            top("p", 1, Duration::days(60)),
            reply("popular-old", "p", 500, Duration::days(2)),
            reply("quiet-new", "p", 0, Duration::minutes(2)),
            reply("middle", "p", 50, Duration::hours(5)),
        ];

        let threaded = thread_comments(&comments, Limit::Unlimited, Limit::Unlimited, now());
        let replies = threaded[0].replies.as_ref().unwrap();

        assert_eq!(reply_ids(&threaded[0]), vec!["quiet-new", "middle", "popular-old"]);
        // Replies still carry their own scores
        assert_eq!(replies[2].score, 500.0 + 4.0);
        assert_eq!(replies[0].time_ago, "2 minutes ago");
    }

    #[test]
    fn test_reply_to_reply_is_never_nested() {
        let comments = vec![
            top("p", 1, Duration::days(60)),
            reply("r", "p", 0, Duration::hours(2)),
            reply("rr", "r", 0, Duration::hours(1)),
        ];

        let threaded = thread_comments(&comments, Limit::Unlimited, Limit::Unlimited, now());

        assert_eq!(ids(&threaded), vec!["p"]);
        assert_eq!(reply_ids(&threaded[0]), vec!["r"]);
        assert!(threaded[0].replies.as_ref().unwrap()[0].replies.is_none());
    }

    #[test]
    fn test_independent_limits() {
        let old = Duration::days(60);
        let comments = vec![
            top("p1", 30, old),
            top("p2", 20, old),
            top("p3", 10, old),
            reply("a", "p1", 0, Duration::hours(1)),
            reply("b", "p1", 0, Duration::hours(2)),
            reply("c", "p1", 0, Duration::hours(3)),
            reply("d", "p3", 0, Duration::hours(1)),
        ];

        let threaded = thread_comments(&comments, Limit::AtMost(2), Limit::AtMost(2), now());

        assert_eq!(ids(&threaded), vec!["p1", "p2"]);
        assert_eq!(reply_ids(&threaded[0]), vec!["a", "b"]);
        assert_eq!(reply_ids(&threaded[1]), Vec::<&str>::new());
    }

    #[test]
    fn test_invalid_limits_mean_unlimited() {
        let old = Duration::days(60);
        let comments = vec![
            top("p1", 2, old),
            top("p2", 1, old),
            reply("a", "p1", 0, Duration::hours(1)),
            reply("b", "p1", 0, Duration::hours(2)),
        ];

        let threaded = thread_comments(
            &comments,
            Limit::new(0),
            Limit::from_param(Some("-3")),
            now(),
        );

        assert_eq!(threaded.len(), 2);
        assert_eq!(reply_ids(&threaded[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_orphan_replies_are_dropped() {
        let comments = vec![
            top("p", 1, Duration::days(60)),
            reply("orphan", "missing", 100, Duration::minutes(1)),
        ];

        let threaded = thread_comments(&comments, Limit::Unlimited, Limit::Unlimited, now());

        assert_eq!(ids(&threaded), vec!["p"]);
        assert!(threaded[0].replies.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_thread_empty() {
        assert!(thread_comments(&[], Limit::Unlimited, Limit::Unlimited, now()).is_empty());
    }
}
