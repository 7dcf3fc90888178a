use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use crate::cli::output::{OutputFormat, print_ranked};
use crate::common::{CommentId, Limit, RankedComment};
use crate::ranking::top_comments;
use crate::storage::CommentStore;

#[derive(Args)]
pub struct RepliesArgs {
    /// Comment whose replies to list
    pub id: CommentId,

    /// Maximum number of replies; zero or invalid means no limit
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,
}

pub fn handle_replies(
    snapshot: std::path::PathBuf,
    args: RepliesArgs,
    format: OutputFormat,
) -> Result<()> {
    let store = CommentStore::open(&snapshot)?;
    let ranked = list_replies(&store, &args, Utc::now())?;

    print_ranked(&ranked, format)
}

/// Replies ranked by score, unlike the nested view which orders them by time
pub(crate) fn list_replies(
    store: &CommentStore,
    args: &RepliesArgs,
    now: DateTime<Utc>,
) -> Result<Vec<RankedComment>> {
    let parent = store.get_comment(&args.id)?;
    let replies = store.replies_to(&parent.id);

    Ok(top_comments(
        &replies,
        Limit::from_param(args.limit.as_deref()),
        now,
    ))
}
