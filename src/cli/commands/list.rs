use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use log::warn;

use crate::cli::output::{OutputFormat, print_ranked};
use crate::common::env::{REPLIES_LIMIT_VAR, TOP_LEVEL_LIMIT_VAR};
use crate::common::{EnvProvider, RankedComment, ViewMode};
use crate::ranking::rank_view;
use crate::storage::CommentStore;

use super::resolve_limit;

#[derive(Args)]
pub struct ListArgs {
    /// Video whose comments to list
    pub video_id: String,

    /// Listing shape (all, top, nested)
    #[arg(short, long)]
    pub view: Option<String>,

    /// Maximum number of top-level comments; zero or invalid means no limit
    #[arg(short, long, allow_hyphen_values = true)]
    pub top_level_limit: Option<String>,

    /// Maximum number of replies per comment in the nested view
    #[arg(short, long, allow_hyphen_values = true)]
    pub replies_limit: Option<String>,
}

pub fn handle_list(
    snapshot: std::path::PathBuf,
    args: ListArgs,
    format: OutputFormat,
    env_provider: &impl EnvProvider,
) -> Result<()> {
    let store = CommentStore::open(&snapshot)?;
    let ranked = list_comments(&store, &args, env_provider, Utc::now())?;

    print_ranked(&ranked, format)
}

pub(crate) fn list_comments(
    store: &CommentStore,
    args: &ListArgs,
    env_provider: &impl EnvProvider,
    now: DateTime<Utc>,
) -> Result<Vec<RankedComment>> {
    let view = match args.view.as_deref() {
        Some(raw) => raw.parse::<ViewMode>().unwrap_or_else(|_| {
            warn!("Unknown view '{}', listing all comments", raw);
            ViewMode::All
        }),
        None => ViewMode::default(),
    };
    let top_level_limit = resolve_limit(
        args.top_level_limit.as_deref(),
        TOP_LEVEL_LIMIT_VAR,
        env_provider,
    );
    let replies_limit = resolve_limit(
        args.replies_limit.as_deref(),
        REPLIES_LIMIT_VAR,
        env_provider,
    );

    let comments = store.comments_for_video(&args.video_id);
    Ok(rank_view(
        view,
        &comments,
        top_level_limit,
        replies_limit,
        now,
    ))
}
