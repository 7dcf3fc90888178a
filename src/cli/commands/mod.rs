use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod list;
mod replies;

pub use list::{ListArgs, handle_list};
pub use replies::{RepliesArgs, handle_replies};

use crate::cli::output::OutputFormat;
use crate::common::env::{DEFAULT_FILE, FILE_VAR};
use crate::common::{EnvProvider, Limit, SystemEnvProvider};

#[derive(Parser)]
#[command(name = "comment-rank")]
#[command(about = "Rank and thread video comments by popularity")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Comment snapshot file (defaults to $COMMENT_RANK_FILE, then ./comments.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Print the response envelope as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a video's comments ranked by score
    List(ListArgs),
    /// List the replies to a comment ranked by score
    Replies(RepliesArgs),
}

pub fn run_command(cli: Cli) -> Result<()> {
    let env = SystemEnvProvider;
    let snapshot = snapshot_path(cli.file, &env);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Commands::List(args) => handle_list(snapshot, args, format, &env),
        Commands::Replies(args) => handle_replies(snapshot, args, format),
    }
}

/// Snapshot path from the argument, the environment, or the default
pub(crate) fn snapshot_path(file: Option<PathBuf>, env_provider: &impl EnvProvider) -> PathBuf {
    file.or_else(|| env_provider.get_var(FILE_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
}

/// Limit from the argument if given, otherwise from the environment
pub(crate) fn resolve_limit(
    raw: Option<&str>,
    env_key: &str,
    env_provider: &impl EnvProvider,
) -> Limit {
    match raw {
        Some(value) => Limit::from_param(Some(value)),
        None => env_provider.get_limit(env_key),
    }
}
