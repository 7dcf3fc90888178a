use anyhow::Result;
use console::{Color, style};
use serde::Serialize;

use crate::common::RankedComment;

const REPLY_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Response envelope for machine-readable output
#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub success: bool,
    pub data: &'a [RankedComment],
    pub count: usize,
}

impl<'a> ListResponse<'a> {
    pub fn new(data: &'a [RankedComment]) -> Self {
        Self {
            success: true,
            data,
            count: data.len(),
        }
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

pub fn format_net_score(net_score: i64) -> console::StyledObject<String> {
    let text = format!("{:+}", net_score);
    match net_score {
        n if n > 0 => style(text).fg(Color::Green),
        n if n < 0 => style(text).fg(Color::Red),
        _ => style(text).dim(),
    }
}

pub fn format_ranked_compact(comment: &RankedComment) -> String {
    format!(
        "[{}] {} {} by {}, {}: {}",
        style(format!("{:5.1}", comment.score)).bold(),
        format_net_score(comment.net_score),
        style(&comment.comment.id).dim(),
        style(&comment.comment.user_id).green(),
        comment.time_ago,
        first_line(&comment.comment.content)
    )
}

/// A top-level comment followed by its indented replies
pub fn format_thread(comment: &RankedComment) -> String {
    let mut output = format!("{}\n", format_ranked_compact(comment));

    if let Some(replies) = &comment.replies {
        for reply in replies {
            output.push_str(&format!(
                "{}{} {}\n",
                REPLY_INDENT,
                style("↳").cyan(),
                format_ranked_compact(reply)
            ));
        }

        let hidden = comment.comment.reply_count.saturating_sub(replies.len() as u64);
        if hidden > 0 {
            output.push_str(&format!(
                "{}{}\n",
                REPLY_INDENT,
                style(format!(
                    "[{} more repl{}; run `comment-rank replies {}`]",
                    hidden,
                    if hidden == 1 { "y" } else { "ies" },
                    comment.comment.id
                ))
                .dim()
            ));
        }
    }

    output
}

pub fn render_json(comments: &[RankedComment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ListResponse::new(comments))?)
}

pub fn print_ranked(comments: &[RankedComment], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(comments)?),
        OutputFormat::Text => {
            if comments.is_empty() {
                println!("{}", info_message("No comments"));
            }
            for comment in comments {
                print!("{}", format_thread(comment));
            }
        }
    }
    Ok(())
}

pub fn error_message(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), message)
}

pub fn info_message(message: &str) -> String {
    format!("{} {}", style("ℹ").blue().bold(), message)
}
