//! Popularity ranking and two-level threading for video comments.
//!
//! [`ranking`] holds the pure scoring engine. [`storage`] loads comment
//! snapshots for it and [`cli`] wires both into the `comment-rank` binary.

pub mod cli;
pub mod common;
pub mod ranking;
pub mod storage;
