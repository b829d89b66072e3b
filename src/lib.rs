//! ccprune - prune Claude Code session transcripts.
//!
//! Long sessions accumulate megabytes of tool output that the model has to
//! re-read on every turn. This crate rewrites a session's JSONL transcript
//! so only the logical tail of the conversation remains: the head record and
//! recent traffic survive, tool results whose invocation was cut are dropped
//! with their callers, and the stale cache counter is zeroed so downstream
//! context indicators reset.
//!
//! The [`transcript`] module is the pure pruning core; [`files`] handles
//! session location, reading/writing, and backups; [`tui`] hosts the
//! interactive boundary picker used by the CLI.

pub mod config;
pub mod files;
pub mod theme;
pub mod transcript;
pub mod tui;

pub use config::Config;
