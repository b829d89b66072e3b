//! Transcript model and pruning pipeline for Claude Code session files.
//!
//! A session transcript is a newline-delimited JSON log: one record per line,
//! with occasional non-JSON diagnostic lines mixed in. The first line (the
//! *head*, usually a summary record) is preserved by every operation in this
//! module.
//!
//! The pipeline is a pure transformation over an in-memory line list:
//!
//! 1. [`usage::zero_last_cache_counter`] rewrites the last positive
//!    `cache_read_input_tokens` counter to zero.
//! 2. A cut line is chosen, either from an assistant-turn count
//!    ([`prune::keep_recent_assistants`]) or from a boundary discovered by
//!    [`boundary::analyze`] ([`prune::keep_from_line`]).
//! 3. [`refs::filter_from`] drops everything before the cut and eliminates
//!    tool results whose originating tool invocation no longer survives.
//!
//! Nothing here touches the filesystem; reading, backups, and writing live in
//! [`crate::files`].

pub mod boundary;
pub mod classify;
pub mod prune;
pub mod refs;
pub mod usage;

pub use boundary::{analyze, Boundary, BoundaryKind, BoundaryScan};
pub use classify::{classify, LineKind, Role};
pub use prune::{keep_from_line, keep_recent_assistants, PruneOutcome};

use serde_json::Value;

/// Parse a line as a single JSON object.
///
/// Anything that is not a JSON object (arrays, scalars, truncated JSON,
/// plain text) yields `None`; such lines are opaque to the pipeline and are
/// carried through byte for byte.
pub(crate) fn parse_record(line: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(line) {
        Ok(value) if value.is_object() => Some(value),
        _ => None,
    }
}

/// The `type` field of a parsed record.
pub(crate) fn record_type(record: &Value) -> Option<&str> {
    record.get("type").and_then(Value::as_str)
}

/// The `content` array of a record, looking at the top level first and then
/// under the nested `message` object (the shape current transcripts use).
pub(crate) fn content_items(record: &Value) -> Option<&Vec<Value>> {
    record
        .get("content")
        .or_else(|| record.pointer("/message/content"))
        .and_then(Value::as_array)
}

/// The text carried by a tool-result record.
///
/// `content` is usually a plain string; newer transcripts wrap it in an array
/// of content elements, in which case the text elements are concatenated.
pub(crate) fn result_text(record: &Value) -> Option<String> {
    match record.get("content") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Array(items)) => {
            let mut text = String::new();
            for item in items {
                match item {
                    Value::String(part) => text.push_str(part),
                    Value::Object(_) => {
                        if let Some(part) = item.get("text").and_then(Value::as_str) {
                            text.push_str(part);
                        }
                    }
                    _ => {}
                }
            }
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
        _ => None,
    }
}
