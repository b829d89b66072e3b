//! Best-effort line classification.
//!
//! Every transcript line yields a classification; JSON parse failures are
//! never fatal. Records with a missing or unknown `type`, or with malformed
//! content arrays, simply fall into kinds that the reference tracker treats
//! as pass-through.

use std::collections::HashSet;

use serde_json::Value;

use super::{content_items, parse_record, record_type};

/// Role of a message record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Classification of a single transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A `user`, `assistant`, or `system` record.
    Message(Role),
    /// A standalone `tool_call` record.
    ToolCall,
    /// A `tool_result` record referencing an invocation by `tool_use_id`.
    ToolResult,
    /// A JSON object with any other (or missing) `type`.
    Other,
    /// A line that does not parse as a JSON object; kept verbatim.
    Opaque,
}

/// Classify one line.
pub fn classify(line: &str) -> LineKind {
    let Some(record) = parse_record(line) else {
        return LineKind::Opaque;
    };
    match record_type(&record) {
        Some("user") => LineKind::Message(Role::User),
        Some("assistant") => LineKind::Message(Role::Assistant),
        Some("system") => LineKind::Message(Role::System),
        Some("tool_call") => LineKind::ToolCall,
        Some("tool_result") => LineKind::ToolResult,
        _ => LineKind::Other,
    }
}

/// Whether the line is a message record.
pub fn is_message(line: &str) -> bool {
    matches!(classify(line), LineKind::Message(_))
}

/// Whether the line is an `assistant` record.
pub fn is_assistant(line: &str) -> bool {
    matches!(classify(line), LineKind::Message(Role::Assistant))
}

/// Collect the tool-invocation identifiers carried by a line into `ids`.
///
/// Assistant records contribute the `id` of every `tool_use` element in
/// their content array; standalone `tool_call` records contribute their
/// top-level `id`. Elements without an `id` are skipped.
pub fn collect_invocation_ids(line: &str, ids: &mut HashSet<String>) {
    let Some(record) = parse_record(line) else {
        return;
    };
    match record_type(&record) {
        Some("assistant") => {
            let Some(items) = content_items(&record) else {
                return;
            };
            for item in items {
                if item.get("type").and_then(Value::as_str) == Some("tool_use") {
                    if let Some(id) = item.get("id").and_then(Value::as_str) {
                        ids.insert(id.to_string());
                    }
                }
            }
        }
        Some("tool_call") => {
            if let Some(id) = record.get("id").and_then(Value::as_str) {
                ids.insert(id.to_string());
            }
        }
        _ => {}
    }
}

/// The `tool_use_id` of a tool-result line, if it is one.
pub fn tool_result_ref(line: &str) -> Option<String> {
    let record = parse_record(line)?;
    if record_type(&record) != Some("tool_result") {
        return None;
    }
    record
        .get("tool_use_id")
        .and_then(Value::as_str)
        .map(str::to_string)
}
