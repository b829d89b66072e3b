//! Boundary discovery over a transcript.
//!
//! Two kinds of cut candidates are detected:
//!
//! - **Explicit markers**: lines containing the literal
//!   `===INTENT_BOUNDARY===` substring, injected into live sessions by the
//!   intent-tracking hook. Detection runs on raw line bytes, so a marker
//!   wrapped inside an assistant text element is found just like a bare
//!   diagnostic line.
//! - **Derived commits**: `tool_result` records of a `bash` invocation whose
//!   output looks like a successful `git commit` (the `--shortstat` summary).
//!
//! Each boundary carries the byte count and percentage of the transcript
//! that would survive a cut at its line.

use regex::Regex;
use serde_json::Value;

use super::{parse_record, record_type, result_text};

/// Marker substring written into transcripts by the boundary hook.
pub const INTENT_BOUNDARY_MARKER: &str = "===INTENT_BOUNDARY===";

/// Substrings of a `git commit` shortstat summary.
const COMMIT_STAT_HINTS: &[&str] = &["files changed", "insertions", "deletions"];

/// Kind of a detected boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Explicit `===INTENT_BOUNDARY===` marker line.
    Marker,
    /// Successful git commit derived from a bash tool result.
    Commit,
}

impl BoundaryKind {
    /// Short label for list output.
    pub fn label(&self) -> &'static str {
        match self {
            BoundaryKind::Marker => "marker",
            BoundaryKind::Commit => "commit",
        }
    }
}

/// A candidate cut point. The line at `line_number` is the first line that
/// survives a cut here.
#[derive(Debug, Clone)]
pub struct Boundary {
    /// Zero-based index of the first surviving line.
    pub line_number: usize,
    pub kind: BoundaryKind,
    /// Human-readable label: the marker intent, the commit message, or a
    /// fixed fallback.
    pub description: String,
    /// Timestamp text lifted from the marker, if any.
    pub timestamp: Option<String>,
    /// Intent text lifted from the marker, if any.
    pub intent: Option<String>,
    /// Percentage of transcript bytes retained by cutting here, in [0, 100].
    pub retention_percentage: u8,
    /// Bytes retained from the cut line onward.
    pub character_count: u64,
}

/// Result of a boundary scan.
#[derive(Debug, Clone, Default)]
pub struct BoundaryScan {
    /// Boundaries ordered by descending line number (most recent first).
    pub boundaries: Vec<Boundary>,
    /// Total transcript size in bytes, counting one newline between lines.
    pub total_bytes: u64,
}

/// Scan the transcript for cut candidates.
///
/// Empty input yields an empty list and a zero byte total.
pub fn analyze(lines: &[String]) -> BoundaryScan {
    if lines.is_empty() {
        return BoundaryScan::default();
    }

    // Byte offset of each line within lines.join("\n").
    let mut offsets = Vec::with_capacity(lines.len());
    let mut offset = 0u64;
    for line in lines {
        offsets.push(offset);
        offset += line.len() as u64 + 1;
    }
    let total_bytes = offset - 1;

    let commit_message =
        Regex::new(r#"git commit -m ["']([^"']+)["']"#).expect("commit pattern is valid");

    let mut boundaries = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(pos) = line.find(INTENT_BOUNDARY_MARKER) {
            let (timestamp, intent) = parse_marker(&line[pos + INTENT_BOUNDARY_MARKER.len()..]);
            let description = intent
                .clone()
                .unwrap_or_else(|| "Boundary marker".to_string());
            boundaries.push(make_boundary(
                index,
                BoundaryKind::Marker,
                description,
                timestamp,
                intent,
                offsets[index],
                total_bytes,
            ));
        }

        if is_commit_result(line) {
            let description = find_commit_message(lines, index, &commit_message)
                .map(|message| format!("Git commit: {}", message))
                .unwrap_or_else(|| "Successful commit".to_string());
            boundaries.push(make_boundary(
                index,
                BoundaryKind::Commit,
                description,
                None,
                None,
                offsets[index],
                total_bytes,
            ));
        }
    }

    boundaries.sort_by(|a, b| b.line_number.cmp(&a.line_number));
    BoundaryScan {
        boundaries,
        total_bytes,
    }
}

fn make_boundary(
    line_number: usize,
    kind: BoundaryKind,
    description: String,
    timestamp: Option<String>,
    intent: Option<String>,
    offset: u64,
    total_bytes: u64,
) -> Boundary {
    let character_count = total_bytes - offset;
    let retention_percentage =
        ((character_count as f64) * 100.0 / (total_bytes as f64)).round() as u8;
    Boundary {
        line_number,
        kind,
        description,
        timestamp,
        intent,
        retention_percentage,
        character_count,
    }
}

/// Parse the text after the marker: `<timestamp> [| <intent>]`.
///
/// Both parts are free-form labels; whatever surrounds them (including JSON
/// syntax, when the marker sits inside a record) is carried along after
/// trimming. Empty parts collapse to `None`.
fn parse_marker(rest: &str) -> (Option<String>, Option<String>) {
    let (timestamp, intent) = match rest.split_once('|') {
        Some((before, after)) => (before.trim(), Some(after.trim())),
        None => (rest.trim(), None),
    };
    let timestamp = (!timestamp.is_empty()).then(|| timestamp.to_string());
    let intent = intent
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    (timestamp, intent)
}

/// Whether the line is a bash tool result whose output reads like a
/// successful commit.
fn is_commit_result(line: &str) -> bool {
    let Some(record) = parse_record(line) else {
        return false;
    };
    if record_type(&record) != Some("tool_result") || tool_name(&record) != Some("bash") {
        return false;
    }
    match result_text(&record) {
        Some(text) => COMMIT_STAT_HINTS.iter().any(|hint| text.contains(hint)),
        None => false,
    }
}

fn tool_name(record: &Value) -> Option<&str> {
    record.get("name").and_then(Value::as_str)
}

/// Walk backward from the result line for the nearest bash `tool_call`
/// whose command is a `git commit -m "…"`, and capture the message.
fn find_commit_message(lines: &[String], result_index: usize, pattern: &Regex) -> Option<String> {
    for line in lines[..result_index].iter().rev() {
        let Some(record) = parse_record(line) else {
            continue;
        };
        if record_type(&record) != Some("tool_call") || tool_name(&record) != Some("bash") {
            continue;
        }
        let Some(command) = record.pointer("/parameters/command").and_then(Value::as_str) else {
            continue;
        };
        if let Some(captures) = pattern.captures(command) {
            return Some(captures[1].to_string());
        }
    }
    None
}
