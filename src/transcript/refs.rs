//! Reference tracking across a cut.
//!
//! Dropping the front of a transcript can orphan `tool_result` records whose
//! originating invocation no longer exists in the file. Consumers reject such
//! transcripts, so the filter runs in two passes: first collect every
//! invocation id that survives the cut, then keep a surviving tool result
//! only when its `tool_use_id` is in that set.

use std::collections::HashSet;

use super::classify::{classify, collect_invocation_ids, tool_result_ref, LineKind};

/// Result of filtering a transcript at a cut line.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Surviving lines, head first.
    pub lines: Vec<String>,
    /// Message records at or after the cut.
    pub kept: usize,
    /// Message records before the cut (the head is never counted).
    pub dropped: usize,
}

/// Keep the head plus everything from the line at `cut` onward, dropping
/// orphaned tool results.
///
/// `cut` is the index of the first surviving line and is clamped to at least
/// 1 (the head at index 0 is unconditionally kept). A `cut` past the end
/// keeps only the head and counts every message record as dropped.
pub fn filter_from(lines: &[String], cut: usize) -> FilterOutcome {
    if lines.is_empty() {
        return FilterOutcome {
            lines: Vec::new(),
            kept: 0,
            dropped: 0,
        };
    }
    let cut = cut.max(1);

    // Pass 1: invocation ids that survive the cut.
    let mut surviving_ids = HashSet::new();
    for line in lines.iter().skip(cut) {
        collect_invocation_ids(line, &mut surviving_ids);
    }

    // Pass 2: filter and count.
    let mut output = Vec::with_capacity(lines.len().saturating_sub(cut) + 1);
    output.push(lines[0].clone());
    let mut kept = 0;
    let mut dropped = 0;

    for (index, line) in lines.iter().enumerate().skip(1) {
        if index < cut {
            if matches!(classify(line), LineKind::Message(_)) {
                dropped += 1;
            }
            continue;
        }
        match classify(line) {
            LineKind::Message(_) => {
                kept += 1;
                output.push(line.clone());
            }
            LineKind::ToolResult => {
                // Orphans vanish silently; they are not messages.
                let keep = tool_result_ref(line)
                    .map(|id| surviving_ids.contains(&id))
                    .unwrap_or(false);
                if keep {
                    output.push(line.clone());
                }
            }
            LineKind::ToolCall | LineKind::Other | LineKind::Opaque => {
                output.push(line.clone());
            }
        }
    }

    FilterOutcome {
        lines: output,
        kept,
        dropped,
    }
}
