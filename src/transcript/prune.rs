//! Pruning entry points.
//!
//! Both modes share the same rewrite order: zero the stale usage counter over
//! the full input first, then cut and filter. Reversing the order would lose
//! the "rewritten line was itself dropped" behavior callers rely on.

use super::classify::is_assistant;
use super::{refs, usage};

/// Outcome of a pruning pass.
#[derive(Debug, Clone)]
pub struct PruneOutcome {
    /// Surviving lines, head first.
    pub lines: Vec<String>,
    /// Message records kept (at or after the cut).
    pub kept: usize,
    /// Message records dropped (before the cut).
    pub dropped: usize,
    /// Assistant records observed in the input (head excluded).
    pub assistant_count: usize,
}

/// Keep the transcript from the `keep`-th-to-last assistant turn onward.
///
/// With `keep` of at least the number of assistant records, nothing is cut.
/// With `keep == 0` the cut lands on the first assistant record, which (and
/// everything after it) still survives; only a transcript without assistant
/// turns collapses to the head alone.
pub fn keep_recent_assistants(lines: &[String], keep: u32) -> PruneOutcome {
    let assistant_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| is_assistant(line))
        .map(|(index, _)| index)
        .collect();
    let assistant_count = assistant_indices.len();
    let keep = keep as usize;

    let cut = if assistant_count <= keep {
        1
    } else if keep == 0 {
        assistant_indices[0]
    } else {
        assistant_indices[assistant_count - keep]
    };

    prune_at(lines, cut, assistant_count)
}

/// Keep the transcript from the chosen line onward.
///
/// `cut` is the zero-based index of the first surviving line, as reported by
/// the boundary analyzer. Values of 0 behave as 1; values past the end keep
/// only the head.
pub fn keep_from_line(lines: &[String], cut: usize) -> PruneOutcome {
    let assistant_count = lines
        .iter()
        .skip(1)
        .filter(|line| is_assistant(line))
        .count();
    prune_at(lines, cut, assistant_count)
}

fn prune_at(lines: &[String], cut: usize, assistant_count: usize) -> PruneOutcome {
    let mut rewritten = lines.to_vec();
    usage::zero_last_cache_counter(&mut rewritten);
    let filtered = refs::filter_from(&rewritten, cut);
    PruneOutcome {
        lines: filtered.lines,
        kept: filtered.kept,
        dropped: filtered.dropped,
        assistant_count,
    }
}
