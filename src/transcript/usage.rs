//! Usage-counter rewrite.
//!
//! The downstream consumer of a transcript derives a context-usage indicator
//! from the last positive `cache_read_input_tokens` value it can find.
//! Zeroing exactly that value suppresses the stale indicator after a prune
//! without touching earlier history.
//!
//! The scan covers the whole input, including lines a later cut will drop;
//! when the rewritten line is itself dropped, the emitted transcript simply
//! contains no zeroed record.

use serde_json::{json, Value};

use super::parse_record;

const CACHE_POINTERS: &[&str] = &[
    "/usage/cache_read_input_tokens",
    "/message/usage/cache_read_input_tokens",
];

/// Zero the last positive cache counter in `lines`, in place.
///
/// At most one line is rewritten; it is re-serialized as compact JSON with
/// its field order preserved. Returns the rewritten index, or `None` when no
/// line carries a positive counter.
pub fn zero_last_cache_counter(lines: &mut [String]) -> Option<usize> {
    let index = lines
        .iter()
        .rposition(|line| cache_read_tokens(line).is_some_and(|tokens| tokens > 0))?;

    let mut record = parse_record(&lines[index])?;
    for pointer in CACHE_POINTERS {
        if let Some(value) = record.pointer_mut(pointer) {
            *value = json!(0);
        }
    }
    match serde_json::to_string(&record) {
        Ok(serialized) => {
            lines[index] = serialized;
            Some(index)
        }
        Err(_) => None,
    }
}

/// The cache counter of a line, wherever it nests.
fn cache_read_tokens(line: &str) -> Option<i64> {
    let record = parse_record(line)?;
    CACHE_POINTERS
        .iter()
        .find_map(|pointer| record.pointer(pointer))
        .and_then(Value::as_i64)
}
