//! End-to-end pruning scenarios against the public crate API.

use ccprune::transcript::{keep_from_line, keep_recent_assistants};
use serde_json::Value;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn all_preserved_when_keep_exceeds_assistants() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"user","uuid":"1"}"#,
        r#"{"type":"assistant","uuid":"2"}"#,
    ]);
    let outcome = keep_recent_assistants(&input, 5);
    assert_eq!(outcome.lines, input);
    assert_eq!(outcome.kept, 2);
    assert_eq!(outcome.dropped, 0);
    assert_eq!(outcome.assistant_count, 1);
}

#[test]
fn cut_eliminates_orphaned_tool_results() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"assistant","content":[{"type":"tool_use","id":"T1","name":"bash"}]}"#,
        r#"{"type":"tool_result","tool_use_id":"T1","content":"ok"}"#,
        r#"{"type":"assistant","content":[{"type":"tool_use","id":"T2","name":"bash"}]}"#,
        r#"{"type":"tool_result","tool_use_id":"T2","content":"ok"}"#,
    ]);
    let outcome = keep_recent_assistants(&input, 1);
    assert_eq!(outcome.lines.len(), 3);
    assert_eq!(outcome.lines[0], input[0]);
    assert!(outcome.lines[1].contains("\"T2\""));
    assert!(outcome.lines[2].contains("\"T2\""));
    assert!(!outcome.lines.iter().any(|line| line.contains("\"T1\"")));
    assert_eq!(outcome.kept, 1);
}

#[test]
fn last_cache_counter_is_zeroed_in_surviving_output() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"user","usage":{"cache_read_input_tokens":500}}"#,
        r#"{"type":"assistant","usage":{"cache_read_input_tokens":1000}}"#,
        r#"{"type":"user","usage":{"cache_read_input_tokens":1500}}"#,
    ]);
    let outcome = keep_recent_assistants(&input, 10);
    assert_eq!(outcome.lines.len(), 4);

    let counter = |line: &str| -> i64 {
        let record: Value = serde_json::from_str(line).unwrap();
        record
            .pointer("/usage/cache_read_input_tokens")
            .and_then(Value::as_i64)
            .unwrap()
    };
    assert_eq!(counter(&outcome.lines[1]), 500);
    assert_eq!(counter(&outcome.lines[2]), 1000);
    assert_eq!(counter(&outcome.lines[3]), 0);
}

#[test]
fn at_most_one_line_differs_from_input() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"user","usage":{"cache_read_input_tokens":500}}"#,
        r#"{"type":"assistant","uuid":"a1"}"#,
        r#"{"type":"user","message":{"usage":{"cache_read_input_tokens":900}}}"#,
    ]);
    let outcome = keep_recent_assistants(&input, 10);
    assert_eq!(outcome.lines.len(), input.len());
    let changed: Vec<usize> = (0..input.len())
        .filter(|&i| outcome.lines[i] != input[i])
        .collect();
    assert_eq!(changed, vec![3]);
}

#[test]
fn full_pipeline_keeps_the_logical_tail() {
    let input = lines(&[
        r#"{"type":"summary","summary":"long refactoring session"}"#,
        r#"{"type":"user","usage":{"cache_read_input_tokens":100}}"#,
        r#"{"type":"assistant","content":[{"type":"tool_use","id":"A","name":"bash"}]}"#,
        r#"{"type":"tool_result","tool_use_id":"A","content":"done"}"#,
        "===INTENT_BOUNDARY=== 2024-03-01T09:00:00 | refactor: extract parser",
        r#"{"type":"user"}"#,
        r#"{"type":"assistant","content":[{"type":"tool_use","id":"B","name":"bash"}]}"#,
        r#"{"type":"tool_result","tool_use_id":"B","content":"done"}"#,
        "Execution interrupted",
        r#"{"type":"user","usage":{"cache_read_input_tokens":900}}"#,
    ]);
    let outcome = keep_recent_assistants(&input, 1);

    // Head, the last assistant with its result, the diagnostic line, and
    // the final user message survive.
    assert_eq!(outcome.lines.len(), 5);
    assert_eq!(outcome.lines[0], input[0]);
    assert!(outcome.lines[1].contains("\"B\""));
    assert!(outcome.lines[2].contains("\"B\""));
    assert_eq!(outcome.lines[3], "Execution interrupted");
    assert_eq!(outcome.kept, 2);
    assert_eq!(outcome.dropped, 3);
    assert_eq!(outcome.assistant_count, 2);

    // The surviving user record is the zeroed one.
    let record: Value = serde_json::from_str(&outcome.lines[4]).unwrap();
    assert_eq!(
        record
            .pointer("/usage/cache_read_input_tokens")
            .and_then(Value::as_i64),
        Some(0)
    );
    // The dropped counter never resurfaces.
    assert!(!outcome.lines.iter().any(|line| line.contains("100")));
}

#[test]
fn pruning_twice_matches_pruning_once() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"user"}"#,
        r#"{"type":"assistant","uuid":"a1"}"#,
        r#"{"type":"user"}"#,
        r#"{"type":"assistant","uuid":"a2"}"#,
    ]);
    let first = keep_recent_assistants(&input, 1);
    let second = keep_recent_assistants(&first.lines, 1);
    assert_eq!(second.lines, first.lines);
    assert_eq!(second.dropped, 0);
}

#[test]
fn keep_from_boundary_line_preserves_references() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"assistant","content":[{"type":"tool_use","id":"OLD"}]}"#,
        r#"{"type":"tool_result","tool_use_id":"OLD","content":"stale"}"#,
        "===INTENT_BOUNDARY=== 2024-03-01T12:00:00",
        r#"{"type":"user"}"#,
        r#"{"type":"tool_result","tool_use_id":"OLD","content":"late echo"}"#,
    ]);
    let outcome = keep_from_line(&input, 3);

    // The late echo references an invocation that was cut away, so it is
    // dropped even though it sits after the boundary.
    assert_eq!(
        outcome.lines,
        lines(&[
            r#"{"type":"summary"}"#,
            "===INTENT_BOUNDARY=== 2024-03-01T12:00:00",
            r#"{"type":"user"}"#,
        ])
    );
    assert_eq!(outcome.kept, 1);
    assert_eq!(outcome.dropped, 1);
}

#[test]
fn keep_from_line_past_end_keeps_only_the_head() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"user"}"#,
        r#"{"type":"assistant"}"#,
    ]);
    let outcome = keep_from_line(&input, 50);
    assert_eq!(outcome.lines, lines(&[r#"{"type":"summary"}"#]));
    assert_eq!(outcome.kept, 0);
    assert_eq!(outcome.dropped, 2);
}

#[test]
fn nested_message_content_anchors_results() {
    let input = lines(&[
        r#"{"type":"summary"}"#,
        r#"{"type":"assistant","message":{"content":[{"type":"tool_use","id":"OLD"}]}}"#,
        r#"{"type":"tool_result","tool_use_id":"OLD","content":"stale"}"#,
        r#"{"type":"assistant","message":{"content":[{"type":"tool_use","id":"N1"}]}}"#,
        r#"{"type":"tool_result","tool_use_id":"N1","content":"ok"}"#,
    ]);
    let outcome = keep_recent_assistants(&input, 1);
    assert_eq!(outcome.lines.len(), 3);
    assert!(outcome.lines[1].contains("\"N1\""));
    assert!(outcome.lines[2].contains("\"N1\""));
    assert!(!outcome.lines.iter().any(|line| line.contains("\"OLD\"")));
}
