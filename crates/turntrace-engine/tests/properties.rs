use serde_json::json;
use turntrace_engine::{Turn, reconstruct};
use turntrace_testing::Transcript;

/// Deterministic spread of session shapes: varying turn counts, batch
/// sizes, failures and missing completion markers.
fn transcripts() -> Vec<Vec<u8>> {
    let mut logs = Vec::new();

    for turns in 0..5usize {
        for batch in 1..4usize {
            let mut t = Transcript::new(&format!("s-{}-{}", turns, batch));
            let mut next_id = 0;

            for turn in 0..turns {
                t = t.user_text(&format!("prompt {}", turn));

                for round in 0..(turn % 3 + 1) {
                    let calls: Vec<(String, serde_json::Value)> = (0..batch)
                        .map(|_| {
                            next_id += 1;
                            (format!("tu{}", next_id), json!({"round": round}))
                        })
                        .collect();
                    let call_refs: Vec<(&str, &str, serde_json::Value)> = calls
                        .iter()
                        .map(|(id, input)| ("Bash", id.as_str(), input.clone()))
                        .collect();
                    t = t.assistant_tools(&call_refs);

                    for (i, (id, _)) in calls.iter().enumerate() {
                        t = t.tool_result(id, "out", (i + round) % 2 == 1);
                    }
                }

                if turn % 2 == 0 {
                    t = t.turn_complete(1000 * (turn as i64 + 1));
                }
            }

            logs.push(t.into_bytes());
        }
    }

    logs
}

fn check_invariants(turns: &[Turn]) {
    for (i, turn) in turns.iter().enumerate() {
        assert_eq!(turn.index, i, "turn indices must be dense and 0-based");
        for (j, step) in turn.steps.iter().enumerate() {
            assert_eq!(step.sequence, j, "step sequence must match position");
            if !step.is_error {
                assert!(step.error.is_empty());
            }
        }
    }
}

#[test]
fn test_invariants_hold_across_shapes() {
    for log in transcripts() {
        let turns = reconstruct(&log).unwrap();
        check_invariants(&turns);
    }
}

#[test]
fn test_reconstruction_is_idempotent() {
    for log in transcripts() {
        let first = reconstruct(&log).unwrap();
        let second = reconstruct(&log).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_tool_use_ids_unique_per_session() {
    for log in transcripts() {
        let turns = reconstruct(&log).unwrap();
        let mut ids: Vec<&str> = turns
            .iter()
            .flat_map(|t| t.steps.iter().map(|s| s.tool_use_id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}

#[test]
fn test_parallel_flags_follow_batch_size() {
    for log in transcripts() {
        let turns = reconstruct(&log).unwrap();
        for turn in &turns {
            for step in &turn.steps {
                let batched = turn
                    .steps
                    .iter()
                    .filter(|s| s.input == step.input && s.called_at == step.called_at)
                    .count()
                    > 1;
                assert_eq!(step.is_parallel, batched);
            }
        }
    }
}

#[test]
fn test_error_enrichment_is_one_way() {
    let log = Transcript::new("s1")
        .user_text("go")
        .assistant_tools(&[("Bash", "tu1", json!({})), ("Bash", "tu2", json!({}))])
        .tool_result("tu1", "exploded", true)
        .into_bytes();

    let turns = reconstruct(&log).unwrap();

    assert!(turns[0].steps[0].is_error);
    assert!(!turns[0].steps[1].is_error);
    assert_eq!(turns[0].steps[1].error, "");
}

#[test]
fn test_parallel_run_of_three_vs_pair() {
    let log = Transcript::new("s1")
        .user_text("go")
        .assistant_tools(&[
            ("Read", "a", json!({})),
            ("Read", "b", json!({})),
            ("Read", "c", json!({})),
        ])
        .assistant_tools(&[("Grep", "d", json!({})), ("Grep", "e", json!({}))])
        .assistant_tools(&[("Edit", "f", json!({}))])
        .into_bytes();

    let turns = reconstruct(&log).unwrap();
    let flags: Vec<bool> = turns[0].steps.iter().map(|s| s.is_parallel).collect();

    assert_eq!(flags, vec![true, true, true, true, true, false]);
}
