use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use turntrace_types::{ContentBlock, Event, Turn};

struct Outcome {
    is_error: bool,
    text: String,
    timestamp: Option<DateTime<Utc>>,
}

/// Copy tool outcomes onto finalized steps.
///
/// Builds a tool-use id → outcome index once (first result wins), then
/// sets `is_error`/`error` for failed steps and `latency_ms` wherever both
/// timestamps are known. Steps without an outcome are left untouched.
pub fn correlate_outcomes(turns: &mut [Turn], events: &[Event]) {
    let outcomes = index_outcomes(events);
    if outcomes.is_empty() {
        return;
    }

    for step in turns.iter_mut().flat_map(|t| t.steps.iter_mut()) {
        let Some(outcome) = outcomes.get(step.tool_use_id.as_str()) else {
            tracing::debug!(tool_use_id = %step.tool_use_id, "no outcome for step");
            continue;
        };

        if outcome.is_error {
            step.is_error = true;
            step.error = outcome.text.clone();
        }

        if let (Some(called), Some(finished)) = (step.called_at, outcome.timestamp) {
            step.latency_ms = Some((finished - called).num_milliseconds());
        }
    }
}

fn index_outcomes(events: &[Event]) -> HashMap<&str, Outcome> {
    let mut outcomes = HashMap::new();

    for event in events {
        for block in event.blocks() {
            let ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            } = block
            else {
                continue;
            };

            outcomes.entry(tool_use_id.as_str()).or_insert_with(|| Outcome {
                is_error: *is_error,
                text: if *is_error {
                    failure_text(content)
                } else {
                    String::new()
                },
                timestamp: event.timestamp,
            });
        }
    }

    outcomes
}

/// Text of a result payload: a string as is, or the text parts of a block list
fn failure_text(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(text) => Some(text.as_str()),
                Value::Object(_) => part.get("text").and_then(Value::as_str),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => {
            tracing::debug!(content = %other, "unexpected tool result content shape");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use turntrace_types::{EventKind, Message, MessageContent, Role, Step};

    fn step(id: &str, called_at: Option<&str>) -> Step {
        Step {
            tool_name: "Bash".to_string(),
            tool_use_id: id.to_string(),
            input: json!({}),
            sequence: 0,
            is_parallel: false,
            is_error: false,
            error: String::new(),
            called_at: called_at.map(|t| t.parse().unwrap()),
            latency_ms: None,
        }
    }

    fn turn(steps: Vec<Step>) -> Turn {
        Turn {
            session_id: "s1".to_string(),
            index: 0,
            started_at: None,
            duration_ms: None,
            steps,
        }
    }

    fn results(ts: Option<&str>, blocks: Vec<ContentBlock>) -> Event {
        let mut event = Event::new(EventKind::User);
        event.timestamp = ts.map(|t| t.parse().unwrap());
        event.message = Some(Message {
            role: Role::User,
            content: MessageContent::Blocks(blocks),
        });
        event
    }

    fn result(id: &str, content: Value, is_error: bool) -> ContentBlock {
        ContentBlock::ToolResult {
            tool_use_id: id.to_string(),
            content,
            is_error,
        }
    }

    #[test]
    fn test_failure_sets_error_text() {
        let mut turns = vec![turn(vec![step("tu1", None)])];
        let events = vec![results(
            None,
            vec![result("tu1", json!("permission denied"), true)],
        )];

        correlate_outcomes(&mut turns, &events);

        assert!(turns[0].steps[0].is_error);
        assert_eq!(turns[0].steps[0].error, "permission denied");
    }

    #[test]
    fn test_success_and_missing_outcomes_stay_clear() {
        let mut turns = vec![turn(vec![step("tu1", None), step("tu2", None)])];
        let events = vec![results(None, vec![result("tu1", json!("ok"), false)])];

        correlate_outcomes(&mut turns, &events);

        for s in &turns[0].steps {
            assert!(!s.is_error);
            assert!(s.error.is_empty());
        }
    }

    #[test]
    fn test_batch_outcome_event() {
        let mut turns = vec![turn(vec![step("tu1", None), step("tu2", None)])];
        let events = vec![results(
            None,
            vec![
                result("tu1", json!("fine"), false),
                result("tu2", json!([{"type": "text", "text": "a"}, {"type": "text", "text": "b"}]), true),
            ],
        )];

        correlate_outcomes(&mut turns, &events);

        assert!(!turns[0].steps[0].is_error);
        assert!(turns[0].steps[1].is_error);
        assert_eq!(turns[0].steps[1].error, "a\nb");
    }

    #[test]
    fn test_first_outcome_wins() {
        let mut turns = vec![turn(vec![step("tu1", None)])];
        let events = vec![
            results(None, vec![result("tu1", json!("ok"), false)]),
            results(None, vec![result("tu1", json!("late failure"), true)]),
        ];

        correlate_outcomes(&mut turns, &events);

        assert!(!turns[0].steps[0].is_error);
    }

    #[test]
    fn test_unexpected_blocks_skipped() {
        let mut turns = vec![turn(vec![step("tu1", None)])];
        let events = vec![
            results(None, vec![ContentBlock::Other]),
            results(None, vec![result("tu1", json!({"weird": true}), true)]),
        ];

        correlate_outcomes(&mut turns, &events);

        assert!(turns[0].steps[0].is_error);
        assert_eq!(turns[0].steps[0].error, "");
    }

    #[test]
    fn test_latency_from_timestamps() {
        let mut turns = vec![turn(vec![step("tu1", Some("2025-01-01T00:00:01Z"))])];
        let events = vec![results(
            Some("2025-01-01T00:00:03.250Z"),
            vec![result("tu1", json!("ok"), false)],
        )];

        correlate_outcomes(&mut turns, &events);

        assert_eq!(turns[0].steps[0].latency_ms, Some(2250));
    }
}
