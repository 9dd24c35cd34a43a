use serde_json::Value;
use turntrace_types::{ContentBlock, Event, EventKind};

/// System subtype marking the end of a turn
pub(crate) const TURN_COMPLETE_SUBTYPE: &str = "turn_duration";

/// Tool invocation request lifted out of an assistant event
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingCall {
    pub tool_name: String,
    pub tool_use_id: String,
    pub input: Value,
}

/// What one ordered event means to the segmenter
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Signal {
    /// User event with plain-text content
    Human,
    /// Assistant event with at least one tool-use block
    ToolInvocation(Vec<PendingCall>),
    /// Explicit completion marker
    TurnComplete { duration_ms: Option<i64> },
    Other,
}

pub(crate) fn classify(event: &Event) -> Signal {
    match event.kind {
        EventKind::User if event.plain_text().is_some() => Signal::Human,
        EventKind::Assistant => {
            let calls: Vec<PendingCall> = event
                .blocks()
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::ToolUse { id, name, input } => Some(PendingCall {
                        tool_name: name.clone(),
                        tool_use_id: id.clone(),
                        input: input.clone(),
                    }),
                    _ => None,
                })
                .collect();

            if calls.is_empty() {
                Signal::Other
            } else {
                Signal::ToolInvocation(calls)
            }
        }
        EventKind::System if event.subtype.as_deref() == Some(TURN_COMPLETE_SUBTYPE) => {
            Signal::TurnComplete {
                duration_ms: event.duration_ms,
            }
        }
        _ => Signal::Other,
    }
}
