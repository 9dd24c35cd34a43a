use std::collections::HashSet;

use turntrace_types::{Event, Turn};

use super::signal::{Signal, classify};
use super::turn_builder::TurnBuilder;

enum State {
    Idle,
    InTurn(TurnBuilder),
}

/// Split ordered events into turns.
///
/// A plain-text user event opens a turn (closing any open one without a
/// duration); assistant tool-use blocks become steps of the open turn; a
/// `turn_duration` system event closes it with that duration. A turn still
/// open at the end of the stream is emitted without a duration.
pub fn segment_turns(events: &[Event]) -> Vec<Turn> {
    let mut segmenter = Segmenter::new();
    for event in events {
        segmenter.feed(event);
    }
    segmenter.finish()
}

struct Segmenter {
    state: State,
    turns: Vec<Turn>,
    seen_tool_use_ids: HashSet<String>,
    last_session_id: Option<String>,
}

impl Segmenter {
    fn new() -> Self {
        Self {
            state: State::Idle,
            turns: Vec::new(),
            seen_tool_use_ids: HashSet::new(),
            last_session_id: None,
        }
    }

    fn feed(&mut self, event: &Event) {
        if let Some(session_id) = &event.session_id {
            self.last_session_id = Some(session_id.clone());
        }

        match classify(event) {
            Signal::Human => {
                if let State::InTurn(open) = std::mem::replace(&mut self.state, State::Idle) {
                    tracing::trace!("human message implicitly closes open turn");
                    self.emit(open);
                }
                let session_id = self.last_session_id.clone().unwrap_or_default();
                self.state = State::InTurn(TurnBuilder::new(session_id, event.timestamp));
            }

            Signal::ToolInvocation(calls) => {
                let State::InTurn(builder) = &mut self.state else {
                    tracing::trace!(uuid = ?event.uuid, "tool invocation outside a turn ignored");
                    return;
                };

                for call in calls {
                    if !self.seen_tool_use_ids.insert(call.tool_use_id.clone()) {
                        tracing::debug!(
                            tool_use_id = %call.tool_use_id,
                            "duplicate tool invocation skipped"
                        );
                        continue;
                    }
                    builder.push_call(call, event.uuid.as_deref(), event.timestamp);
                }
            }

            Signal::TurnComplete { duration_ms } => {
                match std::mem::replace(&mut self.state, State::Idle) {
                    State::InTurn(mut open) => {
                        open.close(duration_ms);
                        self.emit(open);
                    }
                    State::Idle => {
                        tracing::trace!("completion marker outside a turn ignored");
                    }
                }
            }

            Signal::Other => {}
        }
    }

    fn emit(&mut self, builder: TurnBuilder) {
        let index = self.turns.len();
        tracing::trace!(index, steps = builder.step_count(), "turn closed");
        self.turns.push(builder.build(index));
    }

    fn finish(mut self) -> Vec<Turn> {
        if let State::InTurn(open) = std::mem::replace(&mut self.state, State::Idle) {
            tracing::trace!("end of stream closes open turn");
            self.emit(open);
        }
        self.turns
    }
}
