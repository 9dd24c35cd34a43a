use chrono::{DateTime, Utc};
use turntrace_types::{Step, Turn};

use super::parallel::mark_parallel;
use super::signal::PendingCall;
use super::step_builder::PendingStep;

pub(crate) struct TurnBuilder {
    session_id: String,
    started_at: Option<DateTime<Utc>>,
    duration_ms: Option<i64>,
    steps: Vec<PendingStep>,
}

impl TurnBuilder {
    pub fn new(session_id: String, started_at: Option<DateTime<Utc>>) -> Self {
        Self {
            session_id,
            started_at,
            duration_ms: None,
            steps: Vec::new(),
        }
    }

    pub fn push_call(
        &mut self,
        call: PendingCall,
        origin: Option<&str>,
        called_at: Option<DateTime<Utc>>,
    ) {
        self.steps.push(PendingStep::new(
            call.tool_name,
            call.tool_use_id,
            call.input,
            origin.map(str::to_string),
            called_at,
        ));
    }

    /// Record the duration carried by an explicit completion marker
    pub fn close(&mut self, duration_ms: Option<i64>) {
        self.duration_ms = duration_ms;
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Detect parallel runs, then freeze indices and sequences
    pub fn build(mut self, index: usize) -> Turn {
        mark_parallel(&mut self.steps);

        let steps: Vec<Step> = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(sequence, pending)| pending.build(sequence))
            .collect();

        Turn {
            session_id: self.session_id,
            index,
            started_at: self.started_at,
            duration_ms: self.duration_ms,
            steps,
        }
    }
}
