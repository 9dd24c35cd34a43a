use chrono::{DateTime, Utc};
use serde_json::Value;
use turntrace_types::Step;

/// Step collected while its turn is still open
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingStep {
    pub tool_name: String,
    pub tool_use_id: String,
    pub input: Value,
    /// uuid of the assistant event that issued the call
    pub origin: Option<String>,
    pub called_at: Option<DateTime<Utc>>,
    pub is_parallel: bool,
}

impl PendingStep {
    pub fn new(
        tool_name: String,
        tool_use_id: String,
        input: Value,
        origin: Option<String>,
        called_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            tool_name,
            tool_use_id,
            input,
            origin,
            called_at,
            is_parallel: false,
        }
    }

    /// Freeze into a step at position `sequence`; outcome fields start clear
    pub fn build(self, sequence: usize) -> Step {
        Step {
            tool_name: self.tool_name,
            tool_use_id: self.tool_use_id,
            input: self.input,
            sequence,
            is_parallel: self.is_parallel,
            is_error: false,
            error: String::new(),
            called_at: self.called_at,
            latency_ms: None,
        }
    }
}
