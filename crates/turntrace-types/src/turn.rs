use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==========================================
// Turn (one human-prompt-to-resolution cycle)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub session_id: String,

    /// 0-based, dense within the session
    pub index: usize,

    /// Timestamp of the opening human message
    pub started_at: Option<DateTime<Utc>>,

    /// Present only when an explicit completion marker closed the turn
    pub duration_ms: Option<i64>,

    /// Invariant: `steps[i].sequence == i`
    pub steps: Vec<Step>,
}

impl Turn {
    /// Composite identifier `<session_id>:<index>`
    pub fn turn_id(&self) -> String {
        format!("{}:{}", self.session_id, self.index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn duration_ms_or_zero(&self) -> i64 {
        self.duration_ms.unwrap_or(0)
    }

    pub fn is_explicitly_closed(&self) -> bool {
        self.duration_ms.is_some()
    }

    pub fn find_step(&self, tool_use_id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.tool_use_id == tool_use_id)
    }
}

// ==========================================
// Step (one tool invocation inside a turn)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub tool_name: String,

    /// Opaque invocation identifier, unique within the session
    pub tool_use_id: String,

    /// Raw tool input as recorded
    pub input: Value,

    pub sequence: usize,

    /// Issued in the same assistant event as an adjacent step
    pub is_parallel: bool,

    pub is_error: bool,

    /// Failure text from the outcome event; empty unless `is_error`
    pub error: String,

    /// Timestamp of the assistant event carrying the invocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub called_at: Option<DateTime<Utc>>,

    /// Outcome timestamp minus call timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<i64>,
}
