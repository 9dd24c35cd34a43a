use serde::{Deserialize, Serialize};
use turntrace_types::Turn;

use crate::{ReconstructOptions, reconstruct_with};

/// Position of one tool invocation inside its session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLocation {
    /// `<session_id>:<turn index>`
    pub turn_id: String,
    pub turn_index: usize,
    pub sequence: usize,
    pub turn_step_count: usize,
}

pub fn locate_step(turns: &[Turn], tool_use_id: &str) -> Option<StepLocation> {
    turns.iter().find_map(|turn| {
        turn.find_step(tool_use_id).map(|step| StepLocation {
            turn_id: turn.turn_id(),
            turn_index: turn.index,
            sequence: step.sequence,
            turn_step_count: turn.step_count(),
        })
    })
}

/// Reconstruct a log and locate one invocation in it.
///
/// An unreadable log is "no enrichment available", same as a miss.
pub fn enrich_tool_use(bytes: &[u8], tool_use_id: &str) -> Option<StepLocation> {
    enrich_tool_use_with(bytes, tool_use_id, &ReconstructOptions::default())
}

pub fn enrich_tool_use_with(
    bytes: &[u8],
    tool_use_id: &str,
    options: &ReconstructOptions,
) -> Option<StepLocation> {
    let turns = match reconstruct_with(bytes, options) {
        Ok(turns) => turns,
        Err(err) => {
            tracing::debug!(error = %err, "session log unreadable, no enrichment");
            return None;
        }
    };

    let location = locate_step(&turns, tool_use_id);
    if location.is_none() {
        tracing::debug!(tool_use_id, "tool use not found in session log");
    }
    location
}
