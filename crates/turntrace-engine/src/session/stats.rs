use serde::{Deserialize, Serialize};
use turntrace_types::Turn;

/// Turn-length statistics over one or more reconstructed sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TurnLengthStats {
    pub turn_count: usize,
    pub step_count: usize,
    pub explicitly_closed_turns: usize,
    pub parallel_steps: usize,
    pub failed_steps: usize,
    pub min_steps: usize,
    pub max_steps: usize,
    pub mean_steps: f64,
    pub median_steps: f64,
    /// Sum of explicit turn durations
    pub total_duration_ms: i64,
}

impl TurnLengthStats {
    pub fn from_turns(turns: &[Turn]) -> Self {
        let turn_count = turns.len();
        if turn_count == 0 {
            return Self::default();
        }

        let mut lengths: Vec<usize> = turns.iter().map(Turn::step_count).collect();
        lengths.sort_unstable();

        let step_count: usize = lengths.iter().sum();
        let median_steps = if turn_count % 2 == 1 {
            lengths[turn_count / 2] as f64
        } else {
            (lengths[turn_count / 2 - 1] + lengths[turn_count / 2]) as f64 / 2.0
        };

        let steps = turns.iter().flat_map(|t| t.steps.iter());

        Self {
            turn_count,
            step_count,
            explicitly_closed_turns: turns.iter().filter(|t| t.is_explicitly_closed()).count(),
            parallel_steps: steps.clone().filter(|s| s.is_parallel).count(),
            failed_steps: steps.filter(|s| s.is_error).count(),
            min_steps: lengths[0],
            max_steps: lengths[turn_count - 1],
            mean_steps: step_count as f64 / turn_count as f64,
            median_steps,
            total_duration_ms: turns
                .iter()
                .filter_map(|t| t.duration_ms)
                .fold(0, i64::saturating_add),
        }
    }

    /// Combine statistics from several sessions
    pub fn from_sessions<'a, I>(sessions: I) -> Self
    where
        I: IntoIterator<Item = &'a [Turn]>,
    {
        let all: Vec<Turn> = sessions
            .into_iter()
            .flat_map(|turns| turns.iter().cloned())
            .collect();
        Self::from_turns(&all)
    }
}
