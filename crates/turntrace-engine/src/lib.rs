//! Turn reconstruction for AI coding-assistant session logs.
//!
//! A session log is a flat JSONL event stream. [`reconstruct`] turns it into
//! [`Turn`]s (one human prompt and everything the assistant did about it),
//! each holding ordered tool-call [`Step`]s:
//!
//! decode → order (stable, by timestamp) → segment into turns → flag
//! parallel calls → freeze → correlate tool outcomes onto steps.
//!
//! Reconstruction is a pure, synchronous function with no shared state, so
//! independent logs can be reconstructed concurrently on separate threads.
//!
//! # Memory
//!
//! The whole log and all decoded events are held in memory for the duration
//! of one call; cost is linear in event count and bounded only by input
//! size. Lines are individually capped by
//! [`ReconstructOptions::max_line_bytes`], but there is no streaming mode.

mod lookup;
mod order;
pub mod session;

use std::io::BufRead;
use std::path::Path;

pub use lookup::{StepLocation, enrich_tool_use, enrich_tool_use_with, locate_step};
pub use order::order_events;
pub use session::{TurnLengthStats, correlate_outcomes, segment_turns};
pub use turntrace_types::{Error, Event, Result, Step, Turn};

use turntrace_providers::{DEFAULT_MAX_LINE_BYTES, DecodeOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconstructOptions {
    /// Longest accepted log line; longer lines fail the call
    pub max_line_bytes: usize,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

impl ReconstructOptions {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_line_bytes: self.max_line_bytes,
        }
    }
}

/// Reconstruct turns from an in-memory JSONL log.
///
/// Fails on the first malformed or oversized line, naming its 1-based line
/// number; no partial result is returned. Empty input yields no turns.
pub fn reconstruct(bytes: &[u8]) -> Result<Vec<Turn>> {
    reconstruct_with(bytes, &ReconstructOptions::default())
}

pub fn reconstruct_with(bytes: &[u8], options: &ReconstructOptions) -> Result<Vec<Turn>> {
    let events = turntrace_providers::decode_events_with(bytes, &options.decode_options())?;
    Ok(reconstruct_events(events))
}

/// Drain a reader fully, then reconstruct
pub fn reconstruct_reader<R: BufRead>(reader: R, options: &ReconstructOptions) -> Result<Vec<Turn>> {
    let events = turntrace_providers::read_events(reader, &options.decode_options())?;
    Ok(reconstruct_events(events))
}

pub fn reconstruct_file(path: &Path, options: &ReconstructOptions) -> Result<Vec<Turn>> {
    let events = turntrace_providers::read_events_file(path, &options.decode_options())?;
    Ok(reconstruct_events(events))
}

/// Reconstruct from already-decoded events (in file order)
pub fn reconstruct_events(events: Vec<Event>) -> Vec<Turn> {
    let event_count = events.len();
    let events = order_events(events);

    let mut turns = segment_turns(&events);
    correlate_outcomes(&mut turns, &events);

    tracing::debug!(
        events = event_count,
        turns = turns.len(),
        "reconstructed session"
    );
    turns
}
