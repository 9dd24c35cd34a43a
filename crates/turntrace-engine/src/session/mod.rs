mod correlate;
mod parallel;
mod segmenter;
mod signal;
mod step_builder;
mod turn_builder;

pub mod stats;

pub use correlate::correlate_outcomes;
pub use segmenter::segment_turns;
pub use stats::TurnLengthStats;

