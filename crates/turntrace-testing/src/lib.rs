//! Testing infrastructure for turntrace.
//!
//! - `Transcript`: fluent builder for JSONL session logs
//! - `fixtures`: bundled sample logs and temp-file placement

pub mod fixtures;
pub mod transcript;

pub use fixtures::SampleFiles;
pub use transcript::Transcript;
