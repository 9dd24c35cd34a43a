//! Decoder for Claude-Code-style JSONL transcripts.
//!
//! Each line is one JSON object. Lines are checked for syntax first (a
//! failure aborts the whole decode with the 1-based line number) and then
//! mapped leniently into [`turntrace_types::Event`]: a syntactically valid
//! line never fails the decode, however odd its shape.

pub mod io;
mod mapper;
mod schema;

pub use self::io::{
    DEFAULT_MAX_LINE_BYTES, DecodeOptions, decode_events, decode_events_with, read_events,
    read_events_file,
};
