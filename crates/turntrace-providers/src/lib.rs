// Session log decoders
pub mod claude;

pub use claude::{
    DEFAULT_MAX_LINE_BYTES, DecodeOptions, decode_events, decode_events_with, read_events,
    read_events_file,
};

// Error types are shared with the rest of the workspace
pub use turntrace_types::{Error, Result};
