use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use turntrace_types::{Error, Event, Result};

use super::mapper::map_record;

/// Default ceiling for a single line (64 MiB)
pub const DEFAULT_MAX_LINE_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Longest accepted line, excluding the line terminator
    pub max_line_bytes: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

/// Decode an in-memory JSONL log into events, in file order
pub fn decode_events(bytes: &[u8]) -> Result<Vec<Event>> {
    decode_events_with(bytes, &DecodeOptions::default())
}

pub fn decode_events_with(bytes: &[u8], options: &DecodeOptions) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        if let Some(event) = decode_line(raw, idx + 1, options)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Drain a reader line by line.
///
/// At most `max_line_bytes + 2` bytes are buffered for any one line, so an
/// oversized line fails before it is fully read.
pub fn read_events<R: BufRead>(mut reader: R, options: &DecodeOptions) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;
    // room for the terminator pair "\r\n"
    let window = (options.max_line_bytes as u64).saturating_add(2);

    loop {
        buf.clear();
        let n = reader.by_ref().take(window).read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        line += 1;

        let raw = match buf.strip_suffix(b"\n") {
            Some(raw) => raw,
            None if n as u64 == window => {
                return Err(Error::LineTooLong {
                    line,
                    limit: options.max_line_bytes,
                });
            }
            None => &buf[..],
        };

        if let Some(event) = decode_line(raw, line, options)? {
            events.push(event);
        }
    }

    Ok(events)
}

pub fn read_events_file(path: &Path, options: &DecodeOptions) -> Result<Vec<Event>> {
    let file = std::fs::File::open(path)?;
    read_events(BufReader::new(file), options)
}

fn decode_line(raw: &[u8], line: usize, options: &DecodeOptions) -> Result<Option<Event>> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

    if raw.len() > options.max_line_bytes {
        return Err(Error::LineTooLong {
            line,
            limit: options.max_line_bytes,
        });
    }

    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value = serde_json::from_slice(raw).map_err(|source| Error::MalformedLine { line, source })?;
    Ok(Some(map_record(value, line)))
}
