use chrono::{DateTime, Utc};
use serde_json::Value;
use turntrace_types::{ContentBlock, Event, EventKind, Message, MessageContent, Role};

use super::schema::{ClaudeMessage, ClaudeRecord};

/// Map one syntactically valid line into an event.
///
/// Never fails: anything structurally unexpected degrades to an inert event.
pub(crate) fn map_record(value: Value, line: usize) -> Event {
    if !value.is_object() {
        tracing::debug!(line, "non-object JSON line treated as inert event");
        return Event::new(EventKind::Other(String::new()));
    }

    let record: ClaudeRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(line, error = %err, "unreadable record treated as inert event");
            return Event::new(EventKind::Other(String::new()));
        }
    };

    let kind = match record.record_type.as_deref() {
        Some(raw) => EventKind::from_type(raw),
        None => {
            tracing::debug!(line, "record without type treated as inert event");
            EventKind::Other(String::new())
        }
    };

    Event {
        uuid: record.uuid,
        parent_uuid: record.parent_uuid,
        kind,
        subtype: record.subtype,
        session_id: record.session_id,
        timestamp: record
            .timestamp
            .as_deref()
            .and_then(|ts| parse_timestamp(ts, line)),
        duration_ms: record.duration_ms,
        message: record.message.and_then(|m| map_message(m, line)),
        caused_by: record.source_tool_assistant_uuid,
    }
}

fn parse_timestamp(ts: &str, line: usize) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(err) => {
            tracing::debug!(line, timestamp = ts, error = %err, "unparseable timestamp ignored");
            None
        }
    }
}

fn map_message(value: Value, line: usize) -> Option<Message> {
    let message: ClaudeMessage = match serde_json::from_value(value) {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!(line, error = %err, "malformed message envelope ignored");
            return None;
        }
    };

    Some(Message {
        role: Role::from_raw(message.role.as_deref().unwrap_or_default()),
        content: map_content(message.content),
    })
}

/// String content is human text; array content is a block list.
pub(crate) fn map_content(content: Value) -> MessageContent {
    match content {
        Value::String(text) => MessageContent::Text(text),
        Value::Array(items) => MessageContent::Blocks(items.into_iter().map(map_block).collect()),
        _ => MessageContent::Unrecognized,
    }
}

fn map_block(item: Value) -> ContentBlock {
    serde_json::from_value(item).unwrap_or(ContentBlock::Other)
}
