use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// NOTE: Event model
//
// One decoded line of a session log. Every field except `kind` is optional
// because real transcripts mix conversational records with bookkeeping
// records (snapshots, queue operations, summaries) that carry almost nothing.
//
// The model is deliberately lossy: only the fields needed to segment turns,
// order events and correlate tool outcomes survive decoding.

/// Decoded session event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier (`uuid`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Parent event in the time-series chain (`parentUuid`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,

    pub kind: EventKind,

    /// Subkind (`subtype`), e.g. `turn_duration` on system events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// None when the timestamp is absent or not ISO-8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// Assistant event that triggered this outcome event (`sourceToolAssistantUUID`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<String>,
}

impl Event {
    /// Bare event of the given kind with every optional field empty
    pub fn new(kind: EventKind) -> Self {
        Self {
            uuid: None,
            parent_uuid: None,
            kind,
            subtype: None,
            session_id: None,
            timestamp: None,
            duration_ms: None,
            message: None,
            caused_by: None,
        }
    }

    /// Content blocks of the message envelope, empty for plain text or no message
    pub fn blocks(&self) -> &[ContentBlock] {
        match self.message.as_ref().map(|m| &m.content) {
            Some(MessageContent::Blocks(blocks)) => blocks,
            _ => &[],
        }
    }

    /// Plain-text message content (a human prompt when `kind` is `User`)
    pub fn plain_text(&self) -> Option<&str> {
        match self.message.as_ref().map(|m| &m.content) {
            Some(MessageContent::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// Event kind, taken from the record's `type` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    User,
    Assistant,
    System,
    /// Any other record type (or none at all); kept only for ordering
    Other(String),
}

impl EventKind {
    pub fn from_type(raw: &str) -> Self {
        match raw {
            "user" => EventKind::User,
            "assistant" => EventKind::Assistant,
            "system" => EventKind::System,
            other => EventKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    Other(String),
}

impl Role {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }
}

/// Message envelope (role + content)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

/// Message content, decided by the JSON shape of `content`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum MessageContent {
    /// JSON string: human free text
    Text(String),
    /// JSON array: typed content blocks
    Blocks(Vec<ContentBlock>),
    /// Anything else
    Unrecognized,
}

/// Typed content block, keyed on the block's declared `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    /// Tool invocation request
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    /// Tool outcome report
    ToolResult {
        tool_use_id: String,
        #[serde(default)]
        content: Value,
        #[serde(default)]
        is_error: bool,
    },
    /// Unknown block type, or a known type that failed to decode
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_block_tool_use_decodes() {
        let block: ContentBlock = serde_json::from_value(json!({
            "type": "tool_use",
            "id": "tu1",
            "name": "Bash",
            "input": {"command": "ls"}
        }))
        .unwrap();

        assert_eq!(
            block,
            ContentBlock::ToolUse {
                id: "tu1".to_string(),
                name: "Bash".to_string(),
                input: json!({"command": "ls"}),
            }
        );
    }

    #[test]
    fn test_content_block_unknown_type_is_other() {
        let block: ContentBlock =
            serde_json::from_value(json!({"type": "thinking", "thinking": "hmm"})).unwrap();
        assert_eq!(block, ContentBlock::Other);
    }

    #[test]
    fn test_event_accessors() {
        let mut event = Event::new(EventKind::User);
        assert!(event.blocks().is_empty());
        assert_eq!(event.plain_text(), None);

        event.message = Some(Message {
            role: Role::User,
            content: MessageContent::Text("fix bug".to_string()),
        });
        assert_eq!(event.plain_text(), Some("fix bug"));
        assert!(event.blocks().is_empty());
    }

    #[test]
    fn test_event_kind_from_type() {
        assert_eq!(EventKind::from_type("system"), EventKind::System);
        assert_eq!(
            EventKind::from_type("file-history-snapshot"),
            EventKind::Other("file-history-snapshot".to_string())
        );
    }
}
