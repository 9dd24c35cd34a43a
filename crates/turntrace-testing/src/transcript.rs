//! Fluent builder for Claude-Code-style JSONL session logs.
//!
//! Every event gets a generated `uuid` (`evt-<n>`) and a timestamp one
//! second after the previous event unless [`Transcript::same_instant`] is
//! used. Tool results are linked back to the assistant event that issued the
//! call through `sourceToolAssistantUUID`.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct Transcript {
    session_id: String,
    lines: Vec<String>,
    clock: DateTime<Utc>,
    next_id: usize,
    hold_clock: bool,
    last_uuid: Option<String>,
    issued_by: HashMap<String, String>,
}

impl Transcript {
    pub fn new(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            lines: Vec::new(),
            clock: Utc
                .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            next_id: 0,
            hold_clock: false,
            last_uuid: None,
            issued_by: HashMap::new(),
        }
    }

    /// Next event shares the previous event's timestamp
    pub fn same_instant(mut self) -> Self {
        self.hold_clock = true;
        self
    }

    /// Human prompt (plain string content)
    pub fn user_text(self, text: &str) -> Self {
        self.push("user", json!({"message": {"role": "user", "content": text}}))
    }

    /// Assistant event carrying one tool-use block per `(name, id, input)`
    pub fn assistant_tools(mut self, calls: &[(&str, &str, Value)]) -> Self {
        let uuid = self.peek_uuid();
        let content: Vec<Value> = calls
            .iter()
            .map(|(name, id, input)| {
                self.issued_by.insert(id.to_string(), uuid.clone());
                json!({"type": "tool_use", "id": id, "name": name, "input": input})
            })
            .collect();

        self.push(
            "assistant",
            json!({"message": {"role": "assistant", "content": content}}),
        )
    }

    /// Assistant event with a single text block
    pub fn assistant_text(self, text: &str) -> Self {
        self.push(
            "assistant",
            json!({"message": {"role": "assistant", "content": [{"type": "text", "text": text}]}}),
        )
    }

    /// Outcome event reporting one tool result
    pub fn tool_result(self, tool_use_id: &str, output: &str, is_error: bool) -> Self {
        self.tool_results(&[(tool_use_id, output, is_error)])
    }

    /// Outcome event reporting a batch of tool results
    pub fn tool_results(self, results: &[(&str, &str, bool)]) -> Self {
        let content: Vec<Value> = results
            .iter()
            .map(|(id, output, is_error)| {
                json!({
                    "type": "tool_result",
                    "tool_use_id": id,
                    "content": output,
                    "is_error": is_error
                })
            })
            .collect();

        let mut fields = json!({"message": {"role": "user", "content": content}});
        if let Some((id, _, _)) = results.first()
            && let Some(source) = self.issued_by.get(*id)
        {
            fields["sourceToolAssistantUUID"] = json!(source);
        }
        self.push("user", fields)
    }

    /// Explicit turn completion marker
    pub fn turn_complete(self, duration_ms: i64) -> Self {
        self.push(
            "system",
            json!({"subtype": "turn_duration", "durationMs": duration_ms}),
        )
    }

    /// Arbitrary line, copied verbatim
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn to_jsonl(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.to_jsonl().into_bytes()
    }

    fn peek_uuid(&self) -> String {
        format!("evt-{}", self.next_id + 1)
    }

    fn push(mut self, kind: &str, mut fields: Value) -> Self {
        if self.next_id > 0 && !self.hold_clock {
            self.clock += Duration::seconds(1);
        }
        self.hold_clock = false;
        self.next_id += 1;
        let uuid = format!("evt-{}", self.next_id);

        fields["type"] = json!(kind);
        fields["uuid"] = json!(uuid);
        fields["parentUuid"] = json!(self.last_uuid);
        fields["sessionId"] = json!(self.session_id);
        fields["timestamp"] = json!(self.clock.to_rfc3339_opts(SecondsFormat::Millis, true));

        self.lines.push(fields.to_string());
        self.last_uuid = Some(uuid);
        self
    }
}
