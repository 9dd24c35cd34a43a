use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Every field is optional and lenient: a field of the wrong JSON type reads
// as absent instead of failing the record.

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClaudeRecord {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub record_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subtype: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub duration_ms: Option<i64>,
    #[serde(default)]
    pub message: Option<Value>,
    /// Links a tool-result record to the assistant record that issued the call
    #[serde(
        rename = "sourceToolAssistantUUID",
        default,
        deserialize_with = "lenient_string"
    )]
    pub source_tool_assistant_uuid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClaudeMessage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}
