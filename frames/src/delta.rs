//! Chat-completions chunk payloads and the events they decode to.
//!
//! A chunk looks like `{"choices":[{"delta":{...}}]}`. Only the first choice
//! is read. The delta carries either `content` text or tool metadata
//! (`messageType`, `toolName`, `toolId`, `toolInput`, `toolResult`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[cfg(test)]
#[path = "delta_test.rs"]
mod tests;

/// `messageType` marker for a tool invocation.
pub const TOOL_CALL: &str = "TOOL_CALL";
/// `messageType` marker for a tool result.
pub const TOOL_RESPONSE: &str = "TOOL_RESPONSE";

/// Error produced when a frame payload cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload is not a valid chunk document.
    #[error("malformed frame payload: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
        payload: String,
    },
}

impl FrameError {
    /// The raw payload that failed to decode.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Json { payload, .. } => payload,
        }
    }
}

/// Tool metadata carried by a tool-call or tool-response delta.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolActivity {
    pub name: Option<String>,
    pub id: Option<String>,
    pub input: Option<String>,
    pub result: Option<String>,
}

/// Update applied to the conversation while a response streams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    /// Assistant text to append.
    TextDelta(String),
    /// The assistant is invoking a tool.
    ToolCall(ToolActivity),
    /// A tool returned.
    ToolResponse(ToolActivity),
    /// The stream finished (sentinel or transport end).
    StreamEnd,
}

/// The `delta` object of the first choice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tool_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tool_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tool_input: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tool_result: Option<String>,
}

impl Delta {
    /// Map the delta to the event it represents.
    ///
    /// A tool marker wins over text. A delta with neither (role-only or
    /// keep-alive chunks) maps to `None`.
    #[must_use]
    pub fn into_event(self) -> Option<ChatEvent> {
        let is_call = self.message_type.as_deref() == Some(TOOL_CALL);
        let is_response = self.message_type.as_deref() == Some(TOOL_RESPONSE);
        if !is_call && !is_response {
            return self
                .content
                .filter(|text| !text.is_empty())
                .map(ChatEvent::TextDelta);
        }

        let activity = ToolActivity {
            name: self.tool_name,
            id: self.tool_id,
            input: self.tool_input,
            result: self.tool_result,
        };
        if is_call {
            Some(ChatEvent::ToolCall(activity))
        } else {
            Some(ChatEvent::ToolResponse(activity))
        }
    }
}

#[derive(Deserialize)]
struct Chunk {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    delta: Option<Delta>,
}

/// Decode one frame payload into an event.
///
/// # Errors
///
/// Returns [`FrameError::Json`] if the payload is not JSON or has no
/// `choices` array.
pub fn decode_event(payload: &str) -> Result<Option<ChatEvent>, FrameError> {
    let chunk: Chunk = serde_json::from_str(payload).map_err(|source| FrameError::Json {
        source,
        payload: payload.to_owned(),
    })?;
    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta)
        .and_then(Delta::into_event))
}

// Tool payloads are usually strings but some backends send structured JSON.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
