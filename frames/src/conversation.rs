//! Conversation state and the message reducer.
//!
//! DESIGN
//! ======
//! [`reduce`] is a pure function from (message, event) to message. The
//! [`Conversation`] wrapper owns the message list and the typing flag and
//! only ever applies events to its last message.
//!
//! Update rules:
//! - tool call / tool response: overwrite status and all tool fields, keep text;
//! - text delta: append to text, clear status (tool fields are kept);
//! - stream end: message unchanged, typing cleared.

use serde::{Deserialize, Serialize};

use crate::delta::{ChatEvent, ToolActivity};
use crate::message::{ChatMessage, Sender, ToolStatus};

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "qwen-max";
/// System prompt prepended to every request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
/// First assistant message of a fresh conversation.
pub const GREETING: &str = "Hello, I'm the assistant! Ask me anything!";

/// Apply one event to a message.
#[must_use]
pub fn reduce(mut message: ChatMessage, event: &ChatEvent) -> ChatMessage {
    match event {
        ChatEvent::TextDelta(text) => {
            message.text.push_str(text);
            message.sender = Sender::Assistant;
            message.status = None;
        }
        ChatEvent::ToolCall(activity) => {
            set_tool(&mut message, ToolStatus::ToolCall, activity);
        }
        ChatEvent::ToolResponse(activity) => {
            set_tool(&mut message, ToolStatus::ToolResponse, activity);
        }
        ChatEvent::StreamEnd => {}
    }
    message
}

fn set_tool(message: &mut ChatMessage, status: ToolStatus, activity: &ToolActivity) {
    message.sender = Sender::Assistant;
    message.status = Some(status);
    message.tool_name.clone_from(&activity.name);
    message.tool_id.clone_from(&activity.id);
    message.tool_input.clone_from(&activity.input);
    message.tool_result.clone_from(&activity.result);
}

/// Role of a message on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a chat-completions request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /v1/chat/completions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    pub stream: bool,
}

/// Message list plus the typing indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    typing: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// A conversation opened by the assistant greeting.
    #[must_use]
    pub fn new() -> Self {
        Self { messages: vec![ChatMessage::assistant(GREETING)], typing: false }
    }

    /// A conversation with no messages.
    #[must_use]
    pub fn empty() -> Self {
        Self { messages: Vec::new(), typing: false }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Append a user message. Blank input is ignored and returns `false`.
    pub fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        true
    }

    /// Build the streaming request for the current history.
    ///
    /// Blank messages (such as an unfilled placeholder) are left out.
    #[must_use]
    pub fn request(&self, model: &str) -> ChatRequest {
        let system = ApiMessage { role: Role::System, content: SYSTEM_PROMPT.to_owned() };
        let history = self
            .messages
            .iter()
            .filter(|message| !message.is_blank())
            .map(|message| ApiMessage {
                role: match message.sender {
                    Sender::Assistant => Role::Assistant,
                    Sender::User => Role::User,
                },
                content: message.text.clone(),
            });
        ChatRequest {
            model: model.to_owned(),
            messages: std::iter::once(system).chain(history).collect(),
            stream: true,
        }
    }

    /// Append the assistant placeholder and raise the typing indicator.
    pub fn begin_stream(&mut self) {
        self.messages.push(ChatMessage::placeholder());
        self.typing = true;
    }

    /// Push the user message, build the request and open the stream.
    ///
    /// Returns `None` for blank input.
    pub fn submit(&mut self, text: &str, model: &str) -> Option<ChatRequest> {
        if !self.push_user(text) {
            return None;
        }
        let request = self.request(model);
        self.begin_stream();
        Some(request)
    }

    /// Apply a stream event to the last message.
    pub fn apply(&mut self, event: ChatEvent) {
        if event == ChatEvent::StreamEnd {
            self.typing = false;
            return;
        }
        let last = self.messages.pop().unwrap_or_else(ChatMessage::placeholder);
        self.messages.push(reduce(last, &event));
    }

    /// Clear the typing indicator without further updates.
    pub fn end_stream(&mut self) {
        self.apply(ChatEvent::StreamEnd);
    }

    /// End a turn that failed. The placeholder is dropped if nothing reached
    /// it, so a rejected request leaves no empty reply behind.
    pub fn abort_stream(&mut self) {
        if self.last() == Some(&ChatMessage::placeholder()) {
            self.messages.pop();
        }
        self.end_stream();
    }
}
