//! Chat page state: the conversation and the remote desktop viewer.
//!
//! DESIGN
//! ======
//! `Conversation` from `frames` owns the message list and the typing flag;
//! this wrapper adds what only the page cares about: the last transport
//! error and the viewer lifecycle.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use frames::conversation::DEFAULT_MODEL;
use frames::{ChatRequest, Conversation, FrameError};

/// Remote desktop iframe lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerState {
    /// Env info not fetched yet.
    #[default]
    Connecting,
    /// URL known; `verified` tells whether a readiness ping succeeded.
    Ready { url: String, verified: bool },
    /// Env info missing or incomplete.
    Unavailable,
}

impl ViewerState {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Ready { url, .. } => Some(url),
            Self::Connecting | Self::Unavailable => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: Conversation,
    pub viewer: ViewerState,
    pub last_error: Option<String>,
    /// Frames skipped in the current conversation because they failed to decode.
    pub skipped_frames: usize,
}

impl ChatState {
    /// Start a turn. Returns the request to send, or `None` for blank input
    /// or while a response is still streaming.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        if self.conversation.is_typing() {
            return None;
        }
        let request = self.conversation.submit(text, DEFAULT_MODEL)?;
        self.last_error = None;
        Some(request)
    }

    /// Record frames that could not be decoded.
    pub fn note_frame_errors(&mut self, errors: &[FrameError]) {
        self.skipped_frames += errors.len();
    }

    /// The request failed before or during streaming.
    pub fn fail(&mut self, message: String) {
        self.conversation.abort_stream();
        self.last_error = Some(message);
    }

    /// Footnote shown when some frames could not be decoded.
    #[must_use]
    pub fn skipped_notice(&self) -> Option<String> {
        match self.skipped_frames {
            0 => None,
            1 => Some("1 malformed reply frame was skipped".to_owned()),
            n => Some(format!("{n} malformed reply frames were skipped")),
        }
    }

    #[must_use]
    pub fn can_send(&self, input: &str) -> bool {
        !input.trim().is_empty() && !self.conversation.is_typing()
    }
}
