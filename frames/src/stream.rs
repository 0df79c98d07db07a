//! Chat stream consumer: transport chunks in, chat events out.
//!
//! Transport-agnostic. The browser feeds `ReadableStream` chunks, the
//! terminal client feeds `reqwest` body chunks; both apply the events to a
//! [`Conversation`] and log the errors.

use crate::conversation::Conversation;
use crate::delta::{ChatEvent, FrameError, decode_event};
use crate::sse::{Frames, SseDecoder, SseFrame};

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;

/// Decoder state for one streamed response.
#[derive(Debug, Default)]
pub struct ChatStream {
    decoder: SseDecoder,
    ended: bool,
}

impl ChatStream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once [`ChatEvent::StreamEnd`] has been produced.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Feed a transport chunk and iterate the events it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Events<'_> {
        Events { frames: self.decoder.feed(chunk), ended: &mut self.ended }
    }

    /// Flush the decoder at transport end.
    ///
    /// Yields the event of a trailing unterminated line, if any, followed by
    /// [`ChatEvent::StreamEnd`] unless the sentinel already produced one.
    pub fn finish(&mut self) -> Vec<Result<ChatEvent, FrameError>> {
        let mut out: Vec<_> = self.decoder.finish().and_then(frame_event).into_iter().collect();
        if out.iter().any(|event| matches!(event, Ok(ChatEvent::StreamEnd))) {
            self.ended = true;
        }
        if !self.ended {
            self.ended = true;
            out.push(Ok(ChatEvent::StreamEnd));
        }
        out
    }
}

/// Lazy iterator returned by [`ChatStream::feed`].
#[derive(Debug)]
pub struct Events<'a> {
    frames: Frames<'a>,
    ended: &'a mut bool,
}

impl Iterator for Events<'_> {
    type Item = Result<ChatEvent, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        for frame in self.frames.by_ref() {
            if frame == SseFrame::Done {
                *self.ended = true;
            }
            if let Some(event) = frame_event(frame) {
                return Some(event);
            }
        }
        None
    }
}

fn frame_event(frame: SseFrame) -> Option<Result<ChatEvent, FrameError>> {
    match frame {
        SseFrame::Done => Some(Ok(ChatEvent::StreamEnd)),
        SseFrame::Data(payload) => decode_event(&payload).transpose(),
    }
}

/// Feed a chunk and apply every decoded event to `conversation`.
///
/// Malformed frames do not stop the stream; they are returned so the caller
/// can log them.
pub fn apply_chunk(stream: &mut ChatStream, conversation: &mut Conversation, chunk: &[u8]) -> Vec<FrameError> {
    let mut errors = Vec::new();
    for event in stream.feed(chunk) {
        match event {
            Ok(event) => conversation.apply(event),
            Err(err) => errors.push(err),
        }
    }
    errors
}

/// Flush `stream` into `conversation`, always clearing the typing flag.
pub fn finish_stream(stream: &mut ChatStream, conversation: &mut Conversation) -> Vec<FrameError> {
    let mut errors = Vec::new();
    for event in stream.finish() {
        match event {
            Ok(event) => conversation.apply(event),
            Err(err) => errors.push(err),
        }
    }
    conversation.end_stream();
    errors
}
