//! Restartable line-buffering decoder for `data:` event streams.
//!
//! DESIGN
//! ======
//! The decoder owns a byte buffer. Each [`SseDecoder::feed`] call appends a
//! transport chunk and hands back a lazy iterator over the complete lines it
//! can now see. Lines are split on raw `\n` bytes, so a chunk boundary may
//! fall inside a line or inside a multi-byte UTF-8 sequence. Whatever the
//! iterator leaves unread stays buffered for the next call.
//!
//! Some backends repeat the prefix (`data: data: {...}`), so every leading
//! `data:` is stripped. The `[DONE]` sentinel terminates the stream: later
//! input is ignored.

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;

/// Payload that terminates a stream.
pub const DONE_SENTINEL: &str = "[DONE]";

const DATA_PREFIX: &str = "data:";

/// One decoded frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SseFrame {
    /// Payload of a `data:` line, prefixes stripped and trimmed.
    Data(String),
    /// The `[DONE]` sentinel.
    Done,
}

/// Incremental decoder. See the module docs.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
    cursor: usize,
    done: bool,
}

impl SseDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once the `[DONE]` sentinel has been yielded.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Append a chunk and iterate the frames it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Frames<'_> {
        self.compact();
        if !self.done {
            self.buf.extend_from_slice(chunk);
        }
        Frames { decoder: self }
    }

    /// Flush a trailing line that never received its newline.
    ///
    /// Call once the transport reports end of stream.
    pub fn finish(&mut self) -> Option<SseFrame> {
        self.compact();
        if self.done || self.buf.is_empty() {
            self.buf.clear();
            return None;
        }
        let line = std::mem::take(&mut self.buf);
        let line = String::from_utf8_lossy(&line).into_owned();
        self.classify(&line)
    }

    fn compact(&mut self) {
        if self.cursor > 0 {
            self.buf.drain(..self.cursor);
            self.cursor = 0;
        }
    }

    fn next_frame(&mut self) -> Option<SseFrame> {
        while !self.done {
            let start = self.cursor;
            let newline = self.buf[start..].iter().position(|b| *b == b'\n')?;
            self.cursor = start + newline + 1;
            let line = String::from_utf8_lossy(&self.buf[start..start + newline]).into_owned();
            if let Some(frame) = self.classify(&line) {
                return Some(frame);
            }
        }
        None
    }

    fn classify(&mut self, line: &str) -> Option<SseFrame> {
        let payload = strip_data_prefixes(line.trim())?;
        if payload.is_empty() {
            return None;
        }
        if payload == DONE_SENTINEL {
            self.done = true;
            self.buf.clear();
            self.cursor = 0;
            return Some(SseFrame::Done);
        }
        Some(SseFrame::Data(payload.to_owned()))
    }
}

/// Lazy iterator returned by [`SseDecoder::feed`].
#[derive(Debug)]
pub struct Frames<'a> {
    decoder: &'a mut SseDecoder,
}

impl Iterator for Frames<'_> {
    type Item = SseFrame;

    fn next(&mut self) -> Option<SseFrame> {
        self.decoder.next_frame()
    }
}

/// Strip every leading `data:` prefix (and the whitespace after each).
///
/// Returns `None` for lines that are not data lines (comments, `event:`,
/// `id:`, blank keep-alives).
#[must_use]
pub fn strip_data_prefixes(line: &str) -> Option<&str> {
    let mut rest = line.strip_prefix(DATA_PREFIX)?.trim_start();
    while let Some(next) = rest.strip_prefix(DATA_PREFIX) {
        rest = next.trim_start();
    }
    Some(rest)
}
