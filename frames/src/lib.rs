//! Chat stream wire model shared by the browser client and the CLI.
//!
//! This crate owns everything between the bytes of a streamed
//! chat-completions response and the message list the UI renders:
//!
//! - [`sse`]: restartable line-buffering decoder for `data:` frames;
//! - [`delta`]: chunk payloads decoded into [`ChatEvent`]s;
//! - [`conversation`]: the message reducer and request builder;
//! - [`stream`]: decoder + reducer glue with per-frame error reporting;
//! - [`viewer`]: remote desktop viewer URL and readiness polling.
//!
//! No I/O happens here. Callers bring the transport and the timer.

pub mod conversation;
pub mod delta;
pub mod message;
pub mod sse;
pub mod stream;
pub mod viewer;

pub use conversation::{ChatRequest, Conversation, reduce};
pub use delta::{ChatEvent, FrameError, ToolActivity, decode_event};
pub use message::{ChatMessage, Sender, ToolStatus};
pub use sse::{SseDecoder, SseFrame};
pub use stream::{ChatStream, apply_chunk, finish_stream};
pub use viewer::{EnvInfo, Readiness, ReadinessPolicy};
