//! Networking for the cookbook corpus and the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` covers one-shot requests (corpus, env info, readiness pings) and
//! `chat_stream` reads a streamed chat completion into the conversation.

pub mod api;
pub mod chat_stream;
