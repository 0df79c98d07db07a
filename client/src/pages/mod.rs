//! Route-level pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own side effects: fetching, history sync, observers and the chat
//! stream. They compose components that only read and update state.

pub mod chat;
pub mod cookbook;
