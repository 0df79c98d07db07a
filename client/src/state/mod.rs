//! Reactive application state.
//!
//! DESIGN
//! ======
//! Each page owns one plain struct wrapped in an `RwSignal` and provided via
//! context. Transitions are methods on the struct so they can be unit tested
//! without a reactive runtime.

pub mod chat;
pub mod cookbook;
