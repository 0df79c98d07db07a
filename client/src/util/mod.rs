//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (history, storage,
//! intersection observers, scrolling) from page and component logic. Each one no-ops
//! during server rendering.

pub mod autoscroll;
pub mod history;
pub mod language_pref;
pub mod scroll_observer;
