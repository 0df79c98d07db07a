//! Reusable UI components for the cookbook and chat pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state from context signals and stay free of network
//! calls; pages own side effects such as fetching and history sync.

pub mod chat_message;
pub mod heading_toc;
pub mod language_switch;
pub mod markdown_view;
pub mod sidebar;
pub mod viewer_frame;
