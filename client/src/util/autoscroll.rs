//! Stick-to-bottom rule for the chat transcript.
//!
//! The transcript follows new output only while the reader is already at
//! the bottom; scrolling up to reread history turns following off until
//! they scroll back down.

#[cfg(test)]
#[path = "autoscroll_test.rs"]
mod autoscroll_test;

/// Distance from the bottom, in CSS pixels, that still counts as "at the bottom".
pub const NEAR_BOTTOM_PX: i32 = 50;

/// `true` when a container scrolled to `scroll_top` is within
/// [`NEAR_BOTTOM_PX`] of its end.
#[must_use]
pub fn should_autoscroll(scroll_height: i32, scroll_top: i32, client_height: i32) -> bool {
    scroll_height - scroll_top - client_height < NEAR_BOTTOM_PX
}
