// SPDX-License-Identifier: MPL-2.0
//! Input adapters for slide navigation.
//!
//! Keyboard, touch and wheel input each normalize to a [`NavCommand`]
//! that the application dispatches to the navigator. The adapters are
//! pure state machines; visibility gating happens in the update loop
//! before any of them are consulted.

pub mod keyboard;
pub mod touch;
pub mod wheel;

pub use touch::SwipeTracker;
pub use wheel::WheelDebouncer;

/// A normalized navigation request produced by any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
}
