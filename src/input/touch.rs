// SPDX-License-Identifier: MPL-2.0
//! Touch adapter: resolves vertical swipe gestures into navigation
//! commands.

use super::NavCommand;

/// Minimum vertical travel, in screen units, before a gesture counts as a
/// swipe rather than a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Tracks the vertical coordinates of one touch interaction.
///
/// The pair lives only between a touch-start and touch-end; finishing a
/// gesture consumes it, and a new touch-start overwrites whatever was
/// left behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeTracker {
    start_y: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the starting vertical coordinate of a touch.
    pub fn begin(&mut self, start_y: f32) {
        self.start_y = Some(start_y);
    }

    /// Resolves the gesture against the ending coordinate.
    ///
    /// A finger moving up (positive `start - end`) advances, matching the
    /// content moving down; a finger moving down goes back. Travel at or
    /// below [`SWIPE_THRESHOLD`] resolves to nothing.
    pub fn finish(&mut self, end_y: f32) -> Option<NavCommand> {
        let start_y = self.start_y.take()?;
        let diff = start_y - end_y;

        if diff.abs() > SWIPE_THRESHOLD {
            if diff > 0.0 {
                Some(NavCommand::Next)
            } else {
                Some(NavCommand::Previous)
            }
        } else {
            None
        }
    }
}
