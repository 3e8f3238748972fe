// SPDX-License-Identifier: MPL-2.0
//! Wheel adapter: coalesces bursts of wheel events into one navigation
//! command per quiet period.

use super::NavCommand;
use iced::mouse::ScrollDelta;
use std::time::{Duration, Instant};

/// How long the wheel must stay quiet before the pending command fires.
pub const WHEEL_QUIET_PERIOD: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WheelDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingWheel {
    direction: WheelDirection,
    armed_at: Instant,
}

/// Debounces wheel input with a single pending slot.
///
/// Every observed event overwrites the slot and restarts the quiet period,
/// so only the most recent event's direction survives a burst; overwriting
/// is the cancellation. [`WheelDebouncer::poll`] resolves the slot once
/// the quiet period has elapsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelDebouncer {
    pending: Option<PendingWheel>,
}

impl WheelDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a wheel event, superseding any still-pending one.
    ///
    /// Iced reports wheel-toward-the-user (the gesture that scrolls a page
    /// down) as a negative vertical delta, so negative means forward here.
    /// Events with no vertical component are ignored.
    pub fn observe(&mut self, delta: &ScrollDelta, now: Instant) {
        let y = match delta {
            ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => *y,
        };

        if y == 0.0 {
            return;
        }

        let direction = if y < 0.0 {
            WheelDirection::Forward
        } else {
            WheelDirection::Backward
        };

        self.pending = Some(PendingWheel {
            direction,
            armed_at: now,
        });
    }

    /// Resolves the pending slot if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<NavCommand> {
        let pending = self.pending?;
        if now.saturating_duration_since(pending.armed_at) < WHEEL_QUIET_PERIOD {
            return None;
        }

        self.pending = None;
        Some(match pending.direction {
            WheelDirection::Forward => NavCommand::Next,
            WheelDirection::Backward => NavCommand::Previous,
        })
    }

    /// Whether a command is waiting for its quiet period. Keeps the tick
    /// subscription alive.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(y: f32) -> ScrollDelta {
        ScrollDelta::Lines { x: 0.0, y }
    }

    #[test]
    fn forward_scroll_resolves_to_next_after_quiet_period() {
        let mut wheel = WheelDebouncer::new();
        let now = Instant::now();
        wheel.observe(&lines(-1.0), now);

        assert_eq!(wheel.poll(now + Duration::from_millis(10)), None);
        assert_eq!(
            wheel.poll(now + WHEEL_QUIET_PERIOD),
            Some(NavCommand::Next)
        );
    }

    #[test]
    fn backward_scroll_resolves_to_previous() {
        let mut wheel = WheelDebouncer::new();
        let now = Instant::now();
        wheel.observe(&lines(2.0), now);

        assert_eq!(
            wheel.poll(now + WHEEL_QUIET_PERIOD),
            Some(NavCommand::Previous)
        );
    }

    #[test]
    fn rapid_events_coalesce_to_direction_of_latest() {
        let mut wheel = WheelDebouncer::new();
        let now = Instant::now();

        // Two events 10ms apart with opposite signs: exactly one command,
        // in the direction of the later event.
        wheel.observe(&lines(-1.0), now);
        wheel.observe(&lines(1.0), now + Duration::from_millis(10));

        // The first event's deadline passes without firing; the window was
        // rescheduled by the second event.
        assert_eq!(wheel.poll(now + WHEEL_QUIET_PERIOD), None);

        let settled = now + Duration::from_millis(10) + WHEEL_QUIET_PERIOD;
        assert_eq!(wheel.poll(settled), Some(NavCommand::Previous));
        assert_eq!(wheel.poll(settled), None);
    }

    #[test]
    fn pixel_deltas_are_observed_too() {
        let mut wheel = WheelDebouncer::new();
        let now = Instant::now();
        wheel.observe(&ScrollDelta::Pixels { x: 0.0, y: -40.0 }, now);

        assert_eq!(
            wheel.poll(now + WHEEL_QUIET_PERIOD),
            Some(NavCommand::Next)
        );
    }

    #[test]
    fn horizontal_only_scroll_is_ignored() {
        let mut wheel = WheelDebouncer::new();
        let now = Instant::now();
        wheel.observe(&ScrollDelta::Lines { x: 3.0, y: 0.0 }, now);

        assert!(!wheel.has_pending());
        assert_eq!(wheel.poll(now + WHEEL_QUIET_PERIOD), None);
    }

    #[test]
    fn poll_without_events_yields_nothing() {
        let mut wheel = WheelDebouncer::new();
        assert_eq!(wheel.poll(Instant::now()), None);
        assert!(!wheel.has_pending());
    }
}
