// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state shared by every input adapter.
//!
//! This module provides the `SlideNavigator` that owns the current slide
//! index and the transition gate. Keyboard, touch, wheel, indicator and
//! hero-button input all funnel into [`SlideNavigator::go_to`], which is
//! the single place deciding whether a request is honored.

use std::time::{Duration, Instant};

/// How long an accepted transition keeps the gate closed. This same value
/// drives the visual slide animation, so the gate can never disagree with
/// what is on screen.
pub const TRANSITION_SETTLE: Duration = Duration::from_millis(800);

/// Owns the slide index and serializes all transition requests through one
/// gate: at most one transition is in flight at any time, and requests
/// arriving while one is in flight are dropped rather than queued.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideNavigator {
    current: usize,
    total: usize,
    /// Start of the in-flight transition, if any. The transition settles
    /// once `settle` has elapsed; [`SlideNavigator::tick`] clears the slot.
    transition_started_at: Option<Instant>,
    /// Slide we are animating away from.
    transition_from: usize,
    settle: Duration,
}

impl SlideNavigator {
    /// Creates a navigator over `total` slides, starting at slide 0.
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            transition_started_at: None,
            transition_from: 0,
            settle: TRANSITION_SETTLE,
        }
    }

    /// Overrides the settle duration (used by config and tests).
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Index of the active slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Fixed cardinality of the slide set.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the indicator at `index` should be marked active. Exactly
    /// one index satisfies this at any time.
    pub fn is_active_indicator(&self, index: usize) -> bool {
        index == self.current
    }

    /// Whether a transition is still within its settle window at `now`.
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition_started_at
            .map(|started| now.saturating_duration_since(started) < self.settle)
            .unwrap_or(false)
    }

    /// Whether the transition slot is occupied (settled or not). Used to
    /// keep the tick subscription alive until [`Self::tick`] clears it.
    pub fn in_flight(&self) -> bool {
        self.transition_started_at.is_some()
    }

    /// Clears the transition slot once the settle window has elapsed,
    /// re-opening the gate.
    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.transition_started_at {
            if now.saturating_duration_since(started) >= self.settle {
                self.transition_started_at = None;
            }
        }
    }

    /// Requests a transition to `target`.
    ///
    /// The request is silently dropped when `target` is out of range or a
    /// transition is already in flight; rapid repeated input is absorbed,
    /// not queued. Returns `true` when the transition was accepted, in
    /// which case the caller performs the side effects (repositioning,
    /// indicator sync, content activation) in that order.
    pub fn go_to(&mut self, target: usize, now: Instant) -> bool {
        if target >= self.total || self.is_transitioning(now) {
            return false;
        }

        self.transition_from = self.current;
        self.transition_started_at = Some(now);
        self.current = target;
        true
    }

    /// Advances to the next slide, wrapping past the last slide to the
    /// first.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.total == 0 {
            return false;
        }
        let target = (self.current + 1) % self.total;
        self.go_to(target, now)
    }

    /// Goes back one slide, wrapping from the first slide to the last.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.total == 0 {
            return false;
        }
        let target = if self.current == 0 {
            self.total - 1
        } else {
            self.current - 1
        };
        self.go_to(target, now)
    }

    /// Current slider position in slide units, eased between the previous
    /// and the new index while a transition is in flight. Multiplying by
    /// the viewport height yields the vertical offset of the slide strip.
    pub fn offset_fraction(&self, now: Instant) -> f32 {
        match self.transition_started_at {
            Some(started) if self.is_transitioning(now) => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                let progress = (elapsed / self.settle.as_secs_f32()).clamp(0.0, 1.0);
                let eased = progress * progress * (3.0 - 2.0 * progress);
                let from = self.transition_from as f32;
                from + (self.current as f32 - from) * eased
            }
            _ => self.current as f32,
        }
    }
}
