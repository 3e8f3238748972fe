// SPDX-License-Identifier: MPL-2.0
//! Gallery state: lazy activation, scroll reveal, and touch popout.
//!
//! The gallery is a column of deferred frames below the slider. Three
//! independent behaviors live here:
//!
//! - **Lazy activation**: frames are activated as they approach the
//!   viewport (200-unit lookahead, 10% visibility), plus an eager pass
//!   over the first three frames at startup.
//! - **Scroll reveal**: frames near the viewport bottom become "shown"
//!   after a stagger delay proportional to their index.
//! - **Popout**: pressing a frame pops it out exclusively; the marker
//!   clears itself after a fixed duration.
//!
//! None of this interacts with the slide navigator's state.

use super::DeferredFrame;
use crate::viewport::{PageMetrics, Region};
use std::time::{Duration, Instant};

/// A frame reveals once its top edge is within this margin of the
/// viewport bottom.
pub const REVEAL_MARGIN: f32 = 100.0;
/// Reveal delay per index position, staggering the cascade.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(60);
/// How long a popped-out frame stays popped.
pub const POPOUT_DURATION: Duration = Duration::from_millis(1200);
/// Lookahead below the viewport for lazy activation.
pub const LAZY_LOOKAHEAD: f32 = 200.0;
/// Fraction of a frame that must be inside the lookahead window before it
/// activates.
pub const LAZY_VISIBLE_FRACTION: f32 = 0.1;
/// Number of frames activated immediately at startup, visible or not.
pub const EAGER_LOAD_COUNT: usize = 3;

/// One gallery entry: a deferred frame plus its reveal/popout markers.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub frame: DeferredFrame,
    reveal_due: Option<Instant>,
    shown: bool,
    popped_at: Option<Instant>,
}

impl GalleryItem {
    fn new(frame: DeferredFrame) -> Self {
        Self {
            frame,
            reveal_due: None,
            shown: false,
            popped_at: None,
        }
    }

    /// Whether the reveal animation has completed for this item.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether this item currently carries the popout marker.
    pub fn is_popped(&self) -> bool {
        self.popped_at.is_some()
    }
}

/// Gallery of deferred frames with reveal and popout state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(frames: Vec<DeferredFrame>) -> Self {
        Self {
            items: frames.into_iter().map(GalleryItem::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Activates the first few frames immediately, regardless of
    /// visibility. Returns the number of frames newly assigned.
    pub fn eager_load(&mut self) -> usize {
        self.items
            .iter_mut()
            .take(EAGER_LOAD_COUNT)
            .map(|item| item.frame.activate())
            .filter(|&activated| activated)
            .count()
    }

    /// Activates every frame intersecting the viewport extended by the
    /// lazy lookahead. Idempotent across passes.
    pub fn lazy_pass(&mut self, metrics: &PageMetrics) -> usize {
        let viewport_height = metrics.viewport.height;
        let mut activated = 0;

        for (index, item) in self.items.iter_mut().enumerate() {
            let region = metrics.gallery_item_region(index);
            if lazy_window_fraction(region, viewport_height) >= LAZY_VISIBLE_FRACTION
                && item.frame.activate()
            {
                activated += 1;
            }
        }

        activated
    }

    /// Schedules reveals for items whose top edge has entered the reveal
    /// margin. Each item fires once, `REVEAL_STAGGER × index` after the
    /// pass that scheduled it.
    pub fn reveal_pass(&mut self, metrics: &PageMetrics, now: Instant) {
        let viewport_height = metrics.viewport.height;

        for (index, item) in self.items.iter_mut().enumerate() {
            if item.shown || item.reveal_due.is_some() {
                continue;
            }

            let region = metrics.gallery_item_region(index);
            if region.top < viewport_height - REVEAL_MARGIN {
                item.reveal_due = Some(now + REVEAL_STAGGER * index as u32);
            }
        }
    }

    /// Pops out the item at `index`, clearing the marker from every other
    /// item first. An out-of-range index pops nothing.
    pub fn pop(&mut self, index: usize, now: Instant) {
        if index >= self.items.len() {
            return;
        }

        for item in &mut self.items {
            item.popped_at = None;
        }
        self.items[index].popped_at = Some(now);
    }

    /// Index of the popped-out item, if any. At most one exists.
    pub fn popped(&self) -> Option<usize> {
        self.items.iter().position(GalleryItem::is_popped)
    }

    /// Fires due reveals and expires the popout marker.
    pub fn tick(&mut self, now: Instant) {
        for item in &mut self.items {
            if let Some(due) = item.reveal_due {
                if now >= due {
                    item.shown = true;
                    item.reveal_due = None;
                }
            }

            if let Some(popped_at) = item.popped_at {
                if now.saturating_duration_since(popped_at) >= POPOUT_DURATION {
                    item.popped_at = None;
                }
            }
        }
    }

    /// Whether any reveal or popout deadline is still outstanding. Keeps
    /// the tick subscription alive.
    pub fn animating(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.reveal_due.is_some() || item.popped_at.is_some())
    }
}

/// Fraction of `region` inside the viewport extended by the lazy
/// lookahead below its bottom edge.
fn lazy_window_fraction(region: Region, viewport_height: f32) -> f32 {
    let height = region.bottom - region.top;
    if height <= 0.0 {
        return 0.0;
    }

    let window_bottom = viewport_height + LAZY_LOOKAHEAD;
    let overlap = region.bottom.min(window_bottom) - region.top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}
