// SPDX-License-Identifier: MPL-2.0
//! Page geometry and the slider visibility gate.
//!
//! The page is a fixed vertical composition (hero, slider, gallery), so
//! every rectangle the input adapters need is pure arithmetic over the
//! window size, the scroll offset, and an item index. The view code sizes
//! its widgets from the same constants, so the two cannot drift apart.

use iced::Size;

/// Height of the gallery section header (title + spacing above the cards).
pub const GALLERY_HEADER_HEIGHT: f32 = 96.0;
/// Fixed height of one gallery card.
pub const GALLERY_CARD_HEIGHT: f32 = 320.0;
/// Vertical gap between gallery cards.
pub const GALLERY_CARD_GAP: f32 = 24.0;

/// A vertical slice of the page expressed in viewport coordinates:
/// `top`/`bottom` are distances from the top edge of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub bottom: f32,
}

impl Region {
    /// The visibility gate: any overlap with the viewport counts, so a
    /// partially visible region still intercepts input.
    pub fn overlaps_viewport(&self, viewport_height: f32) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Resolves page sections to viewport-relative regions.
///
/// The hero fills the first viewport height, the slider the second, and
/// the gallery follows as a single column of fixed-height cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub viewport: Size,
    pub scroll_y: f32,
}

impl PageMetrics {
    pub fn new(viewport: Size, scroll_y: f32) -> Self {
        Self { viewport, scroll_y }
    }

    /// Absolute page offset where the slider section begins.
    pub fn slider_top(&self) -> f32 {
        self.viewport.height
    }

    /// Absolute page offset where the gallery section begins.
    pub fn gallery_top(&self) -> f32 {
        self.viewport.height * 2.0
    }

    /// The slider section in viewport coordinates.
    pub fn slider_region(&self) -> Region {
        let top = self.slider_top() - self.scroll_y;
        Region {
            top,
            bottom: top + self.viewport.height,
        }
    }

    /// Whether the slider currently intercepts keyboard/touch/wheel input.
    /// Recomputed on every event; there is no memoized state.
    pub fn slider_visible(&self) -> bool {
        self.slider_region().overlaps_viewport(self.viewport.height)
    }

    /// Total scrollable height of the page with `gallery_items` cards.
    pub fn page_height(&self, gallery_items: usize) -> f32 {
        self.gallery_top()
            + GALLERY_HEADER_HEIGHT
            + gallery_items as f32 * (GALLERY_CARD_HEIGHT + GALLERY_CARD_GAP)
    }

    /// The gallery card at `index` in viewport coordinates.
    pub fn gallery_item_region(&self, index: usize) -> Region {
        let top = self.gallery_top() + GALLERY_HEADER_HEIGHT
            + index as f32 * (GALLERY_CARD_HEIGHT + GALLERY_CARD_GAP)
            - self.scroll_y;
        Region {
            top,
            bottom: top + GALLERY_CARD_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partially_visible_region_overlaps() {
        let region = Region {
            top: -50.0,
            bottom: 10.0,
        };
        assert!(region.overlaps_viewport(800.0));
    }

    #[test]
    fn region_fully_below_viewport_does_not_overlap() {
        let region = Region {
            top: 900.0,
            bottom: 950.0,
        };
        assert!(!region.overlaps_viewport(800.0));
    }

    #[test]
    fn region_fully_above_viewport_does_not_overlap() {
        let region = Region {
            top: -300.0,
            bottom: -10.0,
        };
        assert!(!region.overlaps_viewport(800.0));
    }

    #[test]
    fn region_touching_viewport_bottom_edge_does_not_overlap() {
        let region = Region {
            top: 800.0,
            bottom: 1600.0,
        };
        assert!(!region.overlaps_viewport(800.0));
    }

    #[test]
    fn slider_hidden_at_page_top() {
        // At scroll 0 the hero fills the window and the slider sits exactly
        // below the fold.
        let metrics = PageMetrics::new(Size::new(1000.0, 800.0), 0.0);
        assert!(!metrics.slider_visible());
    }

    #[test]
    fn slider_visible_once_scrolled_into_view() {
        let metrics = PageMetrics::new(Size::new(1000.0, 800.0), 100.0);
        assert!(metrics.slider_visible());

        let fully = PageMetrics::new(Size::new(1000.0, 800.0), 800.0);
        assert_eq!(
            fully.slider_region(),
            Region {
                top: 0.0,
                bottom: 800.0
            }
        );
        assert!(fully.slider_visible());
    }

    #[test]
    fn slider_hidden_after_scrolling_past() {
        let metrics = PageMetrics::new(Size::new(1000.0, 800.0), 1600.0);
        assert!(!metrics.slider_visible());
    }

    #[test]
    fn gallery_item_regions_stack_with_gap() {
        let metrics = PageMetrics::new(Size::new(1000.0, 800.0), 0.0);
        let first = metrics.gallery_item_region(0);
        let second = metrics.gallery_item_region(1);

        assert_eq!(first.top, 1600.0 + GALLERY_HEADER_HEIGHT);
        assert_eq!(first.bottom - first.top, GALLERY_CARD_HEIGHT);
        assert_eq!(second.top - first.bottom, GALLERY_CARD_GAP);
    }
}
