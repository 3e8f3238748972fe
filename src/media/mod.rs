// SPDX-License-Identifier: MPL-2.0
//! Deferred media sources and the slide deck.
//!
//! Every embedded frame on the page carries a deferred source that is only
//! assigned to its active source when the frame is actually needed: slide
//! frames on slide activation, gallery frames when they approach the
//! viewport. The capability is modeled once here, independent of where a
//! frame is displayed.

pub mod gallery;

use serde::Deserialize;

/// A resource locator for an embedded frame (a path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MediaSource(String);

/// Placeholder value meaning a frame has nothing loaded yet.
const BLANK_SOURCE: &str = "about:blank";

impl MediaSource {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// An explicit "nothing loaded" placeholder.
    pub fn blank() -> Self {
        Self(BLANK_SOURCE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this source counts as unassigned for activation purposes.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty() || self.0 == BLANK_SOURCE
    }
}

/// An embedded frame whose content load is deferred until activation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredFrame {
    pub title: String,
    source: Option<MediaSource>,
    deferred: MediaSource,
}

impl DeferredFrame {
    pub fn new(title: impl Into<String>, deferred: MediaSource) -> Self {
        Self {
            title: title.into(),
            source: None,
            deferred,
        }
    }

    /// Assigns the deferred source if nothing real is assigned yet.
    ///
    /// Idempotent: returns `true` only when an assignment actually
    /// happened, so repeated activation performs no redundant work.
    pub fn activate(&mut self) -> bool {
        let unassigned = self
            .source
            .as_ref()
            .map(MediaSource::is_blank)
            .unwrap_or(true);

        if unassigned {
            self.source = Some(self.deferred.clone());
            true
        } else {
            false
        }
    }

    /// The active source, once assigned.
    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    pub fn is_activated(&self) -> bool {
        self.source
            .as_ref()
            .map(|s| !s.is_blank())
            .unwrap_or(false)
    }

    #[cfg(test)]
    fn with_source(mut self, source: MediaSource) -> Self {
        self.source = Some(source);
        self
    }
}

/// One full-viewport panel of the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub label: String,
    pub frames: Vec<DeferredFrame>,
}

/// The fixed set of slides cycled by the navigator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Activates every not-yet-assigned frame of the slide at `index`.
    ///
    /// Returns the number of frames newly assigned; a missing slide
    /// activates nothing.
    pub fn activate_slide(&mut self, index: usize) -> usize {
        let Some(slide) = self.slides.get_mut(index) else {
            return 0;
        };

        slide
            .frames
            .iter_mut()
            .map(|frame| frame.activate())
            .filter(|&activated| activated)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(title: &str) -> DeferredFrame {
        DeferredFrame::new(title, MediaSource::new(format!("assets/{title}.png")))
    }

    fn deck() -> SlideDeck {
        SlideDeck::new(vec![
            Slide {
                label: "Artwork".to_string(),
                frames: vec![frame("a"), frame("b")],
            },
            Slide {
                label: "Animation".to_string(),
                frames: vec![frame("c")],
            },
        ])
    }

    #[test]
    fn activation_assigns_deferred_source() {
        let mut frame = frame("a");
        assert!(!frame.is_activated());
        assert!(frame.activate());
        assert_eq!(frame.source().map(MediaSource::as_str), Some("assets/a.png"));
        assert!(frame.is_activated());
    }

    #[test]
    fn activation_is_idempotent() {
        let mut deck = deck();
        assert_eq!(deck.activate_slide(0), 2);
        // Second pass over the same slide performs no redundant work.
        assert_eq!(deck.activate_slide(0), 0);
    }

    #[test]
    fn blank_placeholder_counts_as_unassigned() {
        let mut frame = frame("a").with_source(MediaSource::blank());
        assert!(frame.activate());
        assert_eq!(frame.source().map(MediaSource::as_str), Some("assets/a.png"));
    }

    #[test]
    fn assigned_frame_is_not_overwritten() {
        let mut frame = frame("a").with_source(MediaSource::new("assets/other.png"));
        assert!(!frame.activate());
        assert_eq!(
            frame.source().map(MediaSource::as_str),
            Some("assets/other.png")
        );
    }

    #[test]
    fn activating_missing_slide_is_a_no_op() {
        let mut deck = deck();
        assert_eq!(deck.activate_slide(5), 0);
    }

    #[test]
    fn slides_activate_independently() {
        let mut deck = deck();
        assert_eq!(deck.activate_slide(1), 1);
        assert!(!deck.get(0).unwrap().frames[0].is_activated());
        assert!(deck.get(1).unwrap().frames[0].is_activated());
    }

    #[test]
    fn blank_source_detection() {
        assert!(MediaSource::blank().is_blank());
        assert!(MediaSource::new("").is_blank());
        assert!(!MediaSource::new("assets/a.png").is_blank());
    }
}
