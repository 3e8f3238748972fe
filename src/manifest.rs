// SPDX-License-Identifier: MPL-2.0
//! The `portfolio.toml` manifest describing the page content.
//!
//! The manifest lists the slides (with their deferred frames) and the
//! gallery entries. A default manifest is embedded in the binary so the
//! app always has something to show; a path passed on the command line
//! replaces it.

use crate::error::{Error, Result};
use crate::media::{DeferredFrame, MediaSource, Slide, SlideDeck};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "portfolio.toml"]
struct Assets;

const MANIFEST_FILE: &str = "portfolio.toml";

#[derive(Debug, Deserialize)]
struct RawFrame {
    title: String,
    source: MediaSource,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    label: String,
    #[serde(default)]
    frames: Vec<RawFrame>,
}

#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    slides: Vec<RawSlide>,
    #[serde(default)]
    gallery: Vec<RawFrame>,
}

/// Parsed portfolio content: the slide deck plus the gallery frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub deck: SlideDeck,
    pub gallery_frames: Vec<DeferredFrame>,
}

impl From<RawManifest> for Manifest {
    fn from(raw: RawManifest) -> Self {
        let slides = raw
            .slides
            .into_iter()
            .map(|slide| Slide {
                label: slide.label,
                frames: slide.frames.into_iter().map(into_frame).collect(),
            })
            .collect();

        Self {
            deck: SlideDeck::new(slides),
            gallery_frames: raw.gallery.into_iter().map(into_frame).collect(),
        }
    }
}

fn into_frame(raw: RawFrame) -> DeferredFrame {
    DeferredFrame::new(raw.title, raw.source)
}

/// Parses a manifest from TOML text.
pub fn parse(content: &str) -> Result<Manifest> {
    let raw: RawManifest =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;
    Ok(raw.into())
}

/// Loads the manifest embedded in the binary.
pub fn embedded() -> Result<Manifest> {
    let file = Assets::get(MANIFEST_FILE)
        .ok_or_else(|| Error::Manifest(format!("embedded {MANIFEST_FILE} is missing")))?;
    let content = std::str::from_utf8(file.data.as_ref())
        .map_err(|e| Error::Manifest(e.to_string()))?;
    parse(content)
}

/// Loads a manifest from a file on disk.
pub fn load_from_path(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}
