// SPDX-License-Identifier: MPL-2.0
//! Top-level message type and launch flags.

use crate::ui::{gallery, hero, slider};
use iced::widget::scrollable::AbsoluteOffset;
use std::path::PathBuf;
use std::time::Instant;

/// Messages handled by the application update loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Native event routed in from the subscription layer.
    RawEvent(iced::Event),
    /// The page scrollable reported a new offset.
    PageScrolled(AbsoluteOffset),
    /// Periodic tick driving transitions, reveals and the wheel debouncer.
    Tick(Instant),
    Hero(hero::Message),
    Slider(slider::Message),
    Gallery(gallery::Message),
}

/// Launch options parsed by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Portfolio manifest to show instead of the embedded one.
    pub manifest_path: Option<PathBuf>,
    /// Settings file to use instead of the per-user default.
    pub config_path: Option<PathBuf>,
}
