// SPDX-License-Identifier: MPL-2.0
//! User interface components for the portfolio page.
//!
//! The page is one vertical composition rendered by [`crate::app`]:
//!
//! - [`hero`] - Landing section with navigation buttons
//! - [`slider`] - Two-slide vertical slider with indicator dots
//! - [`gallery`] - Scroll-revealed gallery of deferred frames
//!
//! Shared infrastructure:
//!
//! - [`design_tokens`] - Spacing, sizing, and typography constants
//! - [`styles`] - Centralized container and button styling
//! - [`widgets`] - Custom Iced widgets (slide strip, wheel gate)

pub mod design_tokens;
pub mod gallery;
pub mod hero;
pub mod slider;
pub mod styles;
pub mod widgets;
