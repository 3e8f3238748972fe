// SPDX-License-Identifier: MPL-2.0
//! `folio_deck` is a scrolling portfolio page built with the Iced GUI
//! framework.
//!
//! It presents a hero section, a two-slide vertical slider with
//! keyboard/touch/wheel navigation, and a gallery whose media loads
//! lazily as it scrolls into view.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod manifest;
pub mod media;
pub mod navigator;
pub mod ui;
pub mod viewport;
