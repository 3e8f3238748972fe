// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct wires the navigator, the input adapters, and the
//! deferred media together, and translates raw events and component
//! messages into navigation and loading side effects. Policy decisions
//! (window sizing, manifest fallback, theme selection) live here, close
//! to the main update loop, so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::input::{SwipeTracker, WheelDebouncer};
use crate::manifest::{self, Manifest};
use crate::media::gallery::Gallery;
use crate::media::SlideDeck;
use crate::navigator::SlideNavigator;
use crate::viewport::PageMetrics;
use iced::{window, Size, Task};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Scrollable id of the whole page; scroll tasks and the scroll handler
/// both address it.
pub const PAGE_SCROLL_ID: &str = "portfolio-page";

/// Root Iced application state.
pub struct App {
    config: Config,
    navigator: SlideNavigator,
    deck: SlideDeck,
    gallery: Gallery,
    swipe: SwipeTracker,
    wheel: WheelDebouncer,
    /// Last known window size; the layout oracle is derived from it.
    window_size: Size,
    /// Current vertical offset of the page scrollable.
    scroll_y: f32,
    /// Timestamp of the last tick, used to ease the slide offset in view
    /// code without asking for the time during rendering.
    last_tick: Instant,
    /// One-line note shown on the hero when loading fell back to defaults.
    status: Option<String>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait bound
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launch flags, falling back
    /// to the embedded manifest and default settings when loading fails.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut status = None;

        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            status = Some(format!("settings not loaded ({err}); using defaults"));
            Config::default()
        });

        let manifest = match &flags.manifest_path {
            Some(path) => manifest::load_from_path(path).unwrap_or_else(|err| {
                status = Some(format!("{err}; showing the built-in portfolio"));
                manifest::embedded().unwrap_or_default()
            }),
            None => manifest::embedded().unwrap_or_else(|err| {
                status = Some(format!("{err}; the portfolio is empty"));
                Manifest::default()
            }),
        };

        (Self::with_content(config, manifest, status), Task::none())
    }

    /// Assembles the app around already-loaded content. Split from
    /// [`App::new`] so tests can inject a manifest without touching disk.
    fn with_content(config: Config, manifest: Manifest, status: Option<String>) -> Self {
        let mut navigator =
            SlideNavigator::new(manifest.deck.len()).with_settle(config.transition_settle());
        // A fresh navigator has no transition in flight; tick is a no-op
        // but keeps the constructor honest about time flowing from here.
        let now = Instant::now();
        navigator.tick(now);

        let mut deck = manifest.deck;
        deck.activate_slide(navigator.current());

        let mut gallery = Gallery::new(manifest.gallery_frames);
        gallery.eager_load();

        Self {
            config,
            navigator,
            deck,
            gallery,
            swipe: SwipeTracker::new(),
            wheel: WheelDebouncer::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            scroll_y: 0.0,
            last_tick: now,
            status,
        }
    }

    fn title(&self) -> String {
        "Folio Deck".to_string()
    }

    fn theme(&self) -> iced::Theme {
        if self.config.dark_theme.unwrap_or(true) {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// The layout oracle for the current window size and scroll offset.
    fn metrics(&self) -> PageMetrics {
        PageMetrics::new(self.window_size, self.scroll_y)
    }
}
