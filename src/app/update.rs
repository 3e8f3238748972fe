// SPDX-License-Identifier: MPL-2.0
//! The application update loop.
//!
//! Raw events arrive from the subscription layer and are gated by the
//! slider visibility check before they reach the navigator. Everything
//! time-based (transition settling, wheel debouncing, staggered reveals)
//! is advanced from [`Message::Tick`] rather than from ad-hoc timers.

use super::{App, Message, PAGE_SCROLL_ID};
use crate::input::{keyboard::command_for_key, NavCommand};
use crate::ui::{gallery, hero, slider};
use iced::keyboard::Key;
use iced::mouse::ScrollDelta;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent(event) => return self.handle_raw_event(event),
            Message::PageScrolled(offset) => {
                self.scroll_y = offset.y;
                let metrics = self.metrics();
                self.gallery.lazy_pass(&metrics);
                self.gallery.reveal_pass(&metrics, Instant::now());
            }
            Message::Tick(now) => {
                self.last_tick = now;
                self.navigator.tick(now);
                self.gallery.tick(now);
                if let Some(command) = self.wheel.poll(now) {
                    self.dispatch(command, now);
                }
            }
            Message::Hero(hero::Message::ShowArtwork) => {
                self.dispatch(NavCommand::GoTo(0), Instant::now());
                return self.scroll_to(self.metrics().slider_top());
            }
            Message::Hero(hero::Message::ShowAnimation) => {
                self.dispatch(NavCommand::GoTo(1), Instant::now());
                return self.scroll_to(self.metrics().slider_top());
            }
            Message::Hero(hero::Message::BrowseGallery) => {
                return self.scroll_to(self.metrics().gallery_top());
            }
            Message::Slider(slider::Message::IndicatorPressed(index)) => {
                self.dispatch(NavCommand::GoTo(index), Instant::now());
            }
            Message::Gallery(gallery::Message::Pressed(index)) => {
                self.gallery.pop(index, Instant::now());
            }
        }

        Task::none()
    }

    fn handle_raw_event(&mut self, event: iced::Event) -> Task<Message> {
        let now = Instant::now();

        match event {
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                self.window_size = size;
                // Resizing moves every region; re-run the scroll-driven
                // passes against the new geometry.
                let metrics = self.metrics();
                self.gallery.lazy_pass(&metrics);
                self.gallery.reveal_pass(&metrics, now);
            }
            iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key, now);
            }
            iced::Event::Mouse(iced::mouse::Event::WheelScrolled { delta }) => {
                self.handle_wheel(&delta, now);
            }
            iced::Event::Touch(iced::touch::Event::FingerPressed { position, .. }) => {
                self.handle_touch_start(position.y);
            }
            iced::Event::Touch(
                iced::touch::Event::FingerLifted { position, .. }
                | iced::touch::Event::FingerLost { position, .. },
            ) => {
                self.handle_touch_end(position.y, now);
            }
            _ => {}
        }

        Task::none()
    }

    /// Keyboard navigation. The gate is evaluated per event, so a key
    /// pressed while the slider is off-screen never reaches the navigator.
    fn handle_key(&mut self, key: &Key, now: Instant) {
        if !self.metrics().slider_visible() {
            return;
        }

        if let Some(command) = command_for_key(key, self.navigator.total()) {
            self.dispatch(command, now);
        }
    }

    /// Wheel navigation. Events only arm the debouncer; the command fires
    /// from the tick once the wheel has been quiet long enough.
    fn handle_wheel(&mut self, delta: &ScrollDelta, now: Instant) {
        if !self.metrics().slider_visible() {
            return;
        }

        self.wheel.observe(delta, now);
    }

    fn handle_touch_start(&mut self, y: f32) {
        if !self.metrics().slider_visible() {
            return;
        }

        self.swipe.begin(y);
    }

    fn handle_touch_end(&mut self, y: f32, now: Instant) {
        let Some(command) = self.swipe.finish(y) else {
            return;
        };

        if self.metrics().slider_visible() {
            self.dispatch(command, now);
        }
    }

    /// Routes a navigation command to the navigator and, when it is
    /// accepted, activates the deferred frames of the slide it lands on.
    pub(super) fn dispatch(&mut self, command: NavCommand, now: Instant) {
        let accepted = match command {
            NavCommand::Next => self.navigator.next(now),
            NavCommand::Previous => self.navigator.previous(now),
            NavCommand::GoTo(index) => self.navigator.go_to(index, now),
        };

        if accepted {
            self.deck.activate_slide(self.navigator.current());
        }
    }

    /// Produces a task that scrolls the page to an absolute offset.
    fn scroll_to(&self, target: f32) -> Task<Message> {
        let metrics = self.metrics();
        let max_scroll =
            (metrics.page_height(self.gallery.len()) - self.window_size.height).max(1.0);

        operation::snap_to(
            Id::new(PAGE_SCROLL_ID),
            RelativeOffset {
                x: 0.0,
                y: (target / max_scroll).clamp(0.0, 1.0),
            },
        )
    }
}
