// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events funnel through one `listen_with` filter into
//! [`Message::RawEvent`]; the update loop owns all routing policy. The
//! animation tick only runs while something is actually in motion so an
//! idle page schedules no work.

use super::{App, Message};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Cadence of the animation tick while a transition, a pending wheel
/// command, or a gallery animation is live.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, status, _window_id| match &event {
            iced::Event::Window(iced::window::Event::Resized(_)) => {
                Some(Message::RawEvent(event))
            }
            // Keyboard presses drive page navigation, but focused text
            // widgets keep priority: only uncaptured presses are routed.
            iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. }) => match status {
                event::Status::Ignored => Some(Message::RawEvent(event)),
                event::Status::Captured => None,
            },
            iced::Event::Touch(_) => Some(Message::RawEvent(event)),
            iced::Event::Mouse(iced::mouse::Event::WheelScrolled { .. }) => {
                Some(Message::RawEvent(event))
            }
            _ => None,
        });

        let ticks = if self.is_animating() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, ticks])
    }

    /// Whether anything time-driven needs the tick to keep running.
    fn is_animating(&self) -> bool {
        self.navigator.in_flight() || self.wheel.has_pending() || self.gallery.animating()
    }
}
