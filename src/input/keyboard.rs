// SPDX-License-Identifier: MPL-2.0
//! Keyboard adapter: maps directional and digit keys to navigation
//! commands.

use super::NavCommand;
use iced::keyboard::{key::Named, Key};

/// Maps a pressed key to a navigation command, or `None` when the key is
/// not a slider binding.
///
/// Down/PageDown advance, Up/PageUp go back, and a digit selects the
/// matching 1-based slide. Digits outside `1..=total_slides` are filtered
/// here, before they can reach the navigator.
pub fn command_for_key(key: &Key, total_slides: usize) -> Option<NavCommand> {
    match key {
        Key::Named(Named::ArrowDown | Named::PageDown) => Some(NavCommand::Next),
        Key::Named(Named::ArrowUp | Named::PageUp) => Some(NavCommand::Previous),
        Key::Character(c) => {
            let mut chars = c.as_str().chars();
            let digit = chars.next()?.to_digit(10)?;
            if chars.next().is_some() {
                return None;
            }

            let slide_number = digit as usize;
            if (1..=total_slides).contains(&slide_number) {
                Some(NavCommand::GoTo(slide_number - 1))
            } else {
                None
            }
        }
        _ => None,
    }
}
