// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for the page sections.
//!
//! Colors are derived from the active Iced `Theme` palette so the page
//! stays readable in both light and dark modes without hard-coding
//! colors.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Full-viewport slide panel surface.
pub fn slide(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Card around one embedded frame.
pub fn frame_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Gallery card that has not been revealed yet: occupies its slot
/// invisibly so the page geometry matches the layout oracle.
pub fn frame_card_hidden(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Some(Color::TRANSPARENT),
        ..Default::default()
    }
}

/// Gallery card carrying the popout marker: lifted with an accent border.
pub fn frame_card_popped(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            radius: 6.0.into(),
            width: 2.0,
            color: palette.primary.strong.color,
        },
        ..frame_card(theme)
    }
}

/// Indicator dot button; the active dot is filled with the primary color.
pub fn indicator_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();

        let background = if active {
            palette.primary.strong.color
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    palette.background.strong.color
                }
                _ => palette.background.weak.color,
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: 999.0.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            text_color: Color::TRANSPARENT,
            ..Default::default()
        }
    }
}
