// SPDX-License-Identifier: MPL-2.0
//! Landing section with the page navigation buttons.

use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the hero section.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
    /// One-line load status shown when something fell back to defaults.
    pub status: Option<&'a str>,
}

/// Messages emitted by the hero buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Jump to the slider showing the artwork slide.
    ShowArtwork,
    /// Jump to the slider showing the animation slide.
    ShowAnimation,
    /// Scroll down to the gallery section.
    BrowseGallery,
}

/// Render the hero section. The parent sizes it to one viewport height.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(button(Text::new("Artwork")).on_press(Message::ShowArtwork))
        .push(button(Text::new("Animation")).on_press(Message::ShowAnimation))
        .push(button(Text::new("Gallery")).on_press(Message::BrowseGallery));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.title).size(typography::TITLE))
        .push(Text::new(ctx.tagline).size(typography::BODY))
        .push(buttons);

    if let Some(status) = ctx.status {
        content = content.push(Text::new(status).size(typography::CAPTION));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}
