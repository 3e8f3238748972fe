// SPDX-License-Identifier: MPL-2.0
//! The gallery section: a column of scroll-revealed frames.
//!
//! Card heights and gaps come from [`crate::viewport`] so what is drawn
//! matches what the reveal and lazy passes compute.

use crate::media::gallery::GalleryItem;
use crate::media::DeferredFrame;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::viewport::{GALLERY_CARD_GAP, GALLERY_CARD_HEIGHT, GALLERY_HEADER_HEIGHT};
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, Column, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub items: &'a [GalleryItem],
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A card was pressed: pop it out.
    Pressed(usize),
}

/// Render the gallery section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = container(Text::new("Gallery").size(typography::HEADING))
        .width(Length::Fill)
        .height(Length::Fixed(GALLERY_HEADER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Bottom);

    let mut column = Column::new().push(header);

    for (index, item) in ctx.items.iter().enumerate() {
        column = column
            .push(card(index, item))
            .push(Space::new().width(Length::Shrink).height(Length::Fixed(GALLERY_CARD_GAP)));
    }

    column.width(Length::Fill).into()
}

/// One gallery card. Cards occupy their slot before they are revealed so
/// the page geometry never shifts; revealing only changes the style.
fn card(index: usize, item: &GalleryItem) -> Element<'_, Message> {
    let style = if !item.is_shown() {
        styles::frame_card_hidden
    } else if item.is_popped() {
        styles::frame_card_popped
    } else {
        styles::frame_card
    };

    let body: Element<'_, Message> = if item.is_shown() {
        frame_body(&item.frame)
    } else {
        Space::new().width(Length::Fill).height(Length::Fill).into()
    };

    let card = container(body)
        .width(Length::Fixed(640.0))
        .height(Length::Fixed(GALLERY_CARD_HEIGHT))
        .padding(spacing::SM)
        .style(style);

    let slot = container(card)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    mouse_area(slot).on_press(Message::Pressed(index)).into()
}

fn frame_body(frame: &DeferredFrame) -> Element<'_, Message> {
    let media: Element<'_, Message> = match frame.source() {
        Some(source) if !source.is_blank() => {
            image(Handle::from_path(source.as_str()))
                .width(Length::Fill)
                .into()
        }
        // Not yet activated by the lazy loader.
        _ => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(media)
        .push(Text::new(frame.title.as_str()).size(typography::CAPTION))
        .into()
}
