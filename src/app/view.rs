// SPDX-License-Identifier: MPL-2.0
//! Page composition: hero, slider and gallery stacked in one scrollable
//! column. Section heights mirror the layout oracle exactly, so the
//! regions the input adapters reason about are the regions on screen.

use super::{App, Message, PAGE_SCROLL_ID};
use crate::ui::widgets::wheel_gate;
use crate::ui::{gallery, hero, slider};
use iced::widget::scrollable::Viewport;
use iced::widget::{container, Column, Id, Scrollable};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let hero = hero::view(hero::ViewContext {
            title: "Folio Deck",
            tagline: "Artwork, animation and a gallery of frames",
            status: self.status.as_deref(),
        })
        .map(Message::Hero);

        let slider = slider::view(slider::ViewContext {
            deck: &self.deck,
            current: self.navigator.current(),
            offset: self.navigator.offset_fraction(self.last_tick) * self.window_size.height,
            viewport: self.window_size,
        })
        .map(Message::Slider);

        let gallery = gallery::view(gallery::ViewContext {
            items: self.gallery.items(),
        })
        .map(Message::Gallery);

        let page = Column::new()
            .push(section(hero, self.window_size.height))
            .push(section(slider, self.window_size.height))
            .push(gallery);

        let page = Scrollable::new(page)
            .id(Id::new(PAGE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset()));

        // While the slider is on screen the wheel navigates slides via the
        // subscription; keep it from also scrolling the page.
        wheel_gate(page, self.metrics().slider_visible()).into()
    }
}

/// Wraps a full-viewport section at a fixed height.
fn section(content: Element<'_, Message>, height: f32) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}
