// SPDX-License-Identifier: MPL-2.0
//! The two-slide vertical slider and its indicator dots.
//!
//! The slider renders every slide stacked in a strip one viewport height
//! each, shifted by the navigator's current offset and clipped to the
//! slider region. Indicator dots on the right rail mirror the active
//! index and double as a direct-index input source.

use crate::media::{DeferredFrame, Slide, SlideDeck};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::slide_strip;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, stack, Column, Row, Space, Text};
use iced::{Element, Length, Size};

/// Contextual data needed to render the slider section.
pub struct ViewContext<'a> {
    pub deck: &'a SlideDeck,
    /// Index of the active slide; exactly one dot is marked from it.
    pub current: usize,
    /// Vertical strip offset in pixels (eased while transitioning).
    pub offset: f32,
    pub viewport: Size,
}

/// Messages emitted by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A dot was pressed: request that slide directly.
    IndicatorPressed(usize),
}

/// Render the slider section. The parent sizes it to one viewport height.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut strip = Column::new();
    for slide in ctx.deck.slides() {
        strip = strip.push(
            container(slide_panel(slide))
                .width(Length::Fill)
                .height(Length::Fixed(ctx.viewport.height))
                .style(styles::slide),
        );
    }

    let strip: Element<'_, Message> = slide_strip(strip, ctx.offset).into();

    let rail = container(indicator_rail(ctx.deck.len(), ctx.current))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(spacing::MD);

    stack![strip, rail].into()
}

/// The content of one full-viewport slide: its label above a row of
/// frames.
fn slide_panel(slide: &Slide) -> Element<'_, Message> {
    let mut frames = Row::new().spacing(spacing::LG);
    for frame in &slide.frames {
        frames = frames.push(frame_card(frame));
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(Text::new(slide.label.as_str()).size(typography::HEADING))
        .push(frames);

    container(content).center(Length::Fill).into()
}

/// One embedded frame: the media once its source is assigned, otherwise a
/// placeholder card of the same footprint.
fn frame_card(frame: &DeferredFrame) -> Element<'_, Message> {
    let body: Element<'_, Message> = match frame.source() {
        Some(source) if !source.is_blank() => {
            image(Handle::from_path(source.as_str())).into()
        }
        _ => Space::new().width(Length::Fixed(240.0)).height(Length::Fixed(180.0)).into(),
    };

    let card = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(body)
        .push(Text::new(frame.title.as_str()).size(typography::CAPTION));

    container(card)
        .padding(spacing::SM)
        .style(styles::frame_card)
        .into()
}

/// The vertical rail of indicator dots.
fn indicator_rail(total: usize, current: usize) -> Element<'static, Message> {
    let mut dots = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fixed(sizing::INDICATOR_RAIL_WIDTH));

    for index in 0..total {
        let active = index == current;
        let diameter = if active {
            sizing::INDICATOR_DOT_ACTIVE
        } else {
            sizing::INDICATOR_DOT
        };

        dots = dots.push(
            button(Space::new().width(Length::Shrink).height(Length::Shrink))
                .width(Length::Fixed(diameter))
                .height(Length::Fixed(diameter))
                .style(styles::indicator_dot(active))
                .on_press(Message::IndicatorPressed(index)),
        );
    }

    dots.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaSource;

    fn deck() -> SlideDeck {
        SlideDeck::new(vec![
            Slide {
                label: "Artwork".to_string(),
                frames: vec![DeferredFrame::new("One", MediaSource::new("one.png"))],
            },
            Slide {
                label: "Animation".to_string(),
                frames: vec![DeferredFrame::new("Two", MediaSource::new("two.gif"))],
            },
        ])
    }

    #[test]
    fn slider_view_renders() {
        let deck = deck();
        let ctx = ViewContext {
            deck: &deck,
            current: 0,
            offset: 0.0,
            viewport: Size::new(1000.0, 800.0),
        };
        let _element = view(ctx);
    }

    #[test]
    fn slider_view_renders_mid_transition() {
        let deck = deck();
        let ctx = ViewContext {
            deck: &deck,
            current: 1,
            offset: 400.0,
            viewport: Size::new(1000.0, 800.0),
        };
        let _element = view(ctx);
    }

    #[test]
    fn slider_view_renders_empty_deck() {
        let deck = SlideDeck::default();
        let ctx = ViewContext {
            deck: &deck,
            current: 0,
            offset: 0.0,
            viewport: Size::new(1000.0, 800.0),
        };
        let _element = view(ctx);
    }
}
