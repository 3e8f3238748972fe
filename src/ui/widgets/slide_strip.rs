// SPDX-License-Identifier: MPL-2.0
//! A clipped viewport over the vertical strip of slides.
//!
//! The strip lays its content out at full height and draws it shifted up
//! by the current slider offset, clipped to the widget bounds. This is the
//! display half of a slide transition; the offset itself comes from the
//! navigator. The strip is display-only and never handles events, so it
//! cannot steal input from the page.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::{Element, Length, Rectangle, Size, Vector};

/// Wraps the slide column and draws it at a vertical offset.
pub struct SlideStrip<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    /// Upward shift of the strip, in pixels.
    offset: f32,
}

impl<'a, Message, Theme, Renderer> SlideStrip<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset: f32) -> Self {
        Self {
            content: content.into(),
            offset,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SlideStrip<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let bounds = limits.max();

        // The strip itself is unbounded vertically; the widget window
        // clips it to the slider region.
        let child_limits =
            layout::Limits::new(Size::ZERO, Size::new(bounds.width, f32::INFINITY));
        let child = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &child_limits);

        layout::Node::with_children(bounds, vec![child])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let content_layout = match layout.children().next() {
            Some(content_layout) => content_layout,
            None => return,
        };

        renderer.with_layer(bounds, |renderer| {
            renderer.with_translation(Vector::new(0.0, -self.offset), |renderer| {
                self.content.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    style,
                    content_layout,
                    cursor,
                    &bounds,
                );
            });
        });
    }
}

impl<'a, Message, Theme, Renderer> From<SlideStrip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(strip: SlideStrip<'a, Message, Theme, Renderer>) -> Self {
        Self::new(strip)
    }
}

/// Helper function to create a slide strip at the given offset.
pub fn slide_strip<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset: f32,
) -> SlideStrip<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SlideStrip::new(content, offset)
}
