// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports touch events over its content.
//!
//! A finger is tracked from the moment it is pressed inside the widget's
//! bounds; its moves and lift are then reported wherever they happen. While
//! `capture_moves` is set, tracked moves are consumed so that scrollables
//! inside the content do not scroll along with a horizontal swipe.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::touch::{self, Finger};
use iced::{Element, Event, Length, Rectangle, Size};

/// Fingers pressed inside the widget and not yet lifted.
#[derive(Debug, Default)]
struct Tracked {
    fingers: Vec<Finger>,
}

/// A widget that wraps content and publishes the touches it receives.
pub struct SwipeArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_touch: Box<dyn Fn(touch::Event) -> Message + 'a>,
    capture_moves: bool,
}

impl<'a, Message, Theme, Renderer> SwipeArea<'a, Message, Theme, Renderer> {
    /// Creates a new `SwipeArea` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_touch: impl Fn(touch::Event) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_touch: Box::new(on_touch),
            capture_moves: false,
        }
    }

    /// Consumes tracked finger moves instead of forwarding them to the content.
    #[must_use]
    pub fn capture_moves(mut self, capture: bool) -> Self {
        self.capture_moves = capture;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SwipeArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Tracked>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Tracked::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
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
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Event::Touch(touch_event) = event {
            let tracked = tree.state.downcast_mut::<Tracked>();
            if track(tracked, touch_event, layout.bounds()) {
                shell.publish((self.on_touch)(*touch_event));
                if self.capture_moves && matches!(touch_event, touch::Event::FingerMoved { .. }) {
                    shell.capture_event();
                    return;
                }
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SwipeArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: SwipeArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a swipe area.
pub fn swipe_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_touch: impl Fn(touch::Event) -> Message + 'a,
) -> SwipeArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SwipeArea::new(content, on_touch)
}

/// Updates the tracked fingers and returns whether the event belongs to this area.
fn track(tracked: &mut Tracked, event: &touch::Event, bounds: Rectangle) -> bool {
    match *event {
        touch::Event::FingerPressed { id, position } => {
            if bounds.contains(position) {
                if !tracked.fingers.contains(&id) {
                    tracked.fingers.push(id);
                }
                true
            } else {
                false
            }
        }
        touch::Event::FingerMoved { id, .. } => tracked.fingers.contains(&id),
        touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
            let known = tracked.fingers.contains(&id);
            tracked.fingers.retain(|finger| *finger != id);
            known
        }
    }
}
