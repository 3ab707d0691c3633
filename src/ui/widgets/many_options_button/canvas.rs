// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the control and translating iced input.

use super::touch::{PointerEvent, PointerId, PointerKind};
use super::ManyOptionsButton;
use iced::advanced::image::Image;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Theme, Vector};

/// Borrowed view of a [`ManyOptionsButton`] that iced can draw and feed.
pub(super) struct ButtonCanvas<'a, F> {
    button: &'a ManyOptionsButton,
    on_pointer: F,
}

impl<'a, F> ButtonCanvas<'a, F> {
    pub(super) fn new(button: &'a ManyOptionsButton, on_pointer: F) -> Self {
        Self { button, on_pointer }
    }
}

impl<Message, F> canvas::Program<Message> for ButtonCanvas<'_, F>
where
    F: Fn(PointerEvent) -> Message,
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let pointer = translate(event, bounds, cursor, self.button.is_tracking())?;
        Some(Action::publish((self.on_pointer)(pointer)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for drawing in self.button.visible_slots() {
            // Placeholders take space but draw nothing.
            if let Some(handle) = drawing.image.handle() {
                frame.draw_image(
                    drawing.bounds,
                    Image::new(handle.clone()).rotation(drawing.rotation),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(point) if self.button.hit_test(point).is_some() => mouse::Interaction::Pointer,
            _ => mouse::Interaction::default(),
        }
    }
}

/// Converts an iced event to a pointer event in local coordinates.
///
/// Presses are only reported inside `bounds`. Moves and releases are only
/// reported while a gesture is being tracked, and may lie outside `bounds`.
fn translate(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    tracking: bool,
) -> Option<PointerEvent> {
    let local = |position: Point| position - Vector::new(bounds.x, bounds.y);
    let mouse_event = |kind| Some(PointerEvent::new(PointerId::Mouse, kind));

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            mouse_event(PointerKind::Pressed(cursor.position_in(bounds)?))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if tracking => {
            mouse_event(PointerKind::Moved(local(*position)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if tracking => {
            // An unknown cursor position can only mean "outside".
            let point = cursor
                .position()
                .map_or(Point::new(f32::NAN, f32::NAN), local);
            mouse_event(PointerKind::Released(point))
        }
        Event::Mouse(mouse::Event::CursorLeft) if tracking => mouse_event(PointerKind::Cancelled),
        Event::Touch(touch::Event::FingerPressed { id, position }) if bounds.contains(*position) => {
            Some(PointerEvent::new(
                PointerId::Finger(id.0),
                PointerKind::Pressed(local(*position)),
            ))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) if tracking => Some(
            PointerEvent::new(PointerId::Finger(id.0), PointerKind::Moved(local(*position))),
        ),
        Event::Touch(touch::Event::FingerLifted { id, position }) if tracking => Some(
            PointerEvent::new(PointerId::Finger(id.0), PointerKind::Released(local(*position))),
        ),
        Event::Touch(touch::Event::FingerLost { id, .. }) if tracking => Some(PointerEvent::new(
            PointerId::Finger(id.0),
            PointerKind::Cancelled,
        )),
        _ => None,
    }
}
