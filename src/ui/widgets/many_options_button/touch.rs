// SPDX-License-Identifier: MPL-2.0
//! Maps raw pointer events to state machine triggers.
//!
//! Only one pointer drives a gesture at a time. Presses from other pointers
//! are ignored until the active one is released or cancelled.

use crate::domain::button::{ButtonState, Geometry, Slot, Trigger};
use iced::Point;

/// Identity of a pointer: the mouse, or one finger of a touch screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Finger(u64),
}

/// What happened to a pointer. Points are in the control's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// The host interrupted the gesture.
    Cancelled,
}

/// A single pointer event delivered to the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub kind: PointerKind,
}

impl PointerEvent {
    #[must_use]
    pub fn new(pointer: PointerId, kind: PointerKind) -> Self {
        Self { pointer, kind }
    }
}

/// How the active gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureOrigin {
    /// Press on the center of a closed control; it opened the control.
    Opening,
    /// Press on the center of an open control.
    CenterPress,
    /// Press anywhere else on an open control.
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    pointer: PointerId,
    origin: GestureOrigin,
}

/// Tracks the active gesture and turns pointer events into triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureTracker {
    active: Option<Gesture>,
}

impl GestureTracker {
    /// Whether a pointer is currently driving a gesture.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the active gesture started on the center slot.
    #[must_use]
    pub fn center_pressed(&self) -> bool {
        self.active.is_some_and(|gesture| gesture.origin != GestureOrigin::Elsewhere)
    }

    /// Forgets the active gesture without producing a trigger.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Maps `event` to a trigger for a control in `state` laid out by `geometry`.
    pub fn map(
        &mut self,
        event: PointerEvent,
        state: ButtonState,
        geometry: &Geometry,
    ) -> Option<Trigger> {
        let hit = |point: Point| geometry.hit_test(point, state.layout());

        match event.kind {
            PointerKind::Pressed(point) => {
                if self.active.is_some() {
                    return None;
                }
                let target = hit(point);
                let (origin, trigger) = match (state, target) {
                    (ButtonState::Closed, Some(Slot::Center)) => {
                        (GestureOrigin::Opening, Some(Trigger::TapCenter))
                    }
                    (ButtonState::Closed, _) => return None,
                    (_, Some(Slot::Center)) => (GestureOrigin::CenterPress, None),
                    (_, Some(slot)) => (GestureOrigin::Elsewhere, slot.location().map(Trigger::Enter)),
                    (_, None) => (GestureOrigin::Elsewhere, None),
                };
                self.active = Some(Gesture {
                    pointer: event.pointer,
                    origin,
                });
                trigger
            }
            PointerKind::Moved(point) => {
                self.owns(event.pointer)?;
                let location = hit(point).and_then(Slot::location);
                match (state, location) {
                    (ButtonState::Open, Some(location)) => Some(Trigger::Enter(location)),
                    (ButtonState::Expanded(current), Some(location)) if location != current => {
                        Some(Trigger::Enter(location))
                    }
                    (ButtonState::Expanded(_), None) => Some(Trigger::Leave),
                    _ => None,
                }
            }
            PointerKind::Released(point) => {
                let gesture = self.owns(event.pointer)?;
                self.active = None;
                match hit(point) {
                    // Ending an expansion on the center selects nothing.
                    Some(Slot::Center) if matches!(state, ButtonState::Expanded(_)) => {
                        Some(Trigger::Release(None))
                    }
                    Some(Slot::Center) => match (state, gesture.origin) {
                        (ButtonState::Closed, _) | (_, GestureOrigin::Opening) => None,
                        _ => Some(Trigger::TapCenter),
                    },
                    target => Some(Trigger::Release(target.and_then(Slot::location))),
                }
            }
            PointerKind::Cancelled => {
                self.owns(event.pointer)?;
                self.active = None;
                Some(Trigger::Release(None))
            }
        }
    }

    fn owns(&self, pointer: PointerId) -> Option<Gesture> {
        self.active.filter(|gesture| gesture.pointer == pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::button::{ButtonImage, Location, SlotImages};
    use iced::Size;

    const MOUSE: PointerId = PointerId::Mouse;

    // 60x60 cells, spacing 10: left 0..60, center 70..130, right 140..200.
    fn geometry() -> Geometry {
        let image = || Some(ButtonImage::placeholder(Size::new(60.0, 60.0)));
        let images =
            SlotImages::new(image(), image(), image(), image(), None).expect("center present");
        Geometry::compute(&images, 10.0)
    }

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(MOUSE, PointerKind::Pressed(Point::new(x, y)))
    }

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(MOUSE, PointerKind::Moved(Point::new(x, y)))
    }

    fn release(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(MOUSE, PointerKind::Released(Point::new(x, y)))
    }

    #[test]
    fn press_on_closed_center_opens() {
        let mut tracker = GestureTracker::default();
        let trigger = tracker.map(press(30.0, 30.0), ButtonState::Closed, &geometry());
        assert_eq!(trigger, Some(Trigger::TapCenter));
        assert!(tracker.center_pressed());
    }

    #[test]
    fn press_outside_closed_center_is_not_tracked() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.map(press(90.0, 30.0), ButtonState::Closed, &geometry()), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn releasing_the_opening_tap_keeps_the_control_open() {
        let mut tracker = GestureTracker::default();
        tracker.map(press(30.0, 30.0), ButtonState::Closed, &geometry());
        let trigger = tracker.map(release(100.0, 100.0), ButtonState::Open, &geometry());
        assert_eq!(trigger, None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn second_tap_on_center_closes() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.map(press(100.0, 100.0), ButtonState::Open, &geometry()), None);
        let trigger = tracker.map(release(100.0, 100.0), ButtonState::Open, &geometry());
        assert_eq!(trigger, Some(Trigger::TapCenter));
    }

    #[test]
    fn press_on_direction_enters_it() {
        let mut tracker = GestureTracker::default();
        let trigger = tracker.map(press(100.0, 10.0), ButtonState::Open, &geometry());
        assert_eq!(trigger, Some(Trigger::Enter(Location::Top)));
    }

    #[test]
    fn moving_between_regions_produces_enter_and_leave() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        let expanded = ButtonState::Expanded(Location::Left);
        tracker.map(press(10.0, 100.0), ButtonState::Open, &g);

        assert_eq!(tracker.map(moved(20.0, 100.0), expanded, &g), None);
        assert_eq!(
            tracker.map(moved(150.0, 100.0), expanded, &g),
            Some(Trigger::Enter(Location::Right))
        );
        assert_eq!(tracker.map(moved(65.0, 100.0), expanded, &g), Some(Trigger::Leave));
        assert_eq!(tracker.map(moved(100.0, 100.0), expanded, &g), Some(Trigger::Leave));
    }

    #[test]
    fn disabled_direction_is_outside() {
        let mut tracker = GestureTracker::default();
        // Bottom has no image, so its would-be cell is empty space.
        let trigger = tracker.map(press(100.0, 170.0), ButtonState::Open, &geometry());
        assert_eq!(trigger, None);
        let trigger = tracker.map(release(100.0, 170.0), ButtonState::Open, &geometry());
        assert_eq!(trigger, Some(Trigger::Release(None)));
    }

    #[test]
    fn release_on_center_ends_an_expansion() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        let expanded = ButtonState::Expanded(Location::Top);
        tracker.map(press(100.0, 10.0), ButtonState::Open, &g);
        assert_eq!(
            tracker.map(release(100.0, 100.0), expanded, &g),
            Some(Trigger::Release(None))
        );

        // Same for a gesture that started on the center, whatever opened it.
        tracker.map(press(100.0, 100.0), expanded, &g);
        assert_eq!(
            tracker.map(release(100.0, 100.0), expanded, &g),
            Some(Trigger::Release(None))
        );
        tracker.map(press(30.0, 30.0), ButtonState::Closed, &g);
        assert_eq!(
            tracker.map(release(100.0, 100.0), expanded, &g),
            Some(Trigger::Release(None))
        );
    }

    #[test]
    fn release_on_another_direction_reports_that_one() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        tracker.map(press(100.0, 10.0), ButtonState::Open, &g);
        assert_eq!(
            tracker.map(release(150.0, 100.0), ButtonState::Expanded(Location::Top), &g),
            Some(Trigger::Release(Some(Location::Right)))
        );
    }

    #[test]
    fn release_over_direction_reports_it() {
        let mut tracker = GestureTracker::default();
        let state = ButtonState::Expanded(Location::Top);
        tracker.map(press(100.0, 10.0), ButtonState::Open, &geometry());
        let trigger = tracker.map(release(100.0, 20.0), state, &geometry());
        assert_eq!(trigger, Some(Trigger::Release(Some(Location::Top))));
    }

    #[test]
    fn other_pointers_are_ignored_during_a_gesture() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        tracker.map(press(100.0, 10.0), ButtonState::Open, &g);

        let finger = PointerId::Finger(7);
        let state = ButtonState::Expanded(Location::Top);
        let other_press = PointerEvent::new(finger, PointerKind::Pressed(Point::new(10.0, 100.0)));
        let other_release =
            PointerEvent::new(finger, PointerKind::Released(Point::new(10.0, 100.0)));
        assert_eq!(tracker.map(other_press, state, &g), None);
        assert_eq!(tracker.map(other_release, state, &g), None);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn cancel_is_a_release_outside() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        tracker.map(press(100.0, 10.0), ButtonState::Open, &g);
        let cancel = PointerEvent::new(MOUSE, PointerKind::Cancelled);
        assert_eq!(
            tracker.map(cancel, ButtonState::Expanded(Location::Top), &g),
            Some(Trigger::Release(None))
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn events_without_a_gesture_are_ignored() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        assert_eq!(tracker.map(moved(100.0, 10.0), ButtonState::Open, &g), None);
        assert_eq!(tracker.map(release(100.0, 10.0), ButtonState::Open, &g), None);
        let cancel = PointerEvent::new(MOUSE, PointerKind::Cancelled);
        assert_eq!(tracker.map(cancel, ButtonState::Open, &g), None);
    }

    #[test]
    fn nan_coordinates_count_as_outside() {
        let mut tracker = GestureTracker::default();
        let g = geometry();
        tracker.map(press(100.0, 10.0), ButtonState::Open, &g);
        assert_eq!(
            tracker.map(moved(f32::NAN, 10.0), ButtonState::Expanded(Location::Top), &g),
            Some(Trigger::Leave)
        );
    }
}
