// SPDX-License-Identifier: MPL-2.0
//! Radial many-options button.
//!
//! A center button that, once tapped, reveals up to four directional buttons
//! around it. Pressing or sliding onto a directional button highlights it and
//! releasing over it selects it. The selection is returned from
//! [`ManyOptionsButton::handle_pointer`] and reported to the registered
//! [`SelectionObserver`].
//!
//! The control owns its model and is rendered through a canvas program:
//!
//! ```ignore
//! let button = ManyOptionsButton::from_images(Some(center), Some(left), None, Some(top), None)?;
//! let element = button.view(Message::Pointer);
//! // in update():
//! if let Some(location) = self.button.handle_pointer(event) { /* ... */ }
//! ```

mod canvas;
pub mod observer;
pub mod touch;

pub use observer::SelectionObserver;
pub use touch::{GestureTracker, PointerEvent, PointerId, PointerKind};

use crate::domain::button::{
    ButtonImage, ButtonState, ClosedTransform, Geometry, ImagePair, Location, Slot, SlotImages,
};
use crate::error::Result;
use iced::{Element, Length, Point, Radians, Rectangle, Size, Vector};
use std::fmt;
use std::rc::{Rc, Weak};

/// Spacing between neighbouring cells of the open layout, in logical pixels.
pub const DEFAULT_SPACING: f32 = 12.0;

/// One image to draw, in the control's local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SlotDrawing<'a> {
    pub slot: Slot,
    pub bounds: Rectangle,
    pub rotation: Radians,
    pub image: &'a ButtonImage,
}

/// The many-options control.
pub struct ManyOptionsButton {
    images: SlotImages,
    geometry: Geometry,
    state: ButtonState,
    tracker: GestureTracker,
    closed_transform: ClosedTransform,
    /// Center of the center slot, in the parent's coordinates.
    anchor: Point,
    observer: Option<Weak<dyn SelectionObserver>>,
}

impl ManyOptionsButton {
    /// Creates a control centered in `frame`.
    ///
    /// Directional images that are `None` disable their slot. Use
    /// [`ButtonImage::placeholder`] for an invisible slot that still reacts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCenterImage`](crate::error::Error::MissingCenterImage)
    /// when `center` is `None`.
    pub fn new(
        frame: Rectangle,
        center: Option<ButtonImage>,
        left: Option<ButtonImage>,
        right: Option<ButtonImage>,
        top: Option<ButtonImage>,
        bottom: Option<ButtonImage>,
    ) -> Result<Self> {
        let images = SlotImages::new(center, left, right, top, bottom)?;
        let geometry = Geometry::compute(&images, DEFAULT_SPACING);
        Ok(Self {
            images,
            geometry,
            state: ButtonState::Closed,
            tracker: GestureTracker::default(),
            closed_transform: ClosedTransform::IDENTITY,
            anchor: frame.center(),
            observer: None,
        })
    }

    /// Creates a control whose closed frame starts at the origin.
    ///
    /// # Errors
    ///
    /// Same as [`ManyOptionsButton::new`].
    pub fn from_images(
        center: Option<ButtonImage>,
        left: Option<ButtonImage>,
        right: Option<ButtonImage>,
        top: Option<ButtonImage>,
        bottom: Option<ButtonImage>,
    ) -> Result<Self> {
        let closed = center.as_ref().map_or(Size::ZERO, ButtonImage::size);
        Self::new(
            Rectangle::new(Point::ORIGIN, closed),
            center,
            left,
            right,
            top,
            bottom,
        )
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.set_spacing(spacing);
        self
    }

    #[must_use]
    pub fn with_closed_transform(mut self, transform: ClosedTransform) -> Self {
        self.closed_transform = transform;
        self
    }

    // =========================================================================
    // Images and geometry
    // =========================================================================

    #[must_use]
    pub fn images(&self, slot: Slot) -> &ImagePair {
        self.images.get(slot)
    }

    /// Replaces the normal image of `slot`, recomputes the layout and closes
    /// the control.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCenterImage`](crate::error::Error::MissingCenterImage)
    /// when clearing the center image. Nothing changes in that case.
    pub fn set_image(&mut self, slot: Slot, image: Option<ButtonImage>) -> Result<()> {
        self.images.set_normal(slot, image)?;
        self.reconfigure();
        Ok(())
    }

    /// Replaces the highlighted image of `slot`, recomputes the layout and
    /// closes the control.
    pub fn set_highlighted_image(&mut self, slot: Slot, image: Option<ButtonImage>) {
        self.images.set_highlighted(slot, image);
        self.reconfigure();
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.geometry = Geometry::compute(&self.images, spacing);
        self.reset();
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.geometry.spacing()
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn closed_size(&self) -> Size {
        self.geometry.closed_size()
    }

    #[must_use]
    pub fn open_size(&self) -> Size {
        self.geometry.open_size()
    }

    /// Locations that currently have a button.
    #[must_use]
    pub fn active_locations(&self) -> Vec<Location> {
        self.images.active_locations()
    }

    /// Size of the layout matching the current state.
    #[must_use]
    pub fn current_size(&self) -> Size {
        self.geometry.size(self.state.layout())
    }

    /// Frame in the parent's coordinates. The center slot stays on the anchor
    /// whichever layout is active.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        let local = self.geometry.anchor(self.state.layout());
        Rectangle::new(
            self.anchor - Vector::new(local.x, local.y),
            self.current_size(),
        )
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    #[must_use]
    pub fn closed_transform(&self) -> ClosedTransform {
        self.closed_transform
    }

    pub fn set_closed_transform(&mut self, transform: ClosedTransform) {
        self.closed_transform = transform;
    }

    // =========================================================================
    // State
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Forces the control into `state`, dropping any gesture in progress.
    ///
    /// Expanding an inactive location opens the control instead.
    pub fn set_state(&mut self, state: ButtonState) {
        let state = match state {
            ButtonState::Expanded(location) if !self.images.is_active(location) => {
                tracing::warn!(%location, "cannot expand an inactive location, opening instead");
                ButtonState::Open
            }
            other => other,
        };
        self.tracker.reset();
        self.state = state;
    }

    /// Whether a pointer is currently driving a gesture.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Slot under `point` (local coordinates) in the current layout.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Slot> {
        self.geometry.hit_test(point, self.state.layout())
    }

    // =========================================================================
    // Observer
    // =========================================================================

    /// Registers `observer` without taking ownership of it.
    pub fn set_observer<T: SelectionObserver + 'static>(&mut self, observer: &Rc<T>) {
        let weak: Weak<T> = Rc::downgrade(observer);
        self.observer = Some(weak);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feeds one pointer event through the gesture tracker and state machine.
    ///
    /// Returns the selected location when the event completed a selection;
    /// the observer has been notified by then.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Location> {
        let trigger = self.tracker.map(event, self.state, &self.geometry)?;
        let transition = self.state.apply(trigger);
        self.state = transition.current;

        if transition.changed() {
            tracing::debug!(
                from = ?transition.previous,
                to = ?transition.current,
                ?trigger,
                "many-options button transition"
            );
        }

        let location = transition.selected?;
        self.notify(location);
        Some(location)
    }

    fn notify(&self, location: Location) {
        match self.observer.as_ref().and_then(Weak::upgrade) {
            Some(observer) => observer.on_button_selected(self, location),
            None => tracing::debug!(%location, "selection made without a live observer"),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Image currently shown for `slot`, if any.
    #[must_use]
    pub fn displayed_image(&self, slot: Slot) -> Option<&ButtonImage> {
        if !self.state.shows(slot) {
            return None;
        }
        let highlighted = match slot.location() {
            Some(location) => self.state.highlighted() == Some(location),
            None => self.tracker.center_pressed(),
        };
        self.images.get(slot).displayed(highlighted)
    }

    /// Images to draw in the current state, in local coordinates.
    pub fn visible_slots(&self) -> impl Iterator<Item = SlotDrawing<'_>> + '_ {
        let layout = self.state.layout();
        Slot::ALL.into_iter().filter_map(move |slot| {
            let image = self.displayed_image(slot)?;
            let bounds = self.geometry.image_bounds(slot, layout, image.size())?;
            let (bounds, rotation) = if slot == Slot::Center && self.state == ButtonState::Closed {
                (
                    self.closed_transform.apply(bounds),
                    self.closed_transform.rotation,
                )
            } else {
                (bounds, Radians(0.0))
            };
            Some(SlotDrawing {
                slot,
                bounds,
                rotation,
                image,
            })
        })
    }

    /// Canvas element sized to the current layout. Pointer events are mapped
    /// to local coordinates and published through `on_pointer`.
    pub fn view<'a, Message: 'a>(
        &'a self,
        on_pointer: impl Fn(PointerEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        let size = self.current_size();
        iced::widget::Canvas::new(canvas::ButtonCanvas::new(self, on_pointer))
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }

    fn reconfigure(&mut self) {
        self.geometry = Geometry::compute(&self.images, self.geometry.spacing());
        self.reset();
        tracing::debug!(
            closed = ?self.geometry.closed_size(),
            open = ?self.geometry.open_size(),
            active = ?self.images.active_locations(),
            "many-options button reconfigured"
        );
    }

    fn reset(&mut self) {
        self.tracker.reset();
        self.state = ButtonState::Closed;
    }
}

impl fmt::Debug for ManyOptionsButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManyOptionsButton")
            .field("state", &self.state)
            .field("geometry", &self.geometry)
            .field("tracker", &self.tracker)
            .field("closed_transform", &self.closed_transform)
            .field("anchor", &self.anchor)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
