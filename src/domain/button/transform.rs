// SPDX-License-Identifier: MPL-2.0
//! Transform applied to the center slot while the control is closed.

use iced::{Radians, Rectangle, Size};

/// Scale and rotation around the center of the center slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedTransform {
    pub scale: f32,
    pub rotation: Radians,
}

impl ClosedTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: Radians(0.0),
    };

    #[must_use]
    pub fn scaled(scale: f32) -> Self {
        Self {
            scale: sanitize_scale(scale),
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: impl Into<Radians>) -> Self {
        self.rotation = rotation.into();
        self
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Scales `bounds` about its own center.
    #[must_use]
    pub fn apply(&self, bounds: Rectangle) -> Rectangle {
        let scale = sanitize_scale(self.scale);
        let center = bounds.center();
        let size = Size::new(bounds.width * scale, bounds.height * scale);
        Rectangle::new(
            iced::Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

impl Default for ClosedTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale >= 0.0 {
        scale
    } else {
        1.0
    }
}
