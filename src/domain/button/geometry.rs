// SPDX-License-Identifier: MPL-2.0
//! Closed and open layouts and hit-testing.
//!
//! The open layout is a grid of equally sized cells:
//!
//! ```text
//!            [Top]
//!   [Left]  [Center]  [Right]
//!           [Bottom]
//! ```
//!
//! The cell size is the largest width and height among enabled slot images.
//! A row or column only exists when its slot is enabled, so a missing
//! direction adds no offset on its axis. Neighbouring cells are `spacing`
//! apart. Every slot's hit region is its whole cell, which keeps regions
//! disjoint whatever the image sizes are.

use super::image::SlotImages;
use super::location::{Location, Slot};
use iced::{Point, Rectangle, Size};

/// Which of the two layouts a rectangle or point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Closed,
    Open,
}

/// Computed layout for one image configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    spacing: f32,
    closed_size: Size,
    open_size: Size,
    center_cell: Rectangle,
    cells: [Option<Rectangle>; 4],
}

impl Geometry {
    /// Computes both layouts. Negative or non-finite spacing is treated as zero.
    #[must_use]
    pub fn compute(images: &SlotImages, spacing: f32) -> Self {
        let spacing = if spacing.is_finite() { spacing.max(0.0) } else { 0.0 };
        let closed_size = images.center_size();

        let cell = Slot::ALL
            .into_iter()
            .filter_map(|slot| images.get(slot).normal.as_ref())
            .fold(Size::ZERO, |acc, image| {
                Size::new(acc.width.max(image.size().width), acc.height.max(image.size().height))
            });

        let has = |location| images.is_active(location);
        let center_col = u8::from(has(Location::Left));
        let center_row = u8::from(has(Location::Top));
        let cols = 1 + center_col + u8::from(has(Location::Right));
        let rows = 1 + center_row + u8::from(has(Location::Bottom));

        let cell_at = |col: u8, row: u8| {
            Rectangle::new(
                Point::new(
                    f32::from(col) * (cell.width + spacing),
                    f32::from(row) * (cell.height + spacing),
                ),
                cell,
            )
        };

        let mut cells = [None; 4];
        for location in Location::ALL {
            if !has(location) {
                continue;
            }
            let (col, row) = match location {
                Location::Top => (center_col, center_row - 1),
                Location::Bottom => (center_col, center_row + 1),
                Location::Left => (center_col - 1, center_row),
                Location::Right => (center_col + 1, center_row),
            };
            cells[location.index()] = Some(cell_at(col, row));
        }

        let extent = |count: u8, length: f32| {
            f32::from(count) * length + f32::from(count - 1) * spacing
        };

        Self {
            spacing,
            closed_size,
            open_size: Size::new(extent(cols, cell.width), extent(rows, cell.height)),
            center_cell: cell_at(center_col, center_row),
            cells,
        }
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Bounding size of the center slot alone.
    #[must_use]
    pub fn closed_size(&self) -> Size {
        self.closed_size
    }

    /// Bounding size of the center slot and every active direction.
    #[must_use]
    pub fn open_size(&self) -> Size {
        self.open_size
    }

    #[must_use]
    pub fn size(&self, layout: LayoutKind) -> Size {
        match layout {
            LayoutKind::Closed => self.closed_size,
            LayoutKind::Open => self.open_size,
        }
    }

    /// Hit region of an active location in the open layout.
    #[must_use]
    pub fn region(&self, location: Location) -> Option<Rectangle> {
        self.cells[location.index()]
    }

    /// Hit region of the center slot in the given layout.
    #[must_use]
    pub fn center_region(&self, layout: LayoutKind) -> Rectangle {
        match layout {
            LayoutKind::Closed => Rectangle::new(Point::ORIGIN, self.closed_size),
            LayoutKind::Open => self.center_cell,
        }
    }

    /// Center point of the center slot, in local coordinates of `layout`.
    #[must_use]
    pub fn anchor(&self, layout: LayoutKind) -> Point {
        self.center_region(layout).center()
    }

    /// All hit regions of `layout`. The closed layout only has the center.
    pub fn regions(&self, layout: LayoutKind) -> impl Iterator<Item = (Slot, Rectangle)> + '_ {
        let directions = Location::ALL.into_iter().filter_map(move |location| match layout {
            LayoutKind::Closed => None,
            LayoutKind::Open => self.region(location).map(|rect| (Slot::from(location), rect)),
        });
        std::iter::once((Slot::Center, self.center_region(layout))).chain(directions)
    }

    /// Slot whose region contains `point`, if any.
    ///
    /// Non-finite coordinates never hit anything.
    #[must_use]
    pub fn hit_test(&self, point: Point, layout: LayoutKind) -> Option<Slot> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        self.regions(layout)
            .find(|(_, rect)| contains(rect, point))
            .map(|(slot, _)| slot)
    }

    /// Rectangle an image of `size` is drawn in, centered in `slot`'s region.
    #[must_use]
    pub fn image_bounds(&self, slot: Slot, layout: LayoutKind, size: Size) -> Option<Rectangle> {
        let region = match slot.location() {
            None => self.center_region(layout),
            Some(_) if layout == LayoutKind::Closed => return None,
            Some(location) => self.region(location)?,
        };
        let center = region.center();
        Some(Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        ))
    }
}

// Half-open on the far edges so touching cells never share a point.
fn contains(rect: &Rectangle, point: Point) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}
