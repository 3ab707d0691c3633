// SPDX-License-Identifier: MPL-2.0
//! Slot and location identifiers.

/// One of the four directional positions around the center button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Above the center button.
    Top,
    /// Below the center button.
    Bottom,
    /// Left of the center button.
    Left,
    /// Right of the center button.
    Right,
}

impl Location {
    /// All locations, in declaration order.
    pub const ALL: [Location; 4] = [
        Location::Top,
        Location::Bottom,
        Location::Left,
        Location::Right,
    ];

    /// Index into per-location arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Location::Top => 0,
            Location::Bottom => 1,
            Location::Left => 2,
            Location::Right => 3,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Location::Top => "top",
            Location::Bottom => "bottom",
            Location::Left => "left",
            Location::Right => "right",
        };
        f.write_str(name)
    }
}

/// A button position on the control: the center or one of the four locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl Slot {
    /// All slots, center first.
    pub const ALL: [Slot; 5] = [Slot::Center, Slot::Top, Slot::Bottom, Slot::Left, Slot::Right];

    /// The directional location of this slot, `None` for the center.
    #[must_use]
    pub const fn location(self) -> Option<Location> {
        match self {
            Slot::Center => None,
            Slot::Top => Some(Location::Top),
            Slot::Bottom => Some(Location::Bottom),
            Slot::Left => Some(Location::Left),
            Slot::Right => Some(Location::Right),
        }
    }
}

impl From<Location> for Slot {
    fn from(location: Location) -> Self {
        match location {
            Location::Top => Slot::Top,
            Location::Bottom => Slot::Bottom,
            Location::Left => Slot::Left,
            Location::Right => Slot::Right,
        }
    }
}
