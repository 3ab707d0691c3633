// SPDX-License-Identifier: MPL-2.0
//! Interaction state machine.
//!
//! Highlighting, visibility of the directional slots, and the closed
//! transform are all derived from [`ButtonState`], so a transition only has
//! to report where it went and whether it completed a selection.

use super::geometry::LayoutKind;
use super::location::{Location, Slot};

/// Interaction state of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Only the center slot is shown.
    #[default]
    Closed,
    /// All active slots are shown.
    Open,
    /// All active slots are shown and the one under the touch is highlighted.
    Expanded(Location),
}

/// Input to the state machine, produced by the touch mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The center slot was tapped.
    TapCenter,
    /// The touch entered an active directional region.
    Enter(Location),
    /// The touch left every directional region.
    Leave,
    /// The touch ended over `Some(location)` or outside every directional
    /// region (`None`). Cancellation also ends as `Release(None)`.
    Release(Option<Location>),
}

/// Result of feeding a trigger to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: ButtonState,
    pub current: ButtonState,
    /// Set only when an expanded slot was released inside its region.
    pub selected: Option<Location>,
}

impl Transition {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

impl ButtonState {
    /// Applies `trigger` and returns the resulting transition.
    ///
    /// Triggers that have no meaning in the current state leave it unchanged.
    #[must_use]
    pub fn apply(self, trigger: Trigger) -> Transition {
        let (current, selected) = match (self, trigger) {
            (ButtonState::Closed, Trigger::TapCenter) => (ButtonState::Open, None),
            (ButtonState::Open | ButtonState::Expanded(_), Trigger::Enter(location)) => {
                (ButtonState::Expanded(location), None)
            }
            (ButtonState::Expanded(_), Trigger::Leave) => (ButtonState::Open, None),
            (ButtonState::Expanded(_), Trigger::Release(Some(location))) => {
                (ButtonState::Closed, Some(location))
            }
            (ButtonState::Expanded(_), Trigger::Release(None)) => (ButtonState::Closed, None),
            (ButtonState::Open, Trigger::TapCenter | Trigger::Release(_)) => {
                (ButtonState::Closed, None)
            }
            (state, _) => (state, None),
        };

        Transition {
            previous: self,
            current,
            selected,
        }
    }

    /// Layout the control uses in this state.
    #[must_use]
    pub fn layout(self) -> LayoutKind {
        match self {
            ButtonState::Closed => LayoutKind::Closed,
            ButtonState::Open | ButtonState::Expanded(_) => LayoutKind::Open,
        }
    }

    /// Directional location currently highlighted.
    #[must_use]
    pub fn highlighted(self) -> Option<Location> {
        match self {
            ButtonState::Expanded(location) => Some(location),
            _ => None,
        }
    }

    /// Whether `slot` is drawn in this state.
    #[must_use]
    pub fn shows(self, slot: Slot) -> bool {
        slot == Slot::Center || self != ButtonState::Closed
    }
}
