// SPDX-License-Identifier: MPL-2.0
//! Selection observer.

use super::ManyOptionsButton;
use crate::domain::button::Location;

/// Receives completed selections from a [`ManyOptionsButton`].
///
/// The button only keeps a weak reference to its observer, so the observer
/// may own the button without creating a cycle.
pub trait SelectionObserver {
    /// Called once when a directional slot is released inside its region.
    fn on_button_selected(&self, button: &ManyOptionsButton, location: Location);
}
