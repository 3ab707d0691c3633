// SPDX-License-Identifier: MPL-2.0
//! `many_options_button` is a radial "many options" button for the Iced GUI
//! framework.
//!
//! A center button reveals up to four directional buttons (top, bottom, left,
//! right). The user slides or taps onto one of them and releases to select
//! it. The model (geometry, state machine, touch mapping) lives in
//! [`domain::button`] and [`ui::widgets::many_options_button`]; the demo
//! application in [`app`] shows how to host it.

pub mod app;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::button::{ButtonImage, ButtonState, ClosedTransform, Location, Slot};
pub use ui::widgets::many_options_button::{
    ManyOptionsButton, PointerEvent, PointerId, PointerKind, SelectionObserver,
};
