// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`widgets`] - Custom Iced widgets (the many-options button)
//! - [`icons`] - Built-in SVG slot icons

pub mod icons;
pub mod widgets;
