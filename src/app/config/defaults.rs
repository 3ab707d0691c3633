// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Layout**: spacing between the cells of the open layout
//! - **Closed**: transform applied to the center button while closed

// ==========================================================================
// Layout Defaults
// ==========================================================================

pub use crate::ui::widgets::many_options_button::DEFAULT_SPACING;

/// Minimum spacing between cells.
pub const MIN_SPACING: f32 = 0.0;

/// Maximum spacing between cells.
pub const MAX_SPACING: f32 = 200.0;

// ==========================================================================
// Closed Transform Defaults
// ==========================================================================

/// Default scale of the center button while closed.
pub const DEFAULT_CLOSED_SCALE: f32 = 0.85;

/// Minimum closed scale.
pub const MIN_CLOSED_SCALE: f32 = 0.1;

/// Maximum closed scale.
pub const MAX_CLOSED_SCALE: f32 = 2.0;

/// Default rotation of the center button while closed, in degrees.
pub const DEFAULT_CLOSED_ROTATION_DEGREES: f32 = 0.0;

// ==========================================================================
// Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SPACING <= DEFAULT_SPACING);
    assert!(DEFAULT_SPACING <= MAX_SPACING);
    assert!(MIN_CLOSED_SCALE <= DEFAULT_CLOSED_SCALE);
    assert!(DEFAULT_CLOSED_SCALE <= MAX_CLOSED_SCALE);
};
