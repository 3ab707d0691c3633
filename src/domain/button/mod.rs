// SPDX-License-Identifier: MPL-2.0
//! Many-options button model.
//!
//! Everything here is independent of rendering and event delivery:
//! - [`location`]: slot and location identifiers
//! - [`image`]: slot images and the per-slot image table
//! - [`geometry`]: closed/open layouts and hit-testing
//! - [`state`]: the Closed / Open / Expanded state machine
//! - [`transform`]: center transform applied while closed

pub mod geometry;
pub mod image;
pub mod location;
pub mod state;
pub mod transform;

pub use geometry::{Geometry, LayoutKind};
pub use image::{ButtonImage, ImagePair, SlotImages};
pub use location::{Location, Slot};
pub use state::{ButtonState, Transition, Trigger};
pub use transform::ClosedTransform;
