// SPDX-License-Identifier: MPL-2.0
//! Built-in slot icons.
//!
//! SVG sources are embedded from `assets/icons/` and rasterized on demand.
//! Each icon paints with `currentColor`, which is replaced before parsing so
//! the same source yields both the normal and the highlighted variant.

use crate::domain::button::{ButtonImage, Slot};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAsset;

/// Fill used for icons in their resting state.
pub const NORMAL_COLOR: &str = "#3b6ea8";

/// Fill used while a slot is highlighted.
pub const HIGHLIGHT_COLOR: &str = "#e07a1f";

fn file_name(slot: Slot) -> &'static str {
    match slot {
        Slot::Center => "center.svg",
        Slot::Top => "top.svg",
        Slot::Bottom => "bottom.svg",
        Slot::Left => "left.svg",
        Slot::Right => "right.svg",
    }
}

/// Rasterizes the built-in icon for `slot`, painted with `color`.
///
/// # Errors
///
/// Returns [`Error::Image`] if the embedded asset is missing or invalid.
pub fn slot_icon(slot: Slot, color: &str) -> Result<ButtonImage> {
    let name = file_name(slot);
    let asset = IconAsset::get(name)
        .ok_or_else(|| Error::Image(format!("missing embedded icon {name}")))?;
    let source = String::from_utf8_lossy(asset.data.as_ref()).replace("currentColor", color);
    ButtonImage::from_svg(source.as_bytes(), None)
}
