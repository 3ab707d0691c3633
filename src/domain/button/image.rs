// SPDX-License-Identifier: MPL-2.0
//! Slot images and the per-slot image table.
//!
//! A [`ButtonImage`] pairs an optional renderer handle with the image's
//! intrinsic size. The size drives layout; the handle drives drawing. An
//! image without a handle is a placeholder: it takes up space and reacts to
//! touches but draws nothing.

use super::location::{Location, Slot};
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use iced::Size;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// An image assigned to a slot, with its intrinsic size.
#[derive(Debug, Clone)]
pub struct ButtonImage {
    handle: Option<Handle>,
    size: Size,
}

impl ButtonImage {
    /// Wraps an existing handle whose intrinsic size is already known.
    #[must_use]
    pub fn new(handle: Handle, size: Size) -> Self {
        Self {
            handle: Some(handle),
            size: sanitize(size),
        }
    }

    /// An invisible image that still occupies `size` and accepts touches.
    #[must_use]
    pub fn placeholder(size: Size) -> Self {
        Self {
            handle: None,
            size: sanitize(size),
        }
    }

    /// Creates an image from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let size = Size::new(width as f32, height as f32);
        Self::new(Handle::from_rgba(width, height, pixels), size)
    }

    /// Decodes an encoded raster image (PNG, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the bytes cannot be decoded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_vec()))
    }

    /// Loads a raster image or an SVG file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Image`]
    /// if its content cannot be decoded.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            Self::from_svg(&data, None)
        } else {
            Self::from_bytes(&data)
        }
    }

    /// Rasterizes SVG data, optionally scaled to `target` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the SVG cannot be parsed or has empty
    /// dimensions.
    pub fn from_svg(data: &[u8], target: Option<(u32, u32)>) -> Result<Self> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| Error::Image(e.to_string()))?;

        let natural = tree.size().to_int_size();
        let (width, height) = target.unwrap_or((natural.width(), natural.height()));
        if width == 0 || height == 0 {
            return Err(Error::Image("SVG has empty dimensions".into()));
        }

        #[allow(clippy::cast_precision_loss)]
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / tree.size().width(),
            height as f32 / tree.size().height(),
        );
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(Self::from_rgba(width, height, pixmap.take()))
    }

    /// The renderer handle, `None` for placeholders.
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Intrinsic size used for layout.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether drawing this image produces anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.handle.is_some()
    }
}

impl PartialEq for ButtonImage {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.handle.as_ref().map(Handle::id) == other.handle.as_ref().map(Handle::id)
    }
}

// Negative or non-finite sizes collapse to zero so geometry stays well-formed.
fn sanitize(size: Size) -> Size {
    let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}

/// Normal and highlighted images for one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePair {
    pub normal: Option<ButtonImage>,
    pub highlighted: Option<ButtonImage>,
}

impl ImagePair {
    #[must_use]
    pub fn new(normal: Option<ButtonImage>) -> Self {
        Self {
            normal,
            highlighted: None,
        }
    }

    /// A slot is enabled exactly when it has a normal image.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.normal.is_some()
    }

    /// The image to draw. Highlighted slots fall back to the normal image.
    #[must_use]
    pub fn displayed(&self, highlighted: bool) -> Option<&ButtonImage> {
        let normal = self.normal.as_ref()?;
        if highlighted {
            Some(self.highlighted.as_ref().unwrap_or(normal))
        } else {
            Some(normal)
        }
    }
}

/// Image pairs for all five slots.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotImages {
    center: ImagePair,
    directions: [ImagePair; 4],
}

impl SlotImages {
    /// Builds the table from the normal images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCenterImage`] when `center` is `None`.
    pub fn new(
        center: Option<ButtonImage>,
        left: Option<ButtonImage>,
        right: Option<ButtonImage>,
        top: Option<ButtonImage>,
        bottom: Option<ButtonImage>,
    ) -> Result<Self> {
        let center = center.ok_or(Error::MissingCenterImage)?;
        let mut directions: [ImagePair; 4] = Default::default();
        directions[Location::Left.index()] = ImagePair::new(left);
        directions[Location::Right.index()] = ImagePair::new(right);
        directions[Location::Top.index()] = ImagePair::new(top);
        directions[Location::Bottom.index()] = ImagePair::new(bottom);

        Ok(Self {
            center: ImagePair::new(Some(center)),
            directions,
        })
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> &ImagePair {
        match slot.location() {
            None => &self.center,
            Some(location) => &self.directions[location.index()],
        }
    }

    /// Replaces the normal image of `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCenterImage`] when clearing the center image;
    /// the table is left unchanged in that case.
    pub fn set_normal(&mut self, slot: Slot, image: Option<ButtonImage>) -> Result<()> {
        if slot == Slot::Center && image.is_none() {
            return Err(Error::MissingCenterImage);
        }
        self.get_mut(slot).normal = image;
        Ok(())
    }

    pub fn set_highlighted(&mut self, slot: Slot, image: Option<ButtonImage>) {
        self.get_mut(slot).highlighted = image;
    }

    /// Intrinsic size of the center image.
    #[must_use]
    pub fn center_size(&self) -> Size {
        self.center
            .normal
            .as_ref()
            .map_or(Size::ZERO, ButtonImage::size)
    }

    /// Locations whose slot has a normal image, in [`Location::ALL`] order.
    #[must_use]
    pub fn active_locations(&self) -> Vec<Location> {
        Location::ALL
            .into_iter()
            .filter(|location| self.directions[location.index()].is_enabled())
            .collect()
    }

    #[must_use]
    pub fn is_active(&self, location: Location) -> bool {
        self.directions[location.index()].is_enabled()
    }

    fn get_mut(&mut self, slot: Slot) -> &mut ImagePair {
        match slot.location() {
            None => &mut self.center,
            Some(location) => &mut self.directions[location.index()],
        }
    }
}
