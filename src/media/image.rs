// SPDX-License-Identifier: MPL-2.0
//! Decoded RGBA bitmaps and the generic path-based image loader.

use crate::error::{Error, Result};
use crate::media::rasterizer::validate_markup;
use iced::widget::image;
use image_rs::imageops::{self, FilterType};
use image_rs::{GenericImageView, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A straight-alpha RGBA bitmap together with the handle the shell draws.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Stored in Arc so cloning a rendered icon stays cheap.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from straight-alpha RGBA pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len()` is not `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "RGBA buffer does not match {width}x{height}"
        );
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// A fully transparent square bitmap, used as the placeholder for
    /// content that failed to render.
    #[must_use]
    pub fn transparent(size: u32) -> Self {
        Self::from_rgba(size, size, vec![0; size as usize * size as usize * 4])
    }

    /// Returns a reference to the RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the `[r, g, b, a]` value at `(x, y)`, or `None` outside the
    /// bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba_bytes[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns `true` if every pixel has zero alpha.
    pub fn is_fully_transparent(&self) -> bool {
        self.rgba_bytes.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Compares size and pixel content, ignoring the toolkit handle.
    pub fn same_pixels(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.rgba_bytes == other.rgba_bytes
    }

    /// Resamples to exactly `size`×`size`, ignoring the aspect ratio.
    #[must_use]
    pub fn resized_exact(&self, size: u32) -> Self {
        if self.dimensions() == (size, size) {
            return self.clone();
        }
        let resized = imageops::resize(&self.to_rgba_image(), size, size, FilterType::Triangle);
        Self::from_rgba(size, size, resized.into_raw())
    }

    /// Scales the bitmap to fit inside a `size`×`size` square, preserving
    /// the aspect ratio and centering it on a transparent canvas.
    #[must_use]
    pub fn fit_within(&self, size: u32) -> Self {
        if self.dimensions() == (size, size) {
            return self.clone();
        }
        if self.width == 0 || self.height == 0 {
            return Self::transparent(size);
        }

        let scale = (size as f32 / self.width as f32).min(size as f32 / self.height as f32);
        let w = ((self.width as f32 * scale).round() as u32).clamp(1, size);
        let h = ((self.height as f32 * scale).round() as u32).clamp(1, size);

        let resized = imageops::resize(&self.to_rgba_image(), w, h, FilterType::Triangle);
        let mut canvas = RgbaImage::new(size, size);
        imageops::overlay(
            &mut canvas,
            &resized,
            i64::from((size - w) / 2),
            i64::from((size - h) / 2),
        );
        Self::from_rgba(size, size, canvas.into_raw())
    }

    fn to_rgba_image(&self) -> RgbaImage {
        // Length is checked in `from_rgba`, so the buffer always fits.
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

/// Load an image from the given path at its intrinsic size.
///
/// PNG files are decoded with the `image` crate. SVG files are rasterized at
/// the document's declared size, the way a generic image loader would treat
/// them, scaled down only when the longer edge exceeds [`MAX_RASTER_SIZE`].
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The raster data is invalid or unsupported ([`Error::Io`])
/// - For SVG files: the markup is rejected or has empty dimensions
///   ([`Error::InvalidVectorContent`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let markup = fs::read_to_string(path)?;
        validate_markup(&markup)?;
        let tree = usvg::Tree::from_data(markup.as_bytes(), &usvg::Options::default())
            .map_err(|e| Error::InvalidVectorContent(e.to_string()))?;

        let doc = tree.size();
        let scale = (MAX_RASTER_SIZE as f32 / doc.width().max(doc.height())).min(1.0);
        let width = (doc.width() * scale).round() as u32;
        let height = (doc.height() * scale).round() as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidVectorContent("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::InvalidVectorContent("Failed to allocate SVG pixmap".into())
        })?;
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        Ok(ImageData::from_rgba(width, height, demultiply(&pixmap)))
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

/// Largest edge a raster rendition or an intrinsic-size SVG is drawn at.
/// File names like `icon_100000.png` would otherwise request absurd
/// allocations.
pub const MAX_RASTER_SIZE: u32 = 1024;

/// Decodes the PNG at `path` and fits it into a `size`×`size` square.
///
/// Undecodable files are logged and replaced by a transparent square, like
/// broken SVGs.
pub fn render_raster(path: &Path, size: u32) -> ImageData {
    let size = size.clamp(1, MAX_RASTER_SIZE);
    match load_image(path) {
        Ok(data) => data.fit_within(size),
        Err(err) => {
            tracing::warn!(path = %path.display(), size, %err, "rendering placeholder for PNG");
            ImageData::transparent(size)
        }
    }
}

/// Converts tiny-skia's premultiplied pixels to straight RGBA bytes.
pub(crate) fn demultiply(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
