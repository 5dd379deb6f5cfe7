// SPDX-License-Identifier: MPL-2.0
//! Display-size inference for PNG renditions.
//!
//! Icon sets name their raster exports `<base>_<size>.png`. The size is taken
//! from that suffix; a bare `<base>.png` has its real pixel width probed; any
//! other name falls back to [`DEFAULT_RASTER_SIZE`].

use std::path::Path;

/// Size assumed for rasters whose name carries no usable size.
pub const DEFAULT_RASTER_SIZE: u32 = 32;

/// Where an inferred raster size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    /// Parsed from a `_<digits>` file name suffix.
    Suffix,
    /// Read from the PNG header.
    Probed,
    /// Nothing usable; [`DEFAULT_RASTER_SIZE`] was used.
    Default,
}

/// What a raster file name says about its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSize {
    /// `<base>_<n>.png` with `n > 0`.
    Suffix(u32),
    /// Exactly `<base>.png`.
    NoSuffix,
    /// Anything else: a zero, an overflowing number, or a foreign name.
    Unparsable,
}

/// An inferred display size with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub pixels: u32,
    pub source: SizeSource,
}

impl RasterSize {
    /// Caption shown under the raster in the gallery.
    pub fn label(&self) -> String {
        match self.source {
            SizeSource::Suffix => format!("{}px", self.pixels),
            SizeSource::Probed => format!("{}px (native)", self.pixels),
            SizeSource::Default => format!("{}px (default)", self.pixels),
        }
    }

    fn fallback() -> Self {
        Self {
            pixels: DEFAULT_RASTER_SIZE,
            source: SizeSource::Default,
        }
    }
}

/// Reads the size suffix from `file_name` relative to the SVG base name.
pub fn parse_size_suffix(base: &str, file_name: &str) -> NameSize {
    let Some(stem) = strip_png_extension(file_name) else {
        return NameSize::Unparsable;
    };
    let Some(rest) = stem.strip_prefix(base) else {
        return NameSize::Unparsable;
    };
    if rest.is_empty() {
        return NameSize::NoSuffix;
    }

    match rest.strip_prefix('_').map(str::parse::<u32>) {
        Some(Ok(pixels)) if pixels > 0 => NameSize::Suffix(pixels),
        _ => NameSize::Unparsable,
    }
}

/// Infers the display size of a raster rendition.
///
/// `probe` is only called for a bare `<base>.png`; it returns the image's
/// pixel width, or `None` when the header cannot be read.
pub fn infer_raster_size<F>(base: &str, file_name: &str, probe: F) -> RasterSize
where
    F: FnOnce() -> Option<u32>,
{
    match parse_size_suffix(base, file_name) {
        NameSize::Suffix(pixels) => RasterSize {
            pixels,
            source: SizeSource::Suffix,
        },
        NameSize::NoSuffix => match probe().filter(|w| *w > 0) {
            Some(pixels) => RasterSize {
                pixels,
                source: SizeSource::Probed,
            },
            None => RasterSize::fallback(),
        },
        NameSize::Unparsable => RasterSize::fallback(),
    }
}

/// Reads the pixel width from an image header without decoding pixels.
pub fn probe_width(path: &Path) -> Option<u32> {
    match image_rs::image_dimensions(path) {
        Ok((width, _)) => Some(width),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "could not probe raster width");
            None
        }
    }
}

pub(crate) fn strip_png_extension(file_name: &str) -> Option<&str> {
    let split = file_name.len().checked_sub(4)?;
    let (stem, ext) = (file_name.get(..split)?, file_name.get(split..)?);
    ext.eq_ignore_ascii_case(".png").then_some(stem)
}
