// SPDX-License-Identifier: MPL-2.0
//! SVG rasterization into square icon bitmaps.
//!
//! Two strategies share one entry point, [`render_vector`]:
//!
//! - [`RenderStrategy::Composed`] parses the markup and renders it straight
//!   into the target square with an aspect-preserving, centering transform.
//!   This is the default.
//! - [`RenderStrategy::ToolkitNative`] goes through the generic
//!   [`load_image`](super::load_image) path, which rasterizes at the
//!   document's intrinsic size, and then resamples to the square. Non-square
//!   documents come out stretched.
//!
//! Rendering never fails from the caller's point of view: invalid documents
//! yield a transparent bitmap of the requested size and a warning in the log.

use super::image::{demultiply, load_image, ImageData};
use crate::error::{Error, Result};
use resvg::usvg;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Closing root tag every accepted document must contain.
const SVG_CLOSING_TAG: &str = "</svg>";

/// How SVG files are turned into bitmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// Render into the target square, aspect-preserving and centered.
    #[default]
    Composed,
    /// Load at intrinsic size through the generic loader, then resample.
    ToolkitNative,
}

/// Rejects markup that has no closing `</svg>` tag (case-insensitive).
///
/// This is the only sanity check applied before handing the document to the
/// parser; truncated files are the common failure in icon sets.
pub fn validate_markup(markup: &str) -> Result<()> {
    if markup.to_ascii_lowercase().contains(SVG_CLOSING_TAG) {
        Ok(())
    } else {
        Err(Error::InvalidVectorContent(
            "missing closing </svg> tag".into(),
        ))
    }
}

/// Rasterizes SVG markup into a `size`×`size` bitmap, letterboxed on a
/// transparent background.
///
/// # Errors
///
/// Returns [`Error::InvalidVectorContent`] if the markup fails validation,
/// cannot be parsed, or `size` is zero.
pub fn rasterize_svg(markup: &str, size: u32) -> Result<ImageData> {
    validate_markup(markup)?;
    let tree = usvg::Tree::from_data(markup.as_bytes(), &usvg::Options::default())
        .map_err(|e| Error::InvalidVectorContent(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or_else(|| {
        Error::InvalidVectorContent(format!("cannot allocate a {size}x{size} pixmap"))
    })?;

    let doc = tree.size();
    let target = size as f32;
    let scale = (target / doc.width()).min(target / doc.height());
    let offset_x = (target - doc.width() * scale) / 2.0;
    let offset_y = (target - doc.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, offset_x, offset_y);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(size, size, demultiply(&pixmap)))
}

/// Renders the SVG at `path` as a `size`×`size` bitmap using `strategy`.
///
/// Failures are logged and replaced by a transparent bitmap so one broken
/// icon never aborts a gallery load.
pub fn render_vector(path: &Path, size: u32, strategy: RenderStrategy) -> ImageData {
    let rendered = match strategy {
        RenderStrategy::Composed => fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|markup| rasterize_svg(&markup, size)),
        RenderStrategy::ToolkitNative => load_image(path).map(|data| data.resized_exact(size)),
    };

    rendered.unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), size, %err, "rendering placeholder for SVG");
        ImageData::transparent(size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WIDE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">
        <rect width="100" height="50" fill="red"/>
    </svg>"#;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16">
        <rect width="16" height="16" fill="#00ff00"/>
    </svg>"##;

    fn alpha(data: &ImageData, x: u32, y: u32) -> u8 {
        data.pixel(x, y).expect("pixel in bounds")[3]
    }

    #[test]
    fn wide_document_is_letterboxed_not_stretched() {
        let data = rasterize_svg(WIDE_SVG, 64).expect("valid svg");

        assert_eq!(data.dimensions(), (64, 64));
        // 2:1 content occupies the central 64x32 band.
        assert_eq!(alpha(&data, 32, 4), 0);
        assert_eq!(alpha(&data, 32, 15), 0);
        assert_eq!(alpha(&data, 0, 17), 255);
        assert_eq!(alpha(&data, 63, 32), 255);
        assert_eq!(alpha(&data, 32, 47), 255);
        assert_eq!(alpha(&data, 32, 48), 0);
        assert_eq!(alpha(&data, 32, 60), 0);
        assert_eq!(data.pixel(32, 32), Some([255, 0, 0, 255]));
    }

    #[test]
    fn tall_document_is_centered_horizontally() {
        let tall = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 40">
            <rect width="10" height="40" fill="black"/>
        </svg>"#;
        let data = rasterize_svg(tall, 32).expect("valid svg");

        // 1:4 content scaled to 8x32, centered at x 12..20.
        assert_eq!(alpha(&data, 4, 16), 0);
        assert_eq!(alpha(&data, 16, 16), 255);
        assert_eq!(alpha(&data, 28, 16), 0);
    }

    #[test]
    fn same_markup_renders_independently_per_size() {
        let small = rasterize_svg(WIDE_SVG, 16).expect("valid svg");
        let large = rasterize_svg(WIDE_SVG, 128).expect("valid svg");

        assert_eq!(small.dimensions(), (16, 16));
        assert_eq!(large.dimensions(), (128, 128));
        assert_eq!(alpha(&small, 8, 1), 0);
        assert_eq!(alpha(&small, 8, 8), 255);
        assert_eq!(alpha(&large, 64, 20), 0);
        assert_eq!(alpha(&large, 64, 64), 255);
    }

    #[test]
    fn square_document_fills_the_square() {
        let data = rasterize_svg(SQUARE_SVG, 48).expect("valid svg");
        assert_eq!(data.pixel(0, 0), Some([0, 255, 0, 255]));
        assert_eq!(data.pixel(47, 47), Some([0, 255, 0, 255]));
    }

    #[test]
    fn missing_closing_tag_is_rejected() {
        let truncated = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect"#;
        assert!(matches!(
            rasterize_svg(truncated, 32),
            Err(Error::InvalidVectorContent(_))
        ));
    }

    #[test]
    fn closing_tag_check_ignores_case() {
        assert!(validate_markup("<SVG></SVG>").is_ok());
        assert!(validate_markup("<svg/>").is_err());
    }

    #[test]
    fn unparsable_markup_is_rejected() {
        assert!(matches!(
            rasterize_svg("<html></svg>", 32),
            Err(Error::InvalidVectorContent(_))
        ));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(rasterize_svg(SQUARE_SVG, 0).is_err());
    }

    #[test]
    fn render_vector_falls_back_to_transparent_placeholder() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.svg");
        fs::write(&path, "<svg><g>").expect("write svg");

        for strategy in [RenderStrategy::Composed, RenderStrategy::ToolkitNative] {
            let data = render_vector(&path, 40, strategy);
            assert_eq!(data.dimensions(), (40, 40));
            assert!(data.is_fully_transparent());
        }
    }

    #[test]
    fn render_vector_missing_file_is_placeholder() {
        let dir = tempdir().expect("failed to create temp dir");
        let data = render_vector(&dir.path().join("gone.svg"), 20, RenderStrategy::Composed);
        assert_eq!(data.dimensions(), (20, 20));
        assert!(data.is_fully_transparent());
    }

    #[test]
    fn toolkit_native_stretches_non_square_documents() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("wide.svg");
        fs::write(&path, WIDE_SVG).expect("write svg");

        let native = render_vector(&path, 64, RenderStrategy::ToolkitNative);
        let composed = render_vector(&path, 64, RenderStrategy::Composed);

        assert_eq!(native.dimensions(), (64, 64));
        assert_eq!(composed.dimensions(), (64, 64));
        // The native path fills the whole box, the composed path leaves bands.
        assert_eq!(alpha(&native, 32, 4), 255);
        assert_eq!(alpha(&composed, 32, 4), 0);
    }

    #[test]
    fn strategy_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: RenderStrategy,
        }
        let parsed: Wrapper = toml::from_str("strategy = \"toolkit-native\"").expect("valid toml");
        assert_eq!(parsed.strategy, RenderStrategy::ToolkitNative);
        assert_eq!(RenderStrategy::default(), RenderStrategy::Composed);
    }
}
