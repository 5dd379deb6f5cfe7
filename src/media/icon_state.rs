// SPDX-License-Identifier: MPL-2.0
//! Enabled/disabled icon variants.
//!
//! Both variants are computed once per render and stored side by side, so the
//! shell can draw them together without re-rendering anything.

use super::image::ImageData;

/// Fraction of the original opacity kept by the disabled variant.
pub const DISABLED_OPACITY: f32 = 0.5;

/// The two interaction states of one rendered icon.
#[derive(Debug, Clone)]
pub struct IconStates {
    pub enabled: ImageData,
    pub disabled: ImageData,
}

impl IconStates {
    /// Builds both states from a base bitmap. The enabled state is the base
    /// bitmap itself.
    #[must_use]
    pub fn from_base(base: ImageData) -> Self {
        let disabled = disabled_variant(&base);
        Self {
            enabled: base,
            disabled,
        }
    }

    /// Dimensions shared by both states.
    pub fn dimensions(&self) -> (u32, u32) {
        self.enabled.dimensions()
    }
}

/// Produces the "dimmed" look of a non-interactive icon: every pixel is
/// reduced to its luma and its alpha scaled by [`DISABLED_OPACITY`].
#[must_use]
pub fn disabled_variant(base: &ImageData) -> ImageData {
    let pixels = base
        .rgba_bytes()
        .chunks_exact(4)
        .flat_map(|px| {
            let gray = luma(px[0], px[1], px[2]);
            let alpha = (f32::from(px[3]) * DISABLED_OPACITY).round() as u8;
            [gray, gray, gray, alpha]
        })
        .collect();
    ImageData::from_rgba(base.width, base.height, pixels)
}

/// Integer luma with weights 11/16/5 out of 32.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 11 + u32::from(g) * 16 + u32::from(b) * 5) / 32) as u8
}
