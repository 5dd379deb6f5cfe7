// SPDX-License-Identifier: MPL-2.0
//! Turning icon files into bitmaps.
//!
//! - [`rasterizer`]: SVG markup to square bitmaps, with the two render
//!   strategies.
//! - [`image`]: the bitmap type, the generic loader and PNG renditions.
//! - [`icon_state`]: enabled/disabled variants.
//! - [`size_hint`]: display size of PNG renditions from their file names.

pub mod icon_state;
pub mod image;
pub mod rasterizer;
pub mod size_hint;

pub use icon_state::{disabled_variant, IconStates};
pub use image::{load_image, render_raster, ImageData};
pub use rasterizer::{rasterize_svg, render_vector, RenderStrategy};
pub use size_hint::{infer_raster_size, probe_width, RasterSize, SizeSource};
