// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for UI values, ensuring they are always within valid
//! ranges.

// =============================================================================
// Icon Size Bounds
// =============================================================================

/// Icon size bounds in pixels (16 to 128).
pub mod icon_size_bounds {
    /// Smallest supported icon edge.
    pub const MIN: u32 = 16;
    /// Largest supported icon edge.
    pub const MAX: u32 = 128;
    /// Size used until the user picks another one.
    pub const DEFAULT: u32 = 32;
    /// Size presets offered next to the slider.
    pub const PRESETS: [u32; 3] = [32, 48, 64];
}

// =============================================================================
// IconSize
// =============================================================================

/// Edge length of a square vector icon, guaranteed to be within 16–128 px.
///
/// Raster icons never use this type; they keep the size inferred from their
/// file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(u32);

impl IconSize {
    /// Creates a new icon size, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(icon_size_bounds::MIN, icon_size_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether the size is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= icon_size_bounds::MIN
    }

    /// Returns whether the size is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= icon_size_bounds::MAX
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self(icon_size_bounds::DEFAULT)
    }
}

impl From<u32> for IconSize {
    fn from(pixels: u32) -> Self {
        Self::new(pixels)
    }
}
