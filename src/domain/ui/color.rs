// SPDX-License-Identifier: MPL-2.0
//! Gallery background color and the label tone derived from it.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Linearized channel values at or below this are on the linear segment of
/// the sRGB curve.
const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;

/// Backgrounds brighter than this get dark labels.
const LUMINANCE_THRESHOLD: f64 = 0.5;

/// An opaque 8-bit RGB background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Text color used for labels drawn on top of the gallery background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    /// Light (white) text, for dark backgrounds.
    Light,
    /// Dark (black) text, for bright backgrounds.
    Dark,
}

impl Default for LabelTone {
    fn default() -> Self {
        BackgroundColor::default().label_tone()
    }
}

impl BackgroundColor {
    /// Platform-like light gray.
    pub const NATIVE: Self = Self::gray(236);
    pub const BRIGHT: Self = Self::gray(110);
    /// Medium dark gray, the startup background.
    pub const MEDIUM: Self = Self::gray(90);
    pub const DARK: Self = Self::gray(40);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Named presets in the order the shell shows them.
    #[must_use]
    pub fn presets() -> [(&'static str, Self); 4] {
        [
            ("Native", Self::NATIVE),
            ("Bright", Self::BRIGHT),
            ("Medium (Default)", Self::MEDIUM),
            ("Dark", Self::DARK),
        ]
    }

    /// WCAG 2.0 relative luminance in `0.0..=1.0`.
    ///
    /// See <https://www.w3.org/TR/WCAG20/#relativeluminancedef>.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Label tone that stays legible on this background.
    #[must_use]
    pub fn label_tone(self) -> LabelTone {
        if self.relative_luminance() > LUMINANCE_THRESHOLD {
            LabelTone::Dark
        } else {
            LabelTone::Light
        }
    }

    /// Formats the color as lower-case `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Returns the channels as `[r, g, b]`.
    #[must_use]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rrggbb` or `rrggbb`, case-insensitive, surrounding whitespace
/// ignored.
impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(trimmed.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColor(trimmed.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<[u8; 3]> for BackgroundColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= SRGB_LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
