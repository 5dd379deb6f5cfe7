// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration keys missing from `settings.toml`.

use crate::domain::ui::{icon_size_bounds, BackgroundColor};

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Vector icon edge length at startup.
pub const DEFAULT_ICON_SIZE: u32 = icon_size_bounds::DEFAULT;

/// Gallery background at startup (medium dark gray).
pub const DEFAULT_BACKGROUND: [u8; 3] = [
    BackgroundColor::MEDIUM.r,
    BackgroundColor::MEDIUM.g,
    BackgroundColor::MEDIUM.b,
];
