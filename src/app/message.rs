// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::domain::ui::BackgroundColor;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The directory path input was edited.
    PathChanged(String),
    /// Load the directory currently typed in the path input.
    LoadRequested,
    /// Open the native folder picker.
    BrowseRequested,
    /// Result from the folder picker; `None` when cancelled.
    FolderPicked(Option<PathBuf>),
    /// The filter input was edited.
    FilterChanged(String),
    BackgroundSelected(BackgroundColor),
    /// The custom color input was edited.
    CustomColorChanged(String),
    /// Apply the hex color typed in the custom color input.
    CustomColorSubmitted,
    /// The "Toolkit engine" checkbox was toggled.
    ToolkitEngineToggled(bool),
    /// A size preset or the slider picked a new vector icon size.
    IconSizeSelected(u32),
    /// The gallery was scrolled; carries the vertical offset as a `0.0..=1.0`
    /// ratio.
    GalleryScrolled(f32),
}
