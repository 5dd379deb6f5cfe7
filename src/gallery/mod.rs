// SPDX-License-Identifier: MPL-2.0
//! Gallery model.
//!
//! Owns the loaded asset groups and their rendered icons, and applies the
//! global presentation settings (icon size, background, filter, render
//! strategy) to them. The iced shell only reads [`GalleryState`] and forwards
//! user intents to the methods here.

mod state;
mod status;

pub use state::{GalleryEntry, GalleryState, RenderableIcon};
pub use status::{FilterSummary, LoadSummary};

use crate::directory_scanner;
use crate::domain::media::NameFilter;
use crate::domain::ui::{BackgroundColor, IconSize, LabelTone};
use crate::error::{Error, Result};
use crate::media::RenderStrategy;
use std::path::Path;

/// Settings the gallery starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GallerySettings {
    pub icon_size: IconSize,
    pub background: BackgroundColor,
    pub strategy: RenderStrategy,
}

/// The gallery model.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    state: GalleryState,
    strategy: RenderStrategy,
}

impl Gallery {
    #[must_use]
    pub fn new(settings: GallerySettings) -> Self {
        let state = GalleryState {
            icon_size: settings.icon_size,
            background: settings.background,
            label_tone: settings.background.label_tone(),
            ..GalleryState::default()
        };
        Self {
            state,
            strategy: settings.strategy,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn render_strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Scans `path` and replaces the gallery contents with its asset groups.
    ///
    /// Every icon is rendered before the swap, so on any error the previous
    /// contents stay in place. The current icon size, background, filter and
    /// strategy carry over to the new contents.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] if `path` is blank.
    /// - [`Error::DirectoryNotFound`] if it is not an existing directory.
    /// - [`Error::NoAssetsFound`] if the directory holds no SVG files.
    /// - [`Error::Io`] if the directory cannot be listed.
    pub fn load(&mut self, path: &str) -> Result<LoadSummary> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidPath);
        }
        let directory = Path::new(trimmed);
        if !directory.is_dir() {
            return Err(Error::DirectoryNotFound(directory.to_path_buf()));
        }

        let groups = directory_scanner::scan_directory(directory)?;
        if groups.is_empty() {
            tracing::warn!(directory = %directory.display(), "no SVG files found");
            return Err(Error::NoAssetsFound(directory.to_path_buf()));
        }

        let mut entries: Vec<GalleryEntry> = groups
            .into_iter()
            .map(|group| GalleryEntry::render(group, self.state.icon_size, self.strategy))
            .collect();
        for entry in &mut entries {
            entry.apply_filter(&self.state.filter);
        }

        self.state.entries = entries;
        self.state.directory = Some(directory.to_path_buf());

        let summary = LoadSummary {
            directory: directory.to_path_buf(),
            svg_count: self.state.entries.len(),
            raster_count: self.state.raster_count(),
        };
        tracing::info!(
            directory = %summary.directory.display(),
            svgs = summary.svg_count,
            pngs = summary.raster_count,
            "gallery loaded"
        );
        Ok(summary)
    }

    /// Re-renders every vector icon at `pixels`, clamped to the supported
    /// range. Raster icons keep their native size.
    ///
    /// Returns the size actually applied.
    pub fn set_global_icon_size(&mut self, pixels: u32) -> IconSize {
        let size = IconSize::new(pixels);
        if size == self.state.icon_size {
            return size;
        }
        self.state.icon_size = size;
        self.rerender_vectors();
        tracing::debug!(size = size.value(), "icon size changed");
        size
    }

    /// Shows only entries whose SVG file name contains `text`, ignoring case.
    /// Blank text shows everything.
    pub fn set_filter(&mut self, text: &str) -> FilterSummary {
        self.state.filter = NameFilter::new(text);
        for entry in &mut self.state.entries {
            entry.apply_filter(&self.state.filter);
        }
        FilterSummary {
            visible: self.state.visible_count(),
            total: self.state.entries.len(),
            query: self.state.filter.text().to_string(),
        }
    }

    /// Changes the gallery background and returns the label tone that goes
    /// with it.
    pub fn set_background_color(&mut self, color: BackgroundColor) -> LabelTone {
        self.state.background = color;
        self.state.label_tone = color.label_tone();
        tracing::debug!(
            color = ?color.to_array(),
            luminance = color.relative_luminance(),
            "background changed"
        );
        self.state.label_tone
    }

    /// Switches the vector render strategy and re-renders vector icons.
    pub fn set_render_strategy(&mut self, strategy: RenderStrategy) {
        if strategy == self.strategy {
            return;
        }
        self.strategy = strategy;
        self.rerender_vectors();
        tracing::debug!(?strategy, "render strategy changed");
    }

    fn rerender_vectors(&mut self) {
        let (size, strategy) = (self.state.icon_size, self.strategy);
        for entry in &mut self.state.entries {
            entry.vector.resize(size, strategy);
        }
    }
}
