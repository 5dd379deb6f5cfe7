// SPDX-License-Identifier: MPL-2.0
//! Gallery state: rendered entries plus the presentation settings applied to
//! them.

use crate::directory_scanner::{AssetGroup, RasterAssociation};
use crate::domain::media::{AssetKind, NameFilter};
use crate::domain::ui::{BackgroundColor, IconSize, LabelTone};
use crate::media::{render_raster, render_vector, IconStates, RenderStrategy};
use std::path::{Path, PathBuf};

/// One rendered asset: an SVG at the global icon size or a PNG at its
/// native size, in both interaction states.
#[derive(Debug, Clone)]
pub struct RenderableIcon {
    pub source: PathBuf,
    pub kind: AssetKind,
    /// Edge length of both bitmaps.
    pub size: u32,
    /// Caption shown with the icon.
    pub label: String,
    pub states: IconStates,
}

impl RenderableIcon {
    /// Renders an SVG at `size`.
    pub fn vector(source: &Path, size: IconSize, strategy: RenderStrategy) -> Self {
        Self {
            source: source.to_path_buf(),
            kind: AssetKind::Vector,
            size: size.value(),
            label: vector_label(size),
            states: IconStates::from_base(render_vector(source, size.value(), strategy)),
        }
    }

    /// Renders a PNG rendition at its inferred size.
    pub fn raster(association: &RasterAssociation) -> Self {
        let states = IconStates::from_base(render_raster(
            &association.path,
            association.size.pixels,
        ));
        Self {
            source: association.path.clone(),
            kind: AssetKind::Raster,
            size: states.dimensions().0,
            label: association.label(),
            states,
        }
    }

    /// Re-renders a vector icon at `size`.
    ///
    /// Raster icons keep their native size; returns `false` and leaves them
    /// untouched.
    pub fn resize(&mut self, size: IconSize, strategy: RenderStrategy) -> bool {
        if !self.kind.is_resizable() {
            return false;
        }
        *self = Self::vector(&self.source, size, strategy);
        true
    }
}

fn vector_label(size: IconSize) -> String {
    format!("{0}×{0} px", size.value())
}

/// One row of the gallery: an asset group and its rendered icons.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub group: AssetGroup,
    pub vector: RenderableIcon,
    pub rasters: Vec<RenderableIcon>,
    file_name: String,
    visible: bool,
}

impl GalleryEntry {
    pub(super) fn render(group: AssetGroup, size: IconSize, strategy: RenderStrategy) -> Self {
        let vector = RenderableIcon::vector(&group.svg, size, strategy);
        let rasters = group.rasters.iter().map(RenderableIcon::raster).collect();
        let file_name = group.svg_file_name();
        Self {
            group,
            vector,
            rasters,
            file_name,
            visible: true,
        }
    }

    /// File name of the SVG; what the filter matches against.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(super) fn apply_filter(&mut self, filter: &NameFilter) {
        self.visible = filter.matches(&self.file_name);
    }

    /// The vector icon followed by the raster icons.
    pub fn icons(&self) -> impl Iterator<Item = &RenderableIcon> {
        std::iter::once(&self.vector).chain(self.rasters.iter())
    }
}

/// Everything the shell needs to draw the gallery.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub(super) directory: Option<PathBuf>,
    pub(super) entries: Vec<GalleryEntry>,
    pub(super) icon_size: IconSize,
    pub(super) background: BackgroundColor,
    pub(super) label_tone: LabelTone,
    pub(super) filter: NameFilter,
}

impl GalleryState {
    /// Directory of the last successful load.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// All entries, visible or not, in SVG file name order.
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Entries that pass the current filter.
    pub fn visible_entries(&self) -> impl Iterator<Item = &GalleryEntry> {
        self.entries.iter().filter(|e| e.is_visible())
    }

    pub fn visible_count(&self) -> usize {
        self.visible_entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn icon_size(&self) -> IconSize {
        self.icon_size
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    /// Label tone matching [`background`](Self::background).
    pub fn label_tone(&self) -> LabelTone {
        self.label_tone
    }

    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// Total number of PNG renditions across all entries.
    pub fn raster_count(&self) -> usize {
        self.entries.iter().map(|e| e.rasters.len()).sum()
    }
}
