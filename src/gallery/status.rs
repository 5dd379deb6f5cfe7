// SPDX-License-Identifier: MPL-2.0
//! Status line summaries for gallery operations.

use std::fmt;
use std::path::PathBuf;

/// Outcome of a successful directory load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub directory: PathBuf,
    pub svg_count: usize,
    pub raster_count: usize,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loaded {} SVG file(s)", self.svg_count)?;
        if self.raster_count > 0 {
            write!(f, " with {} corresponding PNG(s)", self.raster_count)?;
        }
        write!(f, " from: {}", self.directory.display())
    }
}

/// How many entries the current filter leaves visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub visible: usize,
    pub total: usize,
    /// Trimmed filter text; empty when no filter is active.
    pub query: String,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "Showing all {} items", self.total)
        } else {
            write!(
                f,
                "Showing {} of {} items matching '{}'",
                self.visible, self.total, self.query
            )
        }
    }
}
