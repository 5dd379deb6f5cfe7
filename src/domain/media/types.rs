// SPDX-License-Identifier: MPL-2.0
//! Asset classification.

use std::path::Path;

/// The two asset formats the gallery understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Scalable SVG source; re-rendered whenever the global icon size changes.
    Vector,
    /// PNG rendition; always shown at its native size.
    Raster,
}

impl AssetKind {
    /// Lower-case file extension for this kind, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vector => "svg",
            Self::Raster => "png",
        }
    }

    /// Classifies a path by its extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        [Self::Vector, Self::Raster]
            .into_iter()
            .find(|kind| ext.eq_ignore_ascii_case(kind.extension()))
    }

    /// Returns `true` for assets that follow the global icon size.
    #[must_use]
    pub fn is_resizable(self) -> bool {
        matches!(self, Self::Vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_ignores_extension_case() {
        assert_eq!(AssetKind::from_path(Path::new("a.SVG")), Some(AssetKind::Vector));
        assert_eq!(AssetKind::from_path(Path::new("a_32.Png")), Some(AssetKind::Raster));
        assert_eq!(AssetKind::from_path(Path::new("a.jpg")), None);
        assert_eq!(AssetKind::from_path(Path::new("svg")), None);
    }

    #[test]
    fn only_vectors_are_resizable() {
        assert!(AssetKind::Vector.is_resizable());
        assert!(!AssetKind::Raster.is_resizable());
    }
}
