// SPDX-License-Identifier: MPL-2.0
//! Directory scanner that pairs SVG icons with their PNG renditions.
//!
//! A PNG belongs to an SVG when its name is exactly `<base>.png` or
//! `<base>_<digits>.png`, where `<base>` is the SVG file name without its
//! final extension. Matching is anchored at both ends, so `icon.svg` never
//! claims `icon-2_32.png` or `icon-large.png`.

use crate::domain::media::AssetKind;
use crate::error::Result;
use crate::media::size_hint::{self, strip_png_extension, RasterSize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A PNG rendition attached to an SVG, with its inferred display size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterAssociation {
    pub path: PathBuf,
    pub size: RasterSize,
}

impl RasterAssociation {
    /// Caption shown under the raster, e.g. `48px`.
    pub fn label(&self) -> String {
        self.size.label()
    }
}

/// One SVG file and the PNG renditions sharing its base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetGroup {
    pub svg: PathBuf,
    pub rasters: Vec<RasterAssociation>,
}

impl AssetGroup {
    /// File name of the SVG, without directories.
    pub fn svg_file_name(&self) -> String {
        file_name_of(&self.svg)
    }
}

/// Accepts PNG names that belong to one SVG base name.
#[derive(Debug, Clone, Copy)]
pub struct RasterMatcher<'a> {
    base: &'a str,
}

impl<'a> RasterMatcher<'a> {
    pub fn new(base: &'a str) -> Self {
        Self { base }
    }

    /// Returns `true` if `file_name` is `<base>.png` or `<base>_<digits>.png`
    /// (extension case-insensitive).
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(rest) = strip_png_extension(file_name).and_then(|s| s.strip_prefix(self.base))
        else {
            return false;
        };
        match rest.strip_prefix('_') {
            None => rest.is_empty(),
            Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        }
    }
}

/// Groups a directory listing into SVG/PNG asset groups.
///
/// `listing` holds bare file names inside `directory`. Groups come out sorted
/// by SVG file name; each group's rasters keep the sorted PNG order. Files
/// that are neither SVG nor PNG are ignored. SVGs sharing a base name (such
/// as `icon.svg` and `icon.SVG`) produce one group, for the first in order.
/// PNG widths are probed from disk only for bare `<base>.png` names.
pub fn pair<I, S>(directory: &Path, listing: I) -> Vec<AssetGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut svgs = Vec::new();
    let mut pngs = Vec::new();
    for name in listing {
        let name = name.as_ref();
        match AssetKind::from_path(Path::new(name)) {
            Some(AssetKind::Vector) => svgs.push(name.to_string()),
            Some(AssetKind::Raster) => pngs.push(name.to_string()),
            None => {}
        }
    }
    svgs.sort();
    pngs.sort();

    let mut seen_bases = HashSet::new();
    svgs.iter()
        .filter(|svg| {
            let fresh = seen_bases.insert(base_name(svg));
            if !fresh {
                tracing::debug!(file = %svg, "skipping SVG with duplicate base name");
            }
            fresh
        })
        .map(|svg| {
            let base = base_name(svg);
            let matcher = RasterMatcher::new(base);
            let rasters = pngs
                .iter()
                .filter(|png| matcher.matches(png))
                .map(|png| {
                    let path = directory.join(png);
                    let size =
                        size_hint::infer_raster_size(base, png, || size_hint::probe_width(&path));
                    RasterAssociation { path, size }
                })
                .collect();
            AssetGroup {
                svg: directory.join(svg),
                rasters,
            }
        })
        .collect()
}

/// Lists the regular files directly inside `directory` and pairs them.
///
/// Returns an empty list if the directory holds no SVG files.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<AssetGroup>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => names.push(name.to_string()),
            None => tracing::debug!(path = %path.display(), "skipping non UTF-8 file name"),
        }
    }

    let groups = pair(directory, &names);
    tracing::debug!(
        directory = %directory.display(),
        files = names.len(),
        groups = groups.len(),
        "scanned directory"
    );
    Ok(groups)
}

/// File name without its final extension.
fn base_name(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::size_hint::SizeSource;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn names(groups: &[AssetGroup]) -> Vec<(String, Vec<String>)> {
        groups
            .iter()
            .map(|g| {
                (
                    g.svg_file_name(),
                    g.rasters.iter().map(|r| file_name_of(&r.path)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn groups_are_sorted_by_svg_name() {
        let groups = pair(Path::new("/icons"), ["zoom.svg", "Add.svg", "edit.svg", "add.svg"]);
        let order: Vec<_> = groups.iter().map(AssetGroup::svg_file_name).collect();
        assert_eq!(order, ["Add.svg", "add.svg", "edit.svg", "zoom.svg"]);
        assert_eq!(groups[0].svg, Path::new("/icons/Add.svg"));
    }

    #[test]
    fn rasters_attach_in_sorted_order() {
        let groups = pair(
            Path::new("/icons"),
            ["edit_32.png", "edit.svg", "edit_16.png", "edit_128.png", "other.png"],
        );
        assert_eq!(
            names(&groups),
            [(
                "edit.svg".to_string(),
                vec![
                    "edit_128.png".to_string(),
                    "edit_16.png".to_string(),
                    "edit_32.png".to_string()
                ]
            )]
        );
        let sizes: Vec<_> = groups[0].rasters.iter().map(|r| r.size.pixels).collect();
        assert_eq!(sizes, [128, 16, 32]);
    }

    #[test]
    fn prefix_base_names_do_not_cross_match() {
        let groups = pair(
            Path::new("/icons"),
            ["icon.svg", "icon-2.svg", "icon-2_32.png", "icon-large_32.png", "icon_32.png"],
        );
        assert_eq!(
            names(&groups),
            [
                ("icon-2.svg".to_string(), vec!["icon-2_32.png".to_string()]),
                ("icon.svg".to_string(), vec!["icon_32.png".to_string()]),
            ]
        );
    }

    #[test]
    fn matcher_is_anchored_and_requires_digits() {
        let matcher = RasterMatcher::new("go");
        assert!(matcher.matches("go.png"));
        assert!(matcher.matches("go_22.png"));
        assert!(matcher.matches("go_22.PNG"));
        assert!(!matcher.matches("go_.png"));
        assert!(!matcher.matches("go_x2.png"));
        assert!(!matcher.matches("go_22.png.bak"));
        assert!(!matcher.matches("go_22.svg.png"));
        assert!(!matcher.matches("go-up.png"));
        assert!(!matcher.matches("ago.png"));
        assert!(!matcher.matches("go.svg"));
    }

    #[test]
    fn base_name_strips_only_final_extension() {
        assert_eq!(base_name("icon.dark.svg"), "icon.dark");
        let groups = pair(Path::new("/i"), ["icon.dark.svg", "icon.dark_24.png", "icon.png"]);
        assert_eq!(
            names(&groups),
            [("icon.dark.svg".to_string(), vec!["icon.dark_24.png".to_string()])]
        );
    }

    #[test]
    fn extensions_are_case_insensitive() {
        let groups = pair(Path::new("/i"), ["Logo.SVG", "Logo_48.Png", "Logo_64.png"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].rasters.len(), 2);
    }

    #[test]
    fn svgs_sharing_a_base_name_form_one_group() {
        let groups = pair(Path::new("/i"), ["icon.svg", "icon.SVG", "icon_16.png"]);
        assert_eq!(
            names(&groups),
            [("icon.SVG".to_string(), vec!["icon_16.png".to_string()])]
        );
    }

    #[test]
    fn no_svgs_means_no_groups() {
        assert!(pair(Path::new("/i"), ["a.png", "b_16.png", "notes.txt"]).is_empty());
        assert!(pair(Path::new("/i"), Vec::<String>::new()).is_empty());
    }

    #[test]
    fn scan_directory_pairs_real_files_and_probes_bare_png() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("star.svg"), "<svg></svg>").expect("write svg");
        fs::write(dir.path().join("star_16.png"), b"not decoded").expect("write png");
        RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 255]))
            .save(dir.path().join("star.png"))
            .expect("write png");
        fs::create_dir(dir.path().join("nested.svg")).expect("create dir");
        fs::write(dir.path().join("readme.md"), "#").expect("write md");

        let groups = scan_directory(dir.path()).expect("scan succeeds");
        assert_eq!(groups.len(), 1);
        let rasters = &groups[0].rasters;
        assert_eq!(rasters.len(), 2);

        assert_eq!(file_name_of(&rasters[0].path), "star.png");
        assert_eq!(rasters[0].size.pixels, 40);
        assert_eq!(rasters[0].size.source, SizeSource::Probed);
        assert_eq!(rasters[0].label(), "40px (native)");

        assert_eq!(file_name_of(&rasters[1].path), "star_16.png");
        assert_eq!(rasters[1].size.source, SizeSource::Suffix);
    }

    #[test]
    fn scan_directory_missing_directory_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = scan_directory(&dir.path().join("missing"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn scan_directory_without_svgs_is_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("lonely_32.png"), b"x").expect("write png");
        assert!(scan_directory(dir.path()).expect("scan succeeds").is_empty());
    }
}
