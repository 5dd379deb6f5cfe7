// SPDX-License-Identifier: MPL-2.0
//! `svg_gallery` previews a directory of SVG icons next to their PNG
//! renditions, built with the Iced GUI framework.
//!
//! The core is usable without the GUI: [`directory_scanner`] pairs files,
//! [`media`] rasterizes them and [`gallery`] keeps the rendered state that the
//! [`app`] shell draws.

pub mod app;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
