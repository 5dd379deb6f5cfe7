// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The shell follows the Elm-style "state down, messages up" pattern: views
//! borrow the gallery state and emit [`crate::app::Message`]s.
//!
//! - [`controls`] - Directory, filter, background and size controls
//! - [`gallery_view`] - Rows of rendered icons
//! - [`status_line`] - Status bar coloured by severity
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod gallery_view;
pub mod status_line;
pub mod styles;
