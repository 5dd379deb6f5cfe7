// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod color;
pub mod newtypes;

pub use color::{BackgroundColor, LabelTone};
pub use newtypes::{icon_size_bounds, IconSize};
