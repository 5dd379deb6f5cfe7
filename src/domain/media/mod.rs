// SPDX-License-Identifier: MPL-2.0
//! Media domain types.

pub mod filter;
pub mod types;

pub use filter::NameFilter;
pub use types::AssetKind;
