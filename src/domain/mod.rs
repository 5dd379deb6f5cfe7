// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no I/O and no toolkit dependencies.
//!
//! # Modules
//!
//! - [`media`]: Asset classification ([`AssetKind`](media::AssetKind)) and the
//!   file-name filter ([`NameFilter`](media::NameFilter))
//! - [`ui`]: Presentation value objects ([`IconSize`](ui::IconSize),
//!   [`BackgroundColor`](ui::BackgroundColor), [`LabelTone`](ui::LabelTone))

pub mod media;
pub mod ui;
