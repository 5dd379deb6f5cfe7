// SPDX-License-Identifier: MPL-2.0
//! File-name filter used to hide gallery entries.
//!
//! Filtering never removes entries; it only decides visibility, so clearing
//! the filter is free.

/// Case-insensitive substring filter on file names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameFilter {
    /// Text as typed, trimmed.
    text: String,
    /// Lower-cased copy used for matching.
    needle: String,
}

impl NameFilter {
    /// Creates a filter from user input. Surrounding whitespace is ignored.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    /// The trimmed filter text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the filter hides anything at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Returns `true` if `file_name` should be shown.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        !self.is_active() || file_name.to_lowercase().contains(&self.needle)
    }
}
