// SPDX-License-Identifier: MPL-2.0
//! Single-line status bar below the controls.

use crate::error::{Error, Severity};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, text};
use iced::{Color, Element, Length};

/// Visual weight of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    fn color(self) -> Color {
        match self {
            StatusKind::Info => palette::GRAY_200,
            StatusKind::Success => palette::SUCCESS_500,
            StatusKind::Warning => palette::WARNING_500,
            StatusKind::Error => palette::ERROR_500,
        }
    }
}

impl From<Severity> for StatusKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => StatusKind::Warning,
            Severity::Error => StatusKind::Error,
        }
    }
}

/// The message currently shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    /// Styles the error by its severity.
    pub fn from_error(error: &Error) -> Self {
        Self {
            kind: error.severity().into(),
            text: error.to_string(),
        }
    }
}

pub fn view<'a, Message: 'a>(status: &'a StatusLine) -> Element<'a, Message> {
    container(
        text(&status.text)
            .size(typography::BODY)
            .color(status.kind.color()),
    )
    .padding([spacing::XXS, spacing::XS])
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn errors_map_to_their_severity() {
        let warning = StatusLine::from_error(&Error::NoAssetsFound(PathBuf::from("/x")));
        assert_eq!(warning.kind, StatusKind::Warning);
        assert_eq!(warning.text, "No SVG files found in: /x");

        let error = StatusLine::from_error(&Error::InvalidPath);
        assert_eq!(error.kind, StatusKind::Error);
    }

    #[test]
    fn default_status_is_empty_info() {
        let status = StatusLine::default();
        assert_eq!(status.kind, StatusKind::Info);
        assert!(status.text.is_empty());
    }
}
