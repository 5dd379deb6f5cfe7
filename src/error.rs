// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the gallery core.
///
/// Every variant is recoverable: the shell shows it in the status line and
/// keeps running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The user submitted an empty directory path.
    #[error("Please enter a directory path.")]
    InvalidPath,

    /// The path does not resolve to an existing directory.
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The directory exists but holds no SVG files.
    #[error("No SVG files found in: {}", .0.display())]
    NoAssetsFound(PathBuf),

    /// SVG markup that could not be parsed or is missing its closing tag.
    /// Renders degrade to a transparent placeholder instead of failing.
    #[error("Invalid SVG content: {0}")]
    InvalidVectorContent(String),

    /// A custom background that is not a `#rrggbb` hex color.
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

/// How loudly an error should be reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Error {
    /// Returns the severity used to style the status line.
    ///
    /// An empty directory is something the user can shrug off; everything
    /// else means the request could not be satisfied.
    pub fn severity(&self) -> Severity {
        match self {
            Error::NoAssetsFound(_)
            | Error::InvalidVectorContent(_)
            | Error::InvalidColor(_)
            | Error::Config(_) => Severity::Warning,
            Error::InvalidPath | Error::DirectoryNotFound(_) | Error::Io(_) => Severity::Error,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
