// SPDX-License-Identifier: MPL-2.0
//! Application root state and the iced update loop.
//!
//! `App` holds the gallery model plus the raw text of the input fields, and
//! translates messages into gallery operations. Every outcome lands in the
//! status line; nothing here is fatal.

pub mod config;
mod message;
pub mod paths;
mod view;

pub use message::Message;

use crate::domain::ui::BackgroundColor;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::media::RenderStrategy;
use crate::ui::gallery_view;
use crate::ui::status_line::StatusLine;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const APP_NAME: &str = "SVG Gallery";

/// Root iced application state.
pub struct App {
    gallery: Gallery,
    /// Text of the directory input, loaded on submit.
    path_input: String,
    /// Text of the filter input, applied on every keystroke.
    filter_input: String,
    /// Text of the custom background input, applied on submit.
    color_input: String,
    /// Last vertical scroll position of the gallery, as a ratio.
    scroll_ratio: f32,
    status: StatusLine,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.gallery.state().directory())
            .field("entries", &self.gallery.state().entries().len())
            .field("status", &self.status)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Reads `settings.toml` and builds the initial state.
    fn new() -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        (Self::from_config(&config, warning), Task::none())
    }

    fn from_config(config: &config::Config, warning: Option<Error>) -> Self {
        let status = match warning {
            Some(err) => StatusLine::from_error(&err),
            None => StatusLine::info("Enter or browse to a directory containing SVG files."),
        };
        let gallery = Gallery::new(config.gallery_settings());
        let color_input = gallery.state().background().to_hex();
        Self {
            gallery,
            path_input: String::new(),
            filter_input: String::new(),
            color_input,
            scroll_ratio: 0.0,
            status,
        }
    }

    fn title(&self) -> String {
        let directory_name = self
            .gallery
            .state()
            .directory()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match directory_name {
            Some(name) => format!("{name} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PathChanged(path) => {
                self.path_input = path;
                Task::none()
            }
            Message::LoadRequested => {
                self.load_directory();
                Task::none()
            }
            Message::BrowseRequested => {
                let start = self.gallery.state().directory().map(PathBuf::from);
                handle_browse(start)
            }
            Message::FolderPicked(Some(path)) => {
                self.path_input = path.to_string_lossy().into_owned();
                self.load_directory();
                Task::none()
            }
            // User cancelled the dialog
            Message::FolderPicked(None) => Task::none(),
            Message::FilterChanged(text) => {
                let summary = self.gallery.set_filter(&text);
                self.filter_input = text;
                if !self.gallery.state().is_empty() {
                    self.status = StatusLine::info(summary.to_string());
                }
                Task::none()
            }
            Message::BackgroundSelected(color) => {
                self.gallery.set_background_color(color);
                self.color_input = color.to_hex();
                Task::none()
            }
            Message::CustomColorChanged(text) => {
                self.color_input = text;
                Task::none()
            }
            Message::CustomColorSubmitted => match self.color_input.parse::<BackgroundColor>() {
                Ok(color) => self.update(Message::BackgroundSelected(color)),
                Err(err) => {
                    self.status = StatusLine::from_error(&err);
                    Task::none()
                }
            },
            Message::ToolkitEngineToggled(enabled) => {
                let strategy = if enabled {
                    RenderStrategy::ToolkitNative
                } else {
                    RenderStrategy::Composed
                };
                self.gallery.set_render_strategy(strategy);
                Task::none()
            }
            Message::IconSizeSelected(pixels) => {
                let previous = self.gallery.state().icon_size();
                if self.gallery.set_global_icon_size(pixels) == previous {
                    return Task::none();
                }
                // Rows change height, so keep the same relative position.
                operation::snap_to(
                    Id::new(gallery_view::SCROLLABLE_ID),
                    RelativeOffset {
                        x: 0.0,
                        y: self.scroll_ratio,
                    },
                )
            }
            Message::GalleryScrolled(ratio) => {
                self.scroll_ratio = scroll_ratio(ratio);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            path_input: &self.path_input,
            filter_input: &self.filter_input,
            color_input: &self.color_input,
            status: &self.status,
        })
    }

    fn load_directory(&mut self) {
        self.status = match self.gallery.load(&self.path_input) {
            Ok(summary) => StatusLine::success(summary.to_string()),
            Err(err) => StatusLine::from_error(&err),
        };
    }
}

/// Sanitizes a reported scroll ratio. Content shorter than the viewport
/// reports a non-finite offset.
fn scroll_ratio(reported: f32) -> f32 {
    if reported.is_finite() {
        reported.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Opens the native folder picker, starting in the current directory if any.
fn handle_browse(start: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Select SVG Directory");

            if let Some(dir) = start {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::{BackgroundColor, LabelTone};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use crate::ui::status_line::StatusKind;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8">
        <rect width="8" height="8" fill="red"/>
    </svg>"#;

    fn app() -> App {
        App::from_config(&config::Config::default(), None)
    }

    fn icon_dir(names: &[&str]) -> TempDir {
        let dir = tempdir().expect("failed to create temp dir");
        for name in names {
            fs::write(dir.path().join(name), SVG).expect("failed to write svg");
        }
        dir
    }

    fn load(app: &mut App, dir: &TempDir) {
        let _ = app.update(Message::PathChanged(
            dir.path().to_string_lossy().into_owned(),
        ));
        let _ = app.update(Message::LoadRequested);
    }

    #[test]
    fn new_app_starts_empty_with_hint() {
        let app = app();
        assert!(app.gallery.state().is_empty());
        assert_eq!(app.status.kind, StatusKind::Info);
        assert_eq!(app.title(), APP_NAME);
    }

    #[test]
    fn config_warning_is_shown_at_startup() {
        let app = App::from_config(
            &config::Config::default(),
            Some(Error::Config("bad file".into())),
        );
        assert_eq!(app.status.kind, StatusKind::Warning);
        assert!(app.status.text.contains("bad file"));
    }

    #[test]
    fn load_reports_summary_and_sets_title() {
        let dir = icon_dir(&["add.svg", "remove.svg"]);
        let mut app = app();
        load(&mut app, &dir);

        assert_eq!(app.status.kind, StatusKind::Success);
        assert!(app.status.text.starts_with("Loaded 2 SVG file(s) from: "));
        let dir_name = dir
            .path()
            .file_name()
            .expect("temp dir has a name")
            .to_string_lossy()
            .into_owned();
        assert_eq!(app.title(), format!("{dir_name} - {APP_NAME}"));
    }

    #[test]
    fn blank_path_shows_error() {
        let mut app = app();
        let _ = app.update(Message::LoadRequested);
        assert_eq!(app.status.kind, StatusKind::Error);
        assert_eq!(app.status.text, "Please enter a directory path.");
    }

    #[test]
    fn empty_directory_shows_warning() {
        let dir = icon_dir(&[]);
        let mut app = app();
        load(&mut app, &dir);
        assert_eq!(app.status.kind, StatusKind::Warning);
    }

    #[test]
    fn filter_updates_status_after_load() {
        let dir = icon_dir(&["alpha.svg", "beta.svg"]);
        let mut app = app();

        let _ = app.update(Message::FilterChanged("x".into()));
        assert_eq!(app.status.kind, StatusKind::Info);
        assert!(!app.status.text.starts_with("Showing"));

        load(&mut app, &dir);
        let _ = app.update(Message::FilterChanged("BET".into()));
        assert_eq!(app.status.text, "Showing 1 of 2 items matching 'BET'");
        assert_eq!(app.filter_input, "BET");
    }

    #[test]
    fn background_and_size_messages_reach_the_gallery() {
        let mut app = app();
        let _ = app.update(Message::BackgroundSelected(BackgroundColor::NATIVE));
        assert_eq!(app.gallery.state().label_tone(), LabelTone::Dark);

        let _ = app.update(Message::IconSizeSelected(64));
        assert_eq!(app.gallery.state().icon_size().value(), 64);

        let _ = app.update(Message::ToolkitEngineToggled(true));
        assert_eq!(app.gallery.render_strategy(), RenderStrategy::ToolkitNative);
    }

    #[test]
    fn custom_color_is_applied_on_submit() {
        let mut app = app();
        assert_eq!(app.color_input, "#5a5a5a");

        let _ = app.update(Message::CustomColorChanged("#ffff00".into()));
        assert_eq!(app.gallery.state().background(), BackgroundColor::MEDIUM);

        let _ = app.update(Message::CustomColorSubmitted);
        assert_eq!(
            app.gallery.state().background(),
            BackgroundColor::new(255, 255, 0)
        );
        assert_eq!(app.gallery.state().label_tone(), LabelTone::Dark);
    }

    #[test]
    fn invalid_custom_color_warns_and_keeps_background() {
        let mut app = app();
        let _ = app.update(Message::CustomColorChanged("yellow".into()));
        let _ = app.update(Message::CustomColorSubmitted);

        assert_eq!(app.status.kind, StatusKind::Warning);
        assert_eq!(app.gallery.state().background(), BackgroundColor::MEDIUM);
    }

    #[test]
    fn preset_selection_refreshes_custom_color_text() {
        let mut app = app();
        let _ = app.update(Message::BackgroundSelected(BackgroundColor::DARK));
        assert_eq!(app.color_input, "#282828");
    }

    #[test]
    fn scroll_position_is_kept_as_a_ratio() {
        let mut app = app();
        let _ = app.update(Message::GalleryScrolled(0.4));
        assert_abs_diff_eq!(app.scroll_ratio, 0.4, epsilon = F32_EPSILON);

        let _ = app.update(Message::IconSizeSelected(96));
        assert_eq!(app.gallery.state().icon_size().value(), 96);
        assert_abs_diff_eq!(app.scroll_ratio, 0.4, epsilon = F32_EPSILON);
    }

    #[test]
    fn scroll_ratio_is_clamped_and_ignores_nan() {
        assert_abs_diff_eq!(scroll_ratio(1.5), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(scroll_ratio(-0.2), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(scroll_ratio(f32::NAN), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn picked_folder_is_loaded_and_cancel_is_ignored() {
        let dir = icon_dir(&["one.svg"]);
        let mut app = app();

        let _ = app.update(Message::FolderPicked(None));
        assert!(app.gallery.state().is_empty());

        let _ = app.update(Message::FolderPicked(Some(dir.path().to_path_buf())));
        assert_eq!(app.gallery.state().entries().len(), 1);
        assert_eq!(app.path_input, dir.path().to_string_lossy());
    }
}
