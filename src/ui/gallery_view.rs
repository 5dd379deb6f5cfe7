// SPDX-License-Identifier: MPL-2.0
//! Scrollable list of gallery rows.
//!
//! Each visible entry becomes one row: the SVG in its disabled and enabled
//! states, then every matching PNG as a disabled/enabled pair with its size
//! label, then the SVG file name.

use crate::app::Message;
use crate::domain::ui::LabelTone;
use crate::gallery::{GalleryEntry, GalleryState, RenderableIcon};
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::scrollable::Viewport;
use iced::widget::{container, scrollable, text, Column, Id, Row};
use iced::{Color, Element, Length};

/// Identifier of the gallery scrollable, used to restore its position.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

pub fn view(state: &GalleryState) -> Element<'_, Message> {
    let label_color = label_color(state.label_tone());

    let content: Element<'_, Message> = if state.is_empty() {
        text("Load a directory to see its icons.")
            .size(typography::BODY)
            .color(label_color)
            .into()
    } else {
        state
            .visible_entries()
            .fold(Column::new().spacing(spacing::XS), |column, entry| {
                column.push(entry_row(entry, label_color))
            })
            .into()
    };

    let rows = scrollable(container(content).padding(spacing::SM).width(Length::Fill))
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(|viewport: Viewport| {
            Message::GalleryScrolled(viewport.relative_offset().y)
        });

    container(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::gallery(state.background()))
        .into()
}

/// Text color for captions drawn on the gallery background.
pub fn label_color(tone: LabelTone) -> Color {
    match tone {
        LabelTone::Light => palette::WHITE,
        LabelTone::Dark => palette::BLACK,
    }
}

fn entry_row(entry: &GalleryEntry, label_color: Color) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(captioned(&entry.vector.states.disabled, "Disabled", label_color))
        .push(captioned(&entry.vector.states.enabled, "Enabled", label_color));

    for raster in &entry.rasters {
        row = row.push(raster_pair(raster, label_color));
    }

    row = row.push(
        text(entry.file_name())
            .size(typography::BODY)
            .color(label_color)
            .width(Length::Fixed(sizing::FILE_NAME_WIDTH)),
    );

    container(row)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::entry_row)
        .into()
}

fn raster_pair(icon: &RenderableIcon, label_color: Color) -> Element<'_, Message> {
    let bitmaps = Row::new()
        .spacing(spacing::XXS)
        .push(bitmap(&icon.states.disabled))
        .push(bitmap(&icon.states.enabled));

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(bitmaps)
        .push(caption(&icon.label, label_color))
        .into()
}

fn captioned<'a>(image: &'a ImageData, label: &'a str, label_color: Color) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(bitmap(image))
        .push(caption(label, label_color))
        .into()
}

/// Draws a bitmap at exactly its pixel size.
fn bitmap(image: &ImageData) -> Element<'_, Message> {
    Image::new(image.handle.clone())
        .width(Length::Fixed(image.width as f32))
        .height(Length::Fixed(image.height as f32))
        .into()
}

fn caption(label: &str, color: Color) -> Element<'_, Message> {
    text(label).size(typography::CAPTION).color(color).into()
}
