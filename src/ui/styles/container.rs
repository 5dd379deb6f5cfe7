// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::ui::BackgroundColor;
use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Converts a gallery background into an iced color.
pub fn to_color(color: BackgroundColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// Solid gallery surface painted with the user's background color.
pub fn gallery(color: BackgroundColor) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(to_color(color))),
        ..Default::default()
    }
}

/// Thin frame around one gallery row.
pub fn entry_row(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: Color {
                a: 0.4,
                ..palette::GRAY_700
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
