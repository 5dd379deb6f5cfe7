// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Shadow, Theme};

/// Style for the active choice in a group of preset buttons.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => return button::secondary(theme, status),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Picks [`selected`] or the theme's secondary style.
pub fn preset(is_selected: bool) -> fn(&Theme, button::Status) -> button::Style {
    if is_selected {
        selected
    } else {
        button::secondary
    }
}
