// SPDX-License-Identifier: MPL-2.0
//! Control panel above the gallery: directory, filter, background and size.

use crate::app::Message;
use crate::domain::ui::{icon_size_bounds, BackgroundColor, IconSize};
use crate::media::RenderStrategy;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, checkbox, slider, text, text_input, Column, Row};
use iced::{Element, Length};

/// Everything the control panel displays.
pub struct ViewContext<'a> {
    pub path_input: &'a str,
    pub filter_input: &'a str,
    pub color_input: &'a str,
    pub background: BackgroundColor,
    pub icon_size: IconSize,
    pub strategy: RenderStrategy,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(path_row(ctx.path_input))
        .push(filter_row(ctx.filter_input))
        .push(background_row(ctx.background, ctx.color_input, ctx.strategy))
        .push(size_row(ctx.icon_size))
        .into()
}

fn path_row(path_input: &str) -> Element<'_, Message> {
    let input = text_input("Directory containing SVG files", path_input)
        .on_input(Message::PathChanged)
        .on_submit(Message::LoadRequested)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fill);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text("Directory:").size(typography::BODY))
        .push(input)
        .push(button(text("Browse...")).on_press(Message::BrowseRequested))
        .push(
            button(text("Load SVGs"))
                .on_press(Message::LoadRequested)
                .style(styles::button::selected),
        )
        .into()
}

fn filter_row(filter_input: &str) -> Element<'_, Message> {
    let input = text_input("Filter by file name", filter_input)
        .on_input(Message::FilterChanged)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fill);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text("Filter:").size(typography::BODY))
        .push(input)
        .into()
}

fn background_row(
    current: BackgroundColor,
    color_input: &str,
    strategy: RenderStrategy,
) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text("Background:").size(typography::BODY));

    for (name, color) in BackgroundColor::presets() {
        row = row.push(
            button(text(name).size(typography::BODY_SM))
                .on_press(Message::BackgroundSelected(color))
                .style(styles::button::preset(color == current)),
        );
    }

    let custom = text_input("#rrggbb", color_input)
        .on_input(Message::CustomColorChanged)
        .on_submit(Message::CustomColorSubmitted)
        .padding(spacing::XXS)
        .size(typography::BODY_SM)
        .width(Length::Fixed(sizing::COLOR_INPUT_WIDTH));

    row = row.push(custom).push(
        button(text("Custom Color").size(typography::BODY_SM))
            .on_press(Message::CustomColorSubmitted)
            .style(styles::button::preset(
                !BackgroundColor::presets().iter().any(|(_, c)| *c == current),
            )),
    );

    let toolkit_engine = checkbox(strategy == RenderStrategy::ToolkitNative)
        .label("Toolkit engine")
        .on_toggle(Message::ToolkitEngineToggled);

    row.push(toolkit_engine).into()
}

fn size_row<'a>(current: IconSize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text("Icon size:").size(typography::BODY));

    for preset in icon_size_bounds::PRESETS {
        row = row.push(
            button(text(format!("{preset}px")).size(typography::BODY_SM))
                .on_press(Message::IconSizeSelected(preset))
                .style(styles::button::preset(current.value() == preset)),
        );
    }

    let size_slider = slider(
        icon_size_bounds::MIN..=icon_size_bounds::MAX,
        current.value(),
        Message::IconSizeSelected,
    )
    .step(1u32)
    .width(Length::Fixed(sizing::SLIDER_WIDTH));

    row.push(size_slider)
        .push(text(format!("{0}×{0} px", current.value())).size(typography::BODY_SM))
        .into()
}
