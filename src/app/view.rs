// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery::Gallery;
use crate::ui::status_line::{self, StatusLine};
use crate::ui::{controls, gallery_view};
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub path_input: &'a str,
    pub filter_input: &'a str,
    pub color_input: &'a str,
    pub status: &'a StatusLine,
}

/// Renders the controls, the status line and the gallery, top to bottom.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.gallery.state();
    let controls = controls::view(controls::ViewContext {
        path_input: ctx.path_input,
        filter_input: ctx.filter_input,
        color_input: ctx.color_input,
        background: state.background(),
        icon_size: state.icon_size(),
        strategy: ctx.gallery.render_strategy(),
    });

    let column = Column::new()
        .push(controls)
        .push(status_line::view(ctx.status))
        .push(gallery_view::view(state));

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
