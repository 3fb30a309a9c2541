// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::components::{dialog, Tabs, Toggle};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::notifications::{Kind, Notification, Toast, ToastPosition};
use iced::widget::{button, container, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{Alignment, Color, Element, Length};

/// Everything the root view reads.
pub struct ViewContext<'a> {
    pub toggle: &'a Toggle,
    pub tabs: &'a Tabs,
    pub dialog_open: bool,
    pub toasts: &'a [Notification],
    pub position: ToastPosition,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let push_buttons = Kind::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, kind| {
        row.push(button(Text::new(kind.default_title())).on_press(Message::Push(*kind)))
    });

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new("Lumen UI").size(typography::TITLE_MD))
        .push(push_buttons.push(button(Text::new("Clear")).on_press(Message::ClearToasts)))
        .push(ctx.toggle.view().map(Message::Toggle))
        .push(ctx.tabs.view().map(Message::Tabs))
        .push(button(Text::new("Open dialog")).on_press(Message::Dialog(dialog::Message::Trigger)));

    let mut stack = Stack::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if ctx.dialog_open {
        stack = stack.push(view_dialog());
    }
    stack
        .push(Toast::view_overlay(ctx.toasts, ctx.position).map(Message::Notification))
        .into()
}

fn view_dialog<'a>() -> Element<'a, Message> {
    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Alignment::End)
            .push(Text::new("Wallet settings saved.").size(typography::BODY_LG))
            .push(button(Text::new("Close")).on_press(Message::Dialog(dialog::Message::Close))),
    )
    .width(sizing::TOAST_WIDTH)
    .padding(spacing::MD)
    .style(|theme: &iced::Theme| container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let backdrop = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::BLACK
                }
                .into(),
            ),
            ..Default::default()
        });

    mouse_area(backdrop)
        .on_press(Message::Dialog(dialog::Message::OverlayPressed))
        .into()
}
