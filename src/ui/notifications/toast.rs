// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with a kind-colored accent, a title, a message and a dismiss
//! button. The overlay stacks them at the configured [`ToastPosition`].

use super::manager::Message;
use super::notification::Notification;
use super::position::ToastPosition;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();

        let icon_widget = Text::new(kind.glyph())
            .size(sizing::ICON_SM)
            .color(accent_color);

        let title_widget = Text::new(notification.title())
            .size(typography::BODY_LG)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let message_widget = Text::new(notification.body())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let text_column = Column::new()
            .spacing(spacing::XXS)
            .push(title_widget)
            .push(message_widget);

        let dismiss_button = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [title + message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(icon_widget)
                    .width(Length::Fixed(sizing::ICON_MD))
                    .align_x(alignment::Horizontal::Center),
            )
            .push(
                Container::new(text_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the overlay with all notifications anchored at `position`.
    ///
    /// `notifications` is expected newest first. Bottom-anchored stacks are
    /// reversed so the newest toast sits closest to the screen edge.
    pub fn view_overlay(
        notifications: &[Notification],
        position: ToastPosition,
    ) -> Element<'_, Message> {
        if notifications.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts: Vec<Element<'_, Message>> = if position.newest_at_bottom() {
            notifications.iter().rev().map(Self::view).collect()
        } else {
            notifications.iter().map(Self::view).collect()
        };

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(position.horizontal());

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(position.horizontal())
            .align_y(position.vertical())
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, text_color, border) = match status {
        button::Status::Active => (None, base.text, iced::Border::default()),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text, rounded),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text, rounded),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            iced::Border::default(),
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}
