// SPDX-License-Identifier: MPL-2.0
//! Toast widget for the error indicator.
//!
//! The toast is a red card anchored to the top-right corner with the error
//! text and a dismiss button. While a replacement is in progress it turns a
//! lighter red and grows slightly.

use super::state::{ErrorInfo, Indicator, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Glyph drawn inside the dismiss button.
const DISMISS_GLYPH: &str = "✕";

pub struct Toast;

impl Toast {
    /// Renders the toast card for `error`.
    pub fn view<'a>(error: &'a ErrorInfo, replacing: bool, i18n: &I18n) -> Element<'a, Message> {
        let message_widget = Text::new(error.message())
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let dismiss_button = button(Text::new(DISMISS_GLYPH).size(sizing::ICON_SM))
            .on_press(Message::Dismiss)
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let labelled_dismiss = tooltip(
            dismiss_button,
            Text::new(i18n.tr("indicator-dismiss")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        );

        // Layout: [message] [dismiss]
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(message_widget)
            .push(labelled_dismiss);

        // The zero-height spacer keeps short toasts at the minimum width.
        let content = Column::new()
            .push(Space::new().width(Length::Fixed(sizing::TOAST_MIN_WIDTH)))
            .push(row);

        let padding = if replacing {
            spacing::SM + sizing::TOAST_PULSE
        } else {
            spacing::SM
        };

        Container::new(content)
            .width(Length::Shrink)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding(padding)
            .style(move |_theme: &Theme| toast_container_style(replacing))
            .into()
    }

    /// Renders the overlay for the indicator: the toast in the top-right
    /// corner, or nothing when hidden.
    pub fn view_overlay<'a>(indicator: &'a Indicator, i18n: &I18n) -> Element<'a, Message> {
        match indicator.current() {
            Some(error) => Container::new(Self::view(error, indicator.is_replacing(), i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into(),
            // Empty container that takes no space
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

/// Card background for the steady and replacing states.
fn toast_background(replacing: bool) -> Color {
    if replacing {
        palette::ERROR_400
    } else {
        palette::ERROR_500
    }
}

/// Style function for the toast container.
fn toast_container_style(replacing: bool) -> container::Style {
    container::Style {
        background: Some(Background::Color(toast_background(replacing))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ERROR_100,
        button::Status::Active => palette::WHITE,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        },
    };
    let background = match status {
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::BASE.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
