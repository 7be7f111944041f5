// SPDX-License-Identifier: MPL-2.0
//! View rendering for the showcase application.
//!
//! A centered glass panel with the controls, with the error toast stacked on
//! top while the indicator is mounted.

use super::{Message, Sample};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::glass::{glass, BorderStyle, GlassConfig, Intensity, Shadow};
use crate::ui::indicator::{Indicator, State, Toast};
use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Font, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub indicator: &'a Indicator,
    pub indicator_mounted: bool,
    pub glass: &'a GlassConfig,
}

/// Renders the panel and, when mounted, the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = Container::new(view_panel(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(panel);

    if ctx.indicator_mounted {
        stack = stack.push(Toast::view_overlay(ctx.indicator, ctx.i18n).map(Message::Indicator));
    }

    stack.into()
}

fn view_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let triggers = [Sample::Network, Sample::Disk, Sample::BackgroundSync]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, sample| {
            row.push(button(Text::new(i18n.tr(sample.label_key()))).on_press(Message::Publish(sample)))
        });

    let mount_label = if ctx.indicator_mounted {
        "demo-unmount-indicator"
    } else {
        "demo-mount-indicator"
    };
    let mount_toggle = button(Text::new(i18n.tr(mount_label))).on_press(Message::ToggleIndicator);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("demo-description")).size(typography::BODY))
        .push(triggers)
        .push(mount_toggle)
        .push(view_glass_controls(ctx.glass, i18n))
        .push(Text::new(status_text(ctx)).size(typography::BODY))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("demo-classes-label")).size(typography::TITLE_SM))
                .push(
                    Text::new(ctx.glass.classes().to_string())
                        .font(Font::MONOSPACE)
                        .size(typography::CAPTION),
                ),
        );

    glass(
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::PANEL_WIDTH)),
        ctx.glass.clone(),
    )
    .into()
}

fn view_glass_controls<'a>(config: &GlassConfig, i18n: &I18n) -> Element<'a, Message> {
    let labelled = |key: &str, control: Element<'a, Message>| {
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                    .width(Length::Fixed(sizing::LABEL_WIDTH)),
            )
            .push(control)
    };

    Column::new()
        .spacing(spacing::XS)
        .push(labelled(
            "demo-intensity-label",
            pick_list(
                Intensity::ALL.to_vec(),
                Some(config.intensity),
                Message::IntensitySelected,
            )
            .into(),
        ))
        .push(labelled(
            "demo-border-label",
            pick_list(
                BorderStyle::ALL.to_vec(),
                Some(config.border),
                Message::BorderSelected,
            )
            .into(),
        ))
        .push(labelled(
            "demo-shadow-label",
            pick_list(Shadow::ALL.to_vec(), Some(config.shadow), Message::ShadowSelected).into(),
        ))
        .push(labelled(
            "demo-language-label",
            pick_list(
                i18n.available_locales.clone(),
                Some(i18n.current_locale().clone()),
                Message::LanguageSelected,
            )
            .into(),
        ))
        .into()
}

/// One-line description of the indicator state.
fn status_text(ctx: &ViewContext<'_>) -> String {
    if !ctx.indicator_mounted {
        return ctx.i18n.tr("demo-status-unmounted");
    }
    match ctx.indicator.state() {
        State::Hidden => ctx.i18n.tr("demo-status-hidden"),
        State::Showing(error) => ctx
            .i18n
            .tr_with_args("demo-status-showing", &[("message", error.message())]),
        State::Replacing(error) => ctx
            .i18n
            .tr_with_args("demo-status-replacing", &[("message", error.message())]),
    }
}
