// SPDX-License-Identifier: MPL-2.0
//! Resolution of a [`GlassConfig`] into concrete Iced values.

use super::GlassConfig;
use crate::ui::design_tokens::{border, palette};
use crate::ui::theming::is_dark_theme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Concrete values behind a glass surface for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassStyle {
    pub fill: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub radius: f32,
    pub shadow: Shadow,
    /// Backdrop blur radius. Iced has no backdrop filter, so this is exposed
    /// for custom renderers; the fill alpha carries the frosted look.
    pub backdrop_blur: f32,
}

impl GlassConfig {
    /// Resolves the light (`dark == false`) or dark variant.
    #[must_use]
    pub fn resolve(&self, dark: bool) -> GlassStyle {
        let fill_base = if dark { palette::GRAY_900 } else { palette::WHITE };
        let (light_alpha, dark_alpha) = self.border.opacity_pair();
        let border_color = if dark {
            match self.border {
                super::BorderStyle::Subtle => Color {
                    a: dark_alpha,
                    ..palette::GRAY_800
                },
                super::BorderStyle::Normal => Color {
                    a: dark_alpha,
                    ..palette::GRAY_700
                },
            }
        } else {
            Color {
                a: light_alpha,
                ..palette::WHITE
            }
        };

        GlassStyle {
            fill: Color {
                a: self.intensity.fill_opacity(),
                ..fill_base
            },
            border_color,
            border_width: border::WIDTH_SM,
            radius: self.rounded.radius(),
            shadow: self.shadow.to_iced(),
            backdrop_blur: self.intensity.blur_radius(),
        }
    }

    /// Container style for the given theme.
    #[must_use]
    pub fn style(&self, theme: &Theme) -> container::Style {
        self.resolve(is_dark_theme(theme)).into()
    }
}

impl From<GlassStyle> for container::Style {
    fn from(style: GlassStyle) -> Self {
        container::Style {
            background: Some(Background::Color(style.fill)),
            border: Border {
                color: style.border_color,
                width: style.border_width,
                radius: style.radius.into(),
            },
            shadow: style.shadow,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::glass::{BorderStyle, Intensity, Rounded, Shadow as GlassShadow};

    #[test]
    fn light_variant_uses_white_fill() {
        let style = GlassConfig::default().resolve(false);
        assert_eq!(style.fill.r, palette::WHITE.r);
        assert_eq!(style.fill.a, 0.5);
        assert_eq!(style.border_color.a, 0.2);
    }

    #[test]
    fn dark_variant_uses_gray_fill_and_border() {
        let style = GlassConfig::default()
            .intensity(Intensity::High)
            .border(BorderStyle::Normal)
            .resolve(true);
        assert_eq!(style.fill.r, palette::GRAY_900.r);
        assert_eq!(style.fill.a, 0.7);
        assert_eq!(style.border_color.r, palette::GRAY_700.r);
        assert_eq!(style.border_color.a, 0.4);
    }

    #[test]
    fn theme_selects_variant() {
        let config = GlassConfig::default();
        let dark = config.style(&Theme::Dark);
        let light = config.style(&Theme::Light);
        assert_ne!(dark.background, light.background);
    }

    #[test]
    fn shadow_none_has_no_blur() {
        let style = GlassConfig::default().shadow(GlassShadow::None).resolve(false);
        assert_eq!(style.shadow.blur_radius, 0.0);
    }

    #[test]
    fn radius_follows_rounded_option() {
        let style = GlassConfig::default().rounded(Rounded::Full).resolve(false);
        assert_eq!(style.radius, crate::ui::design_tokens::radius::FULL);
        let container: container::Style = style.into();
        assert_eq!(container.border.width, border::WIDTH_SM);
    }
}
