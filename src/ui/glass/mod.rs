// SPDX-License-Identifier: MPL-2.0
//! Frosted-glass surfaces.
//!
//! A glass surface is a semi-transparent fill, a faint border and an
//! elevation shadow, parameterized by a handful of enumerated options.
//! [`GlassConfig`] is recomputed on every render and carries no identity.
//!
//! # Usage
//!
//! ```ignore
//! use iced_frost::ui::glass::{self, GlassConfig, Intensity, Shadow};
//!
//! let panel = glass::glass(
//!     text("Now playing"),
//!     GlassConfig::default().intensity(Intensity::High).shadow(Shadow::Xl),
//! );
//! ```
//!
//! The same configuration also reports itself as a utility-class list via
//! [`GlassConfig::classes`], which is what snapshot tests compare against.

mod classes;
mod style;

pub use classes::ClassList;
pub use style::GlassStyle;

use crate::ui::design_tokens::{blur, opacity, radius, shadow};
use iced::widget::Container;
use iced::Element;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// How opaque and how blurred the glass fill is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    /// Fill and backdrop blur classes, light and dark variants.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Intensity::Low => "bg-white/30 dark:bg-gray-900/30 backdrop-blur-sm",
            Intensity::Medium => "bg-white/50 dark:bg-gray-900/50 backdrop-blur-lg",
            Intensity::High => "bg-white/70 dark:bg-gray-900/70 backdrop-blur-3xl",
        }
    }

    /// Alpha of the fill color. Identical in light and dark variants.
    #[must_use]
    pub fn fill_opacity(self) -> f32 {
        match self {
            Intensity::Low => opacity::GLASS_LOW,
            Intensity::Medium => opacity::GLASS_MEDIUM,
            Intensity::High => opacity::GLASS_HIGH,
        }
    }

    /// Backdrop blur radius in logical pixels.
    #[must_use]
    pub fn blur_radius(self) -> f32 {
        match self {
            Intensity::Low => blur::SM,
            Intensity::Medium => blur::LG,
            Intensity::High => blur::XXXL,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        })
    }
}

/// Strength of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Subtle,
    Normal,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 2] = [BorderStyle::Subtle, BorderStyle::Normal];

    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            BorderStyle::Subtle => "border border-white/20 dark:border-gray-800/30",
            BorderStyle::Normal => "border border-white/30 dark:border-gray-700/40",
        }
    }

    /// Border alpha for the light and dark variants, in that order.
    #[must_use]
    pub fn opacity_pair(self) -> (f32, f32) {
        match self {
            BorderStyle::Subtle => (opacity::BORDER_SUBTLE_LIGHT, opacity::BORDER_SUBTLE_DARK),
            BorderStyle::Normal => (opacity::BORDER_NORMAL_LIGHT, opacity::BORDER_NORMAL_DARK),
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BorderStyle::Subtle => "subtle",
            BorderStyle::Normal => "normal",
        })
    }
}

/// Elevation of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Shadow {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[default]
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Shadow {
    pub const ALL: [Shadow; 6] = [
        Shadow::None,
        Shadow::Sm,
        Shadow::Md,
        Shadow::Lg,
        Shadow::Xl,
        Shadow::Xxl,
    ];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Shadow::None => "shadow-none",
            Shadow::Sm => "shadow-sm",
            Shadow::Md => "shadow-md",
            Shadow::Lg => "shadow-lg",
            Shadow::Xl => "shadow-xl",
            Shadow::Xxl => "shadow-2xl",
        }
    }

    #[must_use]
    pub fn to_iced(self) -> iced::Shadow {
        match self {
            Shadow::None => shadow::NONE,
            Shadow::Sm => shadow::SM,
            Shadow::Md => shadow::MD,
            Shadow::Lg => shadow::LG,
            Shadow::Xl => shadow::XL,
            Shadow::Xxl => shadow::XXL,
        }
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class().trim_start_matches("shadow-"))
    }
}

impl FromStr for Shadow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_prefix("shadow-").unwrap_or(s);
        Shadow::ALL
            .into_iter()
            .find(|shadow| shadow.class().strip_prefix("shadow-") == Some(key))
            .ok_or_else(|| format!("unknown shadow '{s}'"))
    }
}

/// Corner rounding, on the utility-class radius scale or as an exact pixel value.
///
/// Any other rounded class (`rounded-t-2xl`, `rounded-[1.5rem]`, responsive
/// variants) is kept verbatim as [`Rounded::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rounded {
    None,
    Sm,
    Base,
    Md,
    Lg,
    Xl,
    #[default]
    Xxl,
    Xxxl,
    Full,
    /// Arbitrary radius, written `rounded-[28px]`.
    Px(u16),
    /// Class string passed through unchanged.
    Custom(String),
}

impl Rounded {
    #[must_use]
    pub fn class(&self) -> Cow<'_, str> {
        match self {
            Rounded::None => "rounded-none".into(),
            Rounded::Sm => "rounded-sm".into(),
            Rounded::Base => "rounded".into(),
            Rounded::Md => "rounded-md".into(),
            Rounded::Lg => "rounded-lg".into(),
            Rounded::Xl => "rounded-xl".into(),
            Rounded::Xxl => "rounded-2xl".into(),
            Rounded::Xxxl => "rounded-3xl".into(),
            Rounded::Full => "rounded-full".into(),
            Rounded::Px(px) => format!("rounded-[{px}px]").into(),
            Rounded::Custom(class) => Cow::Borrowed(class.as_str()),
        }
    }

    /// Corner radius in logical pixels.
    ///
    /// A custom class uses the radius of its first class on the named or
    /// pixel scale, and the default radius otherwise.
    #[must_use]
    pub fn radius(&self) -> f32 {
        match self {
            Rounded::None => radius::NONE,
            Rounded::Sm => radius::SM,
            Rounded::Base => radius::BASE,
            Rounded::Md => radius::MD,
            Rounded::Lg => radius::LG,
            Rounded::Xl => radius::XL,
            Rounded::Xxl => radius::XXL,
            Rounded::Xxxl => radius::XXXL,
            Rounded::Full => radius::FULL,
            Rounded::Px(px) => f32::from(*px),
            Rounded::Custom(class) => class
                .split_whitespace()
                .find_map(Rounded::parse_scale)
                .map_or(radius::XXL, |rounded| rounded.radius()),
        }
    }

    /// Parses a single class on the named or pixel scale.
    fn parse_scale(class: &str) -> Option<Rounded> {
        let named = match class {
            "rounded-none" => Some(Rounded::None),
            "rounded-sm" => Some(Rounded::Sm),
            "rounded" => Some(Rounded::Base),
            "rounded-md" => Some(Rounded::Md),
            "rounded-lg" => Some(Rounded::Lg),
            "rounded-xl" => Some(Rounded::Xl),
            "rounded-2xl" => Some(Rounded::Xxl),
            "rounded-3xl" => Some(Rounded::Xxxl),
            "rounded-full" => Some(Rounded::Full),
            _ => None,
        };
        named.or_else(|| {
            class
                .strip_prefix("rounded-[")
                .and_then(|rest| rest.strip_suffix("px]"))
                .and_then(|px| px.parse::<u16>().ok())
                .map(Rounded::Px)
        })
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class())
    }
}

impl FromStr for Rounded {
    type Err = String;

    /// Never fails on a non-blank value: unknown classes become
    /// [`Rounded::Custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let class = s.trim();
        if class.is_empty() {
            return Err("empty rounded class".to_string());
        }
        Ok(Rounded::parse_scale(class).unwrap_or_else(|| Rounded::Custom(class.to_string())))
    }
}

impl TryFrom<String> for Rounded {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rounded> for String {
    fn from(rounded: Rounded) -> Self {
        if let Rounded::Custom(class) = rounded {
            return class;
        }
        let class = rounded.class().into_owned();
        class
    }
}

/// Options for a glass surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    pub rounded: Rounded,
    pub intensity: Intensity,
    pub border: BorderStyle,
    pub shadow: Shadow,
    /// Extra classes appended after the computed ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl GlassConfig {
    #[must_use]
    pub fn rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = rounded;
        self
    }

    #[must_use]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    #[must_use]
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Composes the class list: rounding, fill, border, shadow, then extras.
    #[must_use]
    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::new()
            .with(self.rounded.class())
            .with(self.intensity.classes())
            .with(self.border.classes())
            .with(self.shadow.class());
        list.push_opt(self.class_name.as_deref());
        list
    }
}

/// Wraps `content` in a glass surface. The content is passed through untouched.
pub fn glass<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    config: GlassConfig,
) -> Container<'a, Message> {
    Container::new(content).style(move |theme| config.style(theme))
}
