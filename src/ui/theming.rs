// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use iced::Theme;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true when the mode resolves to a dark appearance.
    ///
    /// `System` asks the OS and falls back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Resolves the mode into an Iced theme.
    ///
    /// `System` performs a blocking OS query; resolve once and keep the result.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

/// Returns whether a theme renders on a dark background.
#[must_use]
pub fn is_dark_theme(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}
