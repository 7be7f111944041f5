// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the showcase application.

use crate::config::Config;
use crate::ui::glass::{BorderStyle, Intensity, Shadow};
use crate::ui::indicator;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Sample errors the showcase can publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Network,
    Disk,
    /// A background-sync failure, which the indicator suppresses.
    BackgroundSync,
}

impl Sample {
    /// i18n key of the message text.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Sample::Network => "demo-sample-network",
            Sample::Disk => "demo-sample-disk",
            Sample::BackgroundSync => "demo-sample-suppressed",
        }
    }

    /// i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Sample::Network => "demo-trigger-network",
            Sample::Disk => "demo-trigger-disk",
            Sample::BackgroundSync => "demo-trigger-suppressed",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Indicator(indicator::Message),
    /// Publish a sample error on the global bus.
    Publish(Sample),
    /// Mount or unmount the error indicator.
    ToggleIndicator,
    IntensitySelected(Intensity),
    BorderSelected(BorderStyle),
    ShadowSelected(Shadow),
    LanguageSelected(LanguageIdentifier),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `zh-CN`).
    pub lang: Option<String>,
    /// Optional theme override.
    pub theme_mode: Option<ThemeMode>,
    /// Directory holding `settings.toml`, instead of the platform default.
    pub config_dir: Option<PathBuf>,
    /// Settings loaded at startup.
    pub config: Config,
    /// i18n key of the warning produced while loading `config`.
    pub config_warning: Option<String>,
}

impl Flags {
    /// Loads the settings from `config_dir` (or the platform directory).
    #[must_use]
    pub fn load(config_dir: Option<PathBuf>) -> Self {
        let (config, config_warning) = crate::config::load_with_override(config_dir.clone());
        Self {
            config_dir,
            config,
            config_warning,
            ..Self::default()
        }
    }
}
