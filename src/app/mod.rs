// SPDX-License-Identifier: MPL-2.0
//! Showcase application wiring the error bus, the error indicator and the
//! glass container together.
//!
//! The `App` owns long-lived state (localization, indicator, glass settings)
//! and routes messages to the indicator. Sample errors are published on the
//! process-wide bus exactly as any other part of a host would publish them.

pub mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Sample};

use crate::bus::{ErrorBus, ErrorEvent};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::glass::GlassConfig;
use crate::ui::indicator::Indicator;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
const MIN_WINDOW_WIDTH: f32 = 560.0;
const MIN_WINDOW_HEIGHT: f32 = 420.0;

/// i18n key of the error published when the settings cannot be written.
const CONFIG_SAVE_ERROR_KEY: &str = "config-save-error";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    bus: ErrorBus,
    indicator: Indicator,
    indicator_mounted: bool,
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Theme resolved from `theme_mode` at startup.
    theme: Theme,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("indicator", &self.indicator.state())
            .field("indicator_mounted", &self.indicator_mounted)
            .field("glass", &self.config.glass)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            bus: ErrorBus::global().clone(),
            indicator: Indicator::new(),
            indicator_mounted: true,
            config: Config::default(),
            config_dir: None,
            theme_mode: ThemeMode::Dark,
            theme: Theme::Dark,
        }
    }
}

/// Window settings used at launch.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the loaded settings and `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            theme_mode,
            config_dir,
            config,
            config_warning,
        } = flags;

        let i18n = I18n::new(lang, &config);
        let theme_mode = theme_mode.unwrap_or(config.general.theme_mode);

        let mut app = App {
            i18n,
            config,
            config_dir,
            theme_mode,
            theme: theme_mode.theme(),
            ..Self::default()
        };

        // Surface the settings problem through the indicator itself.
        let task = match config_warning {
            Some(key) => {
                let event = ErrorEvent::new(app.i18n.tr(&key));
                app.indicator.receive(event).into_task().map(Message::Indicator)
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Uses a dedicated bus instead of the process-wide one.
    #[must_use]
    pub fn with_bus(mut self, bus: ErrorBus) -> Self {
        self.bus = bus;
        self
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn is_indicator_mounted(&self) -> bool {
        self.indicator_mounted
    }

    pub fn glass(&self) -> &GlassConfig {
        &self.config.glass
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_indicator_subscription(&self.bus, self.indicator_mounted)
    }

    /// Writes the settings; a failure is reported on the error bus.
    fn persist(&self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "settings not saved");
            self.bus.publish(self.i18n.tr(CONFIG_SAVE_ERROR_KEY));
        }
    }

    /// Applies `message` and returns the follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Indicator(msg) => return self.indicator.update(msg).map(Message::Indicator),
            Message::Publish(sample) => {
                self.bus.publish(self.i18n.tr(sample.message_key()));
            }
            Message::ToggleIndicator => {
                self.indicator_mounted = !self.indicator_mounted;
                if !self.indicator_mounted {
                    // Unmounting discards the displayed error and any pending settle.
                    self.indicator = Indicator::new();
                }
                tracing::debug!(mounted = self.indicator_mounted, "indicator toggled");
            }
            Message::IntensitySelected(intensity) => {
                self.config.glass.intensity = intensity;
                self.persist();
            }
            Message::BorderSelected(border) => {
                self.config.glass.border = border;
                self.persist();
            }
            Message::ShadowSelected(shadow) => {
                self.config.glass.shadow = shadow;
                self.persist();
            }
            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale);
                self.config.general.language = Some(self.i18n.current_locale().to_string());
                self.persist();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            indicator: &self.indicator,
            indicator_mounted: self.indicator_mounted,
            glass: &self.config.glass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::glass::{BorderStyle, Intensity, Shadow};
    use crate::ui::indicator::{self, State};
    use tempfile::{tempdir, TempDir};
    use unic_langid::LanguageIdentifier;

    /// App with its own bus and a temporary settings directory.
    fn app_with_private_bus() -> (App, ErrorBus, TempDir) {
        let dir = tempdir().expect("temp dir");
        let bus = ErrorBus::new();
        let app = App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            config_dir: Some(dir.path().to_path_buf()),
            ..App::default()
        }
        .with_bus(bus.clone());
        (app, bus, dir)
    }

    #[test]
    fn new_with_default_settings_starts_hidden() {
        let (app, _task) = App::new(Flags {
            theme_mode: Some(ThemeMode::Dark),
            ..Flags::default()
        });
        assert_eq!(app.indicator().state(), &State::Hidden);
        assert!(app.is_indicator_mounted());
        assert_eq!(app.glass(), &GlassConfig::default());
    }

    #[test]
    fn broken_settings_show_a_warning_toast() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "general = [").expect("write");

        let flags = Flags::load(Some(dir.path().to_path_buf()));
        assert_eq!(flags.config_warning.as_deref(), Some(config::CONFIG_LOAD_ERROR_KEY));

        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            theme_mode: Some(ThemeMode::Dark),
            ..flags
        });

        let shown = app.indicator().current().expect("warning shown");
        assert_eq!(shown.message(), app.i18n.tr(config::CONFIG_LOAD_ERROR_KEY));
    }

    #[test]
    fn loaded_settings_reach_the_app() {
        let mut config = Config::default();
        config.glass.intensity = Intensity::High;
        config.general.theme_mode = ThemeMode::Light;

        let (app, _task) = App::new(Flags {
            config,
            ..Flags::default()
        });

        assert_eq!(app.glass().intensity, Intensity::High);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn flags_override_saved_theme() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let (app, _task) = App::new(Flags {
            theme_mode: Some(ThemeMode::Light),
            config,
            ..Flags::default()
        });
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn theme_is_the_one_resolved_at_startup() {
        let (mut app, _bus, _dir) = app_with_private_bus();
        app.theme_mode = ThemeMode::System;
        app.theme = Theme::Light;

        // No re-detection: every call returns the stored theme.
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn publish_reaches_the_bus() {
        let (mut app, bus, _dir) = app_with_private_bus();
        let mut listener = bus.subscribe();

        let _ = app.update(Message::Publish(Sample::Disk));

        assert_eq!(listener.try_next().map(|e| e.message), Some("Disk full".into()));
    }

    #[test]
    fn indicator_messages_are_forwarded() {
        let (mut app, _bus, _dir) = app_with_private_bus();

        let _ = app.update(Message::Indicator(indicator::Message::Received(
            ErrorEvent::new("Network unreachable"),
        )));
        assert!(app.indicator().is_visible());

        let _ = app.update(Message::Indicator(indicator::Message::Dismiss));
        assert!(!app.indicator().is_visible());
    }

    #[test]
    fn unmounting_clears_the_toast() {
        let (mut app, _bus, _dir) = app_with_private_bus();
        let _ = app.update(Message::Indicator(indicator::Message::Received(
            ErrorEvent::new("Network unreachable"),
        )));

        let _ = app.update(Message::ToggleIndicator);

        assert!(!app.is_indicator_mounted());
        assert_eq!(app.indicator().state(), &State::Hidden);

        let _ = app.update(Message::ToggleIndicator);
        assert!(app.is_indicator_mounted());
    }

    #[test]
    fn glass_selection_updates_classes() {
        let (mut app, _bus, _dir) = app_with_private_bus();

        let _ = app.update(Message::IntensitySelected(Intensity::High));
        let _ = app.update(Message::BorderSelected(BorderStyle::Normal));
        let _ = app.update(Message::ShadowSelected(Shadow::None));

        let classes = app.glass().classes();
        assert!(classes.contains("backdrop-blur-3xl"));
        assert!(classes.contains("dark:border-gray-700/40"));
        assert!(classes.contains("shadow-none"));
    }

    #[test]
    fn selections_are_persisted() {
        let (mut app, _bus, dir) = app_with_private_bus();
        let zh: LanguageIdentifier = "zh-CN".parse().expect("locale");

        let _ = app.update(Message::ShadowSelected(Shadow::Xl));
        let _ = app.update(Message::LanguageSelected(zh.clone()));

        assert_eq!(app.i18n.current_locale(), &zh);
        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.glass.shadow, Shadow::Xl);
        assert_eq!(saved.general.language.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn failed_save_is_reported_on_the_bus() {
        let (mut app, bus, dir) = app_with_private_bus();
        // A file where the settings directory should be makes the write fail.
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "").expect("write");
        app.config_dir = Some(blocked);
        let mut listener = bus.subscribe();

        let _ = app.update(Message::IntensitySelected(Intensity::Low));

        assert_eq!(
            listener.try_next().map(|e| e.message),
            Some(app.i18n.tr(CONFIG_SAVE_ERROR_KEY))
        );
    }

    #[test]
    fn title_is_localized() {
        let (app, _bus, _dir) = app_with_private_bus();
        assert!(!app.title().is_empty());
        assert!(!app.title().starts_with("MISSING"));
    }

    #[test]
    fn view_renders_in_every_state() {
        let (mut app, _bus, _dir) = app_with_private_bus();
        let _ = app.view();
        let _ = app.update(Message::Indicator(indicator::Message::Received(
            ErrorEvent::new("Network unreachable"),
        )));
        let _ = app.view();
        let _ = app.update(Message::ToggleIndicator);
        let _ = app.view();
    }
}
