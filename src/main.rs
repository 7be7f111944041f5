// SPDX-License-Identifier: MPL-2.0
use iced_frost::app::{self, Flags};
use iced_frost::telemetry;
use iced_frost::ui::theming::ThemeMode;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("[WARN] Ignoring --lang: {err}");
        None
    });
    let theme_mode: Option<ThemeMode> = args.opt_value_from_str("--theme").unwrap_or_else(|err| {
        eprintln!("[WARN] Ignoring --theme: {err}");
        None
    });
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        eprintln!("[WARN] Ignoring --config: {err}");
        None
    });
    let log_filter: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("[WARN] Ignoring --log: {err}");
        None
    });

    let mut flags = Flags::load(config_dir);
    if let Err(err) = telemetry::init_tracing(
        log_filter.as_deref(),
        flags.config.logging.filter.as_deref(),
    ) {
        eprintln!("[WARN] Logging disabled: {err}");
    }

    flags.lang = lang;
    flags.theme_mode = theme_mode;
    app::run(flags)
}
