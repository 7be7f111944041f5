// SPDX-License-Identifier: MPL-2.0
//! `iced_frost` provides a global error indicator and a frosted glass
//! container for Iced applications.
//!
//! Errors published on an [`bus::ErrorBus`] are filtered, then shown one at a
//! time as a dismissible toast by [`ui::indicator`]. [`ui::glass`] composes the
//! translucent panel style from a small set of options.

#![doc(html_root_url = "https://docs.rs/iced_frost/0.1.0")]

pub mod app;
pub mod bus;
pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;
pub mod ui;
