// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! User-facing strings (toast dismiss label, showcase labels, configuration
//! warnings) are resolved through Fluent bundles embedded at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to the default locale when a locale is unavailable
//!
//! Error messages published on the bus are displayed verbatim; they are not
//! translation keys.

pub mod fluent;
