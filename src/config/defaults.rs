// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locale**: Fallback language
//! - **Indicator**: Error toast timing
//! - **Logging**: Default log filter

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide an available one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Indicator Defaults
// ==========================================================================

/// Duration of the replace transition when a new error supersedes the
/// displayed one (in milliseconds). Fixed, not user-configurable.
pub const REPLACE_TRANSITION_MS: u64 = 200;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither CLI, config nor `RUST_LOG` provide one.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(REPLACE_TRANSITION_MS > 0);
    assert!(!DEFAULT_LOCALE.is_empty());
};
