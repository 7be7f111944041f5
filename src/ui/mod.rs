// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`indicator`] - Global error toast fed by the error bus
//! - [`glass`] - Frosted glass container and its class composition
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod glass;
pub mod indicator;
pub mod theming;
