// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`compare`] - Before/after comparison slider
//! - [`widgets`] - Canvas painting helpers (shimmer placeholder)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Theme mode and presentation buckets

pub mod compare;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
