// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Split position**: Initial divider position
//! - **Keyboard**: Arrow-key step sizes
//! - **Autoplay**: Per-frame sweep increment
//! - **Smoothing**: Eased transition duration
//! - **Remote sources**: Download limits

// ==========================================================================
// Split Position Defaults
// ==========================================================================

/// Divider position when the widget mounts or is reset (centered).
pub const INITIAL_POSITION: f32 = 0.5;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Position change per arrow key press.
pub const DEFAULT_KEYBOARD_STEP: f32 = 0.02;

/// Position change per arrow key press while Shift is held.
pub const DEFAULT_KEYBOARD_STEP_LARGE: f32 = 0.10;

/// Smallest accepted keyboard step.
pub const MIN_KEYBOARD_STEP: f32 = 0.001;

/// Largest accepted keyboard step.
pub const MAX_KEYBOARD_STEP: f32 = 0.5;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Position change per animation frame while autoplaying.
pub const DEFAULT_AUTOPLAY_STEP: f32 = 0.006;

/// Smallest accepted autoplay step.
pub const MIN_AUTOPLAY_STEP: f32 = 0.001;

/// Largest accepted autoplay step.
pub const MAX_AUTOPLAY_STEP: f32 = 0.1;

// ==========================================================================
// Smoothing Defaults
// ==========================================================================

/// Duration of the eased transition for non-drag position changes (ms).
pub const DEFAULT_SMOOTHING_MS: u64 = 150;

/// Longest accepted transition (ms). Zero disables smoothing.
pub const MAX_SMOOTHING_MS: u64 = 1000;

// ==========================================================================
// Remote Source Defaults
// ==========================================================================

/// Upper bound on bytes fetched for a single remote image (64 MB).
pub const MAX_REMOTE_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

/// Redirects followed when fetching a remote image.
pub const MAX_REMOTE_REDIRECTS: usize = 10;
