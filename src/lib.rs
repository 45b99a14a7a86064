// SPDX-License-Identifier: MPL-2.0
//! `terra_compare` is a before/after satellite imagery comparison viewer built
//! with the Iced GUI framework.
//!
//! Two images share one area split by a draggable divider. The split moves by
//! pointer, keyboard, a range input or an autoplay sweep, with Fluent
//! localization, TOML preferences and a persisted session store.

#![doc(html_root_url = "https://docs.rs/terra_compare/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
