// SPDX-License-Identifier: MPL-2.0
//! Theme modes, presentation buckets and accent colors.

use crate::ui::design_tokens::{palette, radius};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves `System` through the desktop setting, defaulting to dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Named presentation bucket for the panel hosting the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompareTheme {
    #[default]
    Satellite,
    Forest,
    Ocean,
}

/// Colors derived from a [`CompareTheme`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub background: Color,
    pub placeholder_base: Color,
    pub placeholder_highlight: Color,
    pub radius: f32,
}

impl CompareTheme {
    #[must_use]
    pub fn panel(self) -> PanelStyle {
        let background = match self {
            CompareTheme::Satellite => palette::SATELLITE_900,
            CompareTheme::Forest => palette::FOREST_900,
            CompareTheme::Ocean => palette::OCEAN_900,
        };
        PanelStyle {
            background,
            placeholder_base: lighten(background, 0.08),
            placeholder_highlight: lighten(background, 0.3),
            radius: radius::LG,
        }
    }
}

impl FromStr for CompareTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "satellite" => Ok(CompareTheme::Satellite),
            "forest" => Ok(CompareTheme::Forest),
            "ocean" => Ok(CompareTheme::Ocean),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl fmt::Display for CompareTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompareTheme::Satellite => "satellite",
            CompareTheme::Forest => "forest",
            CompareTheme::Ocean => "ocean",
        };
        f.write_str(name)
    }
}

/// Parses `#rrggbb` or `rrggbb` (case-insensitive).
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn lighten(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        color.r + (1.0 - color.r) * amount,
        color.g + (1.0 - color.g) * amount,
        color.b + (1.0 - color.b) * amount,
    )
}
