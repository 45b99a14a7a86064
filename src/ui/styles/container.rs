// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::PanelStyle;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Themed panel hosting the comparison area.
pub fn compare_panel(panel: PanelStyle) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(panel.background)),
        border: Border {
            radius: panel.radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Corner badge naming a layer.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Generic header/toolbar surface.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so bars stay readable in both light and dark modes.
pub fn bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
