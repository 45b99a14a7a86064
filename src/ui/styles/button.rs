// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Toolbar button tinted with the comparison accent.
///
/// `active` marks toggles that are currently on (e.g. autoplay running).
pub fn toolbar(accent: Color, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.weak.color;
        let background = match (status, active) {
            (button::Status::Disabled, _) => palette::GRAY_200,
            (button::Status::Pressed, _) | (_, true) => accent,
            (button::Status::Hovered, false) => Color { a: 0.35, ..accent },
            (button::Status::Active, false) => base,
        };
        let text_color = if active {
            palette::WHITE
        } else {
            theme.extended_palette().background.base.text
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        }
    }
}
