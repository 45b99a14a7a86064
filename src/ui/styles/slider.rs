// SPDX-License-Identifier: MPL-2.0
//! Range input style definitions.

use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Range input tinted with the comparison accent.
///
/// The filled part of the rail follows the accent; the rest fades out so the
/// split reads the same way as the divider above it.
pub fn accent(accent: Color) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |theme: &Theme, status: slider::Status| {
        let is_light = matches!(theme, Theme::Light);
        let rail_rest = if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        };

        let handle_radius = match status {
            slider::Status::Hovered | slider::Status::Dragged => 8.0,
            slider::Status::Active => 7.0,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(accent),
                    Background::Color(Color {
                        a: opacity::OVERLAY_STRONG,
                        ..rail_rest
                    }),
                ),
                width: 4.0,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: handle_radius,
                },
                background: Background::Color(palette::WHITE),
                border_width: border::WIDTH_MD,
                border_color: accent,
            },
        }
    }
}
