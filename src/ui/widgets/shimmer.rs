// SPDX-License-Identifier: MPL-2.0
//! Shimmer placeholder painted while an image loads.

use iced::widget::canvas::Frame;
use iced::{Color, Point, Rectangle, Size};

/// Width of the bright band relative to the region width.
const BAND_WIDTH_RATIO: f32 = 0.35;

/// Sweep progress added per animation frame.
pub const SPEED_PER_FRAME: f32 = 0.012;

/// Returns the horizontal span `(start, end)` of the band for `phase`.
///
/// The band travels from fully left of the region to fully right of it, so
/// the span may be partly or wholly outside `[0, width]`.
#[must_use]
pub fn band_span(width: f32, phase: f32) -> (f32, f32) {
    let band = width * BAND_WIDTH_RATIO;
    let left = -band + (width + band) * phase.rem_euclid(1.0);
    (left, left + band)
}

/// Paints the placeholder into `region` of `frame`.
pub fn paint(frame: &mut Frame, region: Rectangle, phase: f32, base: Color, highlight: Color) {
    frame.fill_rectangle(region.position(), region.size(), base);

    let (left, right) = band_span(region.width, phase);
    let slice = (right - left) / 3.0;

    // Soft edges: three slices with rising then falling alpha
    for (index, alpha) in [0.35, 0.7, 0.35].into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = left + slice * index as f32;
        let start = x.max(0.0);
        let end = (x + slice).min(region.width);
        if end > start {
            frame.fill_rectangle(
                Point::new(region.x + start, region.y),
                Size::new(end - start, region.height),
                Color {
                    a: alpha,
                    ..highlight
                },
            );
        }
    }
}
