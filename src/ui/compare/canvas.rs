// SPDX-License-Identifier: MPL-2.0
//! Comparison canvas: paints both layers, clips the foreground at the split,
//! draws the divider and handle, and turns pointer input into split fractions.

use super::layer::LoadState;
use super::state::{fraction_at, Orientation};
use crate::media::ImageData;
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::theming::PanelStyle;
use crate::ui::widgets::shimmer;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{svg, Action};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Fallback graphic size relative to the shorter side of the area.
const FALLBACK_SCALE: f32 = 0.3;

/// Pointer input already mapped onto the split axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(f32),
    Moved(f32),
    Released,
    /// Cursor left the window mid-drag; treated as a release.
    Left,
    DoubleClicked,
}

/// What to paint for one layer.
#[derive(Debug, Clone, Copy)]
pub enum LayerPaint<'a> {
    Placeholder,
    Image(&'a ImageData),
    Fallback,
}

impl<'a> From<&'a LoadState> for LayerPaint<'a> {
    fn from(state: &'a LoadState) -> Self {
        match state {
            LoadState::Pending => LayerPaint::Placeholder,
            LoadState::Loaded(data) => LayerPaint::Image(data),
            LoadState::Failed(_) => LayerPaint::Fallback,
        }
    }
}

/// Canvas program covering the whole comparison area.
pub struct CompareCanvas<'a> {
    pub background: LayerPaint<'a>,
    pub foreground: LayerPaint<'a>,
    /// Displayed (possibly eased) split fraction.
    pub fraction: f32,
    pub orientation: Orientation,
    pub dragging: bool,
    pub accent: Color,
    pub panel: PanelStyle,
    pub shimmer_phase: f32,
    pub fallback: &'a svg::Handle,
    /// Localized percentage riding on the divider.
    pub percent_text: String,
}

/// Click history kept by the canvas between events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_press: Option<Instant>,
}

#[must_use]
pub fn is_double_click(last_press: Option<Instant>, now: Instant) -> bool {
    last_press.is_some_and(|last| now.saturating_duration_since(last) <= DOUBLE_CLICK_THRESHOLD)
}

/// Rectangle filling `area` with an image of `width`×`height`, preserving the
/// aspect ratio and centering any overflow (CSS `object-fit: cover`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cover_rect(width: u32, height: u32, area: Size) -> Rectangle {
    if width == 0 || height == 0 {
        return Rectangle::new(Point::ORIGIN, area);
    }

    let scale = (area.width / width as f32).max(area.height / height as f32);
    let size = Size::new(width as f32 * scale, height as f32 * scale);
    Rectangle::new(
        Point::new((area.width - size.width) / 2.0, (area.height - size.height) / 2.0),
        size,
    )
}

/// Region of the area showing the foreground layer.
#[must_use]
pub fn foreground_region(area: Size, fraction: f32, orientation: Orientation) -> Rectangle {
    let fraction = fraction.clamp(0.0, 1.0);
    match orientation {
        Orientation::Vertical => Rectangle::new(
            Point::ORIGIN,
            Size::new(area.width * fraction, area.height),
        ),
        Orientation::Horizontal => Rectangle::new(
            Point::ORIGIN,
            Size::new(area.width, area.height * fraction),
        ),
    }
}

impl CompareCanvas<'_> {
    /// Paints one layer across the full area; the caller clips it.
    fn paint_layer(&self, frame: &mut Frame, area: Size, layer: LayerPaint<'_>) {
        let full = Rectangle::new(Point::ORIGIN, area);
        match layer {
            LayerPaint::Placeholder => shimmer::paint(
                frame,
                full,
                self.shimmer_phase,
                self.panel.placeholder_base,
                self.panel.placeholder_highlight,
            ),
            LayerPaint::Image(data) => {
                frame.draw_image(
                    cover_rect(data.width, data.height, area),
                    canvas::Image::new(data.handle.clone()),
                );
            }
            LayerPaint::Fallback => {
                frame.fill_rectangle(Point::ORIGIN, area, self.panel.placeholder_base);
                let side = area.width.min(area.height) * FALLBACK_SCALE;
                let bounds = Rectangle::new(
                    Point::new((area.width - side) / 2.0, (area.height - side) / 2.0),
                    Size::new(side, side),
                );
                frame.draw_svg(bounds, &*self.fallback);
            }
        }
    }

    fn paint_divider(&self, frame: &mut Frame, area: Size) {
        let line_color = Color {
            a: 0.9,
            ..palette::WHITE
        };

        let (line_origin, line_size, center) = match self.orientation {
            Orientation::Vertical => {
                let x = area.width * self.fraction;
                (
                    Point::new(x - border::WIDTH_MD / 2.0, 0.0),
                    Size::new(border::WIDTH_MD, area.height),
                    Point::new(x, area.height / 2.0),
                )
            }
            Orientation::Horizontal => {
                let y = area.height * self.fraction;
                (
                    Point::new(0.0, y - border::WIDTH_MD / 2.0),
                    Size::new(area.width, border::WIDTH_MD),
                    Point::new(area.width / 2.0, y),
                )
            }
        };

        frame.fill_rectangle(line_origin, line_size, line_color);

        let radius = if self.dragging {
            sizing::DIVIDER_HANDLE * 0.6
        } else {
            sizing::DIVIDER_HANDLE / 2.0
        };
        let handle = Path::circle(center, radius);
        frame.fill(&handle, line_color);
        frame.stroke(
            &handle,
            Stroke::default()
                .with_width(border::WIDTH_LG)
                .with_color(self.accent),
        );
    }

    /// Percentage label beside the handle, kept inside the area.
    fn paint_percent_label(&self, frame: &mut Frame, area: Size) {
        let size = Size::new(sizing::PERCENT_LABEL_WIDTH, typography::CAPTION + spacing::XS);
        let top_left = match self.orientation {
            Orientation::Vertical => Point::new(
                (area.width * self.fraction - size.width / 2.0)
                    .clamp(0.0, (area.width - size.width).max(0.0)),
                area.height / 2.0 + sizing::DIVIDER_HANDLE,
            ),
            Orientation::Horizontal => Point::new(
                area.width / 2.0 + sizing::DIVIDER_HANDLE,
                (area.height * self.fraction - size.height / 2.0)
                    .clamp(0.0, (area.height - size.height).max(0.0)),
            ),
        };

        let background = Path::rounded_rectangle(top_left, size, radius::SM.into());
        frame.fill(
            &background,
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        );
        frame.stroke(
            &background,
            Stroke::default()
                .with_width(border::WIDTH_SM)
                .with_color(self.accent),
        );

        #[allow(clippy::cast_precision_loss)]
        let text_width = self.percent_text.chars().count() as f32 * typography::CAPTION * 0.6;
        frame.fill_text(canvas::Text {
            content: self.percent_text.clone(),
            position: Point::new(
                top_left.x + ((size.width - text_width) / 2.0).max(0.0),
                top_left.y + spacing::XXS,
            ),
            color: palette::WHITE,
            size: typography::CAPTION.into(),
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<PointerEvent> for CompareCanvas<'_> {
    type State = PointerTracker;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<PointerEvent>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                let now = Instant::now();
                if is_double_click(state.last_press, now) {
                    state.last_press = None;
                    return Some(Action::publish(PointerEvent::DoubleClicked).and_capture());
                }
                state.last_press = Some(now);

                let fraction = fraction_at(position, bounds, self.orientation)?;
                Some(Action::publish(PointerEvent::Pressed(fraction)).and_capture())
            }
            // While dragging the canvas keeps tracking outside its bounds,
            // like a captured pointer.
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) if self.dragging => {
                let fraction = fraction_at(*position, bounds, self.orientation)?;
                Some(Action::publish(PointerEvent::Moved(fraction)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.dragging =>
            {
                Some(Action::publish(PointerEvent::Released).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if self.dragging => {
                Some(Action::publish(PointerEvent::Left))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let area = bounds.size();
        let mut frame = Frame::new(renderer, area);

        frame.with_clip(Rectangle::new(Point::ORIGIN, area), |frame| {
            self.paint_layer(frame, area, self.background);
        });

        let region = foreground_region(area, self.fraction, self.orientation);
        if region.width > 0.0 && region.height > 0.0 {
            // Clip regions share the frame origin, so the foreground lines up
            // pixel for pixel with the background.
            frame.with_clip(region, |frame| {
                self.paint_layer(frame, area, self.foreground);
            });
        }

        self.paint_divider(&mut frame, area);
        self.paint_percent_label(&mut frame, area);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            match self.orientation {
                Orientation::Vertical => mouse::Interaction::ResizingHorizontally,
                Orientation::Horizontal => mouse::Interaction::ResizingVertically,
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_states_map_to_layer_paint() {
        use crate::error::ImageLoadError;

        let failed = LoadState::Failed(ImageLoadError::Decode("truncated".into()));
        assert!(matches!(LayerPaint::from(&failed), LayerPaint::Fallback));
        assert!(matches!(
            LayerPaint::from(&LoadState::Pending),
            LayerPaint::Placeholder
        ));
    }

    #[test]
    fn first_press_is_not_double_click() {
        assert!(!is_double_click(None, Instant::now()));
    }

    #[test]
    fn quick_second_press_is_double_click() {
        let first = Instant::now();
        assert!(is_double_click(
            Some(first),
            first + Duration::from_millis(200)
        ));
    }

    #[test]
    fn slow_second_press_is_not_double_click() {
        let first = Instant::now();
        assert!(!is_double_click(
            Some(first),
            first + Duration::from_millis(600)
        ));
    }

    #[test]
    fn cover_rect_fills_wide_area_with_square_image() {
        let rect = cover_rect(100, 100, Size::new(400.0, 200.0));
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 400.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, -100.0);
    }

    #[test]
    fn cover_rect_handles_empty_image() {
        let rect = cover_rect(0, 10, Size::new(50.0, 50.0));
        assert_eq!(rect, Rectangle::new(Point::ORIGIN, Size::new(50.0, 50.0)));
    }

    #[test]
    fn foreground_region_follows_orientation() {
        let area = Size::new(200.0, 100.0);

        let vertical = foreground_region(area, 0.25, Orientation::Vertical);
        assert_eq!(vertical.width, 50.0);
        assert_eq!(vertical.height, 100.0);

        let horizontal = foreground_region(area, 0.25, Orientation::Horizontal);
        assert_eq!(horizontal.width, 200.0);
        assert_eq!(horizontal.height, 25.0);
    }

    #[test]
    fn foreground_region_is_empty_at_zero() {
        let region = foreground_region(Size::new(200.0, 100.0), 0.0, Orientation::Vertical);
        assert_eq!(region.width, 0.0);
    }
}
