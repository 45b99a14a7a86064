// SPDX-License-Identifier: MPL-2.0
//! Split position state machine for the comparison slider.
//!
//! Everything here is pure: pointer coordinates, key presses and frame ticks
//! arrive as plain values so the behavior can be exercised without a window.

use crate::config::defaults::{
    DEFAULT_AUTOPLAY_STEP, DEFAULT_KEYBOARD_STEP, DEFAULT_KEYBOARD_STEP_LARGE, INITIAL_POSITION,
};
use iced::{Point, Rectangle};
use serde::{Deserialize, Serialize};

/// Axis along which the divider runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Divider is a vertical line; position maps to the X axis.
    #[default]
    Vertical,
    /// Divider is a horizontal line; position maps to the Y axis.
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// Current autoplay sweep direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Which source a rendered layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSlot {
    Before,
    After,
}

/// Observable interaction phase.
///
/// A drag always wins over autoplay: while the pointer is down the sweep is
/// suspended and resumes from the dragged position on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Autoplaying,
}

/// Which way an arrow key moves the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrease,
    Increase,
}

/// Increment sizes used by keyboard and autoplay updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub keyboard: f32,
    pub keyboard_large: f32,
    pub autoplay: f32,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            keyboard: DEFAULT_KEYBOARD_STEP,
            keyboard_large: DEFAULT_KEYBOARD_STEP_LARGE,
            autoplay: DEFAULT_AUTOPLAY_STEP,
        }
    }
}

/// Maps a cursor position to a split fraction along `orientation`.
///
/// The cursor may lie outside `bounds` (a captured drag); the result is
/// clamped to `[0, 1]`. Returns `None` for a container with no extent on the
/// active axis.
#[must_use]
pub fn fraction_at(cursor: Point, bounds: Rectangle, orientation: Orientation) -> Option<f32> {
    let (offset, extent) = match orientation {
        Orientation::Vertical => (cursor.x - bounds.x, bounds.width),
        Orientation::Horizontal => (cursor.y - bounds.y, bounds.height),
    };

    if extent <= 0.0 || !offset.is_finite() {
        return None;
    }

    Some((offset / extent).clamp(0.0, 1.0))
}

/// Split position, orientation, swap and autoplay state of one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    position: f32,
    orientation: Orientation,
    swap_sides: bool,
    dragging: bool,
    playing: bool,
    direction: Direction,
    steps: Steps,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(Steps::default())
    }
}

impl SliderState {
    #[must_use]
    pub fn new(steps: Steps) -> Self {
        Self {
            position: INITIAL_POSITION,
            orientation: Orientation::default(),
            swap_sides: false,
            dragging: false,
            playing: false,
            direction: Direction::default(),
            steps,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, orientation: Orientation, swap_sides: bool) -> Self {
        self.orientation = orientation;
        self.swap_sides = swap_sides;
        self
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Position as a whole percentage, for labels and the range input.
    #[must_use]
    pub fn percent(&self) -> u8 {
        // position is clamped to [0, 1] so the product fits in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.position * 100.0).round() as u8;
        percent
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn swap_sides(&self) -> bool {
        self.swap_sides
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.dragging {
            Phase::Dragging
        } else if self.playing {
            Phase::Autoplaying
        } else {
            Phase::Idle
        }
    }

    /// Whether autoplay ticks currently move the divider.
    #[must_use]
    pub fn is_sweeping(&self) -> bool {
        self.playing && !self.dragging
    }

    /// Returns `(background, foreground)` slots after applying swap.
    #[must_use]
    pub fn layers(&self) -> (LayerSlot, LayerSlot) {
        if self.swap_sides {
            (LayerSlot::After, LayerSlot::Before)
        } else {
            (LayerSlot::Before, LayerSlot::After)
        }
    }

    /// Sets the position, clamping to `[0, 1]`. Non-finite input is ignored.
    pub fn set_position(&mut self, value: f32) {
        if value.is_finite() {
            self.position = value.clamp(0.0, 1.0);
        }
    }

    /// Range input: `value` is an integer percentage.
    pub fn set_percent(&mut self, value: u8) {
        self.set_position(f32::from(value) / 100.0);
    }

    /// Pointer down: enters the dragging phase and jumps to `fraction`.
    pub fn begin_drag(&mut self, fraction: f32) {
        self.dragging = true;
        self.set_position(fraction);
    }

    /// Pointer move: follows the pointer only while a drag is active.
    ///
    /// Returns whether the position was updated.
    pub fn drag_to(&mut self, fraction: f32) -> bool {
        if !self.dragging {
            return false;
        }
        self.set_position(fraction);
        true
    }

    /// Pointer up or leave.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Arrow key step, `large` when Shift is held.
    pub fn step(&mut self, direction: StepDirection, large: bool) {
        let amount = if large {
            self.steps.keyboard_large
        } else {
            self.steps.keyboard
        };
        let delta = match direction {
            StepDirection::Decrease => -amount,
            StepDirection::Increase => amount,
        };
        self.set_position(self.position + delta);
    }

    /// Returns the divider to the center.
    pub fn reset(&mut self) {
        self.position = INITIAL_POSITION;
    }

    pub fn toggle_orientation(&mut self) {
        self.orientation = self.orientation.toggled();
    }

    pub fn toggle_swap(&mut self) {
        self.swap_sides = !self.swap_sides;
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Advances one autoplay frame.
    ///
    /// No-op unless playing and not dragging, or when the autoplay step is
    /// not finite. Returns whether the position changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_sweeping() {
            return false;
        }

        let next = match self.direction {
            Direction::Forward => self.position + self.steps.autoplay,
            Direction::Backward => self.position - self.steps.autoplay,
        };
        if next.is_nan() {
            return false;
        }

        if next >= 1.0 {
            self.position = 1.0;
            self.direction = Direction::Backward;
        } else if next <= 0.0 {
            self.position = 0.0;
            self.direction = Direction::Forward;
        } else {
            self.position = next;
        }
        true
    }
}
