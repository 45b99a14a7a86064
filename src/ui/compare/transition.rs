// SPDX-License-Identifier: MPL-2.0
//! Eased interpolation of the displayed divider position.

use std::time::{Duration, Instant};

/// Animates the displayed position toward the target position.
///
/// Retargeting mid-flight starts from the currently displayed value, so
/// rapid keyboard or autoplay updates never jump backwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration,
        }
    }

    /// Final value of the current animation.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts an eased move from the value displayed at `now` to `to`.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if self.duration.is_zero() {
            self.jump(to);
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = Some(now);
    }

    /// Moves immediately, cancelling any animation in flight.
    pub fn jump(&mut self, to: f32) {
        self.from = to;
        self.to = to;
        self.started_at = None;
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return self.to;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let value = self.from + (self.to - self.from) * ease_out_cubic(t);
        // Rounding must not overshoot either endpoint
        value.clamp(self.from.min(self.to), self.from.max(self.to))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < self.duration)
    }

    /// Drops the finished animation so `is_animating` stays false.
    pub fn settle(&mut self, now: Instant) {
        if self.started_at.is_some() && !self.is_animating(now) {
            self.jump(self.to);
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(150);

    #[test]
    fn idle_transition_reports_target() {
        let transition = Transition::new(0.5, DURATION);
        assert_eq!(transition.value_at(Instant::now()), 0.5);
        assert!(!transition.is_animating(Instant::now()));
    }

    #[test]
    fn retarget_eases_between_values() {
        let start = Instant::now();
        let mut transition = Transition::new(0.0, DURATION);
        transition.retarget(1.0, start);

        let midway = transition.value_at(start + Duration::from_millis(75));
        assert!(midway > 0.5 && midway < 1.0, "ease-out should lead: {midway}");
        assert!(transition.is_animating(start + Duration::from_millis(75)));
        assert_eq!(transition.value_at(start + DURATION), 1.0);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let start = Instant::now();
        let mut transition = Transition::new(0.0, DURATION);
        transition.retarget(1.0, start);

        let later = start + Duration::from_millis(50);
        let displayed = transition.value_at(later);
        transition.retarget(0.0, later);
        assert_eq!(transition.value_at(later), displayed);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut transition = Transition::new(0.2, Duration::ZERO);
        transition.retarget(0.9, Instant::now());
        assert_eq!(transition.value_at(Instant::now()), 0.9);
        assert!(!transition.is_animating(Instant::now()));
    }

    #[test]
    fn settle_clears_finished_animation() {
        let start = Instant::now();
        let mut transition = Transition::new(0.0, DURATION);
        transition.retarget(0.4, start);
        transition.settle(start + Duration::from_secs(1));
        assert!(!transition.is_animating(start));
        assert_eq!(transition.value_at(start), 0.4);
    }
}
