// SPDX-License-Identifier: MPL-2.0
//! Frame ticker for autoplay, easing and placeholder animation.
//!
//! The widget never schedules frames itself. It reports a [`Demand`] and the
//! ticker subscribes to display frames only while some demand is active.
//! Dropping the subscription (pause, idle or unmount) cancels delivery.

use iced::{window, Subscription};
use std::time::Instant;

/// Reasons the widget needs per-frame updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Demand {
    /// Autoplay is sweeping the divider.
    pub autoplay: bool,
    /// An eased transition is in flight.
    pub easing: bool,
    /// A layer is still loading and shows the shimmer placeholder.
    pub shimmer: bool,
}

impl Demand {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.autoplay || self.easing || self.shimmer
    }
}

/// Subscribes to display frames while `demand` is active.
pub fn frames(demand: Demand) -> Subscription<Instant> {
    if demand.is_active() {
        window::frames()
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_demand_is_inactive() {
        assert!(!Demand::default().is_active());
    }

    #[test]
    fn any_reason_activates_demand() {
        let autoplay = Demand {
            autoplay: true,
            ..Demand::default()
        };
        let easing = Demand {
            easing: true,
            ..Demand::default()
        };
        let shimmer = Demand {
            shimmer: true,
            ..Demand::default()
        };
        assert!(autoplay.is_active());
        assert!(easing.is_active());
        assert!(shimmer.is_active());
    }
}
