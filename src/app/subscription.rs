// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard events to the comparison widget. Events already
//! captured by a focused widget (e.g. the range slider) are left alone.

use super::Message;
use crate::ui::compare;
use iced::{event, Subscription};

/// Creates the keyboard routing subscription while a widget is mounted.
pub fn create_event_subscription(compare_mounted: bool) -> Subscription<Message> {
    if !compare_mounted {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(..) = &event {
            match status {
                event::Status::Ignored => {
                    Some(Message::Compare(compare::Message::RawEvent(event.clone())))
                }
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}
