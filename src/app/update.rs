// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{App, Message};
use crate::config;
use crate::ui::compare;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Compare(compare_message) => {
            let Some(state) = app.compare.as_mut() else {
                // Late frame or load result after unmount
                return Task::none();
            };
            let effect = state.handle_message(compare_message);
            handle_compare_effect(app, effect);
            Task::none()
        }
        Message::ToggleSafeSearch => {
            let warning = app
                .session
                .update(|state| state.safe_search = !state.safe_search);
            set_notice(app, warning);
            Task::none()
        }
        Message::ToggleSignedIn => {
            let warning = app
                .session
                .update(|state| state.signed_in = !state.signed_in);
            set_notice(app, warning);
            Task::none()
        }
        Message::OpenCompare => {
            if app.compare.is_some() {
                return Task::none();
            }
            app.mount()
        }
        Message::CloseCompare => {
            app.unmount();
            Task::none()
        }
        Message::DismissNotice => {
            app.notice = None;
            Task::none()
        }
        Message::CycleLanguage => {
            let locale = app.i18n.next_locale();
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());

            if let (Some(state), Some(options)) = (app.compare.as_mut(), app.options.as_ref()) {
                state.relabel(options, &app.i18n);
            }

            if let Err(err) = config::save_with_override(&app.config, app.config_dir.clone()) {
                log::warn!("Failed to save language preference: {err}");
                app.notice = Some("notification-config-save-error".to_string());
            }
            Task::none()
        }
    }
}

fn handle_compare_effect(app: &mut App, effect: compare::Effect) {
    match effect {
        compare::Effect::None => {}
        compare::Effect::LayoutChanged {
            orientation,
            swap_sides,
        } => {
            let warning = app.session.update(|state| {
                state.last_orientation = Some(orientation);
                state.last_swap = swap_sides;
            });
            set_notice(app, warning);
        }
    }
}

fn set_notice(app: &mut App, warning: Option<String>) {
    if warning.is_some() {
        app.notice = warning;
    }
}
