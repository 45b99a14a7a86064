// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the comparison widget, the session store and the
//! localization bundle, and turns widget effects into persistence.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::compare::{self, CompareOptions, SliderSettings};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::SessionStore;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    session: SessionStore,
    /// Resolved widget inputs; `None` when no sources were configured.
    options: Option<CompareOptions>,
    compare: Option<compare::State>,
    /// Incremented on every mount so results of earlier mounts are dropped.
    generation: u64,
    theme_mode: ThemeMode,
    /// i18n key of the warning shown in the notice bar.
    notice: Option<String>,
    /// Where `settings.toml` is written; `None` uses the resolved default.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("generation", &self.generation)
            .field("compare_mounted", &self.compare.is_some())
            .field("session", self.session.state())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and session state, then mounts the widget when both
    /// sources are known.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (session, session_warning) = SessionStore::load();
        Self::with_state(flags, config, session, config_warning.or(session_warning))
    }

    /// Builds the application from already loaded configuration and session.
    pub fn with_state(
        flags: Flags,
        config: Config,
        session: SessionStore,
        notice: Option<String>,
    ) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let i18n = I18n::new(flags.lang, &config);
        let options = CompareOptions::resolve(flags.compare, &config.compare);
        if options.is_none() {
            log::info!("No comparison sources given; pass --before and --after");
        }

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            session,
            options,
            compare: None,
            generation: 0,
            notice,
            config_dir,
        };

        let task = app.mount();
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: self.session.state(),
            compare: self.compare.as_ref(),
            can_open: self.options.is_some(),
            notice: self.notice.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticker = self
            .compare
            .as_ref()
            .map_or_else(Subscription::none, |compare| {
                compare.subscription().map(Message::Compare)
            });

        Subscription::batch([
            subscription::create_event_subscription(self.compare.is_some()),
            ticker,
        ])
    }

    /// Widget settings from `[compare]`, with the remembered layout on top.
    fn slider_settings(&self) -> SliderSettings {
        let session = self.session.state();
        SliderSettings {
            steps: self.config.compare.steps(),
            smoothing: self.config.compare.smoothing(),
            orientation: session
                .last_orientation
                .or(self.config.compare.orientation)
                .unwrap_or_default(),
            swap_sides: session.last_swap,
        }
    }

    /// Mounts a fresh widget; a no-op without sources.
    fn mount(&mut self) -> Task<Message> {
        let Some(options) = self.options.clone() else {
            return Task::none();
        };

        self.generation += 1;
        let (state, task) =
            compare::State::new(self.generation, &options, self.slider_settings(), &self.i18n);
        self.compare = Some(state);
        task.map(Message::Compare)
    }

    fn unmount(&mut self) {
        if let Some(state) = self.compare.take() {
            log::debug!("Unmounted comparison #{}", state.generation());
        }
    }

    #[must_use]
    pub fn compare(&self) -> Option<&compare::State> {
        self.compare.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
