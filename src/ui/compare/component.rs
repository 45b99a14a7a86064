// SPDX-License-Identifier: MPL-2.0
//! Comparison component encapsulating state and update logic.

use super::canvas::{CompareCanvas, LayerPaint, PointerEvent};
use super::layer::{Layer, LoadState};
use super::state::{LayerSlot, Orientation, SliderState, StepDirection, Steps};
use super::ticker::{self, Demand};
use super::transition::Transition;
use super::CompareOptions;
use crate::error::ImageLoadError;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::PanelStyle;
use crate::ui::widgets::shimmer;
use iced::widget::{button, canvas, column, container, row, slider, svg, text, Space, Stack};
use iced::{alignment, event, keyboard, Color, Element, Length, Subscription, Task};
use std::time::{Duration, Instant};

/// Embedded graphic shown in place of a layer that failed to load.
const FALLBACK_SVG: &[u8] = include_bytes!("../../../assets/fallback.svg");

/// Messages emitted by the comparison widget.
#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerEvent),
    /// Range input moved to an integer percentage.
    RangeChanged(u8),
    Reset,
    ToggleOrientation,
    ToggleSwap,
    TogglePlayback,
    RawEvent(event::Event),
    /// Display frame delivered by the ticker.
    Frame(Instant),
    LayerLoaded {
        generation: u64,
        slot: LayerSlot,
        result: Result<ImageData, ImageLoadError>,
    },
}

/// Effects the parent application must act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Orientation or swap changed; worth remembering across sessions.
    LayoutChanged {
        orientation: Orientation,
        swap_sides: bool,
    },
}

/// Whether a key press was consumed by the widget.
///
/// Informational: keys reach the widget through the application event
/// subscription, which only forwards events no other widget captured, so
/// nothing is left to suppress by the time this is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled by the slider (arrows, Space, `r`, `o`, `s`).
    Captured,
    Ignored,
}

/// Slider tuning resolved from configuration and the session store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSettings {
    pub steps: Steps,
    pub smoothing: Duration,
    pub orientation: Orientation,
    pub swap_sides: bool,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            steps: Steps::default(),
            smoothing: Duration::from_millis(crate::config::DEFAULT_SMOOTHING_MS),
            orientation: Orientation::default(),
            swap_sides: false,
        }
    }
}

/// Environment information required to render the widget.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete comparison widget state.
#[derive(Debug)]
pub struct State {
    /// Mount counter; load results tagged with another value are stale.
    generation: u64,
    slider: SliderState,
    before: Layer,
    after: Layer,
    alt: String,
    accent: Color,
    panel: PanelStyle,
    /// Displayed divider position, eased towards `slider.position()`.
    transition: Transition,
    /// Timestamp of the most recent frame.
    clock: Instant,
    shimmer_phase: f32,
    fallback: svg::Handle,
}

impl State {
    /// Mounts a widget and starts loading both layers.
    pub fn new(
        generation: u64,
        options: &CompareOptions,
        settings: SliderSettings,
        i18n: &I18n,
    ) -> (Self, Task<Message>) {
        let alt = options.alt_text(i18n);
        let slider = SliderState::new(settings.steps)
            .with_layout(settings.orientation, settings.swap_sides);
        let transition = Transition::new(slider.position(), settings.smoothing);

        let state = Self {
            generation,
            before: Layer::new(options.before_src.clone(), options.before_label(i18n)),
            after: Layer::new(options.after_src.clone(), options.after_label(i18n)),
            alt,
            accent: options.accent(),
            panel: options.theme.panel(),
            slider,
            transition,
            clock: Instant::now(),
            shimmer_phase: 0.0,
            fallback: svg::Handle::from_memory(FALLBACK_SVG),
        };

        log::debug!(
            "Mounting comparison #{generation}: {} / {}",
            state.before.src(),
            state.after.src()
        );

        let task = Task::batch([
            load_layer(generation, LayerSlot::Before, options.before_src.clone()),
            load_layer(generation, LayerSlot::After, options.after_src.clone()),
        ]);

        (state, task)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Re-resolves default labels and alt text after a locale change.
    pub fn relabel(&mut self, options: &CompareOptions, i18n: &I18n) {
        self.alt = options.alt_text(i18n);
        self.before.relabel(options.before_label(i18n));
        self.after.relabel(options.after_label(i18n));
    }

    #[must_use]
    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    #[must_use]
    pub fn layer(&self, slot: LayerSlot) -> &Layer {
        match slot {
            LayerSlot::Before => &self.before,
            LayerSlot::After => &self.after,
        }
    }

    fn layer_mut(&mut self, slot: LayerSlot) -> &mut Layer {
        match slot {
            LayerSlot::Before => &mut self.before,
            LayerSlot::After => &mut self.after,
        }
    }

    #[must_use]
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Divider position as drawn at the last frame.
    ///
    /// Equals [`SliderState::position`] while dragging or once the eased
    /// transition has settled.
    #[must_use]
    pub fn displayed_position(&self) -> f32 {
        if self.slider.is_dragging() {
            self.slider.position()
        } else {
            self.transition.value_at(self.clock)
        }
    }

    /// Displayed position as a whole percentage.
    #[must_use]
    pub fn displayed_percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.displayed_position() * 100.0).round().clamp(0.0, 100.0) as u8;
        percent
    }

    #[must_use]
    pub fn frame_demand(&self) -> Demand {
        Demand {
            autoplay: self.slider.is_sweeping(),
            easing: !self.slider.is_dragging() && self.transition.is_animating(self.clock),
            shimmer: self.before.is_pending() || self.after.is_pending(),
        }
    }

    /// Whether the ticker should deliver frames.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        self.frame_demand().is_active()
    }

    /// Frame ticker; keyboard events arrive as [`Message::RawEvent`] from the
    /// application's event subscription.
    pub fn subscription(&self) -> Subscription<Message> {
        ticker::frames(self.frame_demand()).map(Message::Frame)
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Pointer(pointer) => {
                self.handle_pointer(pointer);
                Effect::None
            }
            Message::RangeChanged(value) => {
                self.animate(|slider| slider.set_percent(value));
                Effect::None
            }
            Message::Reset => {
                self.animate(SliderState::reset);
                Effect::None
            }
            Message::ToggleOrientation => {
                self.slider.toggle_orientation();
                self.layout_changed()
            }
            Message::ToggleSwap => {
                self.slider.toggle_swap();
                self.layout_changed()
            }
            Message::TogglePlayback => {
                self.slider.toggle_playing();
                log::debug!("Autoplay {}", if self.slider.is_playing() { "started" } else { "paused" });
                Effect::None
            }
            Message::RawEvent(event) => match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                    self.handle_key(&key, modifiers).1
                }
                _ => Effect::None,
            },
            Message::Frame(now) => {
                self.handle_frame(now);
                Effect::None
            }
            Message::LayerLoaded {
                generation,
                slot,
                result,
            } => {
                if generation == self.generation {
                    self.layer_mut(slot).finish(result);
                } else {
                    log::debug!(
                        "Discarding {slot:?} image from stale comparison #{generation} (current #{})",
                        self.generation
                    );
                }
                Effect::None
            }
        }
    }

    /// Applies the keyboard mapping to a key press.
    pub fn handle_key(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> (KeyOutcome, Effect) {
        use keyboard::key::Named;

        match key {
            keyboard::Key::Named(Named::ArrowLeft | Named::ArrowUp) => {
                let large = modifiers.shift();
                self.animate(|slider| slider.step(StepDirection::Decrease, large));
                (KeyOutcome::Captured, Effect::None)
            }
            keyboard::Key::Named(Named::ArrowRight | Named::ArrowDown) => {
                let large = modifiers.shift();
                self.animate(|slider| slider.step(StepDirection::Increase, large));
                (KeyOutcome::Captured, Effect::None)
            }
            keyboard::Key::Named(Named::Space) => {
                let effect = self.handle_message(Message::TogglePlayback);
                (KeyOutcome::Captured, effect)
            }
            keyboard::Key::Character(c) if !modifiers.command() && !modifiers.alt() => {
                let message = match c.to_ascii_lowercase().as_str() {
                    "r" => Message::Reset,
                    "o" => Message::ToggleOrientation,
                    "s" => Message::ToggleSwap,
                    _ => return (KeyOutcome::Ignored, Effect::None),
                };
                let effect = self.handle_message(message);
                (KeyOutcome::Captured, effect)
            }
            _ => (KeyOutcome::Ignored, Effect::None),
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) {
        match pointer {
            PointerEvent::Pressed(fraction) => {
                self.slider.begin_drag(fraction);
                self.transition.jump(self.slider.position());
            }
            PointerEvent::Moved(fraction) => {
                if self.slider.drag_to(fraction) {
                    self.transition.jump(self.slider.position());
                }
            }
            PointerEvent::Released | PointerEvent::Left => self.slider.end_drag(),
            PointerEvent::DoubleClicked => {
                self.slider.end_drag();
                self.animate(SliderState::reset);
            }
        }
    }

    fn handle_frame(&mut self, now: Instant) {
        self.clock = now;

        if self.slider.tick() {
            self.transition.retarget(self.slider.position(), now);
        }
        self.transition.settle(now);

        if self.before.is_pending() || self.after.is_pending() {
            self.shimmer_phase = (self.shimmer_phase + shimmer::SPEED_PER_FRAME).rem_euclid(1.0);
        }
    }

    /// Runs a position change and eases the displayed divider towards it.
    fn animate(&mut self, change: impl FnOnce(&mut SliderState)) {
        change(&mut self.slider);
        if self.slider.is_dragging() {
            self.transition.jump(self.slider.position());
        } else {
            self.transition
                .retarget(self.slider.position(), Instant::now().max(self.clock));
        }
    }

    fn layout_changed(&self) -> Effect {
        Effect::LayoutChanged {
            orientation: self.slider.orientation(),
            swap_sides: self.slider.swap_sides(),
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        column![
            self.view_area(env.i18n),
            self.view_toolbar(env.i18n),
            self.view_caption(env.i18n),
        ]
        .spacing(spacing::XS)
        .into()
    }

    fn view_area<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let (background, foreground) = self.slider.layers();
        let percent_text = i18n.tr_with_args(
            "compare-percent",
            &[("value", &self.displayed_percent().to_string())],
        );

        let program = CompareCanvas {
            background: LayerPaint::from(self.layer(background).load_state()),
            foreground: LayerPaint::from(self.layer(foreground).load_state()),
            fraction: self.displayed_position(),
            orientation: self.slider.orientation(),
            dragging: self.slider.is_dragging(),
            accent: self.accent,
            panel: self.panel,
            shimmer_phase: self.shimmer_phase,
            fallback: &self.fallback,
            percent_text,
        };
        let area: Element<'a, PointerEvent> = canvas(program)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        // Badges stay in fixed corners; swapping moves images, not labels.
        let before_badge = container(badge(self.before.label()))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Top);
        let after_badge = container(badge(self.after.label()))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom);

        let layers = Stack::new()
            .push(area.map(Message::Pointer))
            .push(before_badge)
            .push(after_badge);

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(styles::container::compare_panel(self.panel))
            .into()
    }

    fn view_toolbar<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let orientation_label = match self.slider.orientation() {
            Orientation::Vertical => i18n.tr("compare-orientation-to-horizontal"),
            Orientation::Horizontal => i18n.tr("compare-orientation-to-vertical"),
        };
        let playback_label = if self.slider.is_playing() {
            i18n.tr("compare-pause")
        } else {
            i18n.tr("compare-play")
        };

        let range = slider(0..=100u8, self.slider.percent(), Message::RangeChanged)
            .width(Length::Fixed(sizing::RANGE_INPUT_WIDTH))
            .style(styles::slider::accent(self.accent));
        let percent = i18n.tr_with_args(
            "compare-percent",
            &[("value", &self.slider.percent().to_string())],
        );

        row![
            self.toolbar_button(i18n.tr("compare-reset"), Message::Reset, false),
            self.toolbar_button(orientation_label, Message::ToggleOrientation, false),
            self.toolbar_button(i18n.tr("compare-swap"), Message::ToggleSwap, self.slider.swap_sides()),
            self.toolbar_button(playback_label, Message::TogglePlayback, self.slider.is_playing()),
            Space::new().width(Length::Fill),
            text(i18n.tr("compare-range-label")).size(typography::CAPTION),
            range,
            container(text(percent).size(typography::BODY))
                .width(Length::Fixed(sizing::PERCENT_LABEL_WIDTH)),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .into()
    }

    fn toolbar_button<'a>(&self, label: String, message: Message, active: bool) -> Element<'a, Message> {
        button(text(label).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::toolbar(self.accent, active))
            .into()
    }

    /// Alt text, load status of each layer, and the shortcut reference.
    fn view_caption<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let mut caption = column![text(self.alt.as_str()).size(typography::BODY)]
            .spacing(spacing::XXS);

        for layer in [&self.before, &self.after] {
            let status = match layer.load_state() {
                LoadState::Pending => {
                    Some(i18n.tr_with_args("compare-loading", &[("label", layer.label())]))
                }
                LoadState::Failed(err) => Some(i18n.tr_with_args(
                    "compare-load-failed",
                    &[("label", layer.label()), ("reason", &i18n.tr(err.i18n_key()))],
                )),
                LoadState::Loaded(_) => None,
            };
            if let Some(status) = status {
                caption = caption.push(text(status).size(typography::CAPTION));
            }
        }

        caption
            .push(text(i18n.tr("compare-shortcuts-help")).size(typography::CAPTION))
            .into()
    }
}

fn badge<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge)
        .into()
}

fn load_layer(generation: u64, slot: LayerSlot, src: String) -> Task<Message> {
    Task::perform(media::load(src), move |result| Message::LayerLoaded {
        generation,
        slot,
        result,
    })
}
