// SPDX-License-Identifier: MPL-2.0
//! Behavioral properties of the comparison slider, driven through the public
//! widget API the way the application drives it.

use iced::{keyboard, Point, Rectangle, Size};
use std::time::{Duration, Instant};
use terra_compare::config::Config;
use terra_compare::error::ImageLoadError;
use terra_compare::i18n::fluent::I18n;
use terra_compare::media::ImageData;
use terra_compare::ui::compare::canvas::{foreground_region, PointerEvent};
use terra_compare::ui::compare::layer::LoadState;
use terra_compare::ui::compare::state::fraction_at;
use terra_compare::ui::compare::{
    CompareOptions, Direction, LayerSlot, Message, Orientation, SliderSettings, SliderState,
    State, StepDirection, Steps,
};

const EPSILON: f32 = 1e-5;

fn bounds() -> Rectangle {
    Rectangle::new(Point::new(40.0, 100.0), Size::new(400.0, 200.0))
}

fn mount(before: &str, after: &str) -> State {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let (state, _task) = State::new(
        1,
        &CompareOptions::new(before, after),
        SliderSettings::default(),
        &i18n,
    );
    state
}

fn mount_with_config(toml_text: &str) -> State {
    let config: Config = toml::from_str(toml_text).expect("valid settings");
    let settings = SliderSettings {
        steps: config.compare.steps(),
        smoothing: config.compare.smoothing(),
        ..SliderSettings::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    let (state, _task) = State::new(1, &CompareOptions::new("a.png", "b.png"), settings, &i18n);
    state
}

fn assert_in_range(state: &State, context: &str) {
    let position = state.slider().position();
    let displayed = state.displayed_position();
    assert!((0.0..=1.0).contains(&position), "{context}: position {position}");
    assert!((0.0..=1.0).contains(&displayed), "{context}: displayed {displayed}");
    assert!(state.displayed_percent() <= 100, "{context}");
}

fn key(state: &mut State, key: keyboard::Key) {
    state.handle_key(&key, keyboard::Modifiers::empty());
}

#[test]
fn drag_maps_cursor_linearly_in_both_orientations() {
    let area = bounds();

    for x in [40.0, 90.0, 140.0, 240.0, 339.5, 440.0] {
        let mut slider = SliderState::default();
        slider.begin_drag(fraction_at(Point::new(x, 150.0), area, Orientation::Vertical).unwrap());
        let expected = ((x - area.x) / area.width).clamp(0.0, 1.0);
        assert!((slider.position() - expected).abs() < EPSILON, "x = {x}");
    }

    for y in [100.0, 150.0, 275.0, 300.0] {
        let mut slider = SliderState::default();
        slider.toggle_orientation();
        slider.begin_drag(
            fraction_at(Point::new(200.0, y), area, Orientation::Horizontal).unwrap(),
        );
        let expected = ((y - area.y) / area.height).clamp(0.0, 1.0);
        assert!((slider.position() - expected).abs() < EPSILON, "y = {y}");
    }
}

#[test]
fn arrow_presses_step_exactly_and_clamp() {
    let mut slider = SliderState::default();
    let mut expected = 0.5_f32;

    let presses = [
        (StepDirection::Increase, false),
        (StepDirection::Increase, true),
        (StepDirection::Increase, true),
        (StepDirection::Increase, true),
        (StepDirection::Increase, true),
        (StepDirection::Increase, true),
        (StepDirection::Decrease, false),
        (StepDirection::Decrease, true),
    ];

    for (direction, large) in presses {
        let amount = if large { 0.10 } else { 0.02 };
        expected = match direction {
            StepDirection::Increase => (expected + amount).min(1.0),
            StepDirection::Decrease => (expected - amount).max(0.0),
        };
        slider.step(direction, large);
        assert!((slider.position() - expected).abs() < EPSILON);
    }

    assert!((slider.position() - 0.88).abs() < EPSILON);
}

#[test]
fn reset_is_idempotent() {
    let mut slider = SliderState::default();
    slider.set_position(0.9);
    slider.reset();
    assert_eq!(slider.position(), 0.5);
    slider.reset();
    assert_eq!(slider.position(), 0.5);
}

#[test]
fn autoplay_ping_pongs_within_bounds() {
    let mut slider = SliderState::new(Steps::default());
    slider.set_playing(true);

    let mut previous = slider.position();
    let mut reached_top = false;
    let mut reached_bottom = false;

    for _ in 0..1000 {
        let direction = slider.direction();
        assert!(slider.tick());
        let current = slider.position();
        assert!((0.0..=1.0).contains(&current));

        match direction {
            Direction::Forward => assert!(current > previous),
            Direction::Backward => assert!(current < previous),
        }

        if current == 1.0 {
            reached_top = true;
            assert_eq!(slider.direction(), Direction::Backward);
        }
        if current == 0.0 {
            assert!(reached_top);
            reached_bottom = true;
            assert_eq!(slider.direction(), Direction::Forward);
        }
        previous = current;
    }

    assert!(reached_top && reached_bottom);
}

#[test]
fn toggles_leave_position_untouched() {
    let mut slider = SliderState::default();
    slider.set_position(0.37);

    slider.toggle_orientation();
    assert_eq!(slider.orientation(), Orientation::Horizontal);
    assert!((slider.position() - 0.37).abs() < EPSILON);

    assert_eq!(slider.layers(), (LayerSlot::Before, LayerSlot::After));
    slider.toggle_swap();
    assert_eq!(slider.layers(), (LayerSlot::After, LayerSlot::Before));
    assert!((slider.position() - 0.37).abs() < EPSILON);
}

#[test]
fn initial_render_is_centered_with_default_badges() {
    let state = mount("a.png", "b.png");

    assert_eq!(state.slider().position(), 0.5);
    assert_eq!(state.displayed_percent(), 50);
    assert_eq!(state.layer(LayerSlot::Before).label(), "Before");
    assert_eq!(state.layer(LayerSlot::After).label(), "After");
    assert_eq!(state.layer(LayerSlot::Before).src(), "a.png");
    assert_eq!(state.layer(LayerSlot::After).src(), "b.png");
}

#[test]
fn pointer_down_at_edges_clamps_clip() {
    let area = bounds();
    let mut state = mount("a.png", "b.png");

    let left = fraction_at(Point::new(area.x, 150.0), area, Orientation::Vertical).unwrap();
    state.handle_message(Message::Pointer(PointerEvent::Pressed(left)));
    assert_eq!(state.slider().position(), 0.0);
    let clip = foreground_region(area.size(), state.displayed_position(), Orientation::Vertical);
    assert_eq!(clip.width, 0.0);

    let right = fraction_at(
        Point::new(area.x + area.width, 150.0),
        area,
        Orientation::Vertical,
    )
    .unwrap();
    state.handle_message(Message::Pointer(PointerEvent::Moved(right)));
    assert_eq!(state.slider().position(), 1.0);
    let clip = foreground_region(area.size(), state.displayed_position(), Orientation::Vertical);
    assert_eq!(clip.width, area.width);
}

#[test]
fn failed_after_image_shows_fallback_and_keeps_dragging() {
    let mut state = mount("a.png", "missing.png");

    state.handle_message(Message::LayerLoaded {
        generation: 1,
        slot: LayerSlot::Before,
        result: Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
    });
    state.handle_message(Message::LayerLoaded {
        generation: 1,
        slot: LayerSlot::After,
        result: Err(ImageLoadError::NotFound("missing.png".into())),
    });

    assert!(matches!(
        state.layer(LayerSlot::After).load_state(),
        LoadState::Failed(ImageLoadError::NotFound(_))
    ));
    assert_eq!(state.slider().layers().1, LayerSlot::After);
    assert_eq!(state.slider().position(), 0.5);

    state.handle_message(Message::Pointer(PointerEvent::Pressed(0.25)));
    state.handle_message(Message::Pointer(PointerEvent::Moved(0.75)));
    state.handle_message(Message::Pointer(PointerEvent::Released));
    assert!((state.slider().position() - 0.75).abs() < EPSILON);
}

#[test]
fn orientation_swap_then_reset_from_dragged_position() {
    let mut state = mount("a.png", "b.png");
    state.handle_message(Message::Pointer(PointerEvent::Pressed(0.8)));
    state.handle_message(Message::Pointer(PointerEvent::Released));
    assert!((state.slider().position() - 0.8).abs() < EPSILON);

    key(&mut state, keyboard::Key::Character("o".into()));
    key(&mut state, keyboard::Key::Character("s".into()));
    key(&mut state, keyboard::Key::Character("r".into()));

    assert_eq!(state.slider().orientation(), Orientation::Horizontal);
    assert!(state.slider().swap_sides());
    assert_eq!(state.slider().position(), 0.5);
}

#[test]
fn reset_position_does_not_depend_on_key_order() {
    let orders = [["o", "s", "r"], ["r", "o", "s"], ["s", "r", "o"]];

    for order in orders {
        let mut state = mount("a.png", "b.png");
        state.handle_message(Message::Pointer(PointerEvent::Pressed(0.8)));
        state.handle_message(Message::Pointer(PointerEvent::Released));
        for name in order {
            key(&mut state, keyboard::Key::Character(name.into()));
        }
        assert_eq!(state.slider().position(), 0.5, "order {order:?}");
    }
}

#[test]
fn configured_steps_keep_position_in_range() {
    let sections = [
        "[compare]\nkeyboard_step = nan\nkeyboard_step_large = nan\nautoplay_step = nan\n",
        "[compare]\nkeyboard_step = inf\nkeyboard_step_large = -inf\nautoplay_step = inf\n",
        "[compare]\nkeyboard_step = 1000.0\nkeyboard_step_large = 1000.0\nautoplay_step = 1000.0\nsmoothing_ms = 0\n",
        "[compare]\nkeyboard_step = -3.0\nkeyboard_step_large = 0.0\nautoplay_step = -0.5\nsmoothing_ms = 9223372036854775807\n",
        "[compare]\nkeyboard_step = 1e-9\nautoplay_step = 1e-9\n",
    ];

    for section in sections {
        let mut state = mount_with_config(section);
        let start = Instant::now();

        state.handle_message(Message::TogglePlayback);
        for frame in 0..400u64 {
            state.handle_message(Message::Frame(start + Duration::from_millis(frame * 16)));
            assert_in_range(&state, section);
        }

        state.handle_message(Message::TogglePlayback);
        for (name, shift) in [
            (keyboard::key::Named::ArrowRight, false),
            (keyboard::key::Named::ArrowRight, true),
            (keyboard::key::Named::ArrowLeft, true),
            (keyboard::key::Named::ArrowDown, false),
            (keyboard::key::Named::ArrowUp, true),
        ] {
            for _ in 0..60 {
                let modifiers = if shift {
                    keyboard::Modifiers::SHIFT
                } else {
                    keyboard::Modifiers::empty()
                };
                state.handle_key(&keyboard::Key::Named(name), modifiers);
                assert_in_range(&state, section);
            }
        }
    }
}

#[test]
fn nan_autoplay_step_from_settings_still_sweeps() {
    let mut state = mount_with_config("[compare]\nautoplay_step = nan\n");
    let start = Instant::now();

    state.handle_message(Message::TogglePlayback);
    state.handle_message(Message::Frame(start + Duration::from_millis(16)));

    assert!(state.slider().position() > 0.5);
    assert_in_range(&state, "nan autoplay");
}

