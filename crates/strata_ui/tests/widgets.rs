//! End-to-end widget behavior, driven the way a host runtime would drive it:
//! build against an explicit context, invoke the handlers the build installed,
//! advance the timer queue.

use std::sync::{Arc, Mutex};

use strata_core::{Color, Element, TimerQueue};
use strata_theme::ThemePreset;
use strata_ui::prelude::*;

struct RecordingFeedback {
    calls: Arc<Mutex<u32>>,
}

impl PressFeedback for RecordingFeedback {
    fn wrap(&self, child: Element, _color: Color, _config: &FeedbackConfig) -> Element {
        *self.calls.lock().unwrap() += 1;
        child
    }
}

fn harness<R>(feedback: &dyn PressFeedback, queue: &TimerQueue, f: impl FnOnce(&UiContext<'_>) -> R) -> R {
    let theme = ThemePreset::Light.theme();
    let icons = TextGlyphs;
    let ctx = UiContext::new(&theme, &icons, feedback, queue.handle());
    f(&ctx)
}

#[test]
fn debounce_burst_fires_immediate_five_times_and_debounced_once() {
    let queue = TimerQueue::new();
    let driver = InputDriver::new(queue.handle());

    let immediate: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let debounced: Arc<Mutex<Vec<(String, u64)>>> = Arc::new(Mutex::new(Vec::new()));

    let immediate_sink = immediate.clone();
    let debounced_sink = debounced.clone();
    let fire_handle = queue.handle();

    harness(&NoFeedback, &queue, |ctx| {
        let built = text_input(&driver)
            .debounce_interval(8)
            .on_change(move |value| immediate_sink.lock().unwrap().push(value.to_string()))
            .debounced_on_change(move |value| {
                debounced_sink.lock().unwrap().push((value, fire_handle.now()))
            })
            .build(ctx);

        let field = built.find_by_test_id("strata-text-input-field").unwrap();
        let handler = field.props().on_change.clone().unwrap();

        // Burst of five events at 1-tick spacing.
        for value in ["v1", "v2", "v3", "v4", "v5"] {
            handler(value);
            queue.advance(1);
        }

        assert_eq!(
            *immediate.lock().unwrap(),
            vec!["v1", "v2", "v3", "v4", "v5"]
        );
        assert!(debounced.lock().unwrap().is_empty());

        // Last event landed at tick 4; the quiet period runs to tick 12.
        queue.advance(6);
        assert!(debounced.lock().unwrap().is_empty());

        queue.advance(1);
        let fired = debounced.lock().unwrap();
        assert_eq!(fired.len(), 1);
        let (ref value, at) = fired[0];
        assert_eq!(value, "v5");
        assert!(at >= 4 + 8, "debounced fired only {at} ticks in");
    });
}

#[test]
fn debounced_never_fires_while_events_keep_arriving() {
    let queue = TimerQueue::new();
    let driver = InputDriver::new(queue.handle());
    let fired = Arc::new(Mutex::new(0u32));
    let sink = fired.clone();

    harness(&NoFeedback, &queue, |ctx| {
        let built = text_input(&driver)
            .debounced_on_change(move |_| *sink.lock().unwrap() += 1)
            .build(ctx);
        let handler = built
            .find_by_test_id("strata-text-input-field")
            .unwrap()
            .props()
            .on_change
            .clone()
            .unwrap();

        // Events every 7 ticks never leave an 8-tick quiet gap.
        for _ in 0..10 {
            handler("typing");
            queue.advance(7);
        }
        assert_eq!(*fired.lock().unwrap(), 0);

        queue.advance(1);
        assert_eq!(*fired.lock().unwrap(), 1);
    });
}

#[test]
fn disabled_ripple_button_never_invokes_feedback_collaborator() {
    let calls = Arc::new(Mutex::new(0u32));
    let feedback = RecordingFeedback {
        calls: calls.clone(),
    };
    let queue = TimerQueue::new();

    harness(&feedback, &queue, |ctx| {
        button()
            .label("Delete")
            .feedback(FeedbackKind::Ripple)
            .disabled(true)
            .build(ctx);
        assert_eq!(*calls.lock().unwrap(), 0);

        button()
            .label("Delete")
            .feedback(FeedbackKind::Ripple)
            .build(ctx);
        assert_eq!(*calls.lock().unwrap(), 1);
    });
}

#[test]
fn simple_feedback_never_composes_the_collaborator() {
    let calls = Arc::new(Mutex::new(0u32));
    let feedback = RecordingFeedback {
        calls: calls.clone(),
    };
    let queue = TimerQueue::new();

    harness(&feedback, &queue, |ctx| {
        let built = button().label("Save").feedback(FeedbackKind::Simple).build(ctx);
        assert_eq!(*calls.lock().unwrap(), 0);
        // Simple mode still carries the active-state darken.
        assert!(built.props().active_background.is_some());
    });
}

#[test]
fn clearing_resets_count_and_overflow_regardless_of_prior_state() {
    let queue = TimerQueue::new();
    let driver = InputDriver::new(queue.handle());

    harness(&NoFeedback, &queue, |ctx| {
        let widget = text_input(&driver)
            .max_length(3)
            .allow_text_beyond_max_length(true)
            .show_character_count(true);

        widget.clone().build(ctx);
        driver.handle_change("overflowing");
        assert!(driver.state().is_too_long);

        driver.clear();
        let state = driver.state();
        assert_eq!(state.character_count, 0);
        assert!(!state.is_too_long);

        let rebuilt = widget.build(ctx);
        let counter = rebuilt
            .find_by_test_id("strata-text-input-counter")
            .unwrap();
        assert_eq!(counter.text_content(), "0 / 3");
    });
}

#[test]
fn dropping_the_driver_cancels_the_pending_debounce() {
    let queue = TimerQueue::new();
    let fired = Arc::new(Mutex::new(0u32));
    let sink = fired.clone();

    {
        let driver = InputDriver::new(queue.handle());
        harness(&NoFeedback, &queue, |ctx| {
            text_input(&driver)
                .debounced_on_change(move |_| *sink.lock().unwrap() += 1)
                .build(ctx);
        });
        driver.handle_change("pending");
        assert_eq!(queue.pending(), 1);
    }

    // Driver (and widget) gone; the owned timer went with them.
    assert_eq!(queue.pending(), 0);
    queue.advance(100);
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[test]
fn wholesale_theme_swap_changes_resolution_without_rebuilding_widgets() {
    let queue = TimerQueue::new();
    let icons = TextGlyphs;
    let feedback = NoFeedback;
    let widget = button().label("Save");

    let light = ThemePreset::Light.theme();
    let ctx = UiContext::new(&light, &icons, &feedback, queue.handle());
    let light_bg = widget.build(&ctx).props().background.unwrap();

    let dark = ThemePreset::Dark.theme();
    let ctx = UiContext::new(&dark, &icons, &feedback, queue.handle());
    let dark_bg = widget.build(&ctx).props().background.unwrap();

    assert_ne!(light_bg, dark_bg);
}

#[test]
fn slot_override_reskins_without_losing_contract() {
    let queue = TimerQueue::new();

    harness(&NoFeedback, &queue, |ctx| {
        let pressed = Arc::new(Mutex::new(false));
        let flag = pressed.clone();

        let built = button()
            .label("Go")
            .on_click(move |_| *flag.lock().unwrap() = true)
            .container_slot(Slot::new().substitute(
                |props: RenderProps, children: Vec<Element>, _: &UiContext<'_>| {
                    // Fully re-skinned, but forwards the received props.
                    div().with_props(props).children_iter(children)
                },
            ))
            .build(ctx);

        // Accessibility/test metadata and handlers survived the re-skin.
        assert_eq!(built.props().test_id.as_deref(), Some("strata-button"));
        let handler = built.props().on_click.clone().unwrap();
        handler(&strata_core::Event::pointer(
            strata_core::events::event_types::CLICK,
            0.0,
            0.0,
        ));
        assert!(*pressed.lock().unwrap());
    });
}
