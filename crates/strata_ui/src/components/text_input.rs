//! TextInput component and its debounced input pipeline
//!
//! The pipeline is driven by an [`InputDriver`] the caller owns, mirroring
//! controlled-input semantics: each raw change event is truncated per the
//! length policy, notified twice (immediately, and once per quiet gap through
//! a trailing-edge debouncer), and folded into synchronously derived display
//! state (character count, too-long flag).
//!
//! The driver outlives widget rebuilds, so the debounce timer is only reset
//! when the debounced callback or interval actually changes - a rebuild storm
//! never drops events. Dropping the last driver handle cancels any pending
//! debounce timer.
//!
//! # Example
//!
//! ```ignore
//! use strata_ui::prelude::*;
//!
//! let driver = InputDriver::new(queue.handle());
//! text_input(&driver)
//!     .placeholder("Enter username")
//!     .max_length(32)
//!     .show_character_count(true)
//!     .on_change(|value| println!("now: {value}"))
//!     .debounced_on_change(|value| validate(value))
//! ```

use std::sync::{Arc, Mutex};

use strata_core::{
    div, input, text, Border, ChangeHandler, Cursor, Debouncer, Element, InputPrimitive,
    PointerHandler, RenderProps, TimerHandle,
};

use crate::context::UiContext;
use crate::icon::{Glyph, IconContent};
use crate::slot::Slot;

/// Quiet interval, in ticks, a burst must stay silent before the debounced
/// notification fires
pub const DEFAULT_DEBOUNCE_INTERVAL: u64 = 8;

const CORNER_RADIUS: f32 = 4.0;
const ICON_SIZE: f32 = 16.0;
const DISABLED_OPACITY: f32 = 0.6;

/// Debounced notification callback; receives the burst's last effective value
pub type DebouncedHandler = Arc<dyn Fn(String) + Send + Sync>;

/// State derived synchronously from the current raw value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Value as received from the host input primitive
    pub raw_value: String,
    /// Raw value after the truncation policy
    pub display_value: String,
    /// `char` count of the display value
    pub character_count: usize,
    /// Count exceeds the configured max (only reachable when truncation is
    /// disabled)
    pub is_too_long: bool,
}

/// Truncation policy + derived counters, re-run on every raw event
fn derive_state(raw: &str, max_length: Option<usize>, allow_beyond: bool) -> InputState {
    let display_value: String = match max_length {
        Some(max) if !allow_beyond => raw.chars().take(max).collect(),
        _ => raw.to_string(),
    };
    let character_count = display_value.chars().count();
    let is_too_long = max_length.is_some_and(|max| character_count > max);
    InputState {
        raw_value: raw.to_string(),
        display_value,
        character_count,
        is_too_long,
    }
}

struct DriverInner {
    state: InputState,
    max_length: Option<usize>,
    allow_beyond: bool,
    on_change: Option<ChangeHandler>,
    /// Caller handler stripped from the input slot patch, composed after the
    /// pipeline instead of replacing it
    composed_on_change: Option<ChangeHandler>,
    debouncer: Option<Debouncer<String>>,
}

/// Caller-owned state and pipeline of a text input.
///
/// Create one per logical input, keep it across rebuilds, and hand it to
/// [`text_input`]. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct InputDriver {
    inner: Arc<Mutex<DriverInner>>,
    timers: TimerHandle,
}

impl InputDriver {
    pub fn new(timers: TimerHandle) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DriverInner {
                state: derive_state("", None, false),
                max_length: None,
                allow_beyond: false,
                on_change: None,
                composed_on_change: None,
                debouncer: None,
            })),
            timers,
        }
    }

    /// Apply the length policy, re-deriving current state if it changed
    pub fn configure(&self, max_length: Option<usize>, allow_beyond: bool) {
        let mut inner = self.inner.lock().unwrap();
        if inner.max_length != max_length || inner.allow_beyond != allow_beyond {
            inner.max_length = max_length;
            inner.allow_beyond = allow_beyond;
            let raw = inner.state.raw_value.clone();
            inner.state = derive_state(&raw, max_length, allow_beyond);
        }
    }

    /// Install the notification callbacks.
    ///
    /// The debouncer is rebuilt only when the debounced callback identity or
    /// the interval changed, so rebuilding a widget with unchanged inputs
    /// never resets an in-flight quiet period.
    pub fn sync_callbacks(
        &self,
        on_change: Option<ChangeHandler>,
        debounced: Option<DebouncedHandler>,
        interval: u64,
    ) {
        let mut inner = self.inner.lock().unwrap();
        inner.on_change = on_change;

        let reusable = matches!(
            (&inner.debouncer, &debounced),
            (Some(existing), Some(callback)) if existing.reuses(callback, interval)
        );
        if !reusable {
            inner.debouncer =
                debounced.map(|callback| Debouncer::new(self.timers.clone(), interval, callback));
        }
    }

    pub(crate) fn set_composed_change(&self, handler: Option<ChangeHandler>) {
        self.inner.lock().unwrap().composed_on_change = handler;
    }

    /// Feed one raw change event through the pipeline: truncate, notify
    /// immediately, restart the debounce quiet period, store derived state
    pub fn handle_change(&self, raw: &str) {
        let (effective, immediate, composed) = {
            let mut inner = self.inner.lock().unwrap();
            let state = derive_state(raw, inner.max_length, inner.allow_beyond);
            if state.display_value.len() < raw.len() {
                tracing::trace!(max_length = ?inner.max_length, "input clipped to max length");
            }
            let effective = state.display_value.clone();
            inner.state = state;
            (
                effective,
                inner.on_change.clone(),
                inner.composed_on_change.clone(),
            )
        };

        if let Some(callback) = immediate {
            callback(&effective);
        }
        if let Some(callback) = composed {
            callback(&effective);
        }

        let inner = self.inner.lock().unwrap();
        if let Some(ref debouncer) = inner.debouncer {
            debouncer.call(effective);
        }
    }

    /// Set the value programmatically without firing notifications
    pub fn set_value(&self, raw: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.state = derive_state(raw, inner.max_length, inner.allow_beyond);
    }

    /// Clear the input, re-running the full derivation and notification path
    /// from an empty value so count and validity can never drift from the box
    pub fn clear(&self) {
        self.handle_change("");
    }

    /// Cancel any pending debounced notification without waiting for drop
    pub fn cancel_pending(&self) {
        let inner = self.inner.lock().unwrap();
        if let Some(ref debouncer) = inner.debouncer {
            debouncer.cancel();
        }
    }

    pub fn state(&self) -> InputState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn value(&self) -> String {
        self.inner.lock().unwrap().state.display_value.clone()
    }
}

/// TextInput component
#[derive(Clone)]
pub struct TextInput {
    driver: InputDriver,
    placeholder: Option<String>,
    is_valid: bool,
    error_message: Option<String>,
    max_length: Option<usize>,
    allow_text_beyond_max_length: bool,
    show_character_count: bool,
    multiline: bool,
    multiline_is_resizable: bool,
    rows: u16,
    cols: u16,
    disabled: bool,
    id: Option<String>,
    aria_label: Option<String>,
    icon_prefix: Option<IconContent>,
    on_clear: Option<PointerHandler>,
    on_change: Option<ChangeHandler>,
    debounced_on_change: Option<DebouncedHandler>,
    debounce_interval: u64,
    container: Slot,
    input_slot: Slot,
    icon_container: Slot,
    error_container: Slot,
    counter: Slot,
}

impl TextInput {
    pub fn new(driver: &InputDriver) -> Self {
        Self {
            driver: driver.clone(),
            placeholder: None,
            is_valid: true,
            error_message: None,
            max_length: None,
            allow_text_beyond_max_length: false,
            show_character_count: false,
            multiline: false,
            multiline_is_resizable: false,
            rows: 10,
            cols: 10,
            disabled: false,
            id: None,
            aria_label: None,
            icon_prefix: None,
            on_clear: None,
            on_change: None,
            debounced_on_change: None,
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            container: Slot::new(),
            input_slot: Slot::new(),
            icon_container: Slot::new(),
            error_container: Slot::new(),
            counter: Slot::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Caller-judged validity; `false` plus an error message surfaces the
    /// error slot and the destructive border
    pub fn is_valid(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Keep text beyond the max instead of clipping; the counter flags the
    /// overflow instead
    pub fn allow_text_beyond_max_length(mut self, allow: bool) -> Self {
        self.allow_text_beyond_max_length = allow;
        self
    }

    pub fn show_character_count(mut self, show: bool) -> Self {
        self.show_character_count = show;
        self
    }

    /// Select the multi-line primitive. Static: choose before the first
    /// build; flipping it on a live driver calls for a full re-mount.
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn multiline_is_resizable(mut self, resizable: bool) -> Self {
        self.multiline_is_resizable = resizable;
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: u16) -> Self {
        self.cols = cols;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn icon_prefix(mut self, icon: impl Into<IconContent>) -> Self {
        self.icon_prefix = Some(icon.into());
        self
    }

    /// Wire the clear affordance: a close glyph that re-derives from empty
    /// and then invokes `handler`
    pub fn on_clear<F>(mut self, handler: F) -> Self
    where
        F: Fn(&strata_core::Event) + Send + Sync + 'static,
    {
        self.on_clear = Some(Arc::new(handler));
        self
    }

    /// Immediate notification, fired on every raw event
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Debounced notification; see [`DEFAULT_DEBOUNCE_INTERVAL`]
    pub fn debounced_on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.debounced_on_change = Some(Arc::new(handler));
        self
    }

    /// Pre-built callbacks, for callers that keep the `Arc`s across rebuilds
    /// so the debounce timer identity stays stable
    pub fn callbacks(
        mut self,
        on_change: Option<ChangeHandler>,
        debounced: Option<DebouncedHandler>,
    ) -> Self {
        self.on_change = on_change;
        self.debounced_on_change = debounced;
        self
    }

    pub fn debounce_interval(mut self, interval: u64) -> Self {
        self.debounce_interval = interval;
        self
    }

    /// Override the container slot
    pub fn container_slot(mut self, slot: Slot) -> Self {
        self.container = slot;
        self
    }

    /// Override the input slot
    pub fn input_slot(mut self, slot: Slot) -> Self {
        self.input_slot = slot;
        self
    }

    /// Override the icon container slot (prefix icon and clear affordance)
    pub fn icon_container_slot(mut self, slot: Slot) -> Self {
        self.icon_container = slot;
        self
    }

    /// Override the error container slot
    pub fn error_container_slot(mut self, slot: Slot) -> Self {
        self.error_container = slot;
        self
    }

    /// Override the character counter slot
    pub fn counter_slot(mut self, slot: Slot) -> Self {
        self.counter = slot;
        self
    }

    pub fn build(&self, ctx: &UiContext<'_>) -> Element {
        let theme = ctx.theme;

        self.driver
            .configure(self.max_length, self.allow_text_beyond_max_length);
        self.driver.sync_callbacks(
            self.on_change.clone(),
            self.debounced_on_change.clone(),
            self.debounce_interval,
        );

        let state = self.driver.state();
        let mut children = Vec::new();

        if let Some(ref prefix) = self.icon_prefix {
            let content = match prefix {
                IconContent::Glyph(glyph) => ctx.icons.render(glyph, ICON_SIZE, false),
                IconContent::Custom(element) => element.clone(),
            };
            let defaults = RenderProps {
                test_id: Some("strata-text-input-icon".into()),
                foreground: Some(theme.gray_medium),
                ..Default::default()
            };
            children.push(
                self.icon_container
                    .resolve(defaults, vec![content], ctx, section_render),
            );
        }

        // The input slot's default change handler is the pipeline entry; a
        // caller handler patched onto the slot is composed after truncation
        // rather than silently replacing the pipeline.
        let mut input_patch = self.input_slot.patch().clone();
        self.driver.set_composed_change(input_patch.take_on_change());

        let pipeline = self.driver.clone();
        let input_defaults = RenderProps {
            test_id: Some("strata-text-input-field".into()),
            aria_label: self.aria_label.clone(),
            background: Some(theme.transparent),
            foreground: Some(theme.gray_dark),
            cursor: (!self.disabled).then_some(Cursor::Text),
            disabled: self.disabled,
            on_change: Some(Arc::new(move |raw: &str| pipeline.handle_change(raw))),
            ..Default::default()
        };
        let primitive = InputPrimitive {
            multiline: self.multiline,
            resizable: self.multiline && self.multiline_is_resizable,
            rows: self.rows,
            cols: self.cols,
            placeholder: self.placeholder.clone(),
            value: state.display_value.clone(),
        };
        children.push(self.input_slot.resolve_patched(
            &input_patch,
            input_defaults,
            Vec::new(),
            ctx,
            move |props, _, _| input(primitive).with_props(props),
        ));

        if let Some(ref on_clear) = self.on_clear {
            let driver = self.driver.clone();
            let caller = on_clear.clone();
            let defaults = RenderProps {
                test_id: Some("strata-text-input-clear".into()),
                foreground: Some(theme.gray_medium),
                cursor: Some(Cursor::Pointer),
                on_click: Some(Arc::new(move |event: &strata_core::Event| {
                    driver.clear();
                    caller(event);
                })),
                ..Default::default()
            };
            let glyph = ctx.icons.render(&Glyph::Close, ICON_SIZE, false);
            children.push(
                self.icon_container
                    .resolve(defaults, vec![glyph], ctx, section_render),
            );
        }

        if self.show_character_count {
            if let Some(max) = self.max_length {
                let defaults = RenderProps {
                    test_id: Some("strata-text-input-counter".into()),
                    foreground: Some(if state.is_too_long {
                        theme.destructive
                    } else {
                        theme.gray_light
                    }),
                    ..Default::default()
                };
                let label = format!("{} / {}", state.character_count, max);
                children.push(
                    self.counter
                        .resolve(defaults, vec![text(label)], ctx, section_render),
                );
            }
        }

        let show_error = !self.is_valid && self.error_message.is_some();
        if show_error {
            let message = self.error_message.clone().unwrap_or_default();
            let defaults = RenderProps {
                test_id: Some("strata-text-input-error".into()),
                foreground: Some(theme.destructive),
                ..Default::default()
            };
            children.push(
                self.error_container
                    .resolve(defaults, vec![text(message)], ctx, section_render),
            );
        }

        let border_color = if self.is_valid {
            theme.gray_medium
        } else {
            theme.destructive
        };
        let container_defaults = RenderProps {
            id: self.id.clone(),
            test_id: Some("strata-text-input".into()),
            background: Some(theme.background),
            border: Some(Border::new(2.0, border_color)),
            corner_radius: Some(CORNER_RADIUS),
            opacity: self.disabled.then_some(DISABLED_OPACITY),
            disabled: self.disabled,
            ..Default::default()
        };
        self.container
            .resolve(container_defaults, children, ctx, |props, children, _| {
                div().with_props(props).children_iter(children)
            })
    }
}

fn section_render(props: RenderProps, children: Vec<Element>, _ctx: &UiContext<'_>) -> Element {
    div().with_props(props).children_iter(children)
}

/// Create a text input bound to a caller-owned driver
pub fn text_input(driver: &InputDriver) -> TextInput {
    TextInput::new(driver)
}
