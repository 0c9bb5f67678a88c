//! Button component
//!
//! Composes the variant resolver, elevation shadows, overridable slots, and
//! the press-feedback collaborator. Content states:
//!
//! - `loading` replaces all content with the loading-bar slot
//! - `processing` replaces the prefix icon with a spinning loading glyph,
//!   unconditionally, over any caller-supplied prefix
//! - `disabled` dims the resolved colors, suppresses pointer affordances and
//!   press handlers, and never enters ripple feedback
//!
//! # Example
//!
//! ```ignore
//! use strata_ui::prelude::*;
//!
//! button()
//!     .label("Save")
//!     .variant(Variant::Fill)
//!     .elevation(1)
//!     .on_click(|_| save())
//! ```

use smallvec::SmallVec;

use strata_core::{div, Color, Cursor, Element, ElementKind, PointerHandler, RenderProps};

use crate::components::progress::progress;
use crate::context::UiContext;
use crate::elevation;
use crate::feedback::{FeedbackConfig, FeedbackKind};
use crate::icon::{Glyph, IconContent};
use crate::slot::Slot;
use crate::variant::{self, Variant};

const CORNER_RADIUS: f32 = 4.0;
const ICON_SIZE: f32 = 16.0;
const DISABLED_OPACITY: f32 = 0.6;

/// Button component
#[derive(Clone, Default)]
pub struct Button {
    variant: Variant,
    color: Option<Color>,
    elevation: i32,
    disabled: bool,
    is_loading: bool,
    is_processing: bool,
    feedback: FeedbackKind,
    feedback_config: FeedbackConfig,
    id: Option<String>,
    children: Vec<Element>,
    icon_prefix: Option<IconContent>,
    icon_suffix: Option<IconContent>,
    on_click: Option<PointerHandler>,
    on_press: Option<PointerHandler>,
    on_release: Option<PointerHandler>,
    container: Slot,
    loading_bar: Slot,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Explicit widget color; falls back to the theme accent when unset
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn elevation(mut self, elevation: i32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace all content with the loading bar
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Show the spinning glyph in place of the prefix icon
    pub fn processing(mut self, is_processing: bool) -> Self {
        self.is_processing = is_processing;
        self
    }

    pub fn feedback(mut self, feedback: FeedbackKind) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn feedback_config(mut self, config: FeedbackConfig) -> Self {
        self.feedback_config = config;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Convenience for text-only content
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.children.push(strata_core::text(label));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn icon_prefix(mut self, icon: impl Into<IconContent>) -> Self {
        self.icon_prefix = Some(icon.into());
        self
    }

    pub fn icon_suffix(mut self, icon: impl Into<IconContent>) -> Self {
        self.icon_suffix = Some(icon.into());
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&strata_core::Event) + Send + Sync + 'static,
    {
        self.on_click = Some(std::sync::Arc::new(handler));
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn(&strata_core::Event) + Send + Sync + 'static,
    {
        self.on_press = Some(std::sync::Arc::new(handler));
        self
    }

    pub fn on_release<F>(mut self, handler: F) -> Self
    where
        F: Fn(&strata_core::Event) + Send + Sync + 'static,
    {
        self.on_release = Some(std::sync::Arc::new(handler));
        self
    }

    /// Override the container slot
    pub fn container_slot(mut self, slot: Slot) -> Self {
        self.container = slot;
        self
    }

    /// Override the loading-bar slot
    pub fn loading_bar_slot(mut self, slot: Slot) -> Self {
        self.loading_bar = slot;
        self
    }

    pub fn build(&self, ctx: &UiContext<'_>) -> Element {
        let theme = ctx.theme;
        let mut colors = variant::resolve(self.variant, self.color, theme);
        if self.disabled {
            colors = colors.dimmed();
        }
        let pressable = !self.disabled;

        // A disabled control must not expose interactive feedback.
        let feedback = if self.disabled {
            if self.feedback == FeedbackKind::Ripple {
                tracing::debug!("ripple feedback suppressed on disabled button");
            }
            FeedbackKind::Simple
        } else {
            self.feedback
        };

        let defaults = RenderProps {
            id: self.id.clone(),
            test_id: Some("strata-button".into()),
            aria_label: None,
            background: Some(colors.background),
            foreground: Some(colors.foreground),
            hover_background: pressable.then(|| variant::hover_background(colors.background)),
            active_background: (pressable && feedback == FeedbackKind::Simple)
                .then(|| variant::active_background(colors.background)),
            border: variant::border_for(self.variant, &colors),
            shadow: (self.elevation > 0).then(|| elevation::shadow(self.elevation, theme.shadow)),
            corner_radius: Some(CORNER_RADIUS),
            opacity: self.disabled.then_some(DISABLED_OPACITY),
            cursor: pressable.then_some(Cursor::Pointer),
            disabled: self.disabled,
            on_click: self.on_click.clone().filter(|_| pressable),
            on_press: self.on_press.clone().filter(|_| pressable),
            on_release: self.on_release.clone().filter(|_| pressable),
            on_change: None,
        };

        let content = self.content(ctx, &colors);
        let container = self
            .container
            .resolve(defaults, content, ctx, |props, children, _| {
                Element::of(ElementKind::Button)
                    .with_props(props)
                    .children_iter(children)
            });

        match feedback {
            FeedbackKind::Ripple => {
                let color = self.feedback_config.color.unwrap_or(colors.foreground);
                ctx.feedback.wrap(container, color, &self.feedback_config)
            }
            FeedbackKind::Simple => container,
        }
    }

    fn content(&self, ctx: &UiContext<'_>, colors: &variant::VariantColors) -> Vec<Element> {
        if self.is_loading {
            let defaults = RenderProps {
                test_id: Some("strata-button-loading-bar".into()),
                foreground: Some(colors.foreground),
                ..Default::default()
            };
            let bar = self
                .loading_bar
                .resolve(defaults, Vec::new(), ctx, |props, _, ctx| {
                    let mut bar = progress();
                    if let Some(foreground) = props.foreground {
                        bar = bar.indicator_color(foreground);
                    }
                    if let Some(background) = props.background {
                        bar = bar.track_color(background);
                    }
                    let mut element = bar.build(ctx);
                    if let Some(ref test_id) = props.test_id {
                        element = element.test_id(test_id.clone());
                    }
                    element
                });
            return vec![bar];
        }

        let mut items: SmallVec<[Element; 4]> = SmallVec::new();
        if self.is_processing {
            items.push(icon_box(
                "strata-button-icon-left",
                ctx.icons.render(&Glyph::Loading, ICON_SIZE, true),
            ));
        } else if let Some(ref prefix) = self.icon_prefix {
            items.push(icon_box("strata-button-icon-left", render_icon(prefix, ctx)));
        }
        items.extend(self.children.iter().cloned());
        if let Some(ref suffix) = self.icon_suffix {
            items.push(icon_box(
                "strata-button-icon-right",
                render_icon(suffix, ctx),
            ));
        }
        items.into_vec()
    }
}

fn icon_box(test_id: &str, content: Element) -> Element {
    div().test_id(test_id).child(content)
}

fn render_icon(content: &IconContent, ctx: &UiContext<'_>) -> Element {
    match content {
        IconContent::Glyph(glyph) => ctx.icons.render(glyph, ICON_SIZE, false),
        IconContent::Custom(element) => element.clone(),
    }
}

/// Create a button
pub fn button() -> Button {
    Button::new()
}
