//! Overridable slots
//!
//! Every widget decomposes its visual tree into named slots. A caller can
//! replace the renderable of any slot and/or merge extra properties over the
//! widget's computed defaults. The defaults (derived colors, accessibility
//! attributes, handlers, test ids) and the widget's computed children always
//! reach the substitute, so a drop-in replacement keeps the widget's behavior
//! even when fully re-skinned.
//!
//! A substitute that does not forward the received properties to its own
//! render output silently loses that behavior; the framework cannot detect
//! this at runtime, so it is a documented caller obligation.

use std::fmt;
use std::sync::Arc;

use strata_core::{Element, PropPatch, RenderProps};

use crate::context::UiContext;

/// A renderable that accepts default-forwarding properties and children.
///
/// Implemented by every built-in slot default and by caller substitutes;
/// closures of the matching shape implement it for free.
pub trait SlotRender: Send + Sync {
    fn render(&self, props: RenderProps, children: Vec<Element>, ctx: &UiContext<'_>) -> Element;
}

impl<F> SlotRender for F
where
    F: Fn(RenderProps, Vec<Element>, &UiContext<'_>) -> Element + Send + Sync,
{
    fn render(&self, props: RenderProps, children: Vec<Element>, ctx: &UiContext<'_>) -> Element {
        self(props, children, ctx)
    }
}

/// One named, independently replaceable sub-part of a widget
#[derive(Clone, Default)]
pub struct Slot {
    substitute: Option<Arc<dyn SlotRender>>,
    patch: PropPatch,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot's renderable
    pub fn substitute<R>(mut self, renderer: R) -> Self
    where
        R: SlotRender + 'static,
    {
        self.substitute = Some(Arc::new(renderer));
        self
    }

    /// Merge extra properties over the widget's computed defaults.
    ///
    /// Precedence is caller-wins, last-merge-wins: calling this twice merges
    /// the second patch over the first.
    pub fn props(mut self, patch: PropPatch) -> Self {
        self.patch = merge_patches(self.patch, patch);
        self
    }

    pub fn has_substitute(&self) -> bool {
        self.substitute.is_some()
    }

    pub fn patch(&self) -> &PropPatch {
        &self.patch
    }

    /// Render the slot: merge the caller patch over `defaults` (caller wins),
    /// then invoke the substitute or the built-in default renderable with the
    /// merged props and the widget's computed children.
    pub fn resolve<F>(
        &self,
        defaults: RenderProps,
        children: Vec<Element>,
        ctx: &UiContext<'_>,
        default_render: F,
    ) -> Element
    where
        F: FnOnce(RenderProps, Vec<Element>, &UiContext<'_>) -> Element,
    {
        self.resolve_patched(&self.patch, defaults, children, ctx, default_render)
    }

    /// Like [`resolve`](Slot::resolve) with an explicit patch.
    ///
    /// Widgets that must compose part of the caller patch into their own
    /// logic (a change handler feeding an input pipeline) strip that part
    /// first and resolve with the remainder.
    pub fn resolve_patched<F>(
        &self,
        patch: &PropPatch,
        defaults: RenderProps,
        children: Vec<Element>,
        ctx: &UiContext<'_>,
        default_render: F,
    ) -> Element
    where
        F: FnOnce(RenderProps, Vec<Element>, &UiContext<'_>) -> Element,
    {
        let props = defaults.merged(patch);
        match &self.substitute {
            Some(renderer) => renderer.render(props, children, ctx),
            None => default_render(props, children, ctx),
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("has_substitute", &self.substitute.is_some())
            .field("patch", &self.patch)
            .finish()
    }
}

fn merge_patches(base: PropPatch, over: PropPatch) -> PropPatch {
    PropPatch {
        id: over.id.or(base.id),
        test_id: over.test_id.or(base.test_id),
        aria_label: over.aria_label.or(base.aria_label),
        background: over.background.or(base.background),
        foreground: over.foreground.or(base.foreground),
        hover_background: over.hover_background.or(base.hover_background),
        active_background: over.active_background.or(base.active_background),
        border: over.border.or(base.border),
        shadow: over.shadow.or(base.shadow),
        corner_radius: over.corner_radius.or(base.corner_radius),
        opacity: over.opacity.or(base.opacity),
        cursor: over.cursor.or(base.cursor),
        disabled: over.disabled.or(base.disabled),
        on_click: over.on_click.or(base.on_click),
        on_press: over.on_press.or(base.on_press),
        on_release: over.on_release.or(base.on_release),
        on_change: over.on_change.or(base.on_change),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::test_context;
    use strata_core::{div, text, Color};

    #[test]
    fn test_caller_extras_win_and_defaults_survive() {
        let defaults = RenderProps {
            id: Some("x".into()),
            foreground: Some(Color::from_hex(0xFF0000)),
            ..Default::default()
        };
        let slot = Slot::new().props(PropPatch::new().foreground(Color::from_hex(0x0000FF)));

        test_context(|ctx| {
            let element = slot.resolve(defaults.clone(), Vec::new(), ctx, |props, _, _| {
                div().with_props(props)
            });
            assert_eq!(element.props().id.as_deref(), Some("x"));
            assert_eq!(element.props().foreground, Some(Color::from_hex(0x0000FF)));
        });
    }

    #[test]
    fn test_substitute_receives_merged_defaults_and_children() {
        let defaults = RenderProps {
            test_id: Some("widget-part".into()),
            background: Some(Color::BLACK),
            ..Default::default()
        };
        let slot = Slot::new()
            .props(PropPatch::new().background(Color::WHITE))
            .substitute(|props: RenderProps, children: Vec<Element>, _: &UiContext<'_>| {
                div().with_props(props).children_iter(children)
            });

        test_context(|ctx| {
            let element = slot.resolve(
                defaults.clone(),
                vec![text("inner")],
                ctx,
                |_, _, _| unreachable!(),
            );
            assert_eq!(element.props().test_id.as_deref(), Some("widget-part"));
            assert_eq!(element.props().background, Some(Color::WHITE));
            assert_eq!(element.text_content(), "inner");
        });
    }

    #[test]
    fn test_last_merge_wins_across_patches() {
        let slot = Slot::new()
            .props(PropPatch::new().foreground(Color::BLACK).opacity(0.5))
            .props(PropPatch::new().foreground(Color::WHITE));

        assert_eq!(slot.patch().foreground, Some(Color::WHITE));
        assert_eq!(slot.patch().opacity, Some(0.5));
    }

    #[test]
    fn test_default_renderable_used_without_substitute() {
        let slot = Slot::new();
        test_context(|ctx| {
            let element = slot.resolve(RenderProps::default(), Vec::new(), ctx, |props, _, _| {
                div().with_props(props).test_id("built-in")
            });
            assert!(element.find_by_test_id("built-in").is_some());
        });
    }
}
