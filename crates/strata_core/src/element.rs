//! Retained render-element tree
//!
//! Widgets build an [`Element`] tree and hand it to a host runtime for layout
//! and painting; reconciliation lives on the host side of the boundary. The
//! interesting part here is [`RenderProps`] + [`PropPatch`]: the merge
//! contract that lets callers replace any sub-part of a widget while the
//! widget's computed defaults (colors, accessibility metadata, handlers) keep
//! flowing into the replacement.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::events::Event;

/// Handler for pointer interactions (click, press, release)
pub type PointerHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Handler for text-value changes on input primitives
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Box-shadow description
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

/// Solid border description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Pointer cursor affordance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Text,
}

/// Static configuration of an input primitive.
///
/// Single-line vs multi-line is chosen at construction and selects which
/// underlying primitive the host uses; it is not expected to change over a
/// widget's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputPrimitive {
    pub multiline: bool,
    pub resizable: bool,
    pub rows: u16,
    pub cols: u16,
    pub placeholder: Option<String>,
    pub value: String,
}

/// The primitive kinds a host runtime knows how to draw
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// Generic container box
    Box,
    /// Text run
    Text(String),
    /// Editable text field
    Input(InputPrimitive),
    /// Pressable control surface
    Button,
}

/// Visual and behavioral properties of an element.
///
/// Every field a widget computes for one of its slots lands here, so a slot
/// substitute receives the full set even when fully re-skinned.
#[derive(Clone, Default)]
pub struct RenderProps {
    pub id: Option<String>,
    pub test_id: Option<String>,
    pub aria_label: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub hover_background: Option<Color>,
    pub active_background: Option<Color>,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub corner_radius: Option<f32>,
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
    pub disabled: bool,
    pub on_click: Option<PointerHandler>,
    pub on_press: Option<PointerHandler>,
    pub on_release: Option<PointerHandler>,
    pub on_change: Option<ChangeHandler>,
}

impl RenderProps {
    /// Merge caller-supplied extras over these defaults.
    ///
    /// Caller wins on every collision, handlers included. Unset patch fields
    /// leave the computed defaults intact.
    pub fn merged(&self, patch: &PropPatch) -> RenderProps {
        RenderProps {
            id: patch.id.clone().or_else(|| self.id.clone()),
            test_id: patch.test_id.clone().or_else(|| self.test_id.clone()),
            aria_label: patch.aria_label.clone().or_else(|| self.aria_label.clone()),
            background: patch.background.or(self.background),
            foreground: patch.foreground.or(self.foreground),
            hover_background: patch.hover_background.or(self.hover_background),
            active_background: patch.active_background.or(self.active_background),
            border: patch.border.or(self.border),
            shadow: patch.shadow.or(self.shadow),
            corner_radius: patch.corner_radius.or(self.corner_radius),
            opacity: patch.opacity.or(self.opacity),
            cursor: patch.cursor.or(self.cursor),
            disabled: patch.disabled.unwrap_or(self.disabled),
            on_click: patch.on_click.clone().or_else(|| self.on_click.clone()),
            on_press: patch.on_press.clone().or_else(|| self.on_press.clone()),
            on_release: patch.on_release.clone().or_else(|| self.on_release.clone()),
            on_change: patch.on_change.clone().or_else(|| self.on_change.clone()),
        }
    }
}

impl fmt::Debug for RenderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderProps")
            .field("id", &self.id)
            .field("test_id", &self.test_id)
            .field("aria_label", &self.aria_label)
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("border", &self.border)
            .field("shadow", &self.shadow)
            .field("disabled", &self.disabled)
            .field("has_on_click", &self.on_click.is_some())
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

/// Caller-supplied extra properties for a slot.
///
/// Structurally identical to [`RenderProps`] with every field optional; set
/// fields shadow the widget's computed defaults on merge.
#[derive(Clone, Default)]
pub struct PropPatch {
    pub id: Option<String>,
    pub test_id: Option<String>,
    pub aria_label: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub hover_background: Option<Color>,
    pub active_background: Option<Color>,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub corner_radius: Option<f32>,
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
    pub disabled: Option<bool>,
    pub on_click: Option<PointerHandler>,
    pub on_press: Option<PointerHandler>,
    pub on_release: Option<PointerHandler>,
    pub on_change: Option<ChangeHandler>,
}

impl PropPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.test_id.is_none()
            && self.aria_label.is_none()
            && self.background.is_none()
            && self.foreground.is_none()
            && self.hover_background.is_none()
            && self.active_background.is_none()
            && self.border.is_none()
            && self.shadow.is_none()
            && self.corner_radius.is_none()
            && self.opacity.is_none()
            && self.cursor.is_none()
            && self.disabled.is_none()
            && self.on_click.is_none()
            && self.on_press.is_none()
            && self.on_release.is_none()
            && self.on_change.is_none()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border::new(width, color));
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Split off the change handler, leaving the rest of the patch intact.
    ///
    /// Widgets whose slot default handler implements widget semantics (the
    /// text-input pipeline) compose a caller handler after their own logic
    /// instead of letting the merge discard it.
    pub fn take_on_change(&mut self) -> Option<ChangeHandler> {
        self.on_change.take()
    }
}

impl fmt::Debug for PropPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropPatch")
            .field("id", &self.id)
            .field("test_id", &self.test_id)
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("disabled", &self.disabled)
            .field("has_on_click", &self.on_click.is_some())
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

/// A node in the retained render tree
#[derive(Clone, Debug)]
pub struct Element {
    kind: ElementKind,
    props: RenderProps,
    children: Vec<Element>,
}

impl Element {
    pub fn of(kind: ElementKind) -> Self {
        Self {
            kind,
            props: RenderProps::default(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn props(&self) -> &RenderProps {
        &self.props
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Replace all properties at once (used by slot default renderers after a
    /// merge has been computed)
    pub fn with_props(mut self, props: RenderProps) -> Self {
        self.props = props;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.props.test_id = Some(test_id.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.props.aria_label = Some(label.into());
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.props.background = Some(color);
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.props.foreground = Some(color);
        self
    }

    pub fn hover_bg(mut self, color: Color) -> Self {
        self.props.hover_background = Some(color);
        self
    }

    pub fn active_bg(mut self, color: Color) -> Self {
        self.props.active_background = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.props.border = Some(Border::new(width, color));
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.props.shadow = Some(shadow);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.props.corner_radius = Some(radius);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = Some(opacity);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.props.cursor = Some(cursor);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.props.on_click = Some(Arc::new(handler));
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.props.on_press = Some(Arc::new(handler));
        self
    }

    pub fn on_release<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.props.on_release = Some(Arc::new(handler));
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.props.on_change = Some(Arc::new(handler));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_iter(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search by test id
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&Element> {
        if self.props.test_id.as_deref() == Some(test_id) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_test_id(test_id))
    }

    /// Collect the concatenated text content of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let ElementKind::Text(ref content) = self.kind {
            out.push_str(content);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Generic container box
pub fn div() -> Element {
    Element::of(ElementKind::Box)
}

/// Text run
pub fn text(content: impl Into<String>) -> Element {
    Element::of(ElementKind::Text(content.into()))
}

/// Editable text field
pub fn input(primitive: InputPrimitive) -> Element {
    Element::of(ElementKind::Input(primitive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_caller_wins_defaults_preserved() {
        let defaults = RenderProps {
            id: Some("x".into()),
            foreground: Some(Color::from_hex(0xFF0000)),
            ..Default::default()
        };
        let patch = PropPatch::new().foreground(Color::from_hex(0x0000FF));

        let merged = defaults.merged(&patch);
        assert_eq!(merged.id.as_deref(), Some("x"));
        assert_eq!(merged.foreground, Some(Color::from_hex(0x0000FF)));
    }

    #[test]
    fn test_merge_replaces_handlers() {
        let defaults = RenderProps {
            on_click: Some(Arc::new(|_| {})),
            ..Default::default()
        };
        let replacement: PointerHandler = Arc::new(|_| {});
        let patch = PropPatch {
            on_click: Some(replacement.clone()),
            ..Default::default()
        };

        let merged = defaults.merged(&patch);
        assert!(Arc::ptr_eq(merged.on_click.as_ref().unwrap(), &replacement));
    }

    #[test]
    fn test_merge_disabled_override() {
        let defaults = RenderProps {
            disabled: true,
            ..Default::default()
        };
        assert!(defaults.merged(&PropPatch::new()).disabled);
        assert!(!defaults.merged(&PropPatch::new().disabled(false)).disabled);
    }

    #[test]
    fn test_find_by_test_id() {
        let tree = div()
            .test_id("root")
            .child(div().child(text("hello").test_id("leaf")));

        assert!(tree.find_by_test_id("root").is_some());
        let leaf = tree.find_by_test_id("leaf").unwrap();
        assert_eq!(leaf.text_content(), "hello");
        assert!(tree.find_by_test_id("missing").is_none());
    }
}
