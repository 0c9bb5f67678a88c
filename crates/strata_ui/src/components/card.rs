//! Card component - elevated content surface with header/body/footer
//!
//! Four fixed slots (container, header, body, footer), each independently
//! replaceable. Header, body, and footer render only when content was
//! supplied for them.
//!
//! # Example
//!
//! ```ignore
//! use strata_ui::prelude::*;
//!
//! card()
//!     .header(text("Settings"))
//!     .child(text("Body copy"))
//!     .footer(text("Last saved just now"))
//!     .elevation(2)
//! ```

use strata_core::{div, Element, RenderProps};

use crate::context::UiContext;
use crate::elevation;
use crate::slot::Slot;

const CORNER_RADIUS: f32 = 4.0;

/// Card component
#[derive(Clone, Debug, Default)]
pub struct Card {
    elevation: Option<i32>,
    id: Option<String>,
    header: Option<Element>,
    children: Vec<Element>,
    footer: Option<Element>,
    container: Slot,
    header_slot: Slot,
    body_slot: Slot,
    footer_slot: Slot,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the elevation level (default 1); negative values clamp to flat
    pub fn elevation(mut self, elevation: i32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn header(mut self, header: Element) -> Self {
        self.header = Some(header);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn footer(mut self, footer: Element) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Override the container slot
    pub fn container_slot(mut self, slot: Slot) -> Self {
        self.container = slot;
        self
    }

    /// Override the header slot
    pub fn header_slot(mut self, slot: Slot) -> Self {
        self.header_slot = slot;
        self
    }

    /// Override the body slot
    pub fn body_slot(mut self, slot: Slot) -> Self {
        self.body_slot = slot;
        self
    }

    /// Override the footer slot
    pub fn footer_slot(mut self, slot: Slot) -> Self {
        self.footer_slot = slot;
        self
    }

    pub fn build(&self, ctx: &UiContext<'_>) -> Element {
        let theme = ctx.theme;
        let level = self.elevation.unwrap_or(1);
        let surface = elevation::surface(level, theme);

        let mut parts = Vec::new();

        if let Some(ref header) = self.header {
            let defaults = RenderProps {
                test_id: Some("strata-card-header".into()),
                foreground: Some(theme.gray_dark),
                ..Default::default()
            };
            parts.push(self.header_slot.resolve(
                defaults,
                vec![header.clone()],
                ctx,
                section_render,
            ));
        }

        if !self.children.is_empty() {
            let defaults = RenderProps {
                test_id: Some("strata-card-body".into()),
                foreground: Some(theme.gray_medium),
                ..Default::default()
            };
            parts.push(self.body_slot.resolve(
                defaults,
                self.children.clone(),
                ctx,
                section_render,
            ));
        }

        if let Some(ref footer) = self.footer {
            let defaults = RenderProps {
                test_id: Some("strata-card-footer".into()),
                foreground: Some(theme.gray_light),
                border: Some(strata_core::Border::new(1.0, theme.gray_xlight)),
                ..Default::default()
            };
            parts.push(self.footer_slot.resolve(
                defaults,
                vec![footer.clone()],
                ctx,
                section_render,
            ));
        }

        let defaults = RenderProps {
            id: self.id.clone(),
            test_id: Some("strata-card".into()),
            background: Some(theme.background),
            corner_radius: Some(CORNER_RADIUS),
            shadow: surface.shadow,
            border: surface.border,
            ..Default::default()
        };
        self.container.resolve(defaults, parts, ctx, |props, children, _| {
            div().with_props(props).children_iter(children)
        })
    }
}

fn section_render(props: RenderProps, children: Vec<Element>, _ctx: &UiContext<'_>) -> Element {
    div().with_props(props).children_iter(children)
}

/// Create a card
pub fn card() -> Card {
    Card::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::test_context;
    use strata_core::{text, PropPatch};

    #[test]
    fn test_sections_render_only_with_content() {
        test_context(|ctx| {
            let bare = card().build(ctx);
            assert!(bare.find_by_test_id("strata-card-header").is_none());
            assert!(bare.find_by_test_id("strata-card-body").is_none());
            assert!(bare.find_by_test_id("strata-card-footer").is_none());

            let full = card()
                .header(text("title"))
                .child(text("body"))
                .footer(text("footer"))
                .build(ctx);
            assert!(full.find_by_test_id("strata-card-header").is_some());
            assert!(full.find_by_test_id("strata-card-body").is_some());
            assert!(full.find_by_test_id("strata-card-footer").is_some());
        });
    }

    #[test]
    fn test_default_elevation_is_raised() {
        test_context(|ctx| {
            let raised = card().build(ctx);
            assert!(raised.props().shadow.is_some());
            assert!(raised.props().border.is_none());
        });
    }

    #[test]
    fn test_flat_card_gets_hairline_border() {
        test_context(|ctx| {
            let flat = card().elevation(0).build(ctx);
            assert!(flat.props().shadow.is_none());
            let border = flat.props().border.unwrap();
            assert_eq!(border.color, ctx.theme.gray_xlight);
        });
    }

    #[test]
    fn test_section_colors_follow_theme_roles() {
        test_context(|ctx| {
            let built = card()
                .header(text("h"))
                .child(text("b"))
                .footer(text("f"))
                .build(ctx);
            let header = built.find_by_test_id("strata-card-header").unwrap();
            let body = built.find_by_test_id("strata-card-body").unwrap();
            let footer = built.find_by_test_id("strata-card-footer").unwrap();

            assert_eq!(header.props().foreground, Some(ctx.theme.gray_dark));
            assert_eq!(body.props().foreground, Some(ctx.theme.gray_medium));
            assert_eq!(footer.props().foreground, Some(ctx.theme.gray_light));
        });
    }

    #[test]
    fn test_container_patch_wins_but_keeps_test_id() {
        test_context(|ctx| {
            let built = card()
                .container_slot(
                    Slot::new().props(PropPatch::new().background(strata_core::Color::BLACK)),
                )
                .build(ctx);
            assert_eq!(built.props().background, Some(strata_core::Color::BLACK));
            assert_eq!(built.props().test_id.as_deref(), Some("strata-card"));
        });
    }
}
