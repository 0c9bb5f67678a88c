//! Strata Widget Library
//!
//! Themed presentational widgets (buttons, cards, text inputs) with
//! pluggable sub-part styling.
//!
//! # Architecture
//!
//! Three mechanisms do the real work; the widgets are compositions of them:
//!
//! - [`variant`]: pure resolution of (variant, explicit color, theme) to a
//!   background/foreground pair, with disabled dimming and hover/active
//!   deltas
//! - [`elevation`]: pure mapping of an elevation level to a shadow (raised)
//!   or a hairline border (flat)
//! - [`slot`]: the override contract - every visual sub-part of a widget can
//!   be replaced and/or re-propped by the caller while the widget's computed
//!   defaults keep flowing into the replacement
//!
//! The text input adds a fourth: a debounced, length-constrained input
//! pipeline owned by a caller-side [`InputDriver`](components::InputDriver).
//!
//! Widgets read everything through an explicit [`UiContext`](context::UiContext)
//! owned at the host's composition root; there is no ambient theme state.
//!
//! # Example
//!
//! ```rust
//! use strata_core::TimerQueue;
//! use strata_theme::ThemePreset;
//! use strata_ui::prelude::*;
//!
//! let theme = ThemePreset::Light.theme();
//! let queue = TimerQueue::new();
//! let icons = TextGlyphs;
//! let feedback = NoFeedback;
//! let ctx = UiContext::new(&theme, &icons, &feedback, queue.handle());
//!
//! let save = button()
//!     .label("Save")
//!     .variant(Variant::Fill)
//!     .elevation(1)
//!     .build(&ctx);
//! assert!(save.find_by_test_id("strata-button").is_some());
//! ```

pub mod components;
pub mod context;
pub mod elevation;
pub mod feedback;
pub mod icon;
pub mod slot;
pub mod variant;

pub use components::{
    button, card, progress, text_input, Button, Card, InputDriver, InputState, Progress,
    TextInput, DEFAULT_DEBOUNCE_INTERVAL,
};
pub use context::UiContext;
pub use elevation::{shadow, surface, SurfaceStyle};
pub use feedback::{FeedbackConfig, FeedbackKind, NoFeedback, PressFeedback};
pub use icon::{Glyph, IconContent, IconRenderer, TextGlyphs};
pub use slot::{Slot, SlotRender};
pub use variant::{resolve, Variant, VariantColors};

/// Commonly used types for building UIs
pub mod prelude {
    pub use crate::components::{
        button, card, progress, text_input, Button, Card, InputDriver, InputState, Progress,
        TextInput,
    };
    pub use crate::context::UiContext;
    pub use crate::feedback::{FeedbackConfig, FeedbackKind, NoFeedback, PressFeedback};
    pub use crate::icon::{Glyph, IconContent, IconRenderer, TextGlyphs};
    pub use crate::slot::{Slot, SlotRender};
    pub use crate::variant::Variant;
    pub use strata_core::{div, text, Color, Element, PropPatch, RenderProps};
}
