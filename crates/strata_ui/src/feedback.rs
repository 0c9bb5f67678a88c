//! Press-feedback collaborator boundary
//!
//! The transient visual pulse drawn on pointer-down is an external effect;
//! widgets only decide whether and with what color to invoke it.

use strata_core::{Color, Element};

/// How a pressable widget acknowledges a press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// Active-state background darken only, no extra composition
    #[default]
    Simple,
    /// Wrap the widget in the press-feedback collaborator's pulse effect
    Ripple,
}

/// Options forwarded to the press-feedback collaborator
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeedbackConfig {
    /// Pulse color override; the widget's resolved foreground when unset
    pub color: Option<Color>,
    /// Pulse duration in ticks; collaborator default when unset
    pub duration: Option<u64>,
}

/// External collaborator that intercepts pointer events on `child` and
/// renders a transient pulse
pub trait PressFeedback: Send + Sync {
    fn wrap(&self, child: Element, color: Color, config: &FeedbackConfig) -> Element;
}

/// Pass-through implementation for hosts without a pulse effect
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl PressFeedback for NoFeedback {
    fn wrap(&self, child: Element, _color: Color, _config: &FeedbackConfig) -> Element {
        child
    }
}
