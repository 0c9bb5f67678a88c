//! Progress component - visual indicator of completion status
//!
//! A themed track + indicator pair. Geometry is host-side; the component
//! decides structure, colors, and the accessible description. Doubles as the
//! Button widget's default loading bar.
//!
//! # Example
//!
//! ```ignore
//! use strata_ui::prelude::*;
//!
//! // Determinate at 75%
//! progress().value(75.0)
//!
//! // Indeterminate (loading)
//! progress()
//! ```

use strata_core::{div, Color, Element};

use crate::context::UiContext;

/// Configuration for building a progress bar
#[derive(Clone, Debug, Default)]
pub struct Progress {
    /// Completion 0.0..=100.0; `None` renders an indeterminate bar
    value: Option<f32>,
    track_color: Option<Color>,
    indicator_color: Option<Color>,
    corner_radius: Option<f32>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a determinate completion value, clamped to 0..=100
    pub fn value(mut self, value: f32) -> Self {
        self.value = Some(value.clamp(0.0, 100.0));
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = Some(color);
        self
    }

    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = Some(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn build(&self, ctx: &UiContext<'_>) -> Element {
        let theme = ctx.theme;
        let track = self.track_color.unwrap_or(theme.gray_xlight);
        let indicator = self.indicator_color.unwrap_or(theme.gray_dark);

        let label = match self.value {
            Some(value) => format!("{}% complete", value.round() as i32),
            None => "loading".to_string(),
        };

        div()
            .test_id("strata-progress")
            .aria_label(label)
            .bg(track)
            .rounded(self.corner_radius.unwrap_or(4.0))
            .child(
                div()
                    .test_id("strata-progress-indicator")
                    .bg(indicator)
                    .rounded(self.corner_radius.unwrap_or(4.0)),
            )
    }
}

/// Create a progress bar (indeterminate until a value is set)
pub fn progress() -> Progress {
    Progress::new()
}
