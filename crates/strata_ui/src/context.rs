//! Explicit render context
//!
//! One `UiContext` is owned at the host's composition root and passed down by
//! reference through every widget build call. Widgets read the theme and the
//! external collaborators from it and never reach into ambient state.

use strata_core::TimerHandle;
use strata_theme::Theme;

use crate::feedback::PressFeedback;
use crate::icon::IconRenderer;

/// Read-only context threaded through widget builds.
///
/// Runtime theme switching replaces the `Theme` the context borrows; nothing
/// here is mutated in place.
pub struct UiContext<'a> {
    pub theme: &'a Theme,
    pub icons: &'a dyn IconRenderer,
    pub feedback: &'a dyn PressFeedback,
    pub timers: TimerHandle,
}

impl<'a> UiContext<'a> {
    pub fn new(
        theme: &'a Theme,
        icons: &'a dyn IconRenderer,
        feedback: &'a dyn PressFeedback,
        timers: TimerHandle,
    ) -> Self {
        Self {
            theme,
            icons,
            feedback,
            timers,
        }
    }
}

/// Helpers for building widgets against a throwaway context in tests and
/// headless hosts.
pub mod test_support {
    use strata_core::TimerQueue;
    use strata_theme::ThemePreset;

    use super::UiContext;
    use crate::feedback::NoFeedback;
    use crate::icon::TextGlyphs;

    /// Run `f` with a light-theme context backed by a fresh timer queue
    pub fn test_context<R>(f: impl FnOnce(&UiContext<'_>) -> R) -> R {
        let queue = TimerQueue::new();
        test_context_with_queue(&queue, f)
    }

    /// Run `f` with a light-theme context scheduling on `queue`, so the
    /// caller can advance time afterwards
    pub fn test_context_with_queue<R>(
        queue: &TimerQueue,
        f: impl FnOnce(&UiContext<'_>) -> R,
    ) -> R {
        let theme = ThemePreset::Light.theme();
        let icons = TextGlyphs;
        let feedback = NoFeedback;
        let ctx = UiContext::new(&theme, &icons, &feedback, queue.handle());
        f(&ctx)
    }
}
