//! Variant color resolution
//!
//! Maps a widget's semantic variant plus an optional explicit color to the
//! background/foreground pair every widget starts from. Pure over its inputs.

use strata_core::{Border, Color};
use strata_theme::Theme;

/// Semantic visual style of a widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Solid background, contrast-picked foreground
    #[default]
    Fill,
    /// Transparent background, foreground-colored border
    Outline,
    /// Transparent background, no border
    Text,
}

/// Resolved color pair for a variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantColors {
    pub background: Color,
    pub foreground: Color,
}

impl VariantColors {
    /// Desaturated rendition used when the owning widget is disabled.
    ///
    /// Disabled takes precedence over variant: widgets apply this
    /// unconditionally and additionally suppress cursor and hover/active
    /// deltas.
    pub fn dimmed(self) -> Self {
        Self {
            background: self.background.desaturate(1.0),
            foreground: self.foreground.desaturate(1.0),
        }
    }
}

/// Resolve `(variant, explicit color, theme)` to a color pair.
///
/// An explicit color equal to the theme's transparent role is treated as
/// absent so the fallback contrast logic applies instead of producing
/// invisible text.
pub fn resolve(variant: Variant, explicit: Option<Color>, theme: &Theme) -> VariantColors {
    let explicit = explicit.filter(|color| !color.is_transparent());

    match variant {
        Variant::Fill => {
            let background = explicit.unwrap_or(theme.gray_light);
            VariantColors {
                background,
                foreground: readable_foreground(background, theme),
            }
        }
        Variant::Outline | Variant::Text => VariantColors {
            background: theme.transparent,
            foreground: explicit.unwrap_or(theme.gray_dark),
        },
    }
}

/// Border the caller must render for the variant, if any
pub fn border_for(variant: Variant, colors: &VariantColors) -> Option<Border> {
    match variant {
        Variant::Outline => Some(Border::new(1.0, colors.foreground)),
        Variant::Fill | Variant::Text => None,
    }
}

/// Hover-state background delta: darken a solid background slightly, or lay a
/// faint overlay over a transparent one
pub fn hover_background(background: Color) -> Color {
    if background.is_transparent() {
        Color::BLACK.with_alpha(0.05)
    } else {
        background.darken(0.05)
    }
}

/// Active-state background delta used by simple press feedback
pub fn active_background(background: Color) -> Color {
    if background.is_transparent() {
        Color::BLACK.with_alpha(0.1)
    } else {
        background.darken(0.1)
    }
}

/// Light background gets dark text; dark or accent backgrounds use the theme
/// background as the text color
fn readable_foreground(background: Color, theme: &Theme) -> Color {
    if background.is_light() {
        theme.gray_dark
    } else {
        theme.background
    }
}
