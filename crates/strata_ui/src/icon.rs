//! Icon-renderer collaborator boundary

use strata_core::{text, Element};

/// Glyphs the widget layer asks for by name
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Spinner shown while a control is processing or loading
    Loading,
    /// Clear/dismiss affordance
    Close,
    /// Host-defined glyph id
    Named(String),
}

impl Glyph {
    pub fn name(&self) -> &str {
        match self {
            Self::Loading => "loading",
            Self::Close => "close",
            Self::Named(name) => name,
        }
    }
}

/// External collaborator that rasterizes glyphs
pub trait IconRenderer: Send + Sync {
    fn render(&self, glyph: &Glyph, size: f32, spin: bool) -> Element;
}

/// Placeholder renderer drawing the glyph name as text.
///
/// Useful for headless hosts and tests; real applications supply their own
/// icon set.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextGlyphs;

impl IconRenderer for TextGlyphs {
    fn render(&self, glyph: &Glyph, _size: f32, spin: bool) -> Element {
        let label = if spin {
            format!("{}*", glyph.name())
        } else {
            glyph.name().to_string()
        };
        text(label)
    }
}

/// Content of a widget icon slot: a glyph resolved through the collaborator,
/// or a fully custom element
#[derive(Clone, Debug)]
pub enum IconContent {
    Glyph(Glyph),
    Custom(Element),
}

impl From<Glyph> for IconContent {
    fn from(glyph: Glyph) -> Self {
        Self::Glyph(glyph)
    }
}

impl From<Element> for IconContent {
    fn from(element: Element) -> Self {
        Self::Custom(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_glyphs_marks_spinning() {
        let spinning = TextGlyphs.render(&Glyph::Loading, 16.0, true);
        assert_eq!(spinning.text_content(), "loading*");

        let still = TextGlyphs.render(&Glyph::Close, 16.0, false);
        assert_eq!(still.text_content(), "close");
    }
}
