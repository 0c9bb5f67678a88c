//! Built-in theme presets

use std::fmt::{Display, Formatter};

use strata_core::Color;

use crate::theme::Theme;

/// Built-in palette catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Neutral light palette
    Light,
    /// Neutral dark palette
    Dark,
}

impl ThemePreset {
    /// Stable preset id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Full preset list
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];
        &PRESETS
    }

    /// Look a preset up by its stable id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Build the palette for this preset
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => light(),
            Self::Dark => dark(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn light() -> Theme {
    Theme {
        background: Color::WHITE,
        gray_xlight: Color::from_hex(0xF3F3F3),
        gray_light: Color::from_hex(0xD3D6DA),
        gray_medium: Color::from_hex(0x6C757D),
        gray_dark: Color::from_hex(0x343A40),
        destructive: Color::from_hex(0xD20F39),
        transparent: Color::TRANSPARENT,
        shadow: Color::BLACK,
    }
}

fn dark() -> Theme {
    Theme {
        background: Color::from_hex(0x1C1C1E),
        gray_xlight: Color::from_hex(0x2C2C2E),
        gray_light: Color::from_hex(0x3A3A3C),
        gray_medium: Color::from_hex(0x98989E),
        gray_dark: Color::from_hex(0xE5E5EA),
        destructive: Color::from_hex(0xFF453A),
        transparent: Color::TRANSPARENT,
        shadow: Color::BLACK,
    }
}
