//! The theme palette and its semantic roles

use strata_core::Color;

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    /// Page/widget surface background, also used as text over dark fills
    Background,
    /// Hairline borders on flat (elevation 0) surfaces
    GrayXlight,
    /// Default accent for filled controls, subdued footer text
    GrayLight,
    /// Input borders and regular body text
    GrayMedium,
    /// Emphasized text and outline/text control foregrounds
    GrayDark,
    /// Validation failures and destructive affordances
    Destructive,
    /// Fully transparent, used by outline/text variant backgrounds
    Transparent,
    /// Base color for elevation shadows (alpha applied per level)
    Shadow,
}

impl ColorRole {
    /// Stable role id, matching the keys accepted in TOML palettes
    pub fn id(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::GrayXlight => "gray_xlight",
            Self::GrayLight => "gray_light",
            Self::GrayMedium => "gray_medium",
            Self::GrayDark => "gray_dark",
            Self::Destructive => "destructive",
            Self::Transparent => "transparent",
            Self::Shadow => "shadow",
        }
    }

    /// Full role list
    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 8] = [
            ColorRole::Background,
            ColorRole::GrayXlight,
            ColorRole::GrayLight,
            ColorRole::GrayMedium,
            ColorRole::GrayDark,
            ColorRole::Destructive,
            ColorRole::Transparent,
            ColorRole::Shadow,
        ];
        &ROLES
    }
}

/// Immutable palette mapping each [`ColorRole`] to a concrete color.
///
/// Widgets read a `Theme` through an explicit shared reference; the owning
/// application replaces the whole value to switch themes.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub gray_xlight: Color,
    pub gray_light: Color,
    pub gray_medium: Color,
    pub gray_dark: Color,
    pub destructive: Color,
    pub transparent: Color,
    pub shadow: Color,
}

impl Theme {
    /// Get a color by role key
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::GrayXlight => self.gray_xlight,
            ColorRole::GrayLight => self.gray_light,
            ColorRole::GrayMedium => self.gray_medium,
            ColorRole::GrayDark => self.gray_dark,
            ColorRole::Destructive => self.destructive,
            ColorRole::Transparent => self.transparent,
            ColorRole::Shadow => self.shadow,
        }
    }

    /// Replace one role, returning the modified palette
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        match role {
            ColorRole::Background => self.background = color,
            ColorRole::GrayXlight => self.gray_xlight = color,
            ColorRole::GrayLight => self.gray_light = color,
            ColorRole::GrayMedium => self.gray_medium = color,
            ColorRole::GrayDark => self.gray_dark = color,
            ColorRole::Destructive => self.destructive = color,
            ColorRole::Transparent => self.transparent = color,
            ColorRole::Shadow => self.shadow = color,
        }
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::presets::ThemePreset::Light.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_are_unique() {
        let mut ids: Vec<&str> = ColorRole::all().iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ColorRole::all().len());
    }

    #[test]
    fn test_keyed_access_matches_fields() {
        let theme = Theme::default();
        assert_eq!(theme.color(ColorRole::Background), theme.background);
        assert_eq!(theme.color(ColorRole::Destructive), theme.destructive);
    }

    #[test]
    fn test_with_color_replaces_single_role() {
        let theme = Theme::default().with_color(ColorRole::Destructive, Color::from_hex(0x123456));
        assert_eq!(theme.destructive, Color::from_hex(0x123456));
        assert_eq!(theme.background, Theme::default().background);
    }
}
