//! TOML palette loading
//!
//! Hosts describe palettes as a preset base plus per-role hex overrides:
//!
//! ```toml
//! base = "light"
//!
//! [colors]
//! destructive = "#b00020"
//! gray_dark = "#202124"
//! ```
//!
//! The `transparent` role is fixed and not configurable; every other role
//! accepts `#rrggbb` / `#rrggbbaa`. Unknown keys are rejected.

use serde::Deserialize;
use thiserror::Error;

use strata_core::{Color, ColorParseError};

use crate::presets::ThemePreset;
use crate::theme::{ColorRole, Theme};

/// Error loading a theme from TOML
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme document")]
    Parse(#[from] toml::de::Error),
    #[error("unknown base preset {0:?}")]
    UnknownPreset(String),
    #[error("invalid color for role {role:?}")]
    Color {
        role: ColorRole,
        source: ColorParseError,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeDocument {
    base: Option<String>,
    #[serde(default)]
    colors: ColorOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColorOverrides {
    background: Option<String>,
    gray_xlight: Option<String>,
    gray_light: Option<String>,
    gray_medium: Option<String>,
    gray_dark: Option<String>,
    destructive: Option<String>,
    shadow: Option<String>,
}

fn parse_role(role: ColorRole, literal: &str) -> Result<Color, ThemeError> {
    Color::from_hex_str(literal).map_err(|source| ThemeError::Color { role, source })
}

impl Theme {
    /// Load a palette from a TOML document.
    ///
    /// Starts from the `base` preset (light when omitted) and applies the
    /// `[colors]` overrides on top.
    pub fn from_toml_str(document: &str) -> Result<Theme, ThemeError> {
        let document: ThemeDocument = toml::from_str(document)?;

        let base = match document.base {
            Some(ref id) => ThemePreset::from_id(id)
                .ok_or_else(|| ThemeError::UnknownPreset(id.clone()))?,
            None => ThemePreset::Light,
        };
        let mut theme = base.theme();

        let overrides = &document.colors;
        let roles = [
            (ColorRole::Background, &overrides.background),
            (ColorRole::GrayXlight, &overrides.gray_xlight),
            (ColorRole::GrayLight, &overrides.gray_light),
            (ColorRole::GrayMedium, &overrides.gray_medium),
            (ColorRole::GrayDark, &overrides.gray_dark),
            (ColorRole::Destructive, &overrides.destructive),
            (ColorRole::Shadow, &overrides.shadow),
        ];
        for (role, literal) in roles {
            if let Some(literal) = literal {
                theme = theme.with_color(role, parse_role(role, literal)?);
            }
        }

        tracing::debug!(base = base.id(), "theme palette loaded");
        Ok(theme)
    }
}
