//! Strata Theme System
//!
//! Semantic color palettes consumed by the widget layer's style resolution.
//!
//! # Overview
//!
//! A [`Theme`] is an immutable mapping from the fixed set of semantic
//! [`ColorRole`]s to concrete colors. It is constructed once at application
//! start (from a built-in [`ThemePreset`] or a TOML palette), handed to
//! widgets by reference, and never mutated; runtime theme switching swaps
//! the whole object.
//!
//! # Quick Start
//!
//! ```rust
//! use strata_theme::{ColorRole, Theme, ThemePreset};
//!
//! let theme = ThemePreset::Light.theme();
//! let accent = theme.color(ColorRole::GrayLight);
//! assert_ne!(accent, theme.color(ColorRole::GrayDark));
//! ```
//!
//! # TOML palettes
//!
//! Hosts can define palettes in TOML, starting from a preset and overriding
//! individual roles:
//!
//! ```toml
//! base = "dark"
//!
//! [colors]
//! destructive = "#ff453a"
//! ```

pub mod config;
pub mod presets;
pub mod theme;

pub use config::ThemeError;
pub use presets::ThemePreset;
pub use theme::{ColorRole, Theme};
