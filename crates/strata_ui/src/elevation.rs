//! Elevation shadows
//!
//! Maps an abstract elevation level to a shadow description. Pure and total
//! over non-negative levels; negative host input is clamped to zero since
//! elevation is a display-only property.

use strata_core::{Border, Shadow};
use strata_theme::Theme;

/// Shadow for an elevation level.
///
/// For level `e`: offset_y = e·0.25, blur = e·0.75, spread = −e·0.25, and the
/// shadow color's alpha is max(0, 0.6 − e·0.1). Offset and blur grow
/// monotonically with the level; alpha floors at zero.
pub fn shadow(elevation: i32, shadow_color: strata_core::Color) -> Shadow {
    let e = elevation.max(0) as f32;
    let alpha = (0.6 - e * 0.1).max(0.0);
    Shadow::new(
        0.0,
        e * 0.25,
        e * 0.75,
        -e * 0.25,
        shadow_color.with_alpha(alpha),
    )
}

/// Surface treatment for an elevation level
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceStyle {
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
}

/// Resting look for a surface: raised levels get a shadow, level zero gets a
/// hairline border instead
pub fn surface(elevation: i32, theme: &Theme) -> SurfaceStyle {
    if elevation <= 0 {
        SurfaceStyle {
            shadow: None,
            border: Some(Border::new(1.0, theme.gray_xlight)),
        }
    } else {
        SurfaceStyle {
            shadow: Some(shadow(elevation, theme.shadow)),
            border: None,
        }
    }
}
