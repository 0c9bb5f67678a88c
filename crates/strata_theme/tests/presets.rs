use strata_theme::{ColorRole, Theme, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["dark", "light"]);
}

#[test]
fn presets_have_distinct_backgrounds() {
    assert_ne!(
        ThemePreset::Light.theme().color(ColorRole::Background),
        ThemePreset::Dark.theme().color(ColorRole::Background),
    );
}

#[test]
fn preset_text_roles_contrast_with_background() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let background = theme.color(ColorRole::Background);
        let text = theme.color(ColorRole::GrayDark);

        assert!(
            (background.luminance() - text.luminance()).abs() > 0.3,
            "preset {:?} should keep grayDark readable over background",
            preset
        );
    }
}

#[test]
fn transparent_role_is_fully_transparent() {
    for preset in ThemePreset::all() {
        assert!(preset.theme().color(ColorRole::Transparent).is_transparent());
    }
}

#[test]
fn swapping_whole_theme_is_cheap_and_total() {
    // Runtime switching replaces the palette wholesale; every role must be
    // defined in both presets so a swap never leaves a widget without a color.
    let mut current = ThemePreset::Light.theme();
    for role in ColorRole::all() {
        let _ = current.color(*role);
    }
    current = ThemePreset::Dark.theme();
    for role in ColorRole::all() {
        let _ = current.color(*role);
    }
    assert_eq!(current, ThemePreset::Dark.theme());
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), ThemePreset::Light.theme());
}
