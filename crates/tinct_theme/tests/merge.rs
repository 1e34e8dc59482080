use tinct_theme::{
    create_theme, BreakpointKey, ClickEffect, ColorKey, ContainerKey, FontRole, RadiusKey,
    ShadowKey, SpacingKey, ThemeConfig, TransitionKey, ZIndexKey,
};

/// Every key of every table must hold a value after a merge, whatever the
/// config looked like.
fn assert_fully_populated(config: ThemeConfig) {
    let theme = create_theme(config);

    for key in ColorKey::all() {
        assert!(!theme.colors.get(*key).is_empty(), "colors.{}", key.name());
        assert!(
            !theme.dark_colors.get(*key).is_empty(),
            "darkColors.{}",
            key.name()
        );
    }
    for key in SpacingKey::all() {
        assert!(!theme.spacing.get(*key).is_empty(), "spacing.{}", key.name());
    }
    for key in RadiusKey::all() {
        assert!(!theme.radius.get(*key).is_empty(), "radius.{}", key.name());
    }
    for key in BreakpointKey::all() {
        assert!(
            !theme.breakpoints.get(*key).is_empty(),
            "breakpoints.{}",
            key.name()
        );
    }
    for key in ContainerKey::all() {
        assert!(
            !theme.container.get(*key).is_empty(),
            "container.{}",
            key.name()
        );
    }
    for key in ShadowKey::all() {
        assert!(
            !theme.box_shadow.get(*key).is_empty(),
            "boxShadow.{}",
            key.name()
        );
    }
    for key in TransitionKey::all() {
        assert!(
            !theme.transitions.get(*key).is_empty(),
            "transitions.{}",
            key.name()
        );
    }
    for role in FontRole::all() {
        let font = theme.fonts.get(*role);
        assert!(!font.font_size.is_empty(), "fonts.{}", role.name());
        assert!(!font.font_family.is_empty(), "fonts.{}", role.name());
    }
    // Z-index is numeric; reaching every key is the property.
    for key in ZIndexKey::all() {
        let _ = theme.z_index.get(*key);
    }
}

#[test]
fn empty_config_yields_a_fully_populated_theme() {
    assert_fully_populated(ThemeConfig::default());
}

#[test]
fn sparse_configs_yield_fully_populated_themes() {
    let config: ThemeConfig = serde_json::from_str(
        r##"{
            "colors": { "primary": "#0ea5e9" },
            "darkColors": { "bg": "#000000" },
            "spacing": { "m": "20px", "3xl": "56px" },
            "zIndex": { "toast": 999 },
            "fonts": { "h1": { "fontSize": "3rem" } },
            "clickEffect": "lift"
        }"##,
    )
    .unwrap();
    assert_fully_populated(config);
}

#[test]
fn config_keys_override_and_absent_keys_keep_defaults() {
    let config: ThemeConfig = serde_json::from_str(
        r##"{
            "colors": { "primary": "#0ea5e9" },
            "spacing": { "m": "20px" },
            "boxShadow": { "s": "0 0 1px #000" }
        }"##,
    )
    .unwrap();
    let theme = create_theme(config);

    assert_eq!(theme.colors.primary, "#0ea5e9");
    assert_eq!(theme.colors.on_primary, "#ffffff");
    assert_eq!(theme.spacing.m, "20px");
    assert_eq!(theme.spacing.s, "8px");
    assert_eq!(theme.box_shadow.s, "0 0 1px #000");
    assert_eq!(theme.box_shadow.none, "none");
    // The dark palette is its own table: overriding the light palette
    // leaves it alone.
    assert_eq!(theme.dark_colors.primary, "#fb923c");
}

#[test]
fn click_effect_is_a_scalar_with_a_fixed_default() {
    assert_eq!(
        create_theme(ThemeConfig::default()).click_effect,
        ClickEffect::Scale
    );
    let config: ThemeConfig = serde_json::from_str(r#"{ "clickEffect": "ripple" }"#).unwrap();
    assert_eq!(create_theme(config).click_effect, ClickEffect::Ripple);
}

#[test]
fn font_roles_merge_two_levels_deep() {
    let config: ThemeConfig = serde_json::from_str(
        r##"{
            "fonts": {
                "h1": { "fontSize": "3.2rem" },
                "caption": { "italic": true }
            }
        }"##,
    )
    .unwrap();
    let theme = create_theme(config);

    assert_eq!(theme.fonts.h1.font_size, "3.2rem");
    assert_eq!(theme.fonts.h1.line_height, "1.2");
    assert!(theme.fonts.caption.italic);
    // Roles absent from the config are untouched defaults.
    assert_eq!(theme.fonts.body1.font_size, "1rem");
}

#[test]
fn breakpoint_and_scale_aliases_deserialize() {
    let config: ThemeConfig = serde_json::from_str(
        r##"{
            "breakpoints": { "4k": "3840px", "mobileS": "300px" },
            "radius": { "2xl": "36px" }
        }"##,
    )
    .unwrap();
    let theme = create_theme(config);
    assert_eq!(theme.breakpoints.four_k, "3840px");
    assert_eq!(theme.breakpoints.mobile_s, "300px");
    assert_eq!(theme.radius.xxl, "36px");
}
