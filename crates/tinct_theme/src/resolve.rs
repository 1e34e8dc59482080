//! Style resolution
//!
//! The single chokepoint between symbolic tokens and concrete CSS values.
//! Every resolver takes either a token name or a literal CSS value through
//! the same parameter: a recognized token resolves through the theme table,
//! anything else passes through unchanged. That passthrough is what lets
//! callers escape the preset vocabulary - which also means a literal that
//! collides with a token name is always treated as the token.

use crate::theme::Theme;

/// Resolve a palette token or pass a literal color through.
///
/// ```
/// use tinct_theme::{resolve_color, Theme};
///
/// let theme = Theme::default();
/// assert_eq!(resolve_color("primary", &theme).as_deref(), Some("#f97316"));
/// assert_eq!(resolve_color("#ff0000", &theme).as_deref(), Some("#ff0000"));
/// assert_eq!(resolve_color(None, &theme), None);
/// ```
pub fn resolve_color<'a>(value: impl Into<Option<&'a str>>, theme: &Theme) -> Option<String> {
    let value = value.into().filter(|v| !v.is_empty())?;
    Some(match theme.colors.value_of(value) {
        Some(hit) => hit.to_string(),
        None => value.to_string(),
    })
}

/// Resolve a spacing token or pass a literal CSS length through.
pub fn resolve_spacing<'a>(value: impl Into<Option<&'a str>>, theme: &Theme) -> Option<String> {
    let value = value.into().filter(|v| !v.is_empty())?;
    Some(match theme.spacing.value_of(value) {
        Some(hit) => hit.to_string(),
        None => value.to_string(),
    })
}

/// Resolve 1-4 spacing values to a CSS shorthand string.
///
/// Follows CSS shorthand semantics (all; vertical/horizontal;
/// top/right/bottom/left): each element resolves independently and the
/// results join with single spaces, order preserved.
pub fn resolve_spacing_array(values: &[&str], theme: &Theme) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let resolved: Vec<String> = values
        .iter()
        .map(|v| resolve_spacing(*v, theme).unwrap_or_default())
        .collect();
    Some(resolved.join(" "))
}

/// Resolve a radius token or pass a literal through.
pub fn resolve_radius<'a>(value: impl Into<Option<&'a str>>, theme: &Theme) -> Option<String> {
    let value = value.into().filter(|v| !v.is_empty())?;
    Some(match theme.radius.value_of(value) {
        Some(hit) => hit.to_string(),
        None => value.to_string(),
    })
}

/// Resolve a box-shadow token or pass a literal through.
pub fn resolve_shadow<'a>(value: impl Into<Option<&'a str>>, theme: &Theme) -> Option<String> {
    let value = value.into().filter(|v| !v.is_empty())?;
    Some(match theme.box_shadow.value_of(value) {
        Some(hit) => hit.to_string(),
        None => value.to_string(),
    })
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The contrast foreground paired with a palette color.
///
/// The paired key is derived by name: `"on"` plus the base key with its
/// first letter capitalized (`"primary"` -> `"onPrimary"`). A base that is
/// not a palette key - including any literal CSS color - gets the fixed
/// `"#fff"` fallback; contrast is never computed from an arbitrary color
/// here (that is `tinct_color::readable_color`'s job).
pub fn on_color<'a>(color: impl Into<Option<&'a str>>, theme: &Theme) -> String {
    const FALLBACK: &str = "#fff";
    let Some(color) = color.into().filter(|c| !c.is_empty()) else {
        return FALLBACK.to_string();
    };
    if theme.colors.value_of(color).is_none() {
        return FALLBACK.to_string();
    }
    let derived = format!("on{}", capitalized(color));
    theme
        .colors
        .value_of(&derived)
        .unwrap_or(FALLBACK)
        .to_string()
}

/// The muted container variant of a palette color.
///
/// Derived key: base + `"Container"`. Falls back to the resolved base color
/// when no container variant exists.
pub fn container_color<'a>(color: impl Into<Option<&'a str>>, theme: &Theme) -> Option<String> {
    let color = color.into().filter(|c| !c.is_empty())?;
    match theme.colors.value_of(&format!("{color}Container")) {
        Some(hit) => Some(hit.to_string()),
        None => resolve_color(color, theme),
    }
}

/// The contrast foreground for a container variant.
///
/// Derived key: `"on"` + capitalized base + `"Container"`. Falls back to
/// [`on_color`]; an absent input falls back to `"#000"`.
pub fn on_container_color<'a>(color: impl Into<Option<&'a str>>, theme: &Theme) -> String {
    const FALLBACK: &str = "#000";
    let Some(color) = color.into().filter(|c| !c.is_empty()) else {
        return FALLBACK.to_string();
    };
    match theme
        .colors
        .value_of(&format!("on{}Container", capitalized(color)))
    {
        Some(hit) => hit.to_string(),
        None => on_color(color, theme),
    }
}

/// Flexbox alignment vocabulary for the cross axis.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
    Stretch,
    Baseline,
}

impl Align {
    /// The concrete `align-items` keyword. Total: every variant maps.
    pub fn css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            "stretch" => Some(Self::Stretch),
            "baseline" => Some(Self::Baseline),
            _ => None,
        }
    }
}

/// Flexbox distribution vocabulary for the main axis.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl Justify {
    /// The concrete `justify-content` keyword. Total: every variant maps.
    pub fn css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Between => "space-between",
            Self::Around => "space-around",
            Self::Evenly => "space-evenly",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            "between" => Some(Self::Between),
            "around" => Some(Self::Around),
            "evenly" => Some(Self::Evenly),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default()
    }

    #[test]
    fn tokens_resolve_and_literals_pass_through() {
        let theme = theme();
        assert_eq!(resolve_spacing("m", &theme).as_deref(), Some("16px"));
        assert_eq!(resolve_spacing("17px", &theme).as_deref(), Some("17px"));
        assert_eq!(resolve_radius("full", &theme).as_deref(), Some("9999px"));
        assert_eq!(resolve_radius("50%", &theme).as_deref(), Some("50%"));
        assert_eq!(
            resolve_color("linear-gradient(90deg, #000, #fff)", &theme)
                .as_deref(),
            Some("linear-gradient(90deg, #000, #fff)")
        );
    }

    #[test]
    fn absent_and_empty_values_resolve_to_none() {
        let theme = theme();
        assert_eq!(resolve_color(None, &theme), None);
        assert_eq!(resolve_spacing("", &theme), None);
        assert_eq!(resolve_spacing_array(&[], &theme), None);
    }

    #[test]
    fn spacing_array_follows_shorthand_order() {
        let theme = theme();
        assert_eq!(resolve_spacing_array(&["m"], &theme).as_deref(), Some("16px"));
        assert_eq!(
            resolve_spacing_array(&["s", "m"], &theme).as_deref(),
            Some("8px 16px")
        );
        assert_eq!(
            resolve_spacing_array(&["xs", "s", "m", "l"], &theme).as_deref(),
            Some("4px 8px 16px 24px")
        );
        assert_eq!(
            resolve_spacing_array(&["s", "12px"], &theme).as_deref(),
            Some("8px 12px")
        );
    }

    #[test]
    fn on_color_derives_by_capitalizing_the_base_key() {
        let theme = theme();
        assert_eq!(on_color("primary", &theme), "#ffffff");
        // Capitalization only touches the first letter of the base key.
        assert_eq!(on_color("surfaceVariant", &theme), "#6b7280");
    }

    #[test]
    fn on_color_falls_back_for_literals_and_unpaired_keys() {
        let theme = theme();
        // A literal color never gets a computed contrast.
        assert_eq!(on_color("#123456", &theme), "#fff");
        // A real key without an "on" pairing hits the same fallback.
        assert_eq!(on_color("border", &theme), "#fff");
        assert_eq!(on_color(None, &theme), "#fff");
    }

    #[test]
    fn container_color_falls_back_to_the_base_color() {
        let theme = theme();
        assert_eq!(
            container_color("primary", &theme).as_deref(),
            Some("#ffedd5")
        );
        // No "surfaceContainer" key: resolves the base instead.
        assert_eq!(
            container_color("surface", &theme).as_deref(),
            Some("#eef1f3")
        );
        assert_eq!(container_color("#abcdef", &theme).as_deref(), Some("#abcdef"));
    }

    #[test]
    fn on_container_color_chains_its_fallbacks() {
        let theme = theme();
        assert_eq!(on_container_color("primary", &theme), "#7c2d12");
        // No "onSurfaceContainer": falls back to on_color("surface").
        assert_eq!(on_container_color("surface", &theme), "#1f2937");
        assert_eq!(on_container_color(None, &theme), "#000");
    }

    #[test]
    fn align_and_justify_maps_are_total() {
        for (align, css) in [
            (Align::Start, "flex-start"),
            (Align::Center, "center"),
            (Align::End, "flex-end"),
            (Align::Stretch, "stretch"),
            (Align::Baseline, "baseline"),
        ] {
            assert_eq!(align.css(), css);
            assert_eq!(Align::from_name(css_name(align)), Some(align));
        }
        for (justify, css) in [
            (Justify::Start, "flex-start"),
            (Justify::Center, "center"),
            (Justify::End, "flex-end"),
            (Justify::Between, "space-between"),
            (Justify::Around, "space-around"),
            (Justify::Evenly, "space-evenly"),
        ] {
            assert_eq!(justify.css(), css);
        }
    }

    fn css_name(align: Align) -> &'static str {
        match align {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
            Align::Stretch => "stretch",
            Align::Baseline => "baseline",
        }
    }
}
