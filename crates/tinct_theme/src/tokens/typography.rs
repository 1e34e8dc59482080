//! Typography tokens
//!
//! A twelve-role font ramp. Unlike the flat token tables, typography merges
//! two levels deep: a configured role is merged field-by-field over that
//! role's default, and roles left out of the configuration stay untouched.

use serde::{Deserialize, Serialize};

/// Named font weights.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    ExtraThin,
    Thin,
    #[default]
    Regular,
    Medium,
    Bold,
    Extrabold,
}

impl FontWeight {
    pub fn name(self) -> &'static str {
        match self {
            Self::ExtraThin => "extraThin",
            Self::Thin => "thin",
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::Bold => "bold",
            Self::Extrabold => "extrabold",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|w| w.name() == name)
    }

    /// Numeric CSS `font-weight`.
    pub fn value(self) -> u16 {
        match self {
            Self::ExtraThin => 100,
            Self::Thin => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Bold => 700,
            Self::Extrabold => 800,
        }
    }

    pub fn all() -> &'static [FontWeight] {
        const WEIGHTS: [FontWeight; 6] = [
            FontWeight::ExtraThin,
            FontWeight::Thin,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Bold,
            FontWeight::Extrabold,
        ];
        &WEIGHTS
    }
}

/// Typography roles.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontRole {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body1,
    Body2,
    Subtitle1,
    Subtitle2,
    Caption,
    Overline,
}

impl FontRole {
    pub fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
            Self::Subtitle1 => "subtitle1",
            Self::Subtitle2 => "subtitle2",
            Self::Caption => "caption",
            Self::Overline => "overline",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.name() == name)
    }

    pub fn all() -> &'static [FontRole] {
        const ROLES: [FontRole; 12] = [
            FontRole::H1,
            FontRole::H2,
            FontRole::H3,
            FontRole::H4,
            FontRole::H5,
            FontRole::H6,
            FontRole::Body1,
            FontRole::Body2,
            FontRole::Subtitle1,
            FontRole::Subtitle2,
            FontRole::Caption,
            FontRole::Overline,
        ];
        &ROLES
    }
}

/// One role's font definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub font_weight: FontWeight,
    pub italic: bool,
}

impl Font {
    pub fn merged(mut self, overrides: PartialFont) -> Self {
        super::merge_fields!(self, overrides:
            font_family, font_size, line_height, letter_spacing, font_weight, italic,
        );
        self
    }
}

const BASE_FAMILY: &str =
    "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

fn base_font(size: &str, line_height: &str, weight: FontWeight) -> Font {
    Font {
        font_family: BASE_FAMILY.into(),
        font_size: size.into(),
        line_height: line_height.into(),
        letter_spacing: "normal".into(),
        font_weight: weight,
        italic: false,
    }
}

/// The full font ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct FontScale {
    pub h1: Font,
    pub h2: Font,
    pub h3: Font,
    pub h4: Font,
    pub h5: Font,
    pub h6: Font,
    pub body1: Font,
    pub body2: Font,
    pub subtitle1: Font,
    pub subtitle2: Font,
    pub caption: Font,
    pub overline: Font,
}

impl FontScale {
    pub fn get(&self, role: FontRole) -> &Font {
        match role {
            FontRole::H1 => &self.h1,
            FontRole::H2 => &self.h2,
            FontRole::H3 => &self.h3,
            FontRole::H4 => &self.h4,
            FontRole::H5 => &self.h5,
            FontRole::H6 => &self.h6,
            FontRole::Body1 => &self.body1,
            FontRole::Body2 => &self.body2,
            FontRole::Subtitle1 => &self.subtitle1,
            FontRole::Subtitle2 => &self.subtitle2,
            FontRole::Caption => &self.caption,
            FontRole::Overline => &self.overline,
        }
    }

    /// Two-level merge: each configured role is merged over its default,
    /// absent roles pass through unchanged.
    pub fn merged(mut self, overrides: PartialFontScale) -> Self {
        macro_rules! merge_roles {
            ($($role:ident),+ $(,)?) => {
                $(if let Some(partial) = overrides.$role {
                    self.$role = self.$role.merged(partial);
                })+
            };
        }
        merge_roles!(
            h1, h2, h3, h4, h5, h6, body1, body2, subtitle1, subtitle2, caption, overline,
        );
        self
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            h1: base_font("2.5rem", "1.2", FontWeight::Bold),
            h2: base_font("2rem", "1.25", FontWeight::Bold),
            h3: base_font("1.75rem", "1.3", FontWeight::Bold),
            h4: base_font("1.5rem", "1.35", FontWeight::Medium),
            h5: base_font("1.25rem", "1.4", FontWeight::Medium),
            h6: base_font("1rem", "1.45", FontWeight::Medium),
            body1: base_font("1rem", "1.5", FontWeight::Regular),
            body2: base_font("0.875rem", "1.5", FontWeight::Regular),
            subtitle1: base_font("1rem", "1.5", FontWeight::Medium),
            subtitle2: base_font("0.875rem", "1.5", FontWeight::Medium),
            caption: base_font("0.75rem", "1.4", FontWeight::Regular),
            overline: Font {
                letter_spacing: "0.1em".into(),
                ..base_font("0.625rem", "1.4", FontWeight::Regular)
            },
        }
    }
}

/// Sparse override for one role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFont {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub italic: Option<bool>,
}

/// Sparse override for the ramp.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialFontScale {
    pub h1: Option<PartialFont>,
    pub h2: Option<PartialFont>,
    pub h3: Option<PartialFont>,
    pub h4: Option<PartialFont>,
    pub h5: Option<PartialFont>,
    pub h6: Option<PartialFont>,
    pub body1: Option<PartialFont>,
    pub body2: Option<PartialFont>,
    pub subtitle1: Option<PartialFont>,
    pub subtitle2: Option<PartialFont>,
    pub caption: Option<PartialFont>,
    pub overline: Option<PartialFont>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_values_follow_the_ramp() {
        assert_eq!(FontWeight::ExtraThin.value(), 100);
        assert_eq!(FontWeight::Regular.value(), 400);
        assert_eq!(FontWeight::Extrabold.value(), 800);
    }

    #[test]
    fn role_merge_is_field_wise_and_role_scoped() {
        let fonts = FontScale::default().merged(PartialFontScale {
            h1: Some(PartialFont {
                font_size: Some("4rem".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        // Overridden field changes, sibling fields and other roles keep defaults.
        assert_eq!(fonts.h1.font_size, "4rem");
        assert_eq!(fonts.h1.font_weight, FontWeight::Bold);
        assert_eq!(fonts.h2, FontScale::default().h2);
    }

    #[test]
    fn overline_tracks_wide_letter_spacing() {
        assert_eq!(FontScale::default().overline.letter_spacing, "0.1em");
    }
}
