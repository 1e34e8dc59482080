//! Theme configuration surface
//!
//! Everything here is optional and independently partial: an embedding
//! application supplies only the tokens it wants to change and the merge in
//! [`crate::create_theme`] fills the rest from the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokens::{
    PartialBreakpointScale, PartialColorPalette, PartialContainerScale, PartialFontScale,
    PartialRadiusScale, PartialShadowScale, PartialSpacingScale, PartialTransitionSpeeds,
    PartialZIndexScale,
};

/// Click/interaction effect for buttons and clickables.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickEffect {
    /// Scales down slightly on click.
    #[default]
    Scale,
    /// Material-style ripple.
    Ripple,
    /// Lifts on hover, presses down on click.
    Lift,
    /// No effect.
    None,
}

impl ClickEffect {
    pub fn name(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Ripple => "ripple",
            Self::Lift => "lift",
            Self::None => "none",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scale" => Some(Self::Scale),
            "ripple" => Some(Self::Ripple),
            "lift" => Some(Self::Lift),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Partial theme configuration.
///
/// Recognized sections: `colors`, `darkColors`, `spacing`, `radius`,
/// `zIndex`, `container`, `breakpoints`, `boxShadow`, `fonts`,
/// `transitions`, `clickEffect`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub colors: Option<PartialColorPalette>,
    pub dark_colors: Option<PartialColorPalette>,
    pub spacing: Option<PartialSpacingScale>,
    pub radius: Option<PartialRadiusScale>,
    pub z_index: Option<PartialZIndexScale>,
    pub container: Option<PartialContainerScale>,
    pub breakpoints: Option<PartialBreakpointScale>,
    pub box_shadow: Option<PartialShadowScale>,
    pub fonts: Option<PartialFontScale>,
    pub transitions: Option<PartialTransitionSpeeds>,
    /// Global click effect for buttons and clickables.
    pub click_effect: Option<ClickEffect>,
}

impl ThemeConfig {
    /// Load a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeConfigError> {
        Ok(toml::from_str(input)?)
    }
}

/// Failure to load a theme configuration.
#[derive(Debug, Error)]
pub enum ThemeConfigError {
    #[error("failed to parse theme config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_sections_use_the_documented_names() {
        let config = ThemeConfig::from_toml_str(
            r##"
            clickEffect = "ripple"

            [colors]
            primary = "#123456"
            onPrimary = "#ffffff"

            [spacing]
            m = "20px"
            "2xl" = "44px"

            [fonts.h1]
            fontSize = "3rem"
            fontWeight = "extrabold"
            "##,
        )
        .unwrap();

        assert_eq!(config.click_effect, Some(ClickEffect::Ripple));
        let colors = config.colors.unwrap();
        assert_eq!(colors.primary.as_deref(), Some("#123456"));
        assert_eq!(colors.on_primary.as_deref(), Some("#ffffff"));
        let spacing = config.spacing.unwrap();
        assert_eq!(spacing.m.as_deref(), Some("20px"));
        assert_eq!(spacing.xxl.as_deref(), Some("44px"));
        let h1 = config.fonts.unwrap().h1.unwrap();
        assert_eq!(h1.font_size.as_deref(), Some("3rem"));
        assert_eq!(
            h1.font_weight,
            Some(crate::tokens::FontWeight::Extrabold)
        );
    }

    #[test]
    fn unknown_toml_is_rejected_with_an_error() {
        assert!(ThemeConfig::from_toml_str("clickEffect = 3").is_err());
    }
}
