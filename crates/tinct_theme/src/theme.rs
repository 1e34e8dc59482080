//! Resolved theme and the merge that produces it

use std::sync::{Arc, OnceLock};

use crate::config::{ClickEffect, ThemeConfig};
use crate::scheme::ColorScheme;
use crate::tokens::{
    BreakpointScale, ColorPalette, ContainerScale, FontScale, RadiusScale, ShadowScale,
    SpacingScale, TransitionSpeeds, ZIndexScale,
};

static DEFAULT_THEME: OnceLock<Arc<Theme>> = OnceLock::new();

/// Fully-populated theme snapshot.
///
/// Immutable once built: every token of every table has a concrete value,
/// so readers never need a fallback path.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub colors: ColorPalette,
    pub dark_colors: ColorPalette,
    pub spacing: SpacingScale,
    pub radius: RadiusScale,
    pub z_index: ZIndexScale,
    pub container: ContainerScale,
    pub breakpoints: BreakpointScale,
    pub box_shadow: ShadowScale,
    pub fonts: FontScale,
    pub transitions: TransitionSpeeds,
    pub click_effect: ClickEffect,
}

impl Theme {
    /// The palette for a color scheme.
    pub fn palette(&self, scheme: ColorScheme) -> &ColorPalette {
        match scheme {
            ColorScheme::Light => &self.colors,
            ColorScheme::Dark => &self.dark_colors,
        }
    }

    /// The process-wide default theme (`create_theme` of an empty config),
    /// built once and shared.
    pub fn shared_default() -> Arc<Theme> {
        DEFAULT_THEME
            .get_or_init(|| Arc::new(create_theme(ThemeConfig::default())))
            .clone()
    }
}

impl Default for Theme {
    fn default() -> Self {
        create_theme(ThemeConfig::default())
    }
}

/// Merge a partial configuration over the default tables into a complete
/// [`Theme`].
///
/// Each section merges key by key: a key present in the config overrides,
/// an absent key keeps the default. Fonts merge two levels deep (per role,
/// then per field). The merge never mutates the defaults, so repeated calls
/// are independent.
pub fn create_theme(config: ThemeConfig) -> Theme {
    let mut theme = Theme {
        colors: ColorPalette::light(),
        dark_colors: ColorPalette::dark(),
        spacing: SpacingScale::default(),
        radius: RadiusScale::default(),
        z_index: ZIndexScale::default(),
        container: ContainerScale::default(),
        breakpoints: BreakpointScale::default(),
        box_shadow: ShadowScale::default(),
        fonts: FontScale::default(),
        transitions: TransitionSpeeds::default(),
        click_effect: config.click_effect.unwrap_or_default(),
    };

    if let Some(overrides) = config.colors {
        theme.colors = theme.colors.merged(overrides);
    }
    if let Some(overrides) = config.dark_colors {
        theme.dark_colors = theme.dark_colors.merged(overrides);
    }
    if let Some(overrides) = config.spacing {
        theme.spacing = theme.spacing.merged(overrides);
    }
    if let Some(overrides) = config.radius {
        theme.radius = theme.radius.merged(overrides);
    }
    if let Some(overrides) = config.z_index {
        theme.z_index = theme.z_index.merged(overrides);
    }
    if let Some(overrides) = config.container {
        theme.container = theme.container.merged(overrides);
    }
    if let Some(overrides) = config.breakpoints {
        theme.breakpoints = theme.breakpoints.merged(overrides);
    }
    if let Some(overrides) = config.box_shadow {
        theme.box_shadow = theme.box_shadow.merged(overrides);
    }
    if let Some(overrides) = config.fonts {
        theme.fonts = theme.fonts.merged(overrides);
    }
    if let Some(overrides) = config.transitions {
        theme.transitions = theme.transitions.merged(overrides);
    }

    theme
}
