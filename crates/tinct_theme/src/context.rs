//! Theme context: explicit, shadowable theme binding
//!
//! A [`ThemeContext`] is the handle a render tree threads down to its
//! children. It is deliberately not a mutable global: a subtree that wants a
//! different theme derives a child context with [`ThemeContext::with_theme`]
//! and passes that down instead, which shadows the binding for exactly that
//! subtree. Readers elsewhere keep the snapshot they already hold, so
//! independently-themed regions (and tests running in parallel) never
//! observe each other.

use std::sync::Arc;

use crate::config::ClickEffect;
use crate::theme::Theme;
use crate::tokens::{
    ColorPalette, FontScale, RadiusScale, ShadowScale, SpacingScale, TransitionSpeeds, ZIndexScale,
};

/// Ambient theme binding for a render subtree.
///
/// Cheap to clone: contexts share the underlying [`Theme`] snapshot.
#[derive(Clone, Debug)]
pub struct ThemeContext {
    theme: Arc<Theme>,
}

impl ThemeContext {
    /// A context bound to the process-wide default theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::shared_default(),
        }
    }

    /// A context bound to a specific theme.
    pub fn bound(theme: impl Into<Arc<Theme>>) -> Self {
        let theme = theme.into();
        tracing::debug!("binding theme context");
        Self { theme }
    }

    /// Derive a child context with `theme` shadowing this binding.
    ///
    /// The receiver is untouched; only the subtree handed the returned
    /// context sees the new theme.
    pub fn with_theme(&self, theme: impl Into<Arc<Theme>>) -> Self {
        Self::bound(theme)
    }

    /// The nearest bound theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Shared handle to the bound theme, for collaborators that outlive the
    /// borrow.
    pub fn theme_handle(&self) -> Arc<Theme> {
        self.theme.clone()
    }

    // Section projections - no independent state, each is a view of the
    // bound snapshot.

    pub fn colors(&self) -> &ColorPalette {
        &self.theme.colors
    }

    pub fn dark_colors(&self) -> &ColorPalette {
        &self.theme.dark_colors
    }

    pub fn spacing(&self) -> &SpacingScale {
        &self.theme.spacing
    }

    pub fn radius(&self) -> &RadiusScale {
        &self.theme.radius
    }

    pub fn box_shadow(&self) -> &ShadowScale {
        &self.theme.box_shadow
    }

    pub fn z_index(&self) -> &ZIndexScale {
        &self.theme.z_index
    }

    pub fn fonts(&self) -> &FontScale {
        &self.theme.fonts
    }

    pub fn transitions(&self) -> &TransitionSpeeds {
        &self.theme.transitions
    }

    pub fn click_effect(&self) -> ClickEffect {
        self.theme.click_effect
    }

    // Resolver shorthands against the nearest binding.

    pub fn resolve_color<'a>(&self, value: impl Into<Option<&'a str>>) -> Option<String> {
        crate::resolve::resolve_color(value, self.theme())
    }

    pub fn resolve_spacing<'a>(&self, value: impl Into<Option<&'a str>>) -> Option<String> {
        crate::resolve::resolve_spacing(value, self.theme())
    }

    pub fn resolve_spacing_array(&self, values: &[&str]) -> Option<String> {
        crate::resolve::resolve_spacing_array(values, self.theme())
    }

    pub fn resolve_radius<'a>(&self, value: impl Into<Option<&'a str>>) -> Option<String> {
        crate::resolve::resolve_radius(value, self.theme())
    }

    pub fn resolve_shadow<'a>(&self, value: impl Into<Option<&'a str>>) -> Option<String> {
        crate::resolve::resolve_shadow(value, self.theme())
    }

    pub fn on_color<'a>(&self, color: impl Into<Option<&'a str>>) -> String {
        crate::resolve::on_color(color, self.theme())
    }

    pub fn container_color<'a>(&self, color: impl Into<Option<&'a str>>) -> Option<String> {
        crate::resolve::container_color(color, self.theme())
    }

    pub fn on_container_color<'a>(&self, color: impl Into<Option<&'a str>>) -> String {
        crate::resolve::on_container_color(color, self.theme())
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
