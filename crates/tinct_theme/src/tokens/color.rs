//! Color palette tokens
//!
//! Palette keys follow a naming convention the style resolver depends on:
//! a base key `x` may carry a paired `onX` (contrast foreground) and
//! optionally `xContainer` / `onXContainer` (muted surface variants). The
//! derived lookups in `resolve` build those names by string concatenation,
//! so the vocabulary here is a contract, not a convenience.

use serde::{Deserialize, Serialize};

/// Palette token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorKey {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Trinary,
    OnTrinary,
    TrinaryContainer,
    OnTrinaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Success,
    OnSuccess,
    SuccessContainer,
    OnSuccessContainer,
    Warning,
    OnWarning,
    WarningContainer,
    OnWarningContainer,
    Info,
    OnInfo,
    InfoContainer,
    OnInfoContainer,
    Bg,
    OnBg,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Border,
    Outline,
    OutlineVariant,
    Card,
    OnCard,
    Shadow,
}

impl ColorKey {
    /// Stable token name as used in configuration and derived lookups.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "onPrimary",
            Self::PrimaryContainer => "primaryContainer",
            Self::OnPrimaryContainer => "onPrimaryContainer",
            Self::Secondary => "secondary",
            Self::OnSecondary => "onSecondary",
            Self::SecondaryContainer => "secondaryContainer",
            Self::OnSecondaryContainer => "onSecondaryContainer",
            Self::Trinary => "trinary",
            Self::OnTrinary => "onTrinary",
            Self::TrinaryContainer => "trinaryContainer",
            Self::OnTrinaryContainer => "onTrinaryContainer",
            Self::Error => "error",
            Self::OnError => "onError",
            Self::ErrorContainer => "errorContainer",
            Self::OnErrorContainer => "onErrorContainer",
            Self::Success => "success",
            Self::OnSuccess => "onSuccess",
            Self::SuccessContainer => "successContainer",
            Self::OnSuccessContainer => "onSuccessContainer",
            Self::Warning => "warning",
            Self::OnWarning => "onWarning",
            Self::WarningContainer => "warningContainer",
            Self::OnWarningContainer => "onWarningContainer",
            Self::Info => "info",
            Self::OnInfo => "onInfo",
            Self::InfoContainer => "infoContainer",
            Self::OnInfoContainer => "onInfoContainer",
            Self::Bg => "bg",
            Self::OnBg => "onBg",
            Self::Surface => "surface",
            Self::OnSurface => "onSurface",
            Self::SurfaceVariant => "surfaceVariant",
            Self::OnSurfaceVariant => "onSurfaceVariant",
            Self::Border => "border",
            Self::Outline => "outline",
            Self::OutlineVariant => "outlineVariant",
            Self::Card => "card",
            Self::OnCard => "onCard",
            Self::Shadow => "shadow",
        }
    }

    /// Reverse of [`ColorKey::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    /// Full key list.
    pub fn all() -> &'static [ColorKey] {
        const KEYS: [ColorKey; 40] = [
            ColorKey::Primary,
            ColorKey::OnPrimary,
            ColorKey::PrimaryContainer,
            ColorKey::OnPrimaryContainer,
            ColorKey::Secondary,
            ColorKey::OnSecondary,
            ColorKey::SecondaryContainer,
            ColorKey::OnSecondaryContainer,
            ColorKey::Trinary,
            ColorKey::OnTrinary,
            ColorKey::TrinaryContainer,
            ColorKey::OnTrinaryContainer,
            ColorKey::Error,
            ColorKey::OnError,
            ColorKey::ErrorContainer,
            ColorKey::OnErrorContainer,
            ColorKey::Success,
            ColorKey::OnSuccess,
            ColorKey::SuccessContainer,
            ColorKey::OnSuccessContainer,
            ColorKey::Warning,
            ColorKey::OnWarning,
            ColorKey::WarningContainer,
            ColorKey::OnWarningContainer,
            ColorKey::Info,
            ColorKey::OnInfo,
            ColorKey::InfoContainer,
            ColorKey::OnInfoContainer,
            ColorKey::Bg,
            ColorKey::OnBg,
            ColorKey::Surface,
            ColorKey::OnSurface,
            ColorKey::SurfaceVariant,
            ColorKey::OnSurfaceVariant,
            ColorKey::Border,
            ColorKey::Outline,
            ColorKey::OutlineVariant,
            ColorKey::Card,
            ColorKey::OnCard,
            ColorKey::Shadow,
        ];
        &KEYS
    }
}

/// Fully-populated color palette (CSS color strings).
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalette {
    pub primary: String,
    pub on_primary: String,
    pub primary_container: String,
    pub on_primary_container: String,
    pub secondary: String,
    pub on_secondary: String,
    pub secondary_container: String,
    pub on_secondary_container: String,
    pub trinary: String,
    pub on_trinary: String,
    pub trinary_container: String,
    pub on_trinary_container: String,
    pub error: String,
    pub on_error: String,
    pub error_container: String,
    pub on_error_container: String,
    pub success: String,
    pub on_success: String,
    pub success_container: String,
    pub on_success_container: String,
    pub warning: String,
    pub on_warning: String,
    pub warning_container: String,
    pub on_warning_container: String,
    pub info: String,
    pub on_info: String,
    pub info_container: String,
    pub on_info_container: String,
    pub bg: String,
    pub on_bg: String,
    pub surface: String,
    pub on_surface: String,
    pub surface_variant: String,
    pub on_surface_variant: String,
    pub border: String,
    pub outline: String,
    pub outline_variant: String,
    pub card: String,
    pub on_card: String,
    pub shadow: String,
}

impl ColorPalette {
    /// Get a color by token key.
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::OnPrimary => &self.on_primary,
            ColorKey::PrimaryContainer => &self.primary_container,
            ColorKey::OnPrimaryContainer => &self.on_primary_container,
            ColorKey::Secondary => &self.secondary,
            ColorKey::OnSecondary => &self.on_secondary,
            ColorKey::SecondaryContainer => &self.secondary_container,
            ColorKey::OnSecondaryContainer => &self.on_secondary_container,
            ColorKey::Trinary => &self.trinary,
            ColorKey::OnTrinary => &self.on_trinary,
            ColorKey::TrinaryContainer => &self.trinary_container,
            ColorKey::OnTrinaryContainer => &self.on_trinary_container,
            ColorKey::Error => &self.error,
            ColorKey::OnError => &self.on_error,
            ColorKey::ErrorContainer => &self.error_container,
            ColorKey::OnErrorContainer => &self.on_error_container,
            ColorKey::Success => &self.success,
            ColorKey::OnSuccess => &self.on_success,
            ColorKey::SuccessContainer => &self.success_container,
            ColorKey::OnSuccessContainer => &self.on_success_container,
            ColorKey::Warning => &self.warning,
            ColorKey::OnWarning => &self.on_warning,
            ColorKey::WarningContainer => &self.warning_container,
            ColorKey::OnWarningContainer => &self.on_warning_container,
            ColorKey::Info => &self.info,
            ColorKey::OnInfo => &self.on_info,
            ColorKey::InfoContainer => &self.info_container,
            ColorKey::OnInfoContainer => &self.on_info_container,
            ColorKey::Bg => &self.bg,
            ColorKey::OnBg => &self.on_bg,
            ColorKey::Surface => &self.surface,
            ColorKey::OnSurface => &self.on_surface,
            ColorKey::SurfaceVariant => &self.surface_variant,
            ColorKey::OnSurfaceVariant => &self.on_surface_variant,
            ColorKey::Border => &self.border,
            ColorKey::Outline => &self.outline,
            ColorKey::OutlineVariant => &self.outline_variant,
            ColorKey::Card => &self.card,
            ColorKey::OnCard => &self.on_card,
            ColorKey::Shadow => &self.shadow,
        }
    }

    /// Look a token name up in the palette; `None` when the string is not a
    /// palette key.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        ColorKey::from_name(name).map(|key| self.get(key))
    }

    /// Default light palette.
    pub fn light() -> Self {
        Self {
            primary: "#f97316".into(),
            on_primary: "#ffffff".into(),
            primary_container: "#ffedd5".into(),
            on_primary_container: "#7c2d12".into(),

            secondary: "#22c55e".into(),
            on_secondary: "#ffffff".into(),
            secondary_container: "#dcfce7".into(),
            on_secondary_container: "#14532d".into(),

            trinary: "#a855f7".into(),
            on_trinary: "#ffffff".into(),
            trinary_container: "#f3e8ff".into(),
            on_trinary_container: "#3b0764".into(),

            error: "#ef4444".into(),
            on_error: "#ffffff".into(),
            error_container: "#fee2e2".into(),
            on_error_container: "#7f1d1d".into(),

            success: "#22c55e".into(),
            on_success: "#ffffff".into(),
            success_container: "#dcfce7".into(),
            on_success_container: "#14532d".into(),

            warning: "#f59e0b".into(),
            on_warning: "#ffffff".into(),
            warning_container: "#fef3c7".into(),
            on_warning_container: "#78350f".into(),

            info: "#3b82f6".into(),
            on_info: "#ffffff".into(),
            info_container: "#dbeafe".into(),
            on_info_container: "#1e3a8a".into(),

            bg: "#ffffff".into(),
            on_bg: "#1f2937".into(),
            surface: "#eef1f3".into(),
            on_surface: "#1f2937".into(),
            surface_variant: "#f3f4f6".into(),
            on_surface_variant: "#6b7280".into(),

            border: "#e5e7eb".into(),
            outline: "#9ca3af".into(),
            outline_variant: "#e5e7eb".into(),

            card: "#cccccc".into(),
            on_card: "#000000".into(),

            shadow: "rgba(0,0,0,0.1)".into(),
        }
    }

    /// Default dark palette.
    pub fn dark() -> Self {
        Self {
            primary: "#fb923c".into(),
            on_primary: "#7c2d12".into(),
            primary_container: "#7c2d12".into(),
            on_primary_container: "#ffedd5".into(),

            secondary: "#4ade80".into(),
            on_secondary: "#14532d".into(),
            secondary_container: "#14532d".into(),
            on_secondary_container: "#dcfce7".into(),

            trinary: "#c084fc".into(),
            on_trinary: "#3b0764".into(),
            trinary_container: "#581c87".into(),
            on_trinary_container: "#f3e8ff".into(),

            error: "#f87171".into(),
            on_error: "#7f1d1d".into(),
            error_container: "#7f1d1d".into(),
            on_error_container: "#fee2e2".into(),

            success: "#4ade80".into(),
            on_success: "#14532d".into(),
            success_container: "#14532d".into(),
            on_success_container: "#dcfce7".into(),

            warning: "#fbbf24".into(),
            on_warning: "#78350f".into(),
            warning_container: "#78350f".into(),
            on_warning_container: "#fef3c7".into(),

            info: "#60a5fa".into(),
            on_info: "#1e3a8a".into(),
            info_container: "#1e3a8a".into(),
            on_info_container: "#dbeafe".into(),

            bg: "#111827".into(),
            on_bg: "#f9fafb".into(),
            surface: "#1f2937".into(),
            on_surface: "#f9fafb".into(),
            surface_variant: "#374151".into(),
            on_surface_variant: "#9ca3af".into(),

            border: "#4b5563".into(),
            outline: "#6b7280".into(),
            outline_variant: "#4b5563".into(),

            card: "#2d3947".into(),
            on_card: "#f9fafb".into(),

            shadow: "rgba(0,0,0,0.3)".into(),
        }
    }

    /// Key-by-key merge: any key present in `overrides` wins, everything
    /// else keeps the value already in `self`.
    pub fn merged(mut self, overrides: PartialColorPalette) -> Self {
        super::merge_fields!(self, overrides:
            primary,
            on_primary,
            primary_container,
            on_primary_container,
            secondary,
            on_secondary,
            secondary_container,
            on_secondary_container,
            trinary,
            on_trinary,
            trinary_container,
            on_trinary_container,
            error,
            on_error,
            error_container,
            on_error_container,
            success,
            on_success,
            success_container,
            on_success_container,
            warning,
            on_warning,
            warning_container,
            on_warning_container,
            info,
            on_info,
            info_container,
            on_info_container,
            bg,
            on_bg,
            surface,
            on_surface,
            surface_variant,
            on_surface_variant,
            border,
            outline,
            outline_variant,
            card,
            on_card,
            shadow,
        );
        self
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

/// Sparse palette override, as accepted in theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialColorPalette {
    pub primary: Option<String>,
    pub on_primary: Option<String>,
    pub primary_container: Option<String>,
    pub on_primary_container: Option<String>,
    pub secondary: Option<String>,
    pub on_secondary: Option<String>,
    pub secondary_container: Option<String>,
    pub on_secondary_container: Option<String>,
    pub trinary: Option<String>,
    pub on_trinary: Option<String>,
    pub trinary_container: Option<String>,
    pub on_trinary_container: Option<String>,
    pub error: Option<String>,
    pub on_error: Option<String>,
    pub error_container: Option<String>,
    pub on_error_container: Option<String>,
    pub success: Option<String>,
    pub on_success: Option<String>,
    pub success_container: Option<String>,
    pub on_success_container: Option<String>,
    pub warning: Option<String>,
    pub on_warning: Option<String>,
    pub warning_container: Option<String>,
    pub on_warning_container: Option<String>,
    pub info: Option<String>,
    pub on_info: Option<String>,
    pub info_container: Option<String>,
    pub on_info_container: Option<String>,
    pub bg: Option<String>,
    pub on_bg: Option<String>,
    pub surface: Option<String>,
    pub on_surface: Option<String>,
    pub surface_variant: Option<String>,
    pub on_surface_variant: Option<String>,
    pub border: Option<String>,
    pub outline: Option<String>,
    pub outline_variant: Option<String>,
    pub card: Option<String>,
    pub on_card: Option<String>,
    pub shadow: Option<String>,
}
