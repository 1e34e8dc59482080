//! tinct theming system
//!
//! Design tokens, theme merging, ambient context, and style resolution for
//! the tinct component toolkit.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: colors (light/dark palettes), spacing, radii,
//!   breakpoints, container widths, z-index layers, shadows, typography,
//!   transitions
//! - **Theme merging**: a sparse [`ThemeConfig`] merged key-by-key over the
//!   defaults into an immutable, fully-populated [`Theme`]
//! - **Theme context**: an explicit, shadowable binding threaded through the
//!   render tree
//! - **Style resolution**: token-or-literal lookup, including the derived
//!   on-color and container-color conventions
//! - **Color scheme**: light/dark state with system detection and a
//!   persisted preference
//!
//! # Quick Start
//!
//! ```
//! use tinct_theme::{create_theme, resolve_spacing, ThemeConfig, ThemeContext};
//!
//! // Merge a partial configuration over the defaults.
//! let theme = create_theme(ThemeConfig::default());
//!
//! // Bind it for a subtree and read tokens back.
//! let ctx = ThemeContext::new().with_theme(theme);
//! assert_eq!(ctx.colors().primary, "#f97316");
//! assert_eq!(resolve_spacing("m", ctx.theme()).as_deref(), Some("16px"));
//! ```
//!
//! # Escape hatches
//!
//! Resolver parameters accept either a token name or a literal CSS value;
//! unrecognized strings pass through untouched, so components stay themeable
//! without closing off one-off values.

pub mod config;
pub mod context;
pub mod resolve;
pub mod scheme;
pub mod theme;
pub mod tokens;

// Re-export the everyday surface.
pub use config::{ClickEffect, ThemeConfig, ThemeConfigError};
pub use context::ThemeContext;
pub use resolve::{
    container_color, on_color, on_container_color, resolve_color, resolve_radius, resolve_shadow,
    resolve_spacing, resolve_spacing_array, Align, Justify,
};
pub use scheme::{detect_system_color_scheme, ColorScheme, SchemePreference};
pub use theme::{create_theme, Theme};
pub use tokens::*;
