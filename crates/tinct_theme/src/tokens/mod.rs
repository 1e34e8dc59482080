//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (light and dark palettes)
//! - Spacing and border radii
//! - Breakpoints, container widths, z-index layers
//! - Box shadows
//! - Typography (font ramp and weights)
//! - Transition speeds
//!
//! Every token key set is a closed enumeration with a stable string
//! vocabulary (`name`/`from_name`); the value tables are fully populated by
//! construction.

/// Key-by-key merge of an all-`Option` override struct into its resolved
/// counterpart: a present field wins, an absent field keeps the base value.
macro_rules! merge_fields {
    ($base:ident, $overrides:ident: $($field:ident),+ $(,)?) => {
        $(if let Some(v) = $overrides.$field {
            $base.$field = v;
        })+
    };
}
pub(crate) use merge_fields;

mod color;
mod layout;
mod radius;
mod shadow;
mod spacing;
mod transition;
mod typography;

pub use color::*;
pub use layout::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use transition::*;
pub use typography::*;
