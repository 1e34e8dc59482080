//! CSS color algebra for tinct
//!
//! Pure string-in/string-out color manipulation in the SCSS tradition:
//! every function accepts hex (`#abc`, `#aabbcc`, `#aabbccdd`), `rgb()`/
//! `rgba()`, and `hsl()`/`hsla()` input and normalizes to an [`Rgba`]
//! record before operating.
//!
//! # Quick Start
//!
//! ```
//! use tinct_color::{lighten, mix, readable_color};
//!
//! let hover = lighten("#f97316", 10.0).unwrap();
//! let blend = mix("#ff0000", "#0000ff", 50.0).unwrap();
//! assert_eq!(readable_color("#ffffff").unwrap(), "#000000");
//! ```
//!
//! # Errors
//!
//! Malformed input is never coerced to a fallback color: every entry point
//! that parses returns [`ColorParseError`] so bad input stays observable.

mod contrast;
mod error;
mod parse;
mod rgba;
mod transform;

pub use contrast::{contrast_ratio, is_dark, is_light, luminance, readable_color};
pub use error::ColorParseError;
pub use parse::{hex_to_rgba, parse_color};
pub use rgba::{Hsl, Rgba};
pub use transform::{
    adjust_hue, alpha, complement, darken, desaturate, grayscale, invert, lighten, mix, opacify,
    saturate, shade, tint, transparentize,
};
