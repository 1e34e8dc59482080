//! SCSS-like color transforms
//!
//! Every transform parses its input, adjusts one channel with the adjusted
//! value clamped into its valid range (lightness/saturation/alpha to `[0, 1]`,
//! hue wrapped modulo 360), and serializes back to a CSS string.

use crate::error::ColorParseError;
use crate::parse::parse_color;
use crate::rgba::Rgba;

/// Raise lightness by `amount` percentage points (0-100).
pub fn lighten(color: &str, amount: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let mut hsl = rgba.to_hsl();
    hsl.l = (hsl.l + amount / 100.0).min(1.0);
    Ok(hsl.to_rgba().with_alpha(rgba.a).to_css_string())
}

/// Lower lightness by `amount` percentage points (0-100).
pub fn darken(color: &str, amount: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let mut hsl = rgba.to_hsl();
    hsl.l = (hsl.l - amount / 100.0).max(0.0);
    Ok(hsl.to_rgba().with_alpha(rgba.a).to_css_string())
}

/// Raise saturation by `amount` percentage points (0-100).
pub fn saturate(color: &str, amount: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let mut hsl = rgba.to_hsl();
    hsl.s = (hsl.s + amount / 100.0).min(1.0);
    Ok(hsl.to_rgba().with_alpha(rgba.a).to_css_string())
}

/// Lower saturation by `amount` percentage points (0-100).
pub fn desaturate(color: &str, amount: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let mut hsl = rgba.to_hsl();
    hsl.s = (hsl.s - amount / 100.0).max(0.0);
    Ok(hsl.to_rgba().with_alpha(rgba.a).to_css_string())
}

/// Rotate the hue by `degrees` (any sign), wrapping modulo 360.
pub fn adjust_hue(color: &str, degrees: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let mut hsl = rgba.to_hsl();
    hsl.h = (hsl.h + degrees).rem_euclid(360.0);
    Ok(hsl.to_rgba().with_alpha(rgba.a).to_css_string())
}

/// Hue rotated by 180 degrees.
pub fn complement(color: &str) -> Result<String, ColorParseError> {
    adjust_hue(color, 180.0)
}

/// Invert each RGB channel, keeping alpha.
pub fn invert(color: &str) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    Ok(Rgba::new(255.0 - rgba.r, 255.0 - rgba.g, 255.0 - rgba.b, rgba.a).to_css_string())
}

/// Fully desaturated rendition of the color.
pub fn grayscale(color: &str) -> Result<String, ColorParseError> {
    desaturate(color, 100.0)
}

/// Mix two colors; `weight` (0-100) is the share of `color_a`.
///
/// RGB channels are interpolated and rounded, alpha is interpolated
/// unrounded.
pub fn mix(color_a: &str, color_b: &str, weight: f32) -> Result<String, ColorParseError> {
    let a = parse_color(color_a)?;
    let b = parse_color(color_b)?;
    let w = weight / 100.0;

    Ok(Rgba::new(
        (a.r * w + b.r * (1.0 - w)).round(),
        (a.g * w + b.g * (1.0 - w)).round(),
        (a.b * w + b.b * (1.0 - w)).round(),
        a.a * w + b.a * (1.0 - w),
    )
    .to_css_string())
}

/// Mix with white: `amount` (0-100) is the share of white.
pub fn tint(color: &str, amount: f32) -> Result<String, ColorParseError> {
    mix("#ffffff", color, amount)
}

/// Mix with black: `amount` (0-100) is the share of black.
pub fn shade(color: &str, amount: f32) -> Result<String, ColorParseError> {
    mix("#000000", color, amount)
}

/// Replace the alpha channel, clamped to `[0, 1]`.
pub fn alpha(color: &str, alpha: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    Ok(rgba.with_alpha(alpha.clamp(0.0, 1.0)).to_css_string())
}

/// Reduce alpha by `amount` (0-1), floored at fully transparent.
pub fn transparentize(color: &str, amount: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let a = (rgba.a - amount).max(0.0);
    Ok(rgba.with_alpha(a).to_css_string())
}

/// Increase alpha by `amount` (0-1), capped at fully opaque.
pub fn opacify(color: &str, amount: f32) -> Result<String, ColorParseError> {
    let rgba = parse_color(color)?;
    let a = (rgba.a + amount).min(1.0);
    Ok(rgba.with_alpha(a).to_css_string())
}
