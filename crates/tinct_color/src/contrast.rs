//! Relative luminance and WCAG contrast helpers

use crate::error::ColorParseError;
use crate::parse::parse_color;

/// Relative luminance in `[0, 1]` (sRGB gamma expansion, 0.2126/0.7152/0.0722
/// channel weighting).
pub fn luminance(color: &str) -> Result<f32, ColorParseError> {
    let rgba = parse_color(color)?;
    let expand = |v: f32| {
        let v = v / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    Ok(0.2126 * expand(rgba.r) + 0.7152 * expand(rgba.g) + 0.0722 * expand(rgba.b))
}

/// WCAG contrast ratio `(L_hi + 0.05) / (L_lo + 0.05)`, in `[1, 21]`.
pub fn contrast_ratio(color_a: &str, color_b: &str) -> Result<f32, ColorParseError> {
    let la = luminance(color_a)?;
    let lb = luminance(color_b)?;
    let lighter = la.max(lb);
    let darker = la.min(lb);
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Whether the color's luminance is above 0.5.
pub fn is_light(color: &str) -> Result<bool, ColorParseError> {
    Ok(luminance(color)? > 0.5)
}

/// Complement of [`is_light`].
pub fn is_dark(color: &str) -> Result<bool, ColorParseError> {
    Ok(!is_light(color)?)
}

/// Black or white, whichever reads better on the given background.
pub fn readable_color(background: &str) -> Result<&'static str, ColorParseError> {
    Ok(if is_light(background)? {
        "#000000"
    } else {
        "#ffffff"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_on_black_hits_the_maximum_ratio() {
        let ratio = contrast_ratio("#ffffff", "#000000").unwrap();
        assert!((ratio - 21.0).abs() < 1e-4, "got {ratio}");
    }

    #[test]
    fn ratio_is_symmetric() {
        let ab = contrast_ratio("#f97316", "#1f2937").unwrap();
        let ba = contrast_ratio("#1f2937", "#f97316").unwrap();
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn luminance_extremes() {
        assert!(luminance("#000000").unwrap() < 1e-6);
        assert!((luminance("#ffffff").unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn light_and_dark_classification() {
        assert!(is_light("#ffffff").unwrap());
        assert!(is_dark("#000000").unwrap());
        assert!(is_dark("#1f2937").unwrap());
    }

    #[test]
    fn readable_color_picks_black_on_light_backgrounds() {
        assert_eq!(readable_color("#ffffff").unwrap(), "#000000");
        assert_eq!(readable_color("#111827").unwrap(), "#ffffff");
    }
}
