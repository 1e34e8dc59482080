//! Color value types and colorspace conversions

/// RGBA color with 8-bit-scaled channels (`0.0..=255.0`) and unit alpha.
///
/// This is the canonical intermediate form: every parse lands here and every
/// transform round-trips through it before serializing back to CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255.0, 255.0, 255.0);
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Convert to HSL, dropping alpha.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Hsl { h: h * 360.0, s, l }
    }

    /// Serialize to CSS: `rgb(r, g, b)` when fully opaque, `rgba(...)`
    /// otherwise. Channels are rounded to whole numbers.
    pub fn to_css_string(self) -> String {
        let r = self.r.round();
        let g = self.g.round();
        let b = self.b.round();
        if self.a == 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, self.a)
        }
    }

    /// Serialize to a lowercase 6-digit hex string, discarding alpha.
    pub fn to_hex(self) -> String {
        let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to opaque RGBA. Channels are rounded to whole numbers, which
    /// keeps repeated RGB->HSL->RGB round trips within one unit per channel.
    pub fn to_rgba(self) -> Rgba {
        let Hsl { h, s, l } = self;
        let hue = h / 360.0;

        if s == 0.0 {
            let val = (l * 255.0).round();
            return Rgba::opaque(val, val, val);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f32| (hue_to_rgb(p, q, t) * 255.0).round();
        Rgba::opaque(
            channel(hue + 1.0 / 3.0),
            channel(hue),
            channel(hue - 1.0 / 3.0),
        )
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_round_trip_stays_within_one_unit() {
        let samples = [
            Rgba::opaque(249.0, 115.0, 22.0),
            Rgba::opaque(34.0, 197.0, 94.0),
            Rgba::opaque(17.0, 24.0, 39.0),
            Rgba::opaque(255.0, 255.0, 255.0),
            Rgba::opaque(0.0, 0.0, 0.0),
            Rgba::opaque(128.0, 128.0, 128.0),
        ];
        for rgb in samples {
            let back = rgb.to_hsl().to_rgba();
            assert!((back.r - rgb.r).abs() <= 1.0, "{rgb:?} -> {back:?}");
            assert!((back.g - rgb.g).abs() <= 1.0, "{rgb:?} -> {back:?}");
            assert!((back.b - rgb.b).abs() <= 1.0, "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn grayscale_has_zero_saturation() {
        let hsl = Rgba::opaque(128.0, 128.0, 128.0).to_hsl();
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn css_string_switches_on_alpha() {
        assert_eq!(
            Rgba::opaque(255.0, 0.0, 0.0).to_css_string(),
            "rgb(255, 0, 0)"
        );
        assert_eq!(
            Rgba::new(255.0, 0.0, 0.0, 0.5).to_css_string(),
            "rgba(255, 0, 0, 0.5)"
        );
    }

    #[test]
    fn hex_serialization_pads_and_lowercases() {
        assert_eq!(Rgba::opaque(15.0, 0.0, 171.0).to_hex(), "#0f00ab");
    }
}
