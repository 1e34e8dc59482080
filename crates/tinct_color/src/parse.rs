//! CSS color string parsing
//!
//! Supported syntaxes: `#rgb`, `#rrggbb`, `#rrggbbaa` (leading `#` optional
//! for [`hex_to_rgba`]), `rgb()`/`rgba()`, and `hsl()`/`hsla()`.

use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, opt};
use nom::error::{Error, ErrorKind};
use nom::number::complete::float;
use nom::sequence::preceded;
use nom::IResult;

use crate::error::ColorParseError;
use crate::rgba::{Hsl, Rgba};

/// Parse any supported CSS color string into its [`Rgba`] form.
///
/// Dispatches on prefix: `#` for hex, `rgb` for `rgb()`/`rgba()`, `hsl` for
/// `hsl()`/`hsla()`. Anything else is [`ColorParseError::UnsupportedSyntax`].
pub fn parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    let s = input.trim();
    if s.starts_with('#') {
        return hex_to_rgba(s);
    }
    match s.get(..3).map(str::to_ascii_lowercase).as_deref() {
        Some("rgb") => match all_consuming(rgb_color)(s) {
            Ok((_, rgba)) => Ok(rgba),
            Err(_) => Err(ColorParseError::MalformedRgb(input.to_string())),
        },
        Some("hsl") => match all_consuming(hsl_color)(s) {
            Ok((_, rgba)) => Ok(rgba),
            Err(_) => Err(ColorParseError::MalformedHsl(input.to_string())),
        },
        _ => Err(ColorParseError::UnsupportedSyntax(input.to_string())),
    }
}

/// Parse a hex color, with or without the leading `#`.
pub fn hex_to_rgba(input: &str) -> Result<Rgba, ColorParseError> {
    match all_consuming(hex_color)(input.trim()) {
        Ok((_, rgba)) => Ok(rgba),
        Err(_) => Err(ColorParseError::MalformedHex(input.to_string())),
    }
}

fn hex_err(input: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(input, ErrorKind::HexDigit))
}

fn hex_channel(digits: &str) -> Option<f32> {
    u8::from_str_radix(digits, 16).ok().map(f32::from)
}

/// Hex color body: `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (the `#` is optional).
fn hex_color(input: &str) -> IResult<&str, Rgba> {
    let (input, _) = opt(char('#'))(input)?;
    let (rest, hex) = take_while1(|c: char| c.is_ascii_hexdigit())(input)?;

    let rgba = match hex.len() {
        3 => {
            let wide = |i: usize| hex_channel(&hex[i..i + 1].repeat(2));
            match (wide(0), wide(1), wide(2)) {
                (Some(r), Some(g), Some(b)) => Rgba::opaque(r, g, b),
                _ => return Err(hex_err(input)),
            }
        }
        6 | 8 => {
            let pair = |i: usize| hex_channel(&hex[i..i + 2]);
            match (pair(0), pair(2), pair(4)) {
                (Some(r), Some(g), Some(b)) => {
                    let a = if hex.len() == 8 {
                        match pair(6) {
                            Some(a) => a / 255.0,
                            None => return Err(hex_err(input)),
                        }
                    } else {
                        1.0
                    };
                    Rgba::new(r, g, b, a)
                }
                _ => return Err(hex_err(input)),
            }
        }
        _ => {
            return Err(nom::Err::Error(Error::new(input, ErrorKind::LengthValue)));
        }
    };

    Ok((rest, rgba))
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; channels stay on the 0-255 scale.
fn rgb_color(input: &str) -> IResult<&str, Rgba> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = opt(tag_no_case("a"))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, r) = float(input)?;
    let (input, _) = comma(input)?;
    let (input, g) = float(input)?;
    let (input, _) = comma(input)?;
    let (input, b) = float(input)?;
    let (input, a) = opt(preceded(comma, float))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Rgba::new(r, g, b, a.unwrap_or(1.0))))
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
fn hsl_color(input: &str) -> IResult<&str, Rgba> {
    let (input, _) = tag_no_case("hsl")(input)?;
    let (input, _) = opt(tag_no_case("a"))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, h) = float(input)?;
    let (input, _) = comma(input)?;
    let (input, s) = float(input)?;
    let (input, _) = char('%')(input)?;
    let (input, _) = comma(input)?;
    let (input, l) = float(input)?;
    let (input, _) = char('%')(input)?;
    let (input, a) = opt(preceded(comma, float))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    let rgba = Hsl::new(h, s / 100.0, l / 100.0)
        .to_rgba()
        .with_alpha(a.unwrap_or(1.0));
    Ok((input, rgba))
}

fn comma(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        assert_eq!(parse_color("#f97316").unwrap(), Rgba::opaque(249.0, 115.0, 22.0));
    }

    #[test]
    fn parses_short_hex_by_doubling_digits() {
        assert_eq!(parse_color("#fa3").unwrap(), Rgba::opaque(255.0, 170.0, 51.0));
    }

    #[test]
    fn parses_eight_digit_hex_alpha() {
        let rgba = parse_color("#ff000080").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (255.0, 0.0, 0.0));
        assert!((rgba.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn hex_works_without_hash_prefix() {
        assert_eq!(hex_to_rgba("22c55e").unwrap(), Rgba::opaque(34.0, 197.0, 94.0));
    }

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(
            parse_color("rgb(255, 0, 0)").unwrap(),
            Rgba::opaque(255.0, 0.0, 0.0)
        );
        assert_eq!(
            parse_color("rgba(0, 0, 0, 0.3)").unwrap(),
            Rgba::new(0.0, 0.0, 0.0, 0.3)
        );
    }

    #[test]
    fn parses_hsl_primaries() {
        assert_eq!(
            parse_color("hsl(0, 100%, 50%)").unwrap(),
            Rgba::opaque(255.0, 0.0, 0.0)
        );
        assert_eq!(
            parse_color("hsl(120, 100%, 50%)").unwrap(),
            Rgba::opaque(0.0, 255.0, 0.0)
        );
    }

    #[test]
    fn hsla_carries_alpha() {
        let rgba = parse_color("hsla(240, 100%, 50%, 0.5)").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0.0, 0.0, 255.0, 0.5));
    }

    #[test]
    fn malformed_input_is_an_error_not_black() {
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorParseError::MalformedHex(_))
        ));
        assert!(matches!(
            parse_color("rgb(1, 2)"),
            Err(ColorParseError::MalformedRgb(_))
        ));
        assert!(matches!(
            parse_color("hsl(10, 20, 30)"),
            Err(ColorParseError::MalformedHsl(_))
        ));
        assert!(matches!(
            parse_color("papayawhip"),
            Err(ColorParseError::UnsupportedSyntax(_))
        ));
    }
}
