//! Conversions between hexadecimal, RGB, HSL, and Oklch representations.
//!
//! These functions operate on the typed records of the [`model`](crate::model)
//! and on hexadecimal strings. All hexadecimal output is normalized to
//! uppercase `#RRGGBB`. Inputs that do not parse fail with a
//! [`ColorFormatError`].

use std::str::FromStr;

use crate::core::{hsl_to_srgb, parse_rgb, to_byte};
use crate::error::ColorFormatError;
use crate::{Color, Float, Hsl, Oklch, Rgb};

/// Normalize a color string to uppercase `#RRGGBB`.
///
/// This function accepts hashed hexadecimal with 3, 4, 6, or 8 digits,
/// `rgb()` with byte, unit range, or percentage coordinates, and any other
/// color syntax [`Color`] parses, such as `oklch()`, `hsl()`, or named colors.
/// Alpha is always dropped. Colors outside sRGB are clipped.
///
/// ```
/// # use tintscale::normalize_to_hex;
/// # use tintscale::error::ColorFormatError;
/// assert_eq!(normalize_to_hex("#abc")?, "#AABBCC");
/// assert_eq!(normalize_to_hex("#11223344")?, "#112233");
/// assert_eq!(normalize_to_hex("rgb(100%, 0%, 50%)")?, "#FF0080");
/// assert_eq!(normalize_to_hex("rebeccapurple")?, "#663399");
/// assert!(normalize_to_hex("not a color").is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn normalize_to_hex(input: &str) -> Result<String, ColorFormatError> {
    let trimmed = input.trim();
    if trimmed
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb("))
    {
        return Ok(parse_css_rgb(trimmed)?.to_string());
    }

    Ok(Color::from_str(trimmed)?.to_hex_format())
}

/// Convert a color string to 24-bit RGB.
///
/// This function accepts the same inputs as [`normalize_to_hex`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorFormatError> {
    let normalized = normalize_to_hex(hex)?;
    let digits = &normalized[1..];
    let parse = |index: usize| {
        u8::from_str_radix(&digits[2 * index..2 * index + 2], 16)
            .map_err(|_| ColorFormatError::MalformedHex)
    };

    Ok(Rgb::new(parse(0)?, parse(1)?, parse(2)?))
}

/// Format the given coordinates as uppercase `#RRGGBB`.
///
/// Coordinates are scaled to `0..=255`. Each one is rounded and clamped
/// before formatting.
///
/// ```
/// # use tintscale::rgb_to_hex;
/// assert_eq!(rgb_to_hex(79.4, 70.0, 229.0), "#4F46E5");
/// assert_eq!(rgb_to_hex(300.0, -5.0, 127.5), "#FF0080");
/// ```
pub fn rgb_to_hex(r: Float, g: Float, b: Float) -> String {
    Rgb::new(to_byte(r), to_byte(g), to_byte(b)).to_string()
}

/// Convert 24-bit RGB to HSL.
///
/// The result is not rounded. Achromatic colors have hue and saturation zero.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    Hsl::from(rgb)
}

/// Convert HSL to 24-bit RGB.
///
/// Each coordinate is rounded to the nearest byte.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let [r, g, b] = hsl_to_srgb(&[hsl.h, hsl.s, hsl.l]);
    Rgb::new(to_byte(r * 255.0), to_byte(g * 255.0), to_byte(b * 255.0))
}

/// Convert a color string to Oklch.
///
/// This function accepts the same inputs as [`normalize_to_hex`] and
/// quantizes the color to 24 bits before converting.
///
/// ```
/// # use tintscale::{hex_to_oklch, Oklch};
/// # use tintscale::error::ColorFormatError;
/// let oklch = hex_to_oklch("#3178ea")?.round_to(3);
/// assert_eq!(oklch, Oklch::new(0.591, 0.187, 259.667));
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn hex_to_oklch(hex: &str) -> Result<Oklch, ColorFormatError> {
    let rgb = hex_to_rgb(hex)?;
    Ok(Oklch::from(&Color::from(rgb)))
}

/// Convert Oklch to uppercase `#RRGGBB`.
///
/// Colors outside the sRGB gamut are clipped, so the result always is a
/// valid hexadecimal color.
///
/// ```
/// # use tintscale::{oklch_to_hex, Oklch};
/// assert_eq!(oklch_to_hex(Oklch::new(1.0, 0.0, 0.0)), "#FFFFFF");
/// assert_eq!(oklch_to_hex(Oklch::new(0.7, 0.4, 330.0)), "#FF00FF");
/// ```
pub fn oklch_to_hex(oklch: Oklch) -> String {
    Color::from(oklch).to_hex_format()
}

/// Parse a CSS `rgb()` color.
///
/// Coordinates may be separated by commas or spaces. A percentage scales to
/// 255, a bare number up to 1 is treated as unit range, and larger numbers as
/// bytes. Every coordinate is rounded and clamped to `0..=255`. An alpha
/// coordinate after a slash is dropped.
///
/// ```
/// # use tintscale::{parse_css_rgb, Rgb};
/// # use tintscale::error::ColorFormatError;
/// assert_eq!(parse_css_rgb("rgb(255, 128, 0)")?, Rgb::new(255, 128, 0));
/// assert_eq!(parse_css_rgb("rgb(0.5 1 300 / 50%)")?, Rgb::new(128, 255, 255));
/// assert!(parse_css_rgb("rgb(1, 2)").is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn parse_css_rgb(input: &str) -> Result<Rgb, ColorFormatError> {
    let [r, g, b] = parse_rgb(input)?;
    Ok(Rgb::new(to_byte(r), to_byte(g), to_byte(b)))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_normalize_to_hex() -> Result<(), ColorFormatError> {
        assert_eq!(normalize_to_hex("  #4f46e5 ")?, "#4F46E5");
        assert_eq!(normalize_to_hex("#abcd")?, "#AABBCC");
        assert_eq!(normalize_to_hex("RGB(1 0 0)")?, "#FF0000");
        assert_eq!(normalize_to_hex("rgba(0, 0, 255, 0.5)")?, "#0000FF");
        assert_eq!(normalize_to_hex("hsl(0 100% 50%)")?, "#FF0000");
        assert_eq!(normalize_to_hex("oklch(1 0 0)")?, "#FFFFFF");
        assert_eq!(normalize_to_hex("oklch(0 0 0)")?, "#000000");

        assert_eq!(
            normalize_to_hex("#12345"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            normalize_to_hex("rgb(1 2)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            normalize_to_hex("blurple"),
            Err(ColorFormatError::UnknownColorName)
        );
        Ok(())
    }

    #[test]
    fn test_hex_to_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_rgb("#4F46E5")?, Rgb::new(0x4f, 0x46, 0xe5));
        assert_eq!(hex_to_rgb("#fff")?, Rgb::new(255, 255, 255));
        assert_eq!(hex_to_rgb("rgb(10, 20, 30)")?, Rgb::new(10, 20, 30));
        assert!(hex_to_rgb("#ggg").is_err());
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        let mut rng = StdRng::seed_from_u64(0x6a8d51);
        for _ in 0..500 {
            let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
            let hex = format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);
            let back = hex_to_rgb(&hex)?;
            assert_eq!(back, rgb);
            assert_eq!(
                rgb_to_hex(back.r as Float, back.g as Float, back.b as Float),
                hex.to_uppercase()
            );
        }
        Ok(())
    }

    #[test]
    fn test_hsl_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
            let hsl = rgb_to_hsl(rgb);
            assert!((0.0..360.0).contains(&hsl.h), "hue {} for {}", hsl.h, rgb);
            assert!((0.0..=1.0).contains(&hsl.s), "saturation {} for {}", hsl.s, rgb);
            assert!((0.0..=1.0).contains(&hsl.l), "lightness {} for {}", hsl.l, rgb);

            let back = hsl_to_rgb(hsl);
            for index in 0..3 {
                let delta = (back[index] as i16 - rgb[index] as i16).abs();
                assert!(delta <= 1, "{} became {}", rgb, back);
            }
        }
    }

    #[test]
    fn test_oklch() -> Result<(), ColorFormatError> {
        let gray = hex_to_oklch("#777777")?;
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.h, 0.0);

        for hex in ["#4F46E5", "#6A8D51", "#FFCA00", "#000000", "#FFFFFF"] {
            assert_eq!(oklch_to_hex(hex_to_oklch(hex)?), hex);
        }

        // Far out of gamut still yields a well-formed color.
        let hex = oklch_to_hex(Oklch::new(0.5, 0.9, 145.0));
        assert_eq!(hex.len(), 7);
        assert!(hex.chars().skip(1).all(|c| c.is_ascii_hexdigit()));
        Ok(())
    }

    #[test]
    fn test_parse_css_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(parse_css_rgb("rgb(50%, 25%, 0%)")?, Rgb::new(128, 64, 0));
        assert_eq!(parse_css_rgb(" rgb( 1 , 1 , 1 ) ")?, Rgb::new(255, 255, 255));
        assert_eq!(parse_css_rgb("rgb(2, 3, 4)")?, Rgb::new(2, 3, 4));
        assert_eq!(
            parse_css_rgb("rgb(2, 3, 4"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_css_rgb("#020304"),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }
}
