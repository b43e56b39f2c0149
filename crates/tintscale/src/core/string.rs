use super::{from_24bit, hsl_to_srgb, named};
use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates and drops a trailing alpha coordinate.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let factor = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let parse_coordinate = |index: usize| -> Result<u8, ColorFormatError> {
        let t = &digits[factor * index..factor * (index + 1)];
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let c1 = parse_coordinate(0)?;
    let c2 = parse_coordinate(1)?;
    let c3 = parse_coordinate(2)?;
    if digits.len() == 4 || digits.len() == 8 {
        // Alpha must still be hexadecimal, even if it is dropped.
        parse_coordinate(3)?;
    }

    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// The unit attached to a number in a CSS color function.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Unit {
    Number,
    Percent,
    Degrees,
}

/// Parse a number with optional `%` or `deg` unit. The keyword `none` parses
/// as not-a-number.
fn parse_number(token: &str) -> Result<(Float, Unit), ColorFormatError> {
    if token == "none" {
        return Ok((Float::NAN, Unit::Number));
    }

    let (digits, unit) = if let Some(digits) = token.strip_suffix('%') {
        (digits, Unit::Percent)
    } else if let Some(digits) = token.strip_suffix("deg") {
        (digits, Unit::Degrees)
    } else {
        (token, Unit::Number)
    };

    let value: Float = digits
        .parse()
        .map_err(|_| ColorFormatError::MalformedNumber)?;
    if !value.is_finite() {
        return Err(ColorFormatError::MalformedNumber);
    }

    Ok((value, unit))
}

/// Split the body of a color function into its three coordinates.
///
/// Coordinates may be separated by commas, white space, or both. An alpha
/// coordinate after a slash is validated and dropped. If `legacy_alpha` is
/// set, a fourth comma-separated coordinate is treated the same way, as in
/// `rgba(0, 0, 0, 0.5)`.
fn split_arguments(body: &str, legacy_alpha: bool) -> Result<[&str; 3], ColorFormatError> {
    let (channels, alpha) = match body.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (body, None),
    };
    if let Some(alpha) = alpha {
        parse_number(alpha)?;
    }

    let mut iter = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let c1 = iter.next().ok_or(ColorFormatError::MissingCoordinate)?;
    let c2 = iter.next().ok_or(ColorFormatError::MissingCoordinate)?;
    let c3 = iter.next().ok_or(ColorFormatError::MissingCoordinate)?;

    if let Some(extra) = iter.next() {
        if !legacy_alpha || alpha.is_some() {
            return Err(ColorFormatError::TooManyCoordinates);
        }
        parse_number(extra)?;
        if iter.next().is_some() {
            return Err(ColorFormatError::TooManyCoordinates);
        }
    }

    Ok([c1, c2, c3])
}

/// Strip the given function name and the parentheses from the string.
fn strip_function<'a>(s: &'a str, name: &str) -> Option<Result<&'a str, ColorFormatError>> {
    let rest = s.strip_prefix(name)?;
    Some(
        rest.trim_start()
            .strip_prefix('(')
            .ok_or(ColorFormatError::NoOpeningParenthesis)
            .and_then(|rest| {
                rest.strip_suffix(')')
                    .ok_or(ColorFormatError::NoClosingParenthesis)
            }),
    )
}

/// Parse the body of an `rgb()` function into coordinates scaled to
/// `0..=255`.
///
/// Percentages scale to 255. Bare numbers up to 1 are treated as unit range
/// coordinates, larger ones as bytes. The result is neither rounded nor
/// clamped.
fn parse_rgb_body(body: &str) -> Result<[Float; 3], ColorFormatError> {
    let to_255 = |token: &str| -> Result<Float, ColorFormatError> {
        let (value, unit) = parse_number(token)?;
        match unit {
            Unit::Percent => Ok(value / 100.0 * 255.0),
            Unit::Number if value <= 1.0 => Ok(value * 255.0),
            Unit::Number => Ok(value),
            Unit::Degrees => Err(ColorFormatError::MalformedNumber),
        }
    };

    let [c1, c2, c3] = split_arguments(body, true)?;
    Ok([to_255(c1)?, to_255(c2)?, to_255(c3)?])
}

/// Parse a CSS `rgb()` or `rgba()` color into coordinates scaled to
/// `0..=255`.
pub(crate) fn parse_rgb(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase();
    let s = lowercase.as_str();

    let body = strip_function(s, "rgba")
        .or_else(|| strip_function(s, "rgb"))
        .ok_or(ColorFormatError::UnknownFormat)??;
    parse_rgb_body(body)
}

fn parse_hsl_body(body: &str) -> Result<[Float; 3], ColorFormatError> {
    let [c1, c2, c3] = split_arguments(body, true)?;

    let hue = match parse_number(c1)? {
        (value, Unit::Number | Unit::Degrees) => value,
        (_, Unit::Percent) => return Err(ColorFormatError::MalformedNumber),
    };

    let fraction = |token: &str| -> Result<Float, ColorFormatError> {
        match parse_number(token)? {
            (value, Unit::Number | Unit::Percent) => Ok((value / 100.0).clamp(0.0, 1.0)),
            (_, Unit::Degrees) => Err(ColorFormatError::MalformedNumber),
        }
    };

    Ok(hsl_to_srgb(&[hue, fraction(c2)?, fraction(c3)?]))
}

/// Parse the body of an `oklab()` or `oklch()` function. Percentages scale
/// lightness to 1 and chroma as well as a/b to 0.4.
fn parse_ok_body(body: &str, polar: bool) -> Result<[Float; 3], ColorFormatError> {
    let [c1, c2, c3] = split_arguments(body, false)?;

    let scaled = |token: &str, full: Float| -> Result<Float, ColorFormatError> {
        match parse_number(token)? {
            (value, Unit::Number) => Ok(value),
            (value, Unit::Percent) => Ok(value / 100.0 * full),
            (_, Unit::Degrees) => Err(ColorFormatError::MalformedNumber),
        }
    };

    let lightness = scaled(c1, 1.0)?;
    let second = scaled(c2, 0.4)?;
    let third = if polar {
        match parse_number(c3)? {
            (value, Unit::Number | Unit::Degrees) => value,
            (_, Unit::Percent) => return Err(ColorFormatError::MalformedNumber),
        }
    } else {
        scaled(c3, 0.4)?
    };

    Ok([lightness, second, third])
}

const COLOR_SPACES: [(&str, ColorSpace); 4] = [
    ("srgb", ColorSpace::Srgb),
    ("srgb-linear", ColorSpace::LinearSrgb),
    ("xyz", ColorSpace::Xyz),
    ("xyz-d65", ColorSpace::Xyz),
];

fn parse_color_body(body: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let body = body.trim_start();
    let (name, rest) = body
        .split_once(char::is_whitespace)
        .ok_or(ColorFormatError::MissingCoordinate)?;

    let space = COLOR_SPACES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, s)| *s)
        .ok_or(ColorFormatError::UnknownColorSpace)?;

    let coordinate = |token: &str| -> Result<Float, ColorFormatError> {
        match parse_number(token)? {
            (value, Unit::Number) => Ok(value),
            (value, Unit::Percent) => Ok(value / 100.0),
            (_, Unit::Degrees) => Err(ColorFormatError::MalformedNumber),
        }
    };

    let [c1, c2, c3] = split_arguments(rest, false)?;
    Ok((space, [coordinate(c1)?, coordinate(c2)?, coordinate(c3)?]))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal colors with 3, 4, 6, or 8
/// digits, the `rgb()`, `rgba()`, `hsl()`, `hsla()`, `oklab()`, `oklch()`, and
/// `color()` CSS functions, as well as CSS named colors. Function arguments
/// may be separated by commas or white space. Alpha is validated but dropped.
/// Before parsing, this function trims leading and trailing white space and
/// converts ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [r, g, b] = parse_hashed(s)?;
        return Ok((ColorSpace::Srgb, from_24bit(r, g, b)));
    }

    if let Some(body) = strip_function(s, "rgba").or_else(|| strip_function(s, "rgb")) {
        let [r, g, b] = parse_rgb_body(body?)?;
        return Ok((ColorSpace::Srgb, [r / 255.0, g / 255.0, b / 255.0]));
    }

    if let Some(body) = strip_function(s, "hsla").or_else(|| strip_function(s, "hsl")) {
        return Ok((ColorSpace::Srgb, parse_hsl_body(body?)?));
    }

    if let Some(body) = strip_function(s, "oklab") {
        return Ok((ColorSpace::Oklab, parse_ok_body(body?, false)?));
    }

    if let Some(body) = strip_function(s, "oklch") {
        return Ok((ColorSpace::Oklch, parse_ok_body(body?, true)?));
    }

    if let Some(body) = strip_function(s, "color") {
        return parse_color_body(body?);
    }

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic()) {
        let [r, g, b] = named::lookup(s).ok_or(ColorFormatError::UnknownColorName)?;
        return Ok((ColorSpace::Srgb, from_24bit(r, g, b)));
    }

    Err(ColorFormatError::UnknownFormat)
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;
    match space {
        Srgb => "color(srgb ",
        LinearSrgb => "color(srgb-linear ",
        Oklab => "oklab(",
        Oklch => "oklch(",
        Xyz => "color(xyz ",
    }
}

/// Format the color as a string.
///
/// This function formats the given cooordinates for the given color space as a
/// CSS color with the `color()`, `oklab()`, or `oklch()` function and
/// space-separated arguments. It respects the formatter's precision, defaulting
/// to 5 digits past the decimal, but uses a precision smaller by 2 for the
/// hue of Oklch.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(css_prefix(space))?;

    let mut factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if space.is_polar() && index == 2 {
            factor /= 100.0;
        }

        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // CSS wants no trailing zeros. Rounding avoids most of them, and
            // integral values need an explicit precision of zero.
            let c = (coordinate * factor).round() / factor;
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================
