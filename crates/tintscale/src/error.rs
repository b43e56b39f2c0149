//! Utility module with tintscale's errors.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::Float;

/// An erroneous color format.
///
/// This is the error for color strings that do not parse. Callers in a user
/// interface are expected to catch it and fall back to a neutral placeholder,
/// such as [`placeholder_scale`](crate::placeholder_scale), rather than fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb(`, or `oklch(`.
    #[error("color format should start with `#`, `rgb()`, `hsl()`, `oklab()`, `oklch()`, `color()`, or be a color name")]
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    #[error("color format should contain only valid ASCII characters")]
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis.
    #[error("color format should include an opening parenthesis but has none")]
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A `color()` function with an unknown color space, such as
    /// `color(unknown 1 1 1)`.
    #[error("color format should have known color space but does not")]
    UnknownColorSpace,

    /// A color format that is missing a coordinate, such as `rgb(0 0)`.
    #[error("color format should have 3 coordinates but is missing one")]
    MissingCoordinate,

    /// A hashed color with a malformed hexadecimal digit, such as `#efg`.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,

    /// A functional color with a malformed number, such as
    /// `oklch(0.5 0..1 30)`.
    #[error("color format coordinates should be numbers but are not")]
    MalformedNumber,

    /// A color format with more than three coordinates (plus alpha).
    #[error("color format should have 3 coordinates but has more")]
    TooManyCoordinates,

    /// A bare word that is not one of the CSS named colors.
    #[error("color name should be a CSS named color but is not")]
    UnknownColorName,
}

// ====================================================================================================================

/// An out-of-range error.
///
/// This error indicates a numeric option that falls outside its domain. Scale
/// generation reports, but never clamps, such values. The options checked by
/// this crate are:
///
///   * `1..=15` for the number of steps;
///   * `-0.25..=0.25` for the lightness shift, which is clamped when finite;
///   * `0.1..=10` for the exponent of gamma lightness distributions;
///   * `0..=1` for the maximum chroma.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{option} should be within {}..={} but is {value}", expected.start(), expected.end())]
pub struct OutOfRangeError {
    pub option: &'static str,
    pub value: Float,
    pub expected: RangeInclusive<Float>,
}

impl OutOfRangeError {
    /// Create a new out-of-range error.
    pub fn new(option: &'static str, value: Float, expected: RangeInclusive<Float>) -> Self {
        Self {
            option,
            value,
            expected,
        }
    }
}

// ====================================================================================================================

/// An error while generating, exporting, or offloading a palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The base or foreground color did not parse.
    #[error(transparent)]
    Color(#[from] ColorFormatError),

    /// A scale option is out of range.
    #[error(transparent)]
    Range(#[from] OutOfRangeError),

    /// A worker message was not valid JSON for its type.
    #[error("worker message should be valid JSON but is not")]
    Message(#[from] serde_json::Error),

    /// The background worker is no longer running.
    #[error("palette worker should be running but has stopped")]
    WorkerGone,
}
