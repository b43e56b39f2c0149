//! WCAG 2.x relative luminance, contrast ratio, and rating.
//!
//! All functions take colors in any syntax [`normalize_to_hex`] accepts and
//! quantize them to 24 bits first, so ratings agree with what a browser
//! renders for the hexadecimal color.

use serde::{Deserialize, Serialize};

use crate::error::ColorFormatError;
use crate::{hex_to_rgb, rgb, Color, Float, NamedColor, Swatch};

/// The foreground color of swatch grids, black.
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// The color of placeholder swatches, a neutral light gray.
pub const PLACEHOLDER_COLOR: Color = rgb!(0xcc, 0xcc, 0xcc);

/// Determine the relative luminance of the color.
///
/// ```
/// # use tintscale::relative_luminance;
/// # use tintscale::error::ColorFormatError;
/// assert_eq!(relative_luminance("#FFFFFF")?, 1.0);
/// assert_eq!(relative_luminance("#000")?, 0.0);
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn relative_luminance(hex: &str) -> Result<Float, ColorFormatError> {
    let color = Color::from(hex_to_rgb(hex)?);
    Ok(color.relative_luminance())
}

/// Determine the contrast ratio between the two colors.
///
/// The ratio is symmetric in its arguments and ranges from 1 to 21.
///
/// ```
/// # use tintscale::contrast_ratio;
/// # use tintscale::error::ColorFormatError;
/// assert_eq!(contrast_ratio("#000000", "#ffffff")?, 21.0);
/// assert_eq!(contrast_ratio("#ffffff", "#000000")?, 21.0);
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<Float, ColorFormatError> {
    let color1 = Color::from(hex_to_rgb(hex1)?);
    let color2 = Color::from(hex_to_rgb(hex2)?);
    Ok(color1.contrast_ratio(&color2))
}

// --------------------------------------------------------------------------------------------------------------------

/// A WCAG conformance rating for normal text.
///
/// `Rating` displays and serializes as `AAA`, `AA`, or `Fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Rating {
    /// Get the rating's label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Determine whether the rating passes, i.e., is at least AA.
    pub const fn is_pass(&self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl From<Float> for Rating {
    fn from(value: Float) -> Self {
        rating(value)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate the contrast ratio.
///
/// Ratios of at least 7 rate AAA, ratios of at least 4.5 rate AA, and
/// everything else fails. Not-a-number fails as well.
///
/// ```
/// # use tintscale::{rating, Rating};
/// assert_eq!(rating(7.0), Rating::Aaa);
/// assert_eq!(rating(6.99), Rating::Aa);
/// assert_eq!(rating(4.5), Rating::Aa);
/// assert_eq!(rating(4.49), Rating::Fail);
/// ```
pub fn rating(ratio: Float) -> Rating {
    if ratio >= 7.0 {
        Rating::Aaa
    } else if ratio >= 4.5 {
        Rating::Aa
    } else {
        Rating::Fail
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A swatch with its contrast against some foreground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatedSwatch {
    pub name: String,
    pub hex: String,
    pub ratio: Float,
    pub rating: Rating,
}

impl Swatch for RatedSwatch {
    fn name(&self) -> &str {
        &self.name
    }

    fn hex(&self) -> &str {
        &self.hex
    }
}

/// Rate every swatch against the foreground color.
///
/// This function fails if either the foreground or any swatch color does not
/// parse. Swatch grids use [`DEFAULT_FOREGROUND`] as the foreground.
pub fn rate_swatches<S: Swatch>(
    swatches: &[S],
    foreground: &str,
) -> Result<Vec<RatedSwatch>, ColorFormatError> {
    let foreground = Color::from(hex_to_rgb(foreground)?);

    swatches
        .iter()
        .map(|swatch| {
            let rgb = hex_to_rgb(swatch.hex())?;
            let ratio = Color::from(rgb).contrast_ratio(&foreground);
            Ok(RatedSwatch {
                name: swatch.name().to_owned(),
                hex: rgb.to_string(),
                ratio,
                rating: rating(ratio),
            })
        })
        .collect()
}

/// Create a placeholder scale with the given number of steps.
///
/// User interfaces fall back on this scale when the base color does not
/// parse. Every entry is [`PLACEHOLDER_COLOR`] and named `shade-1`,
/// `shade-2`, and so on.
///
/// ```
/// # use tintscale::placeholder_scale;
/// let scale = placeholder_scale(3);
/// assert_eq!(scale.len(), 3);
/// assert_eq!(scale[2].name, "shade-3");
/// assert_eq!(scale[2].hex, "#CCCCCC");
/// ```
pub fn placeholder_scale(steps: usize) -> Vec<NamedColor> {
    let hex = PLACEHOLDER_COLOR.to_hex_format();
    (1..=steps)
        .map(|index| NamedColor {
            name: format!("shade-{}", index),
            hex: hex.clone(),
        })
        .collect()
}
