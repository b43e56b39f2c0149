//! Typed records for the color representations of a scale entry.
//!
//! Unlike the high-resolution [`Color`], these records are plain values meant
//! for display and serialization. [`Rgb`] has 24-bit coordinates, [`Hsl`] and
//! [`Oklch`] have floating point coordinates that scale generation rounds to
//! a fixed number of decimals.

use serde::{Deserialize, Serialize};

use crate::core::{srgb_to_hsl, FloatExt};
use crate::{Color, ColorSpace, Float};

/// A 24-bit sRGB color.
///
/// The [`Display`](std::fmt::Display) implementation formats the color in
/// uppercase `#RRGGBB` notation.
///
/// ```
/// # use tintscale::Rgb;
/// let orange = Rgb::new(255, 147, 0);
/// assert_eq!(orange.to_string(), "#FF9300");
/// assert_eq!(orange[1], 147);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new 24-bit color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Access the coordinates as an array.
    pub const fn coordinates(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("index {} for RGB coordinate is out of bounds 0..=2", index),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.coordinates()
    }
}

impl From<&Color> for Rgb {
    /// Convert the color to sRGB, clip it, and quantize its coordinates.
    fn from(value: &Color) -> Self {
        Self::from(value.to_24bit())
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::from_24bit(value.r, value.g, value.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ====================================================================================================================

/// An HSL color.
///
/// The hue is measured in degrees `0..360`, saturation and lightness are in
/// unit range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    /// Round all three coordinates to the given number of decimals.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn round_to(&self, digits: u32) -> Self {
        Self::new(
            self.h.round_to(digits),
            self.s.round_to(digits),
            self.l.round_to(digits),
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        let srgb = Color::from(value);
        let [h, s, l] = srgb_to_hsl(srgb.as_ref());
        Self::new(h, s, l)
    }
}

// ====================================================================================================================

/// An Oklch color.
///
/// Lightness is in unit range, chroma is non-negative, and hue is measured in
/// degrees `0..360`. Grays, whose hue is powerless, have hue zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl Oklch {
    /// Create a new Oklch color.
    pub const fn new(l: Float, c: Float, h: Float) -> Self {
        Self { l, c, h }
    }

    /// Round all three coordinates to the given number of decimals.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn round_to(&self, digits: u32) -> Self {
        Self::new(
            self.l.round_to(digits),
            self.c.round_to(digits),
            self.h.round_to(digits),
        )
    }
}

impl From<&Color> for Oklch {
    fn from(value: &Color) -> Self {
        let [l, c, h] = *value.to(ColorSpace::Oklch).as_ref();
        let h = if h.is_nan() { 0.0 } else { h };
        Self::new(l, c, h)
    }
}

impl From<Oklch> for Color {
    fn from(value: Oklch) -> Self {
        Color::oklch(value.l, value.c, value.h)
    }
}

// ====================================================================================================================

/// A color with a name.
///
/// Exports and contrast ratings only need each color's name and hexadecimal
/// notation. Scale entries, [`NamedColor`]s, and pairs of strings all
/// qualify.
pub trait Swatch {
    /// Get the swatch's name.
    fn name(&self) -> &str;

    /// Get the swatch's color in hexadecimal notation.
    fn hex(&self) -> &str;
}

/// A named color in hexadecimal notation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub hex: String,
}

impl NamedColor {
    /// Create a new named color.
    pub fn new(name: &str, hex: &str) -> Self {
        Self {
            name: name.to_owned(),
            hex: hex.to_owned(),
        }
    }
}

impl Swatch for NamedColor {
    fn name(&self) -> &str {
        &self.name
    }

    fn hex(&self) -> &str {
        &self.hex
    }
}

impl<S: AsRef<str>> Swatch for (S, S) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn hex(&self) -> &str {
        self.1.as_ref()
    }
}
