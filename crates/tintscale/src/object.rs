use std::str::FromStr;

use crate::core::{
    clip, convert, delta_e_ok, format, from_24bit, in_gamut, normalize, parse, to_24bit,
    to_contrast_ratio, to_eq_coordinates, to_relative_luminance, ColorSpace,
};
use crate::error::ColorFormatError;
use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. Unlike that function, it also is safe to use in const
/// expressions, since the floating point division happens in the arguments to
/// the const constructor.
///
/// ```
/// # use tintscale::{rgb, Color};
/// const PLACEHOLDER: Color = rgb!(0xcc, 0xcc, 0xcc);
/// assert_eq!(PLACEHOLDER.to_hex_format(), "#CCCCCC");
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
/// Scale generation works with these objects internally and only quantizes to
/// 24-bit hexadecimal at the very end.
///
/// # Color Coordinates
///
/// For sRGB and linear sRGB, the coordinates of in-gamut colors have unit
/// range. Oklab, Oklch, and XYZ have no gamut bounds. Oklab and Oklch
/// lightness should be `0.0..=1.0` and chroma should be `0.0..`. The hue may
/// have any magnitude, though `0..360` is preferred.
///
/// A coordinate may be not-a-number, most commonly the hue of a gray in
/// Oklch. Conversions replace not-a-number with zero before doing any math, as
/// does [`Color::normalize`].
///
/// ## Equality Testing and Hashing
///
/// Two colors are equal if they have the same color space and their
/// coordinates agree after normalization, removal of full hue rotations, and
/// rounding to a resolution of 1e-12 (1e-4 with `f32`). Hashing uses the same
/// normalized coordinates, so equal colors have equal hashes.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7_f64, 0.22_f64, 3.0_f64]);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace};
    /// let fire_brick = Color::srgb(177.0 / 255.0, 31.0 / 255.0, 36.0 / 255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Srgb);
    /// assert_eq!(fire_brick.to_hex_format(), "#B11F24");
    /// ```
    #[inline]
    pub fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b
    /// coordinates.
    #[inline]
    pub fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Oklab, [l, a, b])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h coordinates.
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace};
    /// let deep_sea = Color::oklch(0.5, 0.08, 240.0);
    /// assert_eq!(deep_sea.space(), ColorSpace::Oklch);
    /// assert!(deep_sea.to(ColorSpace::Srgb).in_gamut());
    /// ```
    #[inline]
    pub fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::new(ColorSpace::Oklch, [l, c, h])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// This function returns a new sRGB color with the given red, green, and
    /// blue coordinates scaled by 1/255. The [`rgb`] macro does the same thing
    /// but is safe to use inside const expressions.
    ///
    /// ```
    /// # use tintscale::Color;
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero. For Oklch, a
    /// not-a-number hue also zeroes chroma.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    /// Convert this color to the target color space.
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace};
    /// let yellow = Color::from_24bit(0xff, 0xca, 0x00);
    /// assert_eq!(yellow.to(ColorSpace::Oklch), Color::oklch(
    ///     0.8613332073307732, 0.1760097742886813, 89.440876452466
    /// ));
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in-gamut for its color space.
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// assert!(red.in_gamut());
    ///
    /// let neon = Color::oklch(0.7, 0.37, 145.0);
    /// assert!(!neon.to(ColorSpace::Srgb).in_gamut());
    /// ```
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space.
    ///
    /// This clamps RGB coordinates to unit range and leaves colors in
    /// unbounded color spaces untouched.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self::new(self.space, clip(self.space, &self.coordinates))
    }

    /// Determine the perceptual distance between this and the other color.
    ///
    /// The distance is ΔE OK, the Euclidian distance in Oklab.
    ///
    /// ```
    /// # use tintscale::Color;
    /// let black = Color::from_24bit(0, 0, 0);
    /// let white = Color::from_24bit(0xff, 0xff, 0xff);
    /// assert!((black.distance(&white) - 1.0).abs() < 1e-6);
    /// ```
    pub fn distance(&self, other: &Self) -> Float {
        let this = convert(self.space, ColorSpace::Oklab, &self.coordinates);
        let other = convert(other.space, ColorSpace::Oklab, &other.coordinates);
        delta_e_ok(&this, &other)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the WCAG 2.x relative luminance of this color.
    ///
    /// The color is converted to sRGB and clipped first.
    pub fn relative_luminance(&self) -> Float {
        let srgb = clip(
            ColorSpace::Srgb,
            &convert(self.space, ColorSpace::Srgb, &self.coordinates),
        );
        to_relative_luminance(&srgb)
    }

    /// Determine the WCAG 2.x contrast ratio between this and the other color.
    ///
    /// The ratio is symmetric and ranges from 1 to 21.
    ///
    /// ```
    /// # use tintscale::Color;
    /// let black = Color::from_24bit(0, 0, 0);
    /// let white = Color::from_24bit(0xff, 0xff, 0xff);
    /// assert_eq!(black.contrast_ratio(&white), 21.0);
    /// ```
    pub fn contrast_ratio(&self, other: &Self) -> Float {
        to_contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to sRGB and clips it before converting
    /// each coordinate to a `u8`.
    pub fn to_24bit(&self) -> [u8; 3] {
        let srgb = convert(self.space, ColorSpace::Srgb, &self.coordinates);
        to_24bit(ColorSpace::Srgb, &clip(ColorSpace::Srgb, &srgb))
    }

    /// Format this color in uppercase `#RRGGBB` hashed hexadecimal notation.
    ///
    /// Like [`Color::to_24bit`], this method clips the color to sRGB first.
    /// Hence the result is well-formed even for colors far out of gamut.
    ///
    /// ```
    /// # use tintscale::Color;
    /// let hot = Color::oklch(0.7, 0.4, 330.0);
    /// let hex = hot.to_hex_format();
    /// assert_eq!(hex.len(), 7);
    /// assert!(hex.starts_with('#'));
    /// assert_eq!(hex, hex.to_uppercase());
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Default for Color {
    /// Create an instance of the default color, which is sRGB black.
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Srgb, [0.0, 0.0, 0.0])
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes:
    ///
    ///   * hashed hexadecimal notation with 3, 4, 6, or 8 digits, e.g., `#123`
    ///     or `#cafe00`, dropping alpha if present;
    ///   * the `rgb()` and `rgba()` functions with bytes, unit range numbers,
    ///     or percentages, separated by commas or spaces;
    ///   * the `hsl()` and `hsla()` functions;
    ///   * the `oklab()` and `oklch()` functions;
    ///   * the `color()` function with `srgb`, `srgb-linear`, `xyz`, or
    ///     `xyz-d65`;
    ///   * the CSS named colors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace};
    /// # use tintscale::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::srgb(
    ///     0.00392156862745098,
    ///     0.0784313725490196,
    ///     0.5019607843137255,
    /// ));
    ///
    /// let rose: Color = str::parse("rgb(255 218 204)")?;
    /// assert_eq!(rose, Color::srgb(1.0, 0.8549019607843137, 0.8));
    ///
    /// let cyan: Color = "oklch(0.9 0.15 195)".parse()?;
    /// assert_eq!(cyan.space(), ColorSpace::Oklch);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use tintscale::{Color, Float};
    /// assert_eq!(Color::oklch(0.5, 0.1, 665.0), Color::oklch(0.5, 0.1, 305.0));
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 0.5, 0.25),
    ///     Color::srgb(0.0, 0.5, 0.25)
    /// );
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in CSS syntax.
    ///
    /// This method uses a `color()`, `oklab()`, or `oklch()` CSS function with
    /// three space-separated coordinates. It respects the formatter's
    /// precision, defaulting to 5 digits past the decimal, and uses 2 digits
    /// less for the hue.
    ///
    /// ```
    /// # use tintscale::{Color, ColorSpace::*};
    /// # use tintscale::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let mint = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", mint), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", mint), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(format!("{}", mint.to(Oklch)), "oklch(0.81945 0.07179 152.812)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::ColorFormatError;
    use crate::ColorSpace;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_hex_format() -> Result<(), ColorFormatError> {
        assert_eq!(Color::from_str("#abc")?.to_hex_format(), "#AABBCC");
        assert_eq!(Color::from_str("#abcd")?.to_hex_format(), "#AABBCC");
        assert_eq!(Color::from_str("#a1B2c3ff")?.to_hex_format(), "#A1B2C3");
        assert_eq!(Color::from_str("navy")?.to_hex_format(), "#000080");
        assert_eq!(Color::srgb(1.5, -0.5, 0.5).to_hex_format(), "#FF0080");
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), ColorFormatError> {
        let original = Color::from_str("#3178ea")?;
        let back = original.to(ColorSpace::Oklch).to(ColorSpace::Srgb);
        assert_eq!(original, back);
        assert_eq!(back.to_hex_format(), "#3178EA");
        Ok(())
    }

    #[test]
    fn test_hash() {
        let mut set = HashSet::new();
        set.insert(Color::oklch(0.5, 0.1, 30.0));
        set.insert(Color::oklch(0.5, 0.1, 390.0));
        set.insert(Color::srgb(0.5, 0.1, 30.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_contrast() {
        let black = Color::default();
        let white = Color::from_24bit(255, 255, 255);
        assert_eq!(black.contrast_ratio(&white), 21.0);
        assert_eq!(white.relative_luminance(), 1.0);
        assert_eq!(black.relative_luminance(), 0.0);
    }
}
