use super::{ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// Both numbers are normalized with [`to_eq_bits`] before their bit strings
/// are compared, which zeroes out not-a-number, reduces resolution, and
/// drops the sign of negative zero.
///
/// # Panics
///
/// This macro panics if the normalized bit strings differ. The message lists
/// both numbers on separate lines.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays describe the same color
/// in the given color space.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// Not-a-number coordinates become zero. If the hue of an Oklch color is
/// not-a-number, chroma becomes zero as well. For Oklab and Oklch, lightness
/// is clamped to `0..=1`, and Oklch chroma is kept non-negative.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
        if space.is_polar() {
            c2 = 0.0;
        }
    }

    if space.is_ok() {
        c1 = c1.clamp(0.0, 1.0);
        if space.is_polar() {
            c2 = c2.max(0.0);
        }
    }

    [c1, c2, c3]
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, mut c3] = normalize(space, coordinates);

    if space.is_polar() {
        c3 = c3.rem_euclid(360.0) / 360.0;
    }

    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let mut f = if f.is_nan() { 0.0 } else { f };

    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize() {
        use ColorSpace::*;

        assert_eq!(
            normalize(Oklch, &[0.5, 0.2, Float::NAN]),
            [0.5, 0.0, 0.0]
        );
        assert_eq!(normalize(Oklch, &[1.2, -0.1, 30.0]), [1.0, 0.0, 30.0]);
        assert_eq!(normalize(Srgb, &[Float::NAN, 1.5, -0.5]), [0.0, 1.5, -0.5]);
        assert_eq!(normalize(Oklab, &[0.4, -0.1, 0.1]), [0.4, -0.1, 0.1]);
    }

    #[test]
    fn test_eq_coordinates() {
        assert_eq!(
            to_eq_coordinates(ColorSpace::Oklch, &[0.5, 0.1, 370.0]),
            to_eq_coordinates(ColorSpace::Oklch, &[0.5, 0.1, 10.0]),
        );
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
    }
}
