use crate::Float;

/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation, and adds decimal rounding as
/// used by the scale records.
pub(crate) trait FloatExt: Sized {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Round to the given number of digits after the decimal.
    fn round_to(self, digits: u32) -> Self;

    /// Clamp to the unit range `0..=1`, mapping not-a-number to zero.
    fn clamp_unit(self) -> Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[inline]
    fn round_to(self, digits: u32) -> Self {
        let factor = 10_f64.powi(digits as i32);
        (self * factor).round() / factor
    }

    #[inline]
    fn clamp_unit(self) -> Self {
        if self.is_nan() {
            0.0
        } else {
            self.clamp(0.0, 1.0)
        }
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    #[inline]
    fn round_to(self, digits: u32) -> Self {
        let factor = 10_f32.powi(digits as i32);
        (self * factor).round() / factor
    }

    #[inline]
    fn clamp_unit(self) -> Self {
        if self.is_nan() {
            0.0
        } else {
            self.clamp(0.0, 1.0)
        }
    }
}

/// Linearly interpolate between the two values.
#[inline]
pub(crate) fn lerp(start: Float, end: Float, fraction: Float) -> Float {
    (end - start).mul_add(fraction, start)
}

#[cfg(test)]
mod test {
    use super::{lerp, FloatExt};
    use crate::Float;

    #[test]
    fn test_round_to() {
        assert_eq!((0.123456 as Float).round_to(3), 0.123);
        assert_eq!((0.1235 as Float).round_to(1), 0.1);
        assert_eq!((359.96 as Float).round_to(1), 360.0);
        assert_eq!((-0.0004 as Float).round_to(3), 0.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!((1.5 as Float).clamp_unit(), 1.0);
        assert_eq!((-0.5 as Float).clamp_unit(), 0.0);
        assert_eq!(Float::NAN.clamp_unit(), 0.0);
        assert_eq!((0.25 as Float).clamp_unit(), 0.25);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 0.0, 0.25), 0.75);
        assert_eq!(lerp(0.2, 0.4, 0.0), 0.2);
    }
}
