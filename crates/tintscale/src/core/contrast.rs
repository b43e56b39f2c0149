use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The threshold below which WCAG 2.x treats a gamma-corrected sRGB coordinate
/// as linear.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Compute the relative luminance for the given gamma-corrected sRGB
/// coordinates.
///
/// This follows the WCAG 2.x definition, which uses the 0.03928 threshold of
/// an early sRGB draft instead of the 0.04045 used for color space
/// conversion. The difference is immaterial for 24-bit colors.
pub(crate) fn to_relative_luminance(coordinates: &[Float; 3]) -> Float {
    #[inline]
    fn linearize(value: Float) -> Float {
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the WCAG contrast ratio between two relative luminance values.
///
/// Unlike perceptual contrast, the ratio is symmetric: the arguments may be
/// given in either order. The result ranges from 1 to 21.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 >= luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod test {
    use super::{to_contrast_ratio, to_relative_luminance};
    use crate::assert_close_enough;
    use crate::core::from_24bit;

    #[test]
    fn test_luminance() {
        assert_close_enough!(to_relative_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(to_relative_luminance(&[1.0, 1.0, 1.0]), 1.0);
        assert_close_enough!(to_relative_luminance(&[1.0, 0.0, 0.0]), 0.2126);

        // Exactly at the threshold, the linear segment applies.
        let luminance = to_relative_luminance(&[0.03928, 0.03928, 0.03928]);
        assert!((luminance - 0.03928 / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_ratio() {
        let black = to_relative_luminance(&from_24bit(0, 0, 0));
        let white = to_relative_luminance(&from_24bit(255, 255, 255));
        assert_close_enough!(to_contrast_ratio(black, white), 21.0);
        assert_close_enough!(to_contrast_ratio(white, black), 21.0);
        assert_close_enough!(to_contrast_ratio(white, white), 1.0);

        let gray = to_relative_luminance(&from_24bit(0x76, 0x76, 0x76));
        let ratio = to_contrast_ratio(gray, white);
        assert!((4.5..4.6).contains(&ratio), "ratio {}", ratio);
    }
}
