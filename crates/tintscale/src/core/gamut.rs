use crate::{ColorSpace, Float};

/// Determine whether the coordinates are in gamut for their color space.
///
/// Only RGB color spaces are bounded. Coordinates in every other color space
/// are always in gamut.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    if space.is_bounded() {
        coordinates.iter().all(|c| 0.0 <= *c && *c <= 1.0)
    } else {
        true
    }
}

/// Clip the coordinates to the gamut of their color space.
///
/// For RGB, this clamps each coordinate to `0..=1`. Generated shades whose
/// Oklch coordinates fall outside sRGB are brought into gamut this way before
/// they are quantized to hexadecimal.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    if space.is_bounded() {
        let [r, g, b] = coordinates;
        [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
    } else {
        *coordinates
    }
}

#[cfg(test)]
mod test {
    use super::{clip, in_gamut};
    use crate::ColorSpace::*;

    #[test]
    fn test_gamut() {
        assert!(in_gamut(Srgb, &[0.0, 0.5, 1.0]));
        assert!(!in_gamut(Srgb, &[1.01, 0.5, 0.0]));
        assert!(in_gamut(Oklch, &[0.5, 0.9, 400.0]));

        assert_eq!(clip(Srgb, &[1.2, -0.3, 0.4]), [1.0, 0.0, 0.4]);
        assert_eq!(clip(Oklab, &[1.2, -0.3, 0.4]), [1.2, -0.3, 0.4]);
    }
}
