/// The enumeration of supported color spaces.
///
/// # RGB
///
/// Palettes are exchanged as [sRGB](https://en.wikipedia.org/wiki/SRGB), the
/// default color space of the web, in its familiar gamma-corrected form. The
/// linear form is the stepping stone towards XYZ and also what contrast
/// computations operate on. For both, in-gamut coordinates range from 0 to 1,
/// inclusive.
///
/// # Oklab and Oklch
///
/// This crate generates scales in [Oklch](https://bottosson.github.io/posts/oklab/),
/// the polar form of the perceptually uniform Oklab color space. Like CIELAB,
/// Oklab uses one coordinate for lightness and two coordinates for
/// "colorness," with the a axis varying red/green and the b axis varying
/// blue/yellow. Oklch instead uses chroma C and hue h, which makes it well
/// suited to deriving shades that keep their hue while lightness changes.
/// Perceptual distances, including the round-trip error of generated shades,
/// are measured as Euclidian distance in Oklab.
///
/// Lightness L in both spaces ranges `0..=1`. Chroma has no upper bound in
/// theory, but displayable colors stay below 0.37 or so. Hue is measured in
/// degrees and preferably kept within `0..360`.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as the
/// reference color space; every conversion between the two branches above
/// passes through it. This crate uses XYZ with the D65 standard illuminant,
/// the same one used by sRGB and Oklab.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Oklab,
    Oklch,
    Xyz,
}

impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// Oklch currently is the only polar color space.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Oklch)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is one of the Oklab variations.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// XYZ and the Oklab variations are *unbounded* and hence can model any
    /// color. By contrast, RGB color spaces are *bounded*, with coordinates
    /// of in-gamut colors ranging `0..=1`.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb()
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Oklab => "Oklab",
            Oklch => "Oklch",
            Xyz => "XYZ D65",
        };

        f.write_str(s)
    }
}
