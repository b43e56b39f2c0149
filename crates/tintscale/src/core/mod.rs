mod contrast;
mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod named;
mod space;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_relative_luminance};

// conversion
pub(crate) use conversion::{convert, from_24bit, hsl_to_srgb, srgb_to_hsl, to_24bit, to_byte};

// difference
pub(crate) use difference::delta_e_ok;

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// gamut
pub(crate) use gamut::{clip, in_gamut};

// math
pub(crate) use math::{lerp, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse, parse_rgb};
