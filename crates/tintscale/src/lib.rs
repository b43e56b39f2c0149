//! # Tintscale
//!
//! Tintscale derives perceptually uniform color scales from a single base
//! color, rates them for WCAG contrast, and exports them as design tokens.
//! It is the pure core of a palette generator: Every function is
//! deterministic and free of side effects, so that user interfaces, browser
//! workers, and command line tools can all share it.
//!
//!
//! ## 1. Overview
//!
//! Tintscale's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. It parses most CSS
//!     color syntaxes, converts between sRGB, linear sRGB, XYZ, Oklab, and
//!     Oklch, and supports gamut testing and clipping as well as Delta E OK.
//!   * [`Rgb`], [`Hsl`], and [`Oklch`] are **plain records** for displaying
//!     colors. The free functions [`normalize_to_hex`], [`hex_to_rgb`],
//!     [`rgb_to_hsl`], [`hex_to_oklch`], and friends convert between them.
//!   * The [`scale`] module **generates scales** by sampling lightness in
//!     Oklch, holding hue constant, and limiting chroma. Each
//!     [`ScaleEntry`](scale::ScaleEntry) carries all representations and a
//!     name such as `500`.
//!   * [`contrast_ratio`] and [`rating`] implement **WCAG 2.x contrast**,
//!     and [`rate_swatches`] badges a whole scale at once.
//!   * The [`tokens`] module **exports** named colors as CSS custom
//!     properties, Tailwind configuration, JSON design tokens, or SVG.
//!   * The [`state`] module **persists** the generator's configuration in a
//!     URL query string, and the [`css`] module renders gradients and box
//!     shadows from a palette.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use tintscale::scale::{generate_scale, ScaleOptions};
//! # use tintscale::tokens::to_css_variables;
//! # use tintscale::{rate_swatches, Rating, DEFAULT_FOREGROUND};
//! # use tintscale::error::PaletteError;
//! let options = ScaleOptions::builder().steps(11).build();
//! let scale = generate_scale("#4f46e5", &options)?;
//!
//! let css = to_css_variables("primary", scale.entries());
//! assert!(css.starts_with(":root {\n  --primary-50: #"));
//!
//! let rated = rate_swatches(scale.entries(), DEFAULT_FOREGROUND)?;
//! assert_eq!(rated[0].rating, Rating::Aaa);
//! # Ok::<(), PaletteError>(())
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//!   * `f64` (default) selects `f64` as [`Float`], otherwise `f32`.
//!   * `worker` (default) enables the [`worker`] module for generating scales
//!     on a background thread.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod convert;
mod core;
pub mod css;
pub mod error;
mod model;
mod object;
pub mod scale;
pub mod state;
pub mod tokens;
mod wcag;

#[cfg(feature = "worker")]
pub mod worker;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use convert::{
    hex_to_oklch, hex_to_rgb, hsl_to_rgb, normalize_to_hex, oklch_to_hex, parse_css_rgb,
    rgb_to_hex, rgb_to_hsl,
};
pub use core::ColorSpace;
pub use model::{Hsl, NamedColor, Oklch, Rgb, Swatch};
pub use object::Color;
pub use wcag::{
    contrast_ratio, placeholder_scale, rate_swatches, rating, relative_luminance, RatedSwatch,
    Rating, DEFAULT_FOREGROUND, PLACEHOLDER_COLOR,
};
