//! Scale generation strategies.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::ScaleOptions;
use crate::core::FloatExt;
use crate::{Color, Float, Oklch, Rgb};

/// A generated shade before naming.
///
/// The Oklch coordinates are the rounded target of generation, possibly with
/// reduced chroma. The RGB coordinates are the clipped and quantized color
/// actually displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shade {
    pub oklch: Oklch,
    pub rgb: Rgb,
}

/// A strategy for deriving shades from a base color.
///
/// Implementations may assume that the options are valid. They must return
/// exactly [`ScaleOptions::steps`] shades ordered from lightest to darkest.
pub trait ScaleAlgorithm {
    /// Get the strategy's name.
    fn name(&self) -> &'static str;

    /// Derive the shades for the base color.
    fn shades(&self, base: &Oklch, options: &ScaleOptions) -> Vec<Shade>;
}

// --------------------------------------------------------------------------------------------------------------------

/// The Oklch scale.
///
/// This strategy samples lightness, keeps the base color's hue, and carries
/// over its chroma, optionally boosted towards the dark end and always
/// limited by the maximum chroma. Each shade's Oklch coordinates are rounded
/// to three decimals before conversion to sRGB.
///
/// Shades outside the sRGB gamut get clipped, which shifts their appearance.
/// When the Delta E OK between target and clipped color reaches the
/// threshold, the strategy lowers chroma by a fixed decrement for up to the
/// given number of attempts. It keeps a lower chroma only while Delta E
/// strictly decreases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OklchScale {
    threshold: Float,
    attempts: usize,
    decrement: Float,
}

impl OklchScale {
    /// Create a new Oklch scale with threshold 1.0, eight attempts, and a
    /// chroma decrement of 0.002.
    pub const fn new() -> Self {
        Self {
            threshold: 1.0,
            attempts: 8,
            decrement: 0.002,
        }
    }

    /// Create a new Oklch scale with custom correction parameters.
    pub const fn with_correction(threshold: Float, attempts: usize, decrement: Float) -> Self {
        Self {
            threshold,
            attempts,
            decrement,
        }
    }

    /// Get the Delta E threshold for chroma correction.
    pub const fn threshold(&self) -> Float {
        self.threshold
    }

    /// Convert the target to a displayable shade, correcting chroma as
    /// necessary.
    fn correct(&self, target: Oklch) -> Shade {
        let goal = Color::from(target);
        let rgb = Rgb::from(&goal);
        let mut shade = Shade { oklch: target, rgb };
        let mut delta = goal.distance(&Color::from(rgb));

        let mut chroma = target.c;
        for _ in 0..self.attempts {
            if delta < self.threshold {
                break;
            }

            chroma = (chroma - self.decrement).clamp_unit();
            let candidate = Rgb::from(&Color::oklch(target.l, chroma, target.h));
            let candidate_delta = goal.distance(&Color::from(candidate));
            if candidate_delta >= delta {
                break;
            }

            debug!(
                "lowering chroma of {:?} to {:.3} reduces Delta E from {:.4} to {:.4}",
                target, chroma, delta, candidate_delta
            );
            delta = candidate_delta;
            shade = Shade {
                oklch: Oklch::new(target.l, chroma.round_to(3), target.h),
                rgb: candidate,
            };
        }

        shade
    }
}

impl Default for OklchScale {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleAlgorithm for OklchScale {
    fn name(&self) -> &'static str {
        "oklch"
    }

    fn shades(&self, base: &Oklch, options: &ScaleOptions) -> Vec<Shade> {
        let steps = options.steps();
        let denominator = steps.saturating_sub(1).max(1) as Float;
        let shift = options.clamped_shift();
        let boost: Float = if options.increase_chroma_towards_dark() {
            0.2
        } else {
            0.0
        };
        let hue = if base.h.is_nan() { 0.0 } else { base.h };

        options
            .lightness_distribution()
            .sample(steps)
            .into_iter()
            .enumerate()
            .map(|(index, sample)| {
                let t = index as Float / denominator;
                let lightness = (sample + shift).clamp_unit();
                let chroma = (base.c * boost.mul_add(t, 1.0))
                    .max(0.0)
                    .min(options.chroma_max());
                let target = Oklch::new(lightness, chroma, hue).round_to(3);
                trace!("step {} at t={:.3} targets {:?}", index, t, target);
                self.correct(target)
            })
            .collect()
    }
}

/// The strategy shared by all algorithms that resolve to an Oklch scale.
static OKLCH_SCALE: OklchScale = OklchScale::new();

// --------------------------------------------------------------------------------------------------------------------

/// The user-selectable scale algorithm.
///
/// `Tailwind` selects the Tailwind-like [`OklchScale`]. `Material` is
/// reserved for a tonal-palette strategy and currently resolves to the same
/// Oklch scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Tailwind,
    Material,
}

impl Algorithm {
    /// Get the algorithm's label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Material => "material",
        }
    }

    /// Look up the algorithm with the given label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "tailwind" => Some(Self::Tailwind),
            "material" => Some(Self::Material),
            _ => None,
        }
    }

    /// Resolve this algorithm to its strategy.
    pub fn strategy(&self) -> &'static dyn ScaleAlgorithm {
        if let Self::Material = self {
            debug!("material algorithm resolves to the oklch scale");
        }
        &OKLCH_SCALE
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
