//! The options for generating a scale and the corresponding builder.
//!
//! # Example
//!
//! ```
//! # use tintscale::scale::{NamingPattern, ScaleOptions};
//! let options = ScaleOptions::builder()
//!     .steps(10)
//!     .shift(0.05)
//!     .naming_pattern(NamingPattern::From50To900)
//!     .build();
//!
//! assert_eq!(options.steps(), 10);
//! assert_eq!(options.chroma_max(), 0.37);
//! ```

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::core::lerp;
use crate::error::OutOfRangeError;
use crate::Float;

/// The reference lightness curve for eleven steps. It is denser near the
/// light end.
const PRESET_LIGHTNESS: [Float; 11] = [
    0.97, 0.884, 0.8, 0.712, 0.626, 0.54, 0.454, 0.368, 0.281, 0.195, 0.11,
];

/// The lightness of the lightest step for gamma distributions.
const LIGHTNESS_START: Float = 0.97;

/// The lightness of the darkest step for gamma distributions.
const LIGHTNESS_END: Float = 0.11;

/// The range of supported step counts.
pub const STEPS_RANGE: std::ops::RangeInclusive<usize> = 1..=15;

/// The bound on the magnitude of the lightness shift.
pub const SHIFT_LIMIT: Float = 0.25;

/// The default maximum chroma, which keeps most hues displayable.
pub const DEFAULT_CHROMA_MAX: Float = 0.37;

/// The distribution of lightness across a scale's steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LightnessDistribution {
    /// Resample the fixed eleven-step reference curve.
    #[default]
    Preset,
    /// Interpolate from light to dark along `t^gamma`.
    Gamma { gamma: Float },
}

impl LightnessDistribution {
    /// Sample the distribution for the given number of steps.
    ///
    /// The result is ordered from lightest to darkest. A single step is
    /// sampled at the light end.
    ///
    /// ```
    /// # use tintscale::scale::LightnessDistribution;
    /// let preset = LightnessDistribution::Preset.sample(11);
    /// assert_eq!(preset[0], 0.97);
    /// assert_eq!(preset[10], 0.11);
    ///
    /// let linear = LightnessDistribution::Gamma { gamma: 1.0 }.sample(3);
    /// assert_eq!(linear.len(), 3);
    /// assert!((linear[1] - 0.54).abs() < 1e-6);
    /// assert!((linear[2] - 0.11).abs() < 1e-6);
    /// ```
    pub fn sample(&self, steps: usize) -> Vec<Float> {
        let denominator = steps.saturating_sub(1).max(1) as Float;

        match *self {
            Self::Preset => {
                let last = PRESET_LIGHTNESS.len() - 1;
                (0..steps)
                    .map(|index| {
                        let position = index as Float * last as Float / denominator;
                        let index0 = (position.floor() as usize).min(last);
                        let index1 = (index0 + 1).min(last);
                        let fraction = position - index0 as Float;
                        lerp(
                            PRESET_LIGHTNESS[index0],
                            PRESET_LIGHTNESS[index1],
                            fraction,
                        )
                    })
                    .collect()
            }
            Self::Gamma { gamma } => {
                let span = LIGHTNESS_START - LIGHTNESS_END;
                (0..steps)
                    .map(|index| {
                        let t = index as Float / denominator;
                        (-span).mul_add(t.powf(gamma), LIGHTNESS_START)
                    })
                    .collect()
            }
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The pattern for naming a scale's steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingPattern {
    /// `50`, `100`, ..., `900`, `950` for eleven steps.
    #[default]
    #[serde(rename = "50-950")]
    From50To950,
    /// `50`, `100`, ..., `900` for ten steps.
    #[serde(rename = "50-900")]
    From50To900,
    /// User-supplied names, falling back on `shade-1`, `shade-2`, and so on.
    #[serde(rename = "custom")]
    Custom,
}

impl NamingPattern {
    /// Get the pattern's label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::From50To950 => "50-950",
            Self::From50To900 => "50-900",
            Self::Custom => "custom",
        }
    }

    /// Look up the pattern with the given label.
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::From50To950, Self::From50To900, Self::Custom]
            .into_iter()
            .find(|pattern| pattern.label() == label)
    }
}

impl std::fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OptionData {
    steps: usize,
    shift: Float,
    chroma_max: Float,
    increase_chroma_towards_dark: bool,
    naming_pattern: NamingPattern,
    #[serde(rename = "lDistribution")]
    lightness_distribution: LightnessDistribution,
    algorithm: Algorithm,
    custom_names: Vec<String>,
}

impl Default for OptionData {
    fn default() -> Self {
        Self {
            steps: 11,
            shift: 0.0,
            chroma_max: DEFAULT_CHROMA_MAX,
            increase_chroma_towards_dark: false,
            naming_pattern: NamingPattern::From50To950,
            lightness_distribution: LightnessDistribution::Preset,
            algorithm: Algorithm::Tailwind,
            custom_names: Vec::new(),
        }
    }
}

/// A builder of scale options.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the number of steps.
    pub fn steps(&mut self, steps: usize) -> &mut Self {
        self.0.steps = steps;
        self
    }

    /// Set the global lightness shift.
    ///
    /// The shift is clamped to `-0.25..=0.25` when generating a scale.
    pub fn shift(&mut self, shift: Float) -> &mut Self {
        self.0.shift = shift;
        self
    }

    /// Set the maximum chroma.
    pub fn chroma_max(&mut self, chroma_max: Float) -> &mut Self {
        self.0.chroma_max = chroma_max;
        self
    }

    /// Increase chroma by up to 20% towards the dark end of the scale.
    pub fn increase_chroma_towards_dark(&mut self, increase: bool) -> &mut Self {
        self.0.increase_chroma_towards_dark = increase;
        self
    }

    /// Set the naming pattern.
    pub fn naming_pattern(&mut self, pattern: NamingPattern) -> &mut Self {
        self.0.naming_pattern = pattern;
        self
    }

    /// Set the lightness distribution.
    pub fn lightness_distribution(&mut self, distribution: LightnessDistribution) -> &mut Self {
        self.0.lightness_distribution = distribution;
        self
    }

    /// Use a gamma lightness distribution with the given exponent.
    pub fn gamma(&mut self, gamma: Float) -> &mut Self {
        self.0.lightness_distribution = LightnessDistribution::Gamma { gamma };
        self
    }

    /// Set the scale algorithm.
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.0.algorithm = algorithm;
        self
    }

    /// Set the custom names.
    ///
    /// Custom names only take effect with the [`NamingPattern::Custom`]
    /// pattern.
    pub fn custom_names<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.custom_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> ScaleOptions {
        ScaleOptions(self.0.clone())
    }
}

/// The options for generating a scale.
///
/// The default options have 11 steps, no shift, a maximum chroma of 0.37, no
/// chroma boost, the `50-950` naming pattern, the preset lightness
/// distribution, and the Tailwind-like algorithm.
///
/// Scale options serialize with camel-case field names. Missing fields take
/// their default values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleOptions(OptionData);

impl ScaleOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::default())
    }

    /// Create the default options but with the given number of steps and
    /// lightness shift.
    pub fn with_steps_and_shift(steps: usize, shift: Float) -> Self {
        Self::builder().steps(steps).shift(shift).build()
    }

    /// Get the number of steps.
    pub fn steps(&self) -> usize {
        self.0.steps
    }

    /// Get the lightness shift as configured.
    pub fn shift(&self) -> Float {
        self.0.shift
    }

    /// Get the lightness shift clamped to `-0.25..=0.25`.
    pub fn clamped_shift(&self) -> Float {
        self.0.shift.clamp(-SHIFT_LIMIT, SHIFT_LIMIT)
    }

    /// Get the maximum chroma.
    pub fn chroma_max(&self) -> Float {
        self.0.chroma_max
    }

    /// Determine whether chroma increases towards the dark end.
    pub fn increase_chroma_towards_dark(&self) -> bool {
        self.0.increase_chroma_towards_dark
    }

    /// Get the naming pattern.
    pub fn naming_pattern(&self) -> NamingPattern {
        self.0.naming_pattern
    }

    /// Get the lightness distribution.
    pub fn lightness_distribution(&self) -> LightnessDistribution {
        self.0.lightness_distribution
    }

    /// Get the scale algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.0.algorithm
    }

    /// Get the custom names.
    pub fn custom_names(&self) -> &[String] {
        &self.0.custom_names
    }

    /// Validate these options.
    ///
    /// Steps must be `1..=15`, the shift must be finite, a gamma exponent
    /// must be `0.1..=10`, and the maximum chroma must be `0..=1`. Out-of-range
    /// values are reported and never clamped, except for finite shifts.
    pub fn validate(&self) -> Result<(), OutOfRangeError> {
        if !STEPS_RANGE.contains(&self.0.steps) {
            return Err(OutOfRangeError::new(
                "steps",
                self.0.steps as Float,
                *STEPS_RANGE.start() as Float..=*STEPS_RANGE.end() as Float,
            ));
        }

        if !self.0.shift.is_finite() {
            return Err(OutOfRangeError::new(
                "shift",
                self.0.shift,
                -SHIFT_LIMIT..=SHIFT_LIMIT,
            ));
        }

        if let LightnessDistribution::Gamma { gamma } = self.0.lightness_distribution {
            if !(0.1..=10.0).contains(&gamma) {
                return Err(OutOfRangeError::new("gamma", gamma, 0.1..=10.0));
            }
        }

        if !(0.0..=1.0).contains(&self.0.chroma_max) {
            return Err(OutOfRangeError::new(
                "chroma maximum",
                self.0.chroma_max,
                0.0..=1.0,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_preset_sampling() {
        let eleven = LightnessDistribution::Preset.sample(11);
        assert_eq!(eleven, PRESET_LIGHTNESS.to_vec());

        let one = LightnessDistribution::Preset.sample(1);
        assert_eq!(one, vec![0.97]);

        let two = LightnessDistribution::Preset.sample(2);
        assert_eq!(two, vec![0.97, 0.11]);

        let fifteen = LightnessDistribution::Preset.sample(15);
        assert_eq!(fifteen.len(), 15);
        assert_eq!(fifteen[0], 0.97);
        assert!((fifteen[14] - 0.11).abs() < 1e-12);
        for pair in fifteen.windows(2) {
            assert!(pair[0] > pair[1], "{:?}", fifteen);
        }
    }

    #[test]
    fn test_gamma_sampling() {
        let samples = LightnessDistribution::Gamma { gamma: 2.0 }.sample(11);
        assert_eq!(samples[0], 0.97);
        assert!((samples[10] - 0.11).abs() < 1e-12);
        for pair in samples.windows(2) {
            assert!(pair[0] > pair[1], "{:?}", samples);
        }

        // Quadratic easing keeps the light end lighter than linear.
        let linear = LightnessDistribution::Gamma { gamma: 1.0 }.sample(11);
        assert!(samples[5] > linear[5]);
    }

    #[test]
    fn test_builder() {
        let options = ScaleOptions::builder()
            .steps(15)
            .shift(0.4)
            .chroma_max(0.2)
            .increase_chroma_towards_dark(true)
            .naming_pattern(NamingPattern::Custom)
            .gamma(1.5)
            .algorithm(Algorithm::Material)
            .custom_names(["primary", "secondary"])
            .build();

        assert_eq!(options.steps(), 15);
        assert_eq!(options.shift(), 0.4);
        assert_eq!(options.clamped_shift(), 0.25);
        assert_eq!(options.chroma_max(), 0.2);
        assert!(options.increase_chroma_towards_dark());
        assert_eq!(options.naming_pattern(), NamingPattern::Custom);
        assert_eq!(
            options.lightness_distribution(),
            LightnessDistribution::Gamma { gamma: 1.5 }
        );
        assert_eq!(options.algorithm(), Algorithm::Material);
        assert_eq!(options.custom_names(), ["primary", "secondary"]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(ScaleOptions::default().validate().is_ok());

        let error = ScaleOptions::with_steps_and_shift(0, 0.0).validate();
        assert!(matches!(error, Err(OutOfRangeError { option: "steps", .. })));
        let error = ScaleOptions::with_steps_and_shift(16, 0.0).validate();
        assert!(matches!(error, Err(OutOfRangeError { option: "steps", .. })));
        let error = ScaleOptions::with_steps_and_shift(11, Float::NAN).validate();
        assert!(matches!(error, Err(OutOfRangeError { option: "shift", .. })));
        assert!(ScaleOptions::with_steps_and_shift(11, -3.0).validate().is_ok());

        let error = ScaleOptions::builder().gamma(0.0).build().validate();
        assert!(matches!(error, Err(OutOfRangeError { option: "gamma", .. })));
        let error = ScaleOptions::builder().chroma_max(-0.1).build().validate();
        assert!(matches!(
            error,
            Err(OutOfRangeError {
                option: "chroma maximum",
                ..
            })
        ));
    }

    #[test]
    fn test_serde() {
        let options: ScaleOptions = serde_json::from_str(
            r#"{"steps":10,"namingPattern":"50-900","lDistribution":{"type":"gamma","gamma":2.0}}"#,
        )
        .unwrap();
        assert_eq!(options.steps(), 10);
        assert_eq!(options.naming_pattern(), NamingPattern::From50To900);
        assert_eq!(
            options.lightness_distribution(),
            LightnessDistribution::Gamma { gamma: 2.0 }
        );
        assert_eq!(options.chroma_max(), DEFAULT_CHROMA_MAX);

        let json = serde_json::to_value(ScaleOptions::default()).unwrap();
        assert_eq!(json["increaseChromaTowardsDark"], false);
        assert_eq!(json["namingPattern"], "50-950");
        assert_eq!(json["lDistribution"]["type"], "preset");
        assert_eq!(json["algorithm"], "tailwind");
    }

    #[test]
    fn test_naming_pattern() {
        assert_eq!(NamingPattern::from_label("50-900"), Some(NamingPattern::From50To900));
        assert_eq!(NamingPattern::from_label("50-1000"), None);
        assert_eq!(NamingPattern::Custom.to_string(), "custom");
    }
}
