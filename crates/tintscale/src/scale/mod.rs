//! Perceptual color scales.
//!
//! A scale is an ordered sequence of shades derived from a base color,
//! running from lightest to darkest. [`generate_scale`] samples lightness in
//! Oklch, keeps the base color's hue, carries over its chroma, and records
//! each shade in several representations:
//!
//! ```
//! # use tintscale::scale::{generate_scale, ScaleOptions};
//! # use tintscale::error::PaletteError;
//! let scale = generate_scale("#4f46e5", &ScaleOptions::default())?;
//! assert_eq!(scale.len(), 11);
//! assert_eq!(scale[0].name, "50");
//! assert_eq!(scale[10].name, "950");
//! assert!(scale[0].oklch.l > scale[10].oklch.l);
//! # Ok::<(), PaletteError>(())
//! ```
//!
//! Options are validated and never silently clamped, with the exception of
//! the lightness shift, which is limited to `-0.25..=0.25` before use.

mod algorithm;
mod naming;
mod options;

pub use algorithm::{Algorithm, OklchScale, ScaleAlgorithm, Shade};
pub use naming::shade_names;
pub use options::{
    LightnessDistribution, NamingPattern, OptionBuilder, ScaleOptions, DEFAULT_CHROMA_MAX,
    SHIFT_LIMIT, STEPS_RANGE,
};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::{Color, Float, Hsl, Oklch, Rgb, Swatch};

/// A scale entry.
///
/// The hexadecimal and RGB representations are the displayed color. The HSL
/// coordinates are derived from the displayed color and rounded to one
/// decimal. The Oklch coordinates are the generation target rounded to three
/// decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub oklch: Oklch,
    pub name: String,
}

impl ScaleEntry {
    /// Create a new scale entry for the shade with the given name.
    pub fn new(shade: Shade, name: String) -> Self {
        Self {
            hex: shade.rgb.to_string(),
            rgb: shade.rgb,
            hsl: Hsl::from(shade.rgb).round_to(1),
            oklch: shade.oklch,
            name,
        }
    }
}

impl Swatch for ScaleEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn hex(&self) -> &str {
        &self.hex
    }
}

/// A generated scale.
///
/// A scale serializes as a plain array of entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale(Vec<ScaleEntry>);

impl Scale {
    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine whether this scale has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ScaleEntry> {
        self.0.iter()
    }

    /// Access the entries as a slice.
    pub fn entries(&self) -> &[ScaleEntry] {
        &self.0
    }

    /// Get the first entry, which is the lightest.
    pub fn lightest(&self) -> Option<&ScaleEntry> {
        self.0.first()
    }

    /// Get the last entry, which is the darkest.
    pub fn darkest(&self) -> Option<&ScaleEntry> {
        self.0.last()
    }

    /// Get the hexadecimal colors.
    pub fn hexes(&self) -> Vec<String> {
        self.0.iter().map(|entry| entry.hex.clone()).collect()
    }

    /// Convert into the hexadecimal colors.
    pub fn into_hexes(self) -> Vec<String> {
        self.0.into_iter().map(|entry| entry.hex).collect()
    }
}

impl std::ops::Index<usize> for Scale {
    type Output = ScaleEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Scale {
    type Item = ScaleEntry;
    type IntoIter = std::vec::IntoIter<ScaleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scale {
    type Item = &'a ScaleEntry;
    type IntoIter = std::slice::Iter<'a, ScaleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Scale> for Vec<ScaleEntry> {
    fn from(value: Scale) -> Self {
        value.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Generate a scale for the base color.
///
/// The base color may use any syntax [`Color`] parses. This function uses
/// the strategy of the options' [`Algorithm`].
///
/// # Errors
///
/// This function fails with [`PaletteError::Range`] if the options are out
/// of range and with [`PaletteError::Color`] if the base color does not
/// parse.
pub fn generate_scale(base: &str, options: &ScaleOptions) -> Result<Scale, PaletteError> {
    generate_scale_with(options.algorithm().strategy(), base, options)
}

/// Generate a scale for the base color with the given strategy.
pub fn generate_scale_with<A>(
    algorithm: &A,
    base: &str,
    options: &ScaleOptions,
) -> Result<Scale, PaletteError>
where
    A: ScaleAlgorithm + ?Sized,
{
    options.validate()?;
    let base = Oklch::from(&Color::from_str(base.trim())?);
    let names = shade_names(
        options.naming_pattern(),
        options.steps(),
        options.custom_names(),
    );

    let entries = algorithm
        .shades(&base, options)
        .into_iter()
        .zip(names)
        .map(|(shade, name)| ScaleEntry::new(shade, name))
        .collect();

    Ok(Scale(entries))
}

/// Generate the hexadecimal colors of a scale.
///
/// This is the simplified form of [`generate_scale`] with default options
/// besides steps and shift.
///
/// ```
/// # use tintscale::scale::generate_hexes;
/// # use tintscale::error::PaletteError;
/// let hexes = generate_hexes("#6a8d51", 5, 0.0)?;
/// assert_eq!(hexes.len(), 5);
/// assert!(hexes.iter().all(|hex| hex.len() == 7 && hex.starts_with('#')));
/// assert!(generate_hexes("#6a8d51", 16, 0.0).is_err());
/// # Ok::<(), PaletteError>(())
/// ```
pub fn generate_hexes(base: &str, steps: usize, shift: Float) -> Result<Vec<String>, PaletteError> {
    let options = ScaleOptions::with_steps_and_shift(steps, shift);
    Ok(generate_scale(base, &options)?.into_hexes())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{ColorFormatError, OutOfRangeError};

    fn is_hex(hex: &str) -> bool {
        hex.len() == 7
            && hex.starts_with('#')
            && hex[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    #[test]
    fn test_generate_scale() -> Result<(), PaletteError> {
        let scale = generate_scale("#4f46e5", &ScaleOptions::default())?;
        assert_eq!(scale.len(), 11);
        assert_eq!(scale[0].name, "50");
        assert_eq!(scale[5].name, "500");
        assert_eq!(scale[10].name, "950");
        assert!(scale.iter().all(|entry| is_hex(&entry.hex)));
        assert!(scale[0].oklch.l - scale[9].oklch.l > 0.2);
        assert!(scale[9].oklch.l > scale[10].oklch.l);

        for entry in &scale {
            assert_eq!(entry.hex, entry.rgb.to_string());
            assert_eq!(entry.hsl, Hsl::from(entry.rgb).round_to(1));

            let delta = Color::from(entry.oklch).distance(&Color::from(entry.rgb));
            assert!(delta < 1.0, "{} has Delta E {}", entry.hex, delta);
        }
        Ok(())
    }

    #[test]
    fn test_scale_records() -> Result<(), PaletteError> {
        let scale = generate_scale("#6a8d51", &ScaleOptions::default())?;
        let entry = &scale[5];
        assert_eq!(entry.hex, "#587A3F");
        assert_eq!(entry.rgb, Rgb::new(0x58, 0x7a, 0x3f));
        assert_eq!(entry.oklch, Oklch::new(0.54, 0.094, 133.237));
        assert_eq!(entry.hsl.h, 94.6);
        assert_eq!(entry.hsl.s, 0.3);
        assert_eq!(entry.hsl.l, 0.4);

        assert_eq!(scale.lightest().map(|entry| entry.hex.as_str()), Some("#DCFFC2"));
        assert_eq!(scale.darkest().map(|entry| entry.hex.as_str()), Some("#000800"));
        Ok(())
    }

    #[test]
    fn test_naming() -> Result<(), PaletteError> {
        let options = ScaleOptions::builder()
            .steps(10)
            .naming_pattern(NamingPattern::From50To900)
            .build();
        let scale = generate_scale("#6a8d51", &options)?;
        assert_eq!(scale[9].name, "900");

        let options = ScaleOptions::builder().steps(7).build();
        let scale = generate_scale("#6a8d51", &options)?;
        assert_eq!(scale[6].name, "shade-7");

        let options = ScaleOptions::builder()
            .steps(3)
            .naming_pattern(NamingPattern::Custom)
            .custom_names(["bg", "", "fg"])
            .build();
        let names: Vec<_> = generate_scale("#6a8d51", &options)?
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, ["bg", "shade-2", "fg"]);
        Ok(())
    }

    #[test]
    fn test_errors() {
        let options = ScaleOptions::builder().steps(0).build();
        assert!(matches!(
            generate_scale("#6a8d51", &options),
            Err(PaletteError::Range(OutOfRangeError { option: "steps", .. }))
        ));

        assert!(matches!(
            generate_scale("#zzzzzz", &ScaleOptions::default()),
            Err(PaletteError::Color(ColorFormatError::MalformedHex))
        ));
        assert!(generate_scale("", &ScaleOptions::default()).is_err());
    }

    #[test]
    fn test_single_step() -> Result<(), PaletteError> {
        let hexes = generate_hexes("#6a8d51", 1, 0.0)?;
        assert_eq!(hexes, ["#DCFFC2"]);
        Ok(())
    }

    #[test]
    fn test_hexes_match_scale() -> Result<(), PaletteError> {
        let options = ScaleOptions::with_steps_and_shift(9, 0.1);
        let scale = generate_scale("rebeccapurple", &options)?;
        assert_eq!(generate_hexes("rebeccapurple", 9, 0.1)?, scale.hexes());
        Ok(())
    }

    #[test]
    fn test_serde() -> Result<(), PaletteError> {
        let scale = generate_scale("#6a8d51", &ScaleOptions::builder().steps(2).build())?;
        let json = serde_json::to_value(&scale)?;
        assert!(json.is_array());
        assert_eq!(json[0]["hex"], "#DCFFC2");
        assert_eq!(json[0]["name"], "shade-1");
        assert_eq!(json[1]["rgb"]["r"], 0);
        Ok(())
    }
}
