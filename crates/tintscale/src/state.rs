//! Palette state persisted in a URL query string.
//!
//! Encoding writes one query parameter per field. Decoding never fails:
//! missing, malformed, or out-of-range values are replaced by defaults or
//! clamped, so that stale share links always restore a usable state.
//!
//! ```
//! # use tintscale::state::{InputSpace, PaletteUrlState};
//! let state = PaletteUrlState::from_query("?baseColor=%234f46e5&count=42&shift=-1");
//! assert_eq!(state.base_color, "#4f46e5");
//! assert_eq!(state.count, 15);
//! assert_eq!(state.shift, -0.25);
//! assert_eq!(state.space, InputSpace::Hex);
//!
//! let query = state.to_query();
//! assert_eq!(PaletteUrlState::from_query(&query), state);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::core::FloatExt;
use crate::error::ColorFormatError;
use crate::scale::{Algorithm, NamingPattern, ScaleOptions, SHIFT_LIMIT};
use crate::{hex_to_oklch, hex_to_rgb, Float, Hsl};

/// The default base color.
pub const DEFAULT_BASE_COLOR: &str = "#6a8d51";

/// The default number of shades.
pub const DEFAULT_COUNT: usize = 11;

/// The range of shade counts restored from a query.
pub const COUNT_RANGE: std::ops::RangeInclusive<usize> = 5..=15;

/// The color space a user enters the base color in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSpace {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Oklch,
}

impl InputSpace {
    /// Get the space's label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }

    /// Look up the space with the given label.
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Hex, Self::Rgb, Self::Hsl, Self::Oklch]
            .into_iter()
            .find(|space| space.label() == label)
    }

    /// Render the color in this space.
    ///
    /// Hexadecimal colors are uppercase, RGB coordinates are bytes, HSL
    /// coordinates have one decimal with saturation and lightness in
    /// percent, and Oklch coordinates have three decimals.
    ///
    /// ```
    /// # use tintscale::state::InputSpace;
    /// # use tintscale::error::ColorFormatError;
    /// assert_eq!(InputSpace::Hex.render("#336699")?, "#336699");
    /// assert_eq!(InputSpace::Rgb.render("#336699")?, "rgb(51 102 153)");
    /// assert_eq!(InputSpace::Hsl.render("#336699")?, "hsl(210 50% 40%)");
    /// assert_eq!(InputSpace::Oklch.render("#fff")?, "oklch(1 0 0)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn render(&self, color: &str) -> Result<String, ColorFormatError> {
        let rgb = hex_to_rgb(color)?;
        let text = match self {
            Self::Hex => rgb.to_string(),
            Self::Rgb => format!("rgb({} {} {})", rgb.r, rgb.g, rgb.b),
            Self::Hsl => {
                let hsl = Hsl::from(rgb);
                format!(
                    "hsl({} {}% {}%)",
                    hsl.h.round_to(1),
                    (hsl.s * 100.0).round_to(1),
                    (hsl.l * 100.0).round_to(1)
                )
            }
            Self::Oklch => {
                let oklch = hex_to_oklch(color)?.round_to(3);
                format!("oklch({} {} {})", oklch.l, oklch.c, oklch.h)
            }
        };

        Ok(text)
    }
}

impl std::fmt::Display for InputSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The shareable state of the palette generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteUrlState {
    pub base_color: String,
    pub space: InputSpace,
    pub algo: Algorithm,
    pub shift: Float,
    pub count: usize,
    pub names: Vec<String>,
    pub inc_dark: bool,
    pub pattern: NamingPattern,
}

impl Default for PaletteUrlState {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR.to_owned(),
            space: InputSpace::Hex,
            algo: Algorithm::Tailwind,
            shift: 0.0,
            count: DEFAULT_COUNT,
            names: Vec::new(),
            inc_dark: false,
            pattern: NamingPattern::From50To950,
        }
    }
}

impl PaletteUrlState {
    /// Encode this state as a URL query string without leading `?`.
    ///
    /// Names are joined by commas and omitted when empty. The chroma boost is
    /// written as `1` or `0`.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("baseColor", &self.base_color)
            .append_pair("space", self.space.label())
            .append_pair("algo", self.algo.label())
            .append_pair("shift", &encode_shift(self.shift))
            .append_pair("count", &self.count.to_string());
        if !self.names.is_empty() {
            serializer.append_pair("names", &self.names.join(","));
        }
        serializer
            .append_pair("incDark", if self.inc_dark { "1" } else { "0" })
            .append_pair("pattern", self.pattern.label());
        serializer.finish()
    }

    /// Decode the state from a URL query string with optional leading `?`.
    ///
    /// If a key repeats, the first value counts. Unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        let mut seen = Vec::with_capacity(8);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if seen.contains(&key) {
                continue;
            }

            match &*key {
                "baseColor" => state.base_color = value.into_owned(),
                "space" => state.space = decode_label(&key, &value, InputSpace::from_label),
                "algo" => state.algo = decode_label(&key, &value, Algorithm::from_label),
                "shift" => state.shift = decode_shift(&value),
                "count" => state.count = decode_count(&value),
                "names" => state.names = decode_names(&value),
                "incDark" => state.inc_dark = value == "1",
                "pattern" => {
                    state.pattern = decode_label(&key, &value, NamingPattern::from_label)
                }
                _ => continue,
            }

            seen.push(key);
        }

        state
    }

    /// Convert into scale options.
    ///
    /// The count becomes the number of steps and the chroma boost maps onto
    /// increasing chroma towards dark.
    pub fn to_scale_options(&self) -> ScaleOptions {
        ScaleOptions::builder()
            .steps(self.count)
            .shift(self.shift)
            .increase_chroma_towards_dark(self.inc_dark)
            .naming_pattern(self.pattern)
            .algorithm(self.algo)
            .custom_names(self.names.iter().cloned())
            .build()
    }
}

fn decode_label<T: Default>(key: &str, value: &str, lookup: fn(&str) -> Option<T>) -> T {
    lookup(value).unwrap_or_else(|| {
        debug!("query parameter {}={:?} is unknown, using default", key, value);
        T::default()
    })
}

fn encode_shift(shift: Float) -> String {
    // Negative zero would otherwise be written as -0.
    if shift == 0.0 { 0.0 } else { shift }.to_string()
}

fn decode_number(value: &str) -> Option<Float> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    // Only `Infinity` spells an infinite number, not `inf` or `nan`.
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        debug!("query parameter {:?} is not a number, using default", value);
        return None;
    }

    match value.parse::<Float>() {
        Ok(number) => Some(number),
        Err(_) => {
            debug!("query parameter {:?} is not a number, using default", value);
            None
        }
    }
}

fn decode_shift(value: &str) -> Float {
    match decode_number(value) {
        Some(shift) if !shift.is_nan() => shift.clamp(-SHIFT_LIMIT, SHIFT_LIMIT),
        _ => 0.0,
    }
}

fn decode_count(value: &str) -> usize {
    match decode_number(value) {
        Some(count) if count.is_finite() => {
            let (min, max) = (*COUNT_RANGE.start(), *COUNT_RANGE.end());
            ((count + 0.5).floor()).clamp(min as Float, max as Float) as usize
        }
        _ => DEFAULT_COUNT,
    }
}

fn decode_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PaletteUrlState::from_query(""), PaletteUrlState::default());
        assert_eq!(PaletteUrlState::from_query("?"), PaletteUrlState::default());

        let state = PaletteUrlState::default();
        assert_eq!(state.base_color, "#6a8d51");
        assert_eq!(state.count, 11);
        assert_eq!(state.pattern, NamingPattern::From50To950);
        assert!(state.names.is_empty());
        assert!(!state.inc_dark);
    }

    #[test]
    fn test_to_query() {
        let query = PaletteUrlState::default().to_query();
        assert_eq!(
            query,
            "baseColor=%236a8d51&space=hex&algo=tailwind&shift=0&count=11&incDark=0&pattern=50-950"
        );

        let negative_zero = PaletteUrlState {
            shift: -0.0,
            ..PaletteUrlState::default()
        };
        assert!(negative_zero.to_query().contains("&shift=0&"));

        let state = PaletteUrlState {
            base_color: "#4F46E5".to_owned(),
            space: InputSpace::Oklch,
            algo: Algorithm::Material,
            shift: 0.1,
            count: 7,
            names: vec!["a b".to_owned(), "c".to_owned()],
            inc_dark: true,
            pattern: NamingPattern::Custom,
        };
        assert_eq!(
            state.to_query(),
            "baseColor=%234F46E5&space=oklch&algo=material&shift=0.1&count=7\
             &names=a+b%2Cc&incDark=1&pattern=custom"
        );
        assert_eq!(PaletteUrlState::from_query(&state.to_query()), state);
    }

    #[test]
    fn test_clamping() {
        let state = PaletteUrlState::from_query("shift=0.3&count=2");
        assert_eq!(state.shift, 0.25);
        assert_eq!(state.count, 5);

        let state = PaletteUrlState::from_query("shift=abc&count=xyz");
        assert_eq!(state.shift, 0.0);
        assert_eq!(state.count, 11);

        let state = PaletteUrlState::from_query("shift=-Infinity&count=Infinity");
        assert_eq!(state.shift, -0.25);
        assert_eq!(state.count, 11);

        let state = PaletteUrlState::from_query("shift=+Infinity");
        assert_eq!(state.shift, 0.25);

        let state = PaletteUrlState::from_query("shift=inf&count=infinity");
        assert_eq!(state.shift, 0.0);
        assert_eq!(state.count, 11);

        let state = PaletteUrlState::from_query("shift=-inf");
        assert_eq!(state.shift, 0.0);

        let state = PaletteUrlState::from_query("shift=1e-1");
        assert_eq!(state.shift, 0.1);

        let state = PaletteUrlState::from_query("shift=NaN&count=9.5");
        assert_eq!(state.shift, 0.0);
        assert_eq!(state.count, 10);

        let state = PaletteUrlState::from_query("shift=&count=");
        assert_eq!(state.shift, 0.0);
        assert_eq!(state.count, 11);

        let state = PaletteUrlState::from_query("count=%2012%20");
        assert_eq!(state.count, 12);
    }

    #[test]
    fn test_fields() {
        let state = PaletteUrlState::from_query(
            "names=%20primary%20,,secondary,%20&incDark=1&pattern=custom&space=hsl&algo=material",
        );
        assert_eq!(state.names, ["primary", "secondary"]);
        assert!(state.inc_dark);
        assert_eq!(state.pattern, NamingPattern::Custom);
        assert_eq!(state.space, InputSpace::Hsl);
        assert_eq!(state.algo, Algorithm::Material);

        let state = PaletteUrlState::from_query("incDark=true&pattern=50-1000&space=lab&algo=x");
        assert!(!state.inc_dark);
        assert_eq!(state.pattern, NamingPattern::From50To950);
        assert_eq!(state.space, InputSpace::Hex);
        assert_eq!(state.algo, Algorithm::Tailwind);

        let state = PaletteUrlState::from_query("count=6&count=8&base=%23000000");
        assert_eq!(state.count, 6);
        assert_eq!(state.base_color, DEFAULT_BASE_COLOR);
    }

    #[test]
    fn test_to_scale_options() {
        let state = PaletteUrlState::from_query("count=10&shift=0.2&incDark=1&pattern=50-900&names=x");
        let options = state.to_scale_options();
        assert_eq!(options.steps(), 10);
        assert_eq!(options.shift(), 0.2);
        assert!(options.increase_chroma_towards_dark());
        assert_eq!(options.naming_pattern(), NamingPattern::From50To900);
        assert_eq!(options.custom_names(), ["x"]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_render() -> Result<(), ColorFormatError> {
        assert_eq!(InputSpace::Hex.render("#abc")?, "#AABBCC");
        assert_eq!(InputSpace::Rgb.render("#000000")?, "rgb(0 0 0)");
        assert_eq!(InputSpace::Hsl.render("#808080")?, "hsl(0 0% 50.2%)");
        assert_eq!(InputSpace::Oklch.render("#3178ea")?, "oklch(0.591 0.187 259.667)");
        assert!(InputSpace::Rgb.render("nope").is_err());
        assert_eq!(InputSpace::from_label("oklch"), Some(InputSpace::Oklch));
        assert_eq!(InputSpace::Hsl.to_string(), "hsl");
        Ok(())
    }
}
