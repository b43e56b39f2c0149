//! CSS gradients and box shadows seeded from a palette.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{hex_to_rgb, Float, Rgb, Swatch};

/// The first color of a gradient seeded from an empty palette.
const FALLBACK_START: &str = "#4F46E5";

/// The last color of a gradient seeded from an empty palette.
const FALLBACK_END: &str = "#1F2937";

/// Round half up to an integer, as CSS authoring tools do.
fn round_half_up(value: Float) -> i64 {
    (value + 0.5).floor() as i64
}

/// Round a position to whole percent within `0..=100`.
fn to_percent(position: Float) -> i64 {
    if position.is_nan() {
        return 0;
    }
    round_half_up(position).clamp(0, 100)
}

/// A color stop of a gradient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: String,
    /// The position in percent.
    pub position: Float,
}

impl ColorStop {
    /// Create a new color stop.
    pub fn new(color: &str, position: Float) -> Self {
        Self {
            color: color.to_owned(),
            position,
        }
    }
}

/// The shape of a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GradientShape {
    /// A linear gradient along the angle in degrees.
    Linear { angle: Float },
    /// A circular radial gradient.
    Radial,
}

/// A CSS gradient with at least two color stops.
///
/// ```
/// # use tintscale::css::{ColorStop, Gradient, GradientShape};
/// let mut gradient = Gradient::from_palette(&[("50", "#EEF2FF"), ("950", "#1E1B4B")]);
/// assert_eq!(
///     gradient.to_string(),
///     "linear-gradient(90deg, #EEF2FF 0%, #1E1B4B 100%)"
/// );
///
/// gradient.set_shape(GradientShape::Radial);
/// gradient.push_midpoint("#4F46E5".to_string());
/// assert_eq!(
///     gradient.to_string(),
///     "radial-gradient(circle, #EEF2FF 0%, #1E1B4B 100%, #4F46E5 50%)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    shape: GradientShape,
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Create a new linear gradient between the two stops.
    pub fn linear(angle: Float, first: ColorStop, last: ColorStop) -> Self {
        Self {
            shape: GradientShape::Linear { angle },
            stops: vec![first, last],
        }
    }

    /// Create a new radial gradient between the two stops.
    pub fn radial(first: ColorStop, last: ColorStop) -> Self {
        Self {
            shape: GradientShape::Radial,
            stops: vec![first, last],
        }
    }

    /// Create a 90° linear gradient from the palette's first to its last
    /// color.
    pub fn from_palette<S: Swatch>(palette: &[S]) -> Self {
        let first = palette.first().map_or(FALLBACK_START, Swatch::hex);
        let last = palette.last().map_or(FALLBACK_END, Swatch::hex);
        Self::linear(90.0, ColorStop::new(first, 0.0), ColorStop::new(last, 100.0))
    }

    /// Get the shape.
    pub fn shape(&self) -> GradientShape {
        self.shape
    }

    /// Change the shape.
    pub fn set_shape(&mut self, shape: GradientShape) {
        self.shape = shape;
    }

    /// Get the color stops.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Access the color stop with the given index for modification.
    pub fn stop_mut(&mut self, index: usize) -> Option<&mut ColorStop> {
        self.stops.get_mut(index)
    }

    /// Append a stop with the given color at the mean position of all stops.
    pub fn push_midpoint(&mut self, color: String) {
        let total: Float = self.stops.iter().map(|stop| stop.position).sum();
        let mean = total / self.stops.len() as Float;
        let position = if mean.is_finite() { mean } else { 50.0 };
        self.stops.push(ColorStop {
            color,
            position: to_percent(position) as Float,
        });
    }

    /// Remove the stop with the given index.
    ///
    /// A gradient keeps at least two stops. This method returns `None` if
    /// the removal would leave fewer or the index is out of bounds.
    pub fn remove_stop(&mut self, index: usize) -> Option<ColorStop> {
        if self.stops.len() <= 2 || self.stops.len() <= index {
            return None;
        }
        Some(self.stops.remove(index))
    }

    /// Format as a `background-image` declaration.
    pub fn to_declaration(&self) -> String {
        format!("background-image: {};", self)
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shape {
            GradientShape::Linear { angle } => {
                write!(f, "linear-gradient({}deg", round_half_up(angle))?
            }
            GradientShape::Radial => f.write_str("radial-gradient(circle")?,
        }

        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color, to_percent(stop.position))?;
        }

        f.write_str(")")
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CSS box shadow.
///
/// Offsets, blur, and spread are in pixels and rounded when formatting.
/// Opacity is clamped to `0..=1`. A color that does not parse falls back on
/// black.
///
/// ```
/// # use tintscale::css::BoxShadow;
/// let shadow = BoxShadow {
///     color: "#4F46E5".to_string(),
///     ..BoxShadow::default()
/// };
/// assert_eq!(shadow.to_string(), "12px 18px 32px 0px rgba(79, 70, 229, 0.25)");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxShadow {
    pub offset_x: Float,
    pub offset_y: Float,
    pub blur: Float,
    pub spread: Float,
    pub color: String,
    pub opacity: Float,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            offset_x: 12.0,
            offset_y: 18.0,
            blur: 32.0,
            spread: 0.0,
            color: "#000000".to_owned(),
            opacity: 0.25,
        }
    }
}

impl BoxShadow {
    /// Create the default shadow tinted with the palette's middle color.
    pub fn from_palette<S: Swatch>(palette: &[S]) -> Self {
        let mut shadow = Self::default();
        if let Some(middle) = palette.get(palette.len() / 2) {
            middle.hex().clone_into(&mut shadow.color);
        }
        shadow
    }

    /// Format the color with opacity as `rgba()`.
    pub fn rgba(&self) -> String {
        let rgb = hex_to_rgb(&self.color).unwrap_or_else(|error| {
            debug!("shadow color {:?} falls back on black: {}", self.color, error);
            Rgb::default()
        });
        let opacity = if self.opacity.is_nan() {
            0.0
        } else {
            self.opacity.clamp(0.0, 1.0)
        };

        format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, opacity)
    }

    /// Format as a `box-shadow` declaration.
    pub fn to_declaration(&self) -> String {
        format!("box-shadow: {};", self)
    }
}

impl std::fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px {}",
            round_half_up(self.offset_x),
            round_half_up(self.offset_y),
            round_half_up(self.blur),
            round_half_up(self.spread),
            self.rgba()
        )
    }
}
