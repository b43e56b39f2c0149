use super::NamingPattern;

const TOKENS_50_950: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Determine the names for a scale with the given number of steps.
///
/// The fixed patterns only apply when the step count matches, i.e., 11 for
/// `50-950` and 10 for `50-900`. Otherwise, names fall back on `shade-1`,
/// `shade-2`, and so on. With the custom pattern, each non-blank custom name
/// replaces the fallback name in the same position.
///
/// ```
/// # use tintscale::scale::{shade_names, NamingPattern};
/// let names = shade_names(NamingPattern::From50To900, 10, &[]);
/// assert_eq!(names[9], "900");
///
/// let names = shade_names(NamingPattern::From50To900, 3, &[]);
/// assert_eq!(names, ["shade-1", "shade-2", "shade-3"]);
///
/// let custom = ["light".to_string(), " ".to_string()];
/// let names = shade_names(NamingPattern::Custom, 3, &custom);
/// assert_eq!(names, ["light", "shade-2", "shade-3"]);
/// ```
pub fn shade_names(pattern: NamingPattern, steps: usize, custom_names: &[String]) -> Vec<String> {
    match (pattern, steps) {
        (NamingPattern::From50To950, 11) => TOKENS_50_950.iter().map(u16::to_string).collect(),
        (NamingPattern::From50To900, 10) => {
            TOKENS_50_950[..10].iter().map(u16::to_string).collect()
        }
        (NamingPattern::Custom, _) => (0..steps)
            .map(|index| match custom_names.get(index).map(|name| name.trim()) {
                Some(name) if !name.is_empty() => name.to_owned(),
                _ => fallback_name(index),
            })
            .collect(),
        _ => (0..steps).map(fallback_name).collect(),
    }
}

#[inline]
fn fallback_name(index: usize) -> String {
    format!("shade-{}", index + 1)
}
