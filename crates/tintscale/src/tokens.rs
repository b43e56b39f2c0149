//! Export of named colors as design tokens.
//!
//! Every exporter takes a prefix and a slice of [`Swatch`]es, i.e., anything
//! with a name and a hexadecimal color, such as scale entries or pairs of
//! strings. Prefix and names are sanitized into token keys with [`sanitize`];
//! colors are written as given.
//!
//! ```
//! # use tintscale::tokens::to_css_variables;
//! let css = to_css_variables("brand", &[("50", "#EEF2FF"), ("Deep Blue!", "#1E1B4B")]);
//! assert_eq!(
//!     css,
//!     ":root {\n  --brand-50: #EEF2FF;\n  --brand-deep-blue: #1E1B4B;\n}"
//! );
//! ```

use serde_json::{json, Map, Value};

use crate::Swatch;

/// The width and height of an SVG swatch.
pub const SVG_CELL_SIZE: usize = 24;

/// The number of SVG swatches per row.
pub const SVG_COLUMNS: usize = 8;

/// Sanitize a string into a token key.
///
/// The key is lowercase, has its whitespace trimmed and inner whitespace
/// runs replaced by a single hyphen, and retains only ASCII letters, digits,
/// underscores, and hyphens.
///
/// ```
/// # use tintscale::tokens::sanitize;
/// assert_eq!(sanitize("  Primary Color "), "primary-color");
/// assert_eq!(sanitize("50"), "50");
/// assert_eq!(sanitize("Ünï cødé!"), "n-cd");
/// ```
pub fn sanitize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut words = lower.split_whitespace().peekable();

    while let Some(word) = words.next() {
        result.extend(
            word.chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'),
        );
        if words.peek().is_some() {
            result.push('-');
        }
    }

    result
}

/// Render CSS custom properties inside a `:root` rule.
pub fn to_css_variables<S: Swatch>(prefix: &str, swatches: &[S]) -> String {
    let prefix = sanitize(prefix);
    let mut lines = vec![":root {".to_owned()];
    lines.extend(
        swatches
            .iter()
            .map(|swatch| format!("  --{}-{}: {};", prefix, sanitize(swatch.name()), swatch.hex())),
    );
    lines.push("}".to_owned());
    lines.join("\n")
}

/// Render a `tailwind.config.ts` that extends the theme's colors.
///
/// ```
/// # use tintscale::tokens::to_tailwind_config;
/// let config = to_tailwind_config("Brand", &[("500", "#6A8D51")]);
/// assert!(config.starts_with("export default {\n"));
/// assert!(config.contains("        brand: {\n        \"500\": \"#6A8D51\",\n        },"));
/// assert!(config.ends_with("} satisfies import('tailwindcss').Config;"));
/// ```
pub fn to_tailwind_config<S: Swatch>(prefix: &str, swatches: &[S]) -> String {
    let body = swatches
        .iter()
        .map(|swatch| format!("        \"{}\": \"{}\",", sanitize(swatch.name()), swatch.hex()))
        .collect::<Vec<_>>()
        .join("\n");

    [
        "export default {".to_owned(),
        "  theme: {".to_owned(),
        "    extend: {".to_owned(),
        "      colors: {".to_owned(),
        format!("        {}: {{", sanitize(prefix)),
        body,
        "        },".to_owned(),
        "      },".to_owned(),
        "    },".to_owned(),
        "  },".to_owned(),
        "} satisfies import('tailwindcss').Config;".to_owned(),
    ]
    .join("\n")
}

/// Create Tailwind v4 tokens.
///
/// The result has the shape `{"color": {prefix: {name: hex, ...}}}`. Later
/// entries with the same sanitized name replace earlier ones.
pub fn to_tailwind_v4_tokens<S: Swatch>(prefix: &str, swatches: &[S]) -> Value {
    let colors: Map<String, Value> = swatches
        .iter()
        .map(|swatch| (sanitize(swatch.name()), Value::from(swatch.hex())))
        .collect();

    json!({ "color": { sanitize(prefix): colors } })
}

/// Create vendor-neutral design tokens.
///
/// The result has the shape
/// `{"tokens": {"color": {prefix: {name: {"$type": "color", "$value": hex}}}}}`.
///
/// ```
/// # use tintscale::tokens::to_json_tokens;
/// let tokens = to_json_tokens("ui", &[("50", "#F5F5F5")]);
/// assert_eq!(tokens["tokens"]["color"]["ui"]["50"]["$type"], "color");
/// assert_eq!(tokens["tokens"]["color"]["ui"]["50"]["$value"], "#F5F5F5");
/// ```
pub fn to_json_tokens<S: Swatch>(prefix: &str, swatches: &[S]) -> Value {
    let colors: Map<String, Value> = swatches
        .iter()
        .map(|swatch| {
            (
                sanitize(swatch.name()),
                json!({ "$type": "color", "$value": swatch.hex() }),
            )
        })
        .collect();

    json!({ "tokens": { "color": { sanitize(prefix): colors } } })
}

/// Format tokens as pretty-printed JSON.
pub fn to_string_pretty(tokens: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Render the colors as an SVG grid of square swatches.
///
/// The grid always is eight cells wide and has as many rows as needed, with
/// no padding between cells.
pub fn to_svg<S: Swatch>(swatches: &[S]) -> String {
    let rows = swatches.len().div_ceil(SVG_COLUMNS);
    let width = SVG_COLUMNS * SVG_CELL_SIZE;
    let height = rows * SVG_CELL_SIZE;

    let cells = swatches
        .iter()
        .enumerate()
        .map(|(index, swatch)| {
            format!(
                r#"<rect x="{}" y="{}" width="{size}" height="{size}" fill="{}"/>"#,
                (index % SVG_COLUMNS) * SVG_CELL_SIZE,
                (index / SVG_COLUMNS) * SVG_CELL_SIZE,
                swatch.hex(),
                size = SVG_CELL_SIZE,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n{}\n</svg>",
        width, height, cells
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NamedColor;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Brand Blue"), "brand-blue");
        assert_eq!(sanitize("a \t\n b"), "a-b");
        assert_eq!(sanitize("snake_case-and-kebab"), "snake_case-and-kebab");
        assert_eq!(sanitize("100%"), "100");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("a ! b"), "a--b");
    }

    #[test]
    fn test_css_variables() {
        let empty: [NamedColor; 0] = [];
        assert_eq!(to_css_variables("x", &empty), ":root {\n}");

        let swatches = [NamedColor::new("Light", "#FFFFFF"), NamedColor::new("dark", "#000000")];
        assert_eq!(
            to_css_variables("My Brand", &swatches),
            ":root {\n  --my-brand-light: #FFFFFF;\n  --my-brand-dark: #000000;\n}"
        );
    }

    #[test]
    fn test_tailwind_config() {
        let config = to_tailwind_config("primary", &[("50", "#EEF2FF"), ("950", "#1E1B4B")]);
        assert_eq!(
            config,
            "export default {\n  theme: {\n    extend: {\n      colors: {\n        primary: {\n        \
             \"50\": \"#EEF2FF\",\n        \"950\": \"#1E1B4B\",\n        },\n      },\n    },\n  },\n\
             } satisfies import('tailwindcss').Config;"
        );
    }

    #[test]
    fn test_json_shapes() {
        let swatches = [("50", "#EEF2FF"), ("Accent Color", "#4F46E5")];

        let v4 = to_tailwind_v4_tokens("Primary", &swatches);
        assert_eq!(
            v4,
            json!({ "color": { "primary": { "50": "#EEF2FF", "accent-color": "#4F46E5" } } })
        );

        let tokens = to_json_tokens("primary", &swatches);
        assert_eq!(
            tokens["tokens"]["color"]["primary"]["accent-color"],
            json!({ "$type": "color", "$value": "#4F46E5" })
        );

        // Insertion order survives pretty-printing.
        let text = to_string_pretty(&v4).unwrap();
        let fifty = text.find("\"50\"").unwrap();
        let accent = text.find("\"accent-color\"").unwrap();
        assert!(fifty < accent);
    }

    #[test]
    fn test_svg() {
        let swatches: Vec<_> = (0..9)
            .map(|index| (format!("{}", index), format!("#00000{}", index)))
            .collect();
        let svg = to_svg(&swatches);

        assert!(svg.starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"192\" height=\"48\">\n"
        ));
        assert!(svg.ends_with("\n</svg>"));
        assert_eq!(svg.matches("<rect ").count(), 9);
        assert!(svg.contains(r##"<rect x="0" y="0" width="24" height="24" fill="#000000"/>"##));
        assert!(svg.contains(r##"<rect x="168" y="0" width="24" height="24" fill="#000007"/>"##));
        assert!(svg.contains(r##"<rect x="0" y="24" width="24" height="24" fill="#000008"/>"##));

        let empty: [(&str, &str); 0] = [];
        assert!(to_svg(&empty).contains("width=\"192\" height=\"0\""));
    }
}
