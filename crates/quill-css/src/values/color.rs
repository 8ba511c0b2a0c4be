//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color as three 8-bit channels. Alpha is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
}

impl Rgb {
    /// Black (#000000)
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Construct from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Only the three- and six-digit forms are accepted. The leading `#` is
    /// required.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            // "The three-digit RGB notation (#RGB) is converted into six-digit
            // form (#RRGGBB) by replicating digits, not by adding zeros."
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// Looks the keyword up ASCII case-insensitively.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(keyword, _)| name.eq_ignore_ascii_case(keyword))
            .map(|&(_, color)| color)
    }

    /// Convert to `#rrggbb` notation.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The basic sixteen HTML colors plus common extended keywords.
/// `transparent` maps to black because alpha is dropped.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("silver", Rgb::new(192, 192, 192)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("white", Rgb::new(255, 255, 255)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("red", Rgb::new(255, 0, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("green", Rgb::new(0, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("navy", Rgb::new(0, 0, 128)),
    ("blue", Rgb::new(0, 0, 255)),
    ("teal", Rgb::new(0, 128, 128)),
    ("aqua", Rgb::new(0, 255, 255)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gold", Rgb::new(255, 215, 0)),
    ("indigo", Rgb::new(75, 0, 130)),
    ("violet", Rgb::new(238, 130, 238)),
    ("coral", Rgb::new(255, 127, 80)),
    ("salmon", Rgb::new(250, 128, 114)),
    ("tomato", Rgb::new(255, 99, 71)),
    ("crimson", Rgb::new(220, 20, 60)),
    ("khaki", Rgb::new(240, 230, 140)),
    ("beige", Rgb::new(245, 245, 220)),
    ("ivory", Rgb::new(255, 255, 240)),
    ("lavender", Rgb::new(230, 230, 250)),
    ("turquoise", Rgb::new(64, 224, 208)),
    ("skyblue", Rgb::new(135, 206, 235)),
    ("steelblue", Rgb::new(70, 130, 180)),
    ("darkblue", Rgb::new(0, 0, 139)),
    ("darkgreen", Rgb::new(0, 100, 0)),
    ("darkred", Rgb::new(139, 0, 0)),
    ("darkgray", Rgb::new(169, 169, 169)),
    ("darkgrey", Rgb::new(169, 169, 169)),
    ("lightgray", Rgb::new(211, 211, 211)),
    ("lightgrey", Rgb::new(211, 211, 211)),
    ("lightblue", Rgb::new(173, 216, 230)),
    ("lightgreen", Rgb::new(144, 238, 144)),
    ("whitesmoke", Rgb::new(245, 245, 245)),
    ("transparent", Rgb::new(0, 0, 0)),
];

/// Parse a color value: hex, `rgb()`/`rgba()`, or a named color.
///
/// `currentColor` and `inherit` depend on the cascade and yield `None`, as
/// does anything malformed.
#[must_use]
pub fn parse_color(raw: &str) -> Option<Rgb> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("currentcolor") || raw.eq_ignore_ascii_case("inherit") {
        return None;
    }
    if raw.starts_with('#') {
        return Rgb::from_hex(raw);
    }
    if let Some(args) = function_args(raw, "rgba").or_else(|| function_args(raw, "rgb")) {
        return parse_rgb_args(args);
    }
    Rgb::from_named(raw)
}

/// Return the argument text of `name(...)`, matching the name case-insensitively.
fn function_args<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let open = raw.find('(')?;
    if !raw[..open].eq_ignore_ascii_case(name) {
        return None;
    }
    raw[open + 1..].strip_suffix(')')
}

/// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// "For legacy reasons, rgb() also supports an alternate syntax that
/// separates all of its arguments with commas."
///
/// Both separators are accepted. An optional fourth (alpha) argument is
/// ignored; any further argument makes the color invalid.
fn parse_rgb_args(args: &str) -> Option<Rgb> {
    let channels: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_ascii_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let ([r, g, b] | [r, g, b, _]) = channels.as_slice() else {
        return None;
    };
    Some(Rgb::new(channel(r)?, channel(g)?, channel(b)?))
}

/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
///
/// Numbers clamp to 0-255; percentages map 0%-100% onto 0-255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(arg: &str) -> Option<u8> {
    let value = match arg.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? * 255.0 / 100.0,
        None => arg.parse::<f64>().ok()?,
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}
