//! CSS Border values
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::color::{Rgb, parse_color};
use super::context::ResolutionContext;
use super::length::parse_px;
use super::tokens::split_components;

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// The line styles the presentation layer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BorderLineStyle {
    /// "A single line segment."
    #[default]
    Solid,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A series of round dots."
    Dotted,
    /// "Two parallel solid lines with some space between them."
    Double,
}

/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// A fully specified border: width, style, and color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderStyle {
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width), in pixels
    pub width: f64,
    /// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub style: BorderLineStyle,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub color: Rgb,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            style: BorderLineStyle::Solid,
            color: Rgb::BLACK,
        }
    }
}

/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "thin ≤ medium ≤ thick" - the usual 1px / 3px / 5px mapping.
fn border_width_keyword(token: &str) -> Option<f64> {
    match token.to_ascii_lowercase().as_str() {
        "thin" => Some(1.0),
        "medium" => Some(3.0),
        "thick" => Some(5.0),
        _ => None,
    }
}

/// [§ 4.4 'border' shorthand](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// "border: <line-width> || <line-style> || <color>"
///
/// Components may appear in any order. Each token is classified on its own as
/// a width, a style, or a color; unrecognized tokens are skipped and the first
/// match per category wins. Missing categories fall back to
/// `1px solid black`, so this never fails.
#[must_use]
pub fn parse_border(raw: &str, ctx: &ResolutionContext) -> BorderStyle {
    let mut width = None;
    let mut style = None;
    let mut color = None;

    for token in split_components(raw) {
        if width.is_none()
            && let Some(px) = parse_px(token, ctx).or_else(|| border_width_keyword(token))
        {
            width = Some(px);
        } else if style.is_none()
            && let Ok(s) = BorderLineStyle::from_str(token)
        {
            style = Some(s);
        } else if color.is_none()
            && let Some(c) = parse_color(token)
        {
            color = Some(c);
        }
    }

    let fallback = BorderStyle::default();
    BorderStyle {
        width: width.unwrap_or(fallback.width),
        style: style.unwrap_or(fallback.style),
        color: color.unwrap_or(fallback.color),
    }
}
