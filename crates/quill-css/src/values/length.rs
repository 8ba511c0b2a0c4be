//! CSS Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use quill_common::warning::warn_once;

use super::context::ResolutionContext;
use super::tokens::split_components;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// The subset of `<length>` units the resolver understands. Parsed
/// ASCII case-insensitively, as CSS units are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// "1px = 1/96th of 1in"
    Px,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "Equal to the computed value of font-size on the root element."
    Rem,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "Equal to the computed value of the font-size property of the element
    /// on which it is used."
    Em,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    ///
    /// "1vw = 1% of viewport width"
    Vw,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    ///
    /// "1vh = 1% of viewport height"
    Vh,
}

impl LengthUnit {
    /// Convert `value` expressed in this unit to pixels.
    #[must_use]
    pub fn to_px(self, value: f64, ctx: &ResolutionContext) -> f64 {
        match self {
            Self::Px => value,
            Self::Rem | Self::Em => value * ctx.font_size,
            Self::Vw => value * ctx.viewport_width / 100.0,
            Self::Vh => value * ctx.viewport_height / 100.0,
        }
    }
}

/// A resolved size.
///
/// Absolute lengths collapse to pixels. Percentages stay tagged because they
/// need containing-block geometry that an inline declaration never carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SizeValue {
    /// An absolute size in pixels.
    Px(f64),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// "Percentages are always relative to another quantity."
    Percent(f64),
}

impl SizeValue {
    /// The pixel value, or `None` for a percentage.
    #[must_use]
    pub const fn to_px(self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(px),
            Self::Percent(_) => None,
        }
    }

    /// Check if the size is a percentage.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

/// [§ 7.3 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)
///
/// Keywords whose meaning depends on layout or inheritance and therefore
/// cannot be resolved from the declaration alone.
fn is_context_keyword(raw: &str) -> bool {
    ["auto", "inherit", "initial"]
        .iter()
        .any(|k| raw.eq_ignore_ascii_case(k))
}

/// Parse a size lexeme (`10px`, `1.5rem`, `50%`, `calc(1rem + 4px)`, `12`).
///
/// Returns `None` for `auto`, `inherit`, `initial` and for anything the
/// resolver does not recognize. Never panics.
#[must_use]
pub fn parse_size(raw: &str, ctx: &ResolutionContext) -> Option<SizeValue> {
    let raw = raw.trim();
    if raw.is_empty() || is_context_keyword(raw) {
        return None;
    }

    match calc_body(raw) {
        Some(body) => evaluate_calc(body, ctx),
        None => parse_term(raw, ctx),
    }
}

/// Resolve a single `<dimension>`, `<percentage>` or bare `<number>`.
///
/// Used for `calc()` terms as well, so a nested `calc(` is not a term.
fn parse_term(raw: &str, ctx: &ResolutionContext) -> Option<SizeValue> {
    let (value, unit) = split_numeric(raw)?;
    if unit == "%" {
        return Some(SizeValue::Percent(value));
    }
    if unit.is_empty() {
        // Bare numbers are treated as pixels.
        return Some(SizeValue::Px(value));
    }

    match LengthUnit::from_str(unit) {
        Ok(unit) => Some(SizeValue::Px(unit.to_px(value, ctx))),
        Err(_) => {
            warn_once("CSS", &format!("unsupported unit '{unit}' in '{raw}'"));
            None
        }
    }
}

/// Parse a size and keep it only if it resolves to pixels.
#[must_use]
pub fn parse_px(raw: &str, ctx: &ResolutionContext) -> Option<f64> {
    parse_size(raw, ctx).and_then(SizeValue::to_px)
}

/// Split a lexeme into its leading `<number>` and the remaining unit text.
///
/// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
///
/// Accepts an optional sign, integer digits, and an optional fraction. At
/// least one digit is required.
fn split_numeric(raw: &str) -> Option<(f64, &str)> {
    let bytes = raw.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let fraction_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == fraction_start {
            return None;
        }
        digits += end - fraction_start;
    }
    if digits == 0 {
        return None;
    }

    let value = raw[..end].parse::<f64>().ok()?;
    Some((value, &raw[end..]))
}

/// Strip `calc(` ... `)` from a lexeme, returning the expression body.
fn calc_body(raw: &str) -> Option<&str> {
    let prefix = raw.get(..5)?;
    if !prefix.eq_ignore_ascii_case("calc(") {
        return None;
    }
    raw[5..].strip_suffix(')')
}

/// [§ 10.1 Basic Arithmetic: calc()](https://www.w3.org/TR/css-values-4/#calc-func)
///
/// "The + and - operators must be surrounded by whitespace."
///
/// Only a single `<term> (+|-) <term>` expression is evaluated. Both terms
/// are resolved to pixels independently and then combined. Nested `calc()`
/// and other math functions are not terms.
///
/// `calc(100% - <length>)` is approximated as `100%`: the subtraction needs
/// the containing block, so the result is reported as a full-width percentage
/// rather than evaluated.
fn evaluate_calc(body: &str, ctx: &ResolutionContext) -> Option<SizeValue> {
    let terms = split_components(body.trim());
    let [left, operator, right] = terms.as_slice() else {
        return None;
    };

    let subtract = match *operator {
        "+" => false,
        "-" => true,
        _ => return None,
    };

    let rhs = parse_term(right, ctx)?;
    if subtract && is_full_percentage(left) && !rhs.is_percent() {
        return Some(SizeValue::Percent(100.0));
    }

    let lhs = parse_term(left, ctx)?.to_px()?;
    let rhs = rhs.to_px()?;
    Some(SizeValue::Px(if subtract { lhs - rhs } else { lhs + rhs }))
}

/// Check for a literal `100%` term.
fn is_full_percentage(term: &str) -> bool {
    matches!(split_numeric(term), Some((value, "%")) if (value - 100.0).abs() < f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_numeric() {
        assert_eq!(split_numeric("12px"), Some((12.0, "px")));
        assert_eq!(split_numeric("-.5em"), Some((-0.5, "em")));
        assert_eq!(split_numeric("+3"), Some((3.0, "")));
        assert_eq!(split_numeric("5.px"), None);
        assert_eq!(split_numeric("px"), None);
        assert_eq!(split_numeric("-"), None);
    }

    #[test]
    fn test_calc_body() {
        assert_eq!(calc_body("calc(1px + 2px)"), Some("1px + 2px"));
        assert_eq!(calc_body("CALC(1px)"), Some("1px"));
        assert_eq!(calc_body("calc(1px"), None);
        assert_eq!(calc_body("min(1px, 2px)"), None);
    }

    #[test]
    fn test_nested_calc_is_not_a_term() {
        let ctx = ResolutionContext::default();
        assert_eq!(parse_term("calc(1px + 1px)", &ctx), None);
        assert_eq!(evaluate_calc("calc(1px + 1px) + 1px", &ctx), None);
        assert_eq!(evaluate_calc("1px + 2px", &ctx), Some(SizeValue::Px(3.0)));
    }

    #[test]
    fn test_full_percentage() {
        assert!(is_full_percentage("100%"));
        assert!(!is_full_percentage("50%"));
        assert!(!is_full_percentage("100px"));
    }
}
