//! Four-sided box shorthands (`margin`, `padding`).
//!
//! [§ 6 Margins and Paddings](https://www.w3.org/TR/css-box-4/#margins)

use serde::Serialize;

use super::context::ResolutionContext;
use super::length::parse_px;
use super::tokens::split_components;

/// Per-side pixel values in `top, right, bottom, left` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxSides {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl BoxSides {
    /// The same value on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Sides as an array in `top, right, bottom, left` order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "If there is only one component value, it applies to all sides.
/// If there are two values, the top and bottom margins are set to the
/// first value and the right and left margins are set to the second.
/// If there are three values, the top is set to the first value, the
/// left and right are set to the second, and the bottom is set to the
/// third. If there are four values, they apply to the top, right,
/// bottom, and left, respectively."
///
/// Expands component strings into `[top, right, bottom, left]`. Components
/// beyond the fourth are ignored; an empty list yields `None`.
#[must_use]
pub fn expand_box_components<'a>(components: &[&'a str]) -> Option<[&'a str; 4]> {
    match *components {
        [] => None,
        // RULE 1-VALUE: "it applies to all sides."
        [all] => Some([all, all, all, all]),
        // RULE 2-VALUE: top/bottom, then right/left.
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        // RULE 3-VALUE: top, right/left, bottom.
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        // RULE 4-VALUE: "top, right, bottom, and left, respectively."
        [top, right, bottom, left, ..] => Some([top, right, bottom, left]),
    }
}

/// Parse a `margin`/`padding` shorthand into pixel sides.
///
/// A side whose component does not resolve to pixels (a percentage, an
/// unknown unit, `auto` within a list) contributes `0`. Only an empty value
/// or a lone `auto` fails the whole shorthand.
#[must_use]
pub fn parse_box_shorthand(raw: &str, ctx: &ResolutionContext) -> Option<BoxSides> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("auto") {
        return None;
    }
    let components = split_components(raw);
    let [top, right, bottom, left] =
        expand_box_components(&components)?.map(|c| parse_px(c, ctx).unwrap_or(0.0));
    Some(BoxSides {
        top,
        right,
        bottom,
        left,
    })
}
