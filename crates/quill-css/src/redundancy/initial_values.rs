//! Initial values of CSS properties.
//!
//! [§ 7.1 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values)
//!
//! "Each property has an initial value, defined in the property's definition
//! table."
//!
//! `display` has no single useful initial value for author styles: an author
//! writing `display: block` on a `div` restates the user-agent default, not
//! the CSS initial `inline`. It is therefore resolved per tag name.

/// Initial values of commonly declared properties.
///
/// For flex alignment the table holds the value a flex container behaves as
/// by default (`flex-start`, `stretch`) rather than the abstract `normal`.
/// `min-width`/`min-height` use `auto`, so an explicit `0` (a common flex
/// overflow fix) is never reported.
pub const INITIAL_VALUES: &[(&str, &str)] = &[
    // Positioning
    ("position", "static"),
    ("top", "auto"),
    ("right", "auto"),
    ("bottom", "auto"),
    ("left", "auto"),
    ("z-index", "auto"),
    ("float", "none"),
    ("clear", "none"),
    // Visibility and overflow
    ("visibility", "visible"),
    ("opacity", "1"),
    ("overflow", "visible"),
    ("overflow-x", "visible"),
    ("overflow-y", "visible"),
    // Box model
    ("box-sizing", "content-box"),
    ("width", "auto"),
    ("height", "auto"),
    ("min-width", "auto"),
    ("min-height", "auto"),
    ("max-width", "none"),
    ("max-height", "none"),
    ("margin", "0"),
    ("margin-top", "0"),
    ("margin-right", "0"),
    ("margin-bottom", "0"),
    ("margin-left", "0"),
    ("padding", "0"),
    ("padding-top", "0"),
    ("padding-right", "0"),
    ("padding-bottom", "0"),
    ("padding-left", "0"),
    // Borders and outlines
    ("border-width", "medium"),
    ("border-style", "none"),
    ("border-color", "currentcolor"),
    ("border-radius", "0"),
    ("outline-style", "none"),
    ("outline-width", "medium"),
    ("outline-offset", "0"),
    // Flexbox
    ("flex-direction", "row"),
    ("flex-wrap", "nowrap"),
    ("flex-grow", "0"),
    ("flex-shrink", "1"),
    ("flex-basis", "auto"),
    ("flex", "0 1 auto"),
    ("justify-content", "flex-start"),
    ("align-items", "stretch"),
    ("align-content", "normal"),
    ("align-self", "auto"),
    ("order", "0"),
    ("gap", "normal"),
    ("row-gap", "normal"),
    ("column-gap", "normal"),
    // Grid
    ("grid-template-columns", "none"),
    ("grid-template-rows", "none"),
    // Typography
    ("font-style", "normal"),
    ("font-weight", "normal"),
    ("font-variant", "normal"),
    ("font-size", "medium"),
    ("line-height", "normal"),
    ("letter-spacing", "normal"),
    ("word-spacing", "normal"),
    ("text-align", "start"),
    ("text-decoration", "none"),
    ("text-transform", "none"),
    ("text-indent", "0"),
    ("text-overflow", "clip"),
    ("white-space", "normal"),
    ("word-break", "normal"),
    ("overflow-wrap", "normal"),
    ("vertical-align", "baseline"),
    ("direction", "ltr"),
    // Backgrounds
    ("background-color", "transparent"),
    ("background-image", "none"),
    ("background-repeat", "repeat"),
    ("background-position", "0% 0%"),
    ("background-size", "auto"),
    ("background-attachment", "scroll"),
    ("background-clip", "border-box"),
    ("background-origin", "padding-box"),
    // Effects
    ("box-shadow", "none"),
    ("text-shadow", "none"),
    ("transform", "none"),
    ("filter", "none"),
    ("backdrop-filter", "none"),
    ("clip-path", "none"),
    ("mix-blend-mode", "normal"),
    ("isolation", "auto"),
    // Animation
    ("transition-delay", "0s"),
    ("transition-duration", "0s"),
    ("animation-name", "none"),
    ("animation-delay", "0s"),
    ("animation-duration", "0s"),
    // Interaction
    ("cursor", "auto"),
    ("pointer-events", "auto"),
    ("user-select", "auto"),
    ("resize", "none"),
    // Lists and tables
    ("list-style-type", "disc"),
    ("list-style-position", "outside"),
    ("list-style-image", "none"),
    ("table-layout", "auto"),
    ("border-collapse", "separate"),
    ("caption-side", "top"),
    ("empty-cells", "show"),
    // Replaced content
    ("object-fit", "fill"),
    ("object-position", "50% 50%"),
];

/// [WHATWG HTML § 15.3 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)
///
/// Default `display` by tag name. Tags not listed are `inline`.
const DISPLAY_BY_TAG: &[(&[&str], &str)] = &[
    (
        &[
            "address", "article", "aside", "blockquote", "body", "center", "dd", "details",
            "dialog", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
            "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend",
            "main", "menu", "nav", "ol", "p", "pre", "search", "section", "summary", "ul",
        ],
        "block",
    ),
    (&["li"], "list-item"),
    (&["table"], "table"),
    (&["caption"], "table-caption"),
    (&["colgroup"], "table-column-group"),
    (&["col"], "table-column"),
    (&["thead"], "table-header-group"),
    (&["tbody"], "table-row-group"),
    (&["tfoot"], "table-footer-group"),
    (&["tr"], "table-row"),
    (&["td", "th"], "table-cell"),
    (
        &["button", "input", "select", "textarea", "meter", "progress"],
        "inline-block",
    ),
];

/// Units whose zero is interchangeable with a bare `0`.
const ZERO_UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "ex", "ch", "pt", "pc", "cm", "mm", "in",
    "s", "ms", "deg",
];

/// The default `display` value for an element, or the CSS initial `inline`
/// when no tag is known.
#[must_use]
pub fn display_for_tag(tag_name: Option<&str>) -> &'static str {
    tag_name
        .and_then(|tag| {
            DISPLAY_BY_TAG
                .iter()
                .find(|(tags, _)| tags.iter().any(|t| tag.eq_ignore_ascii_case(t)))
                .map(|&(_, display)| display)
        })
        .unwrap_or("inline")
}

/// The initial value of `property`, consulting the tag for `display`.
#[must_use]
pub fn initial_value(property: &str, tag_name: Option<&str>) -> Option<&'static str> {
    if property.eq_ignore_ascii_case("display") {
        return Some(display_for_tag(tag_name));
    }
    INITIAL_VALUES
        .iter()
        .find(|(p, _)| property.eq_ignore_ascii_case(p))
        .map(|&(_, value)| value)
}

/// Check for markers that make a declaration's effect impossible to prove
/// statically: `!important` (it may be overriding something) and `var()`
/// (its value is only known at runtime).
#[must_use]
pub fn is_override_sensitive(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.contains("!important") || compact.contains("var(")
}

/// Trim, lowercase, and reduce a zero length/time/angle to a bare `0`.
#[must_use]
pub fn normalize_value(value: &str) -> String {
    let value = value.trim().to_ascii_lowercase();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let is_zero = !number.is_empty()
        && number
            .parse::<f64>()
            .is_ok_and(|n| n.abs() < f64::EPSILON);
    if is_zero && (unit.is_empty() || ZERO_UNITS.contains(&unit)) {
        return "0".to_string();
    }
    value
}

/// Check if `value` restates the initial value of `property`.
///
/// Values carrying `!important` or `var()` are never reported.
#[must_use]
pub fn is_default_value(property: &str, value: &str, tag_name: Option<&str>) -> bool {
    if is_override_sensitive(value) {
        return false;
    }
    initial_value(property, tag_name)
        .is_some_and(|initial| normalize_value(value) == normalize_value(initial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_units() {
        assert_eq!(normalize_value("0px"), "0");
        assert_eq!(normalize_value(" 0.0EM "), "0");
        assert_eq!(normalize_value("-0%"), "0");
        assert_eq!(normalize_value("0s"), "0");
        assert_eq!(normalize_value("0fr"), "0fr");
        assert_eq!(normalize_value("10px"), "10px");
        assert_eq!(normalize_value("Static"), "static");
    }

    #[test]
    fn test_display_for_tag() {
        assert_eq!(display_for_tag(Some("DIV")), "block");
        assert_eq!(display_for_tag(Some("li")), "list-item");
        assert_eq!(display_for_tag(Some("td")), "table-cell");
        assert_eq!(display_for_tag(Some("button")), "inline-block");
        assert_eq!(display_for_tag(Some("span")), "inline");
        assert_eq!(display_for_tag(None), "inline");
    }
}
