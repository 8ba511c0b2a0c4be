//! Declaration-block text to an ordered declaration stream.
//!
//! [CSS Style Attributes § 3](https://www.w3.org/TR/css-style-attr/#interpreting)

use serde::Serialize;

/// A single `property: value` pair exactly as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Property name, trimmed but not case-normalized.
    pub property: String,
    /// Raw value, trimmed. May contain spaces and `!important`.
    pub value: String,
}

impl Declaration {
    /// Construct a declaration from its parts.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Split declaration-block text into declarations, in source order.
///
/// - Splits on semicolons (`;`) into items.
/// - Splits each item on its first colon (`:`) into property and value.
/// - Trims both sides.
/// - Skips items with no colon, an empty property, or an empty value.
///
/// Duplicates are kept; [`Styles::parse`](super::Styles::parse) collapses
/// them with last-write-wins.
#[must_use]
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .filter_map(|item| {
            let (property, value) = item.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            (!property.is_empty() && !value.is_empty()).then(|| Declaration::new(property, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_duplicates_in_order() {
        let decls = parse_declarations("color: red; margin: 0; color: blue");
        assert_eq!(
            decls,
            vec![
                Declaration::new("color", "red"),
                Declaration::new("margin", "0"),
                Declaration::new("color", "blue"),
            ]
        );
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let decls = parse_declarations("background: url(http://x/y.png)");
        assert_eq!(decls, vec![Declaration::new("background", "url(http://x/y.png)")]);
    }

    #[test]
    fn test_drops_empty_items() {
        let decls = parse_declarations(" ; :red; color: ; width:10px;; junk ");
        assert_eq!(decls, vec![Declaration::new("width", "10px")]);
    }
}
