//! Whitespace tokenization of raw declaration values.
//!
//! [§ 2.2 Component value combinators](https://www.w3.org/TR/css-values-4/#component-combinators)
//!
//! "Juxtaposing components means that all of them must occur, in the given
//! order" - components of a multi-value property are separated by whitespace.
//! Whitespace inside a function (`rgb(0, 0, 0)`, `calc(100% - 8px)`) does not
//! separate components, so splitting tracks parenthesis depth.

/// [§ 4.2 Whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
///
/// "newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
const fn is_css_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{000C}')
}

/// Split a raw value into top-level whitespace-separated components.
///
/// Unbalanced closing parentheses are treated as ordinary characters.
#[must_use]
pub fn split_components(raw: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (i, c) in raw.char_indices() {
        if depth == 0 && is_css_whitespace(c) {
            if let Some(s) = start.take() {
                components.push(&raw[s..i]);
            }
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    if let Some(s) = start {
        components.push(&raw[s..]);
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_components("  1px   2px\t3px "), vec!["1px", "2px", "3px"]);
    }

    #[test]
    fn test_split_keeps_function_whole() {
        assert_eq!(
            split_components("1px solid rgb(0, 128, 255)"),
            vec!["1px", "solid", "rgb(0, 128, 255)"]
        );
        assert_eq!(
            split_components("calc(100% - 10px) 4px"),
            vec!["calc(100% - 10px)", "4px"]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_components("   ").is_empty());
    }
}
