//! Shorthand ↔ longhand relationships.
//!
//! [§ 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow authors
//! to specify the values of several properties with a single property."

/// How a shorthand's value is assembled from its longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShorthandForm {
    /// Four sides in `top, right, bottom, left` order, minimized.
    BoxSides,
    /// Longhand values joined by a space, in declared longhand order.
    Concatenated,
}

/// A shorthand and the longhands it expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShorthandRule {
    /// The shorthand property name.
    pub shorthand: &'static str,
    /// Its longhands, in the order their values appear in the shorthand.
    pub longhands: &'static [&'static str],
    /// How the value is assembled.
    pub form: ShorthandForm,
}

/// Shorthands considered for consolidation and conflict reporting.
pub const SHORTHAND_RULES: &[ShorthandRule] = &[
    ShorthandRule {
        shorthand: "margin",
        longhands: &["margin-top", "margin-right", "margin-bottom", "margin-left"],
        form: ShorthandForm::BoxSides,
    },
    ShorthandRule {
        shorthand: "padding",
        longhands: &["padding-top", "padding-right", "padding-bottom", "padding-left"],
        form: ShorthandForm::BoxSides,
    },
    ShorthandRule {
        shorthand: "border",
        longhands: &["border-width", "border-style", "border-color"],
        form: ShorthandForm::Concatenated,
    },
];

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// The shortest box shorthand that expands back to `[top, right, bottom, left]`:
/// - all four equal → one value
/// - top = bottom and right = left → two values
/// - right = left → three values
/// - otherwise → four values
#[must_use]
pub fn build_box_shorthand(sides: [&str; 4]) -> String {
    let [top, right, bottom, left] = sides.map(str::trim);
    if top == right && top == bottom && top == left {
        top.to_string()
    } else if top == bottom && right == left {
        format!("{top} {right}")
    } else if right == left {
        format!("{top} {right} {bottom}")
    } else {
        format!("{top} {right} {bottom} {left}")
    }
}

impl ShorthandRule {
    /// Build the shorthand value from longhand values given in
    /// [`ShorthandRule::longhands`] order. `None` if the count is wrong.
    #[must_use]
    pub fn build_value(&self, values: &[&str]) -> Option<String> {
        if values.len() != self.longhands.len() {
            return None;
        }
        match self.form {
            ShorthandForm::BoxSides => {
                let sides: [&str; 4] = values.try_into().ok()?;
                Some(build_box_shorthand(sides))
            }
            ShorthandForm::Concatenated => Some(
                values
                    .iter()
                    .map(|v| v.trim())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }

    /// Find the rule a longhand belongs to.
    #[must_use]
    pub fn for_longhand(property: &str) -> Option<&'static Self> {
        SHORTHAND_RULES
            .iter()
            .find(|rule| rule.longhands.iter().any(|l| *l == property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_minimization() {
        assert_eq!(build_box_shorthand(["1px", "1px", "1px", "1px"]), "1px");
        assert_eq!(build_box_shorthand(["1px", "2px", "1px", "2px"]), "1px 2px");
        assert_eq!(build_box_shorthand(["1px", "2px", "3px", "2px"]), "1px 2px 3px");
        assert_eq!(build_box_shorthand(["1px", "2px", "3px", "4px"]), "1px 2px 3px 4px");
        // top = bottom but right != left still needs all four.
        assert_eq!(build_box_shorthand(["1px", "2px", "1px", "4px"]), "1px 2px 1px 4px");
    }

    #[test]
    fn test_build_value_checks_arity() {
        let border = ShorthandRule::for_longhand("border-style").unwrap();
        assert_eq!(
            border.build_value(&["2px", "solid", "red"]),
            Some("2px solid red".to_string())
        );
        assert_eq!(border.build_value(&["2px", "solid"]), None);
    }
}
