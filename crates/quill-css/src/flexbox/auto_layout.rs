//! Translation of a flex container's declared intent into auto layout.
//!
//! [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! Only the container's own declarations are read. Nothing is laid out; the
//! result describes the constraints a presentation layer should apply.

use serde::Serialize;

use crate::style::Styles;
use crate::values::{BoxSides, ResolutionContext, parse_px, split_components};

use super::keywords::{
    CounterAxisAlign, LayoutMode, PrimaryAxisAlign, counter_align_for, layout_mode_for,
    primary_align_for,
};

/// [§ 3 Flex Layout Box Model](https://www.w3.org/TR/css-flexbox-1/#box-model)
///
/// "A flex container is the box generated by an element with a computed
/// display of flex or inline-flex."
///
/// A trailing `!important` does not change the display keyword.
#[must_use]
pub fn is_flex_container(styles: &Styles) -> bool {
    styles.display().map(strip_important).is_some_and(|display| {
        display.eq_ignore_ascii_case("flex") || display.eq_ignore_ascii_case("inline-flex")
    })
}

/// Drop a trailing `!important` flag (case-insensitive, any spacing before it).
fn strip_important(value: &str) -> &str {
    let value = value.trim_end();
    let Some(bang) = value.rfind('!') else {
        return value;
    };
    if value[bang + 1..].trim_start().eq_ignore_ascii_case("important") {
        value[..bang].trim_end()
    } else {
        value
    }
}

/// Row and column gutters in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Gaps {
    /// Space between rows (`row-gap`).
    pub row: f64,
    /// Space between columns (`column-gap`).
    pub column: f64,
}

/// [§ 8.1 Row and Column Gutters](https://www.w3.org/TR/css-align-3/#gaps)
///
/// "gap: <'row-gap'> <'column-gap'>? ... If <'column-gap'> is omitted, it's
/// set to the same value as <'row-gap'>."
///
/// `row-gap` and `column-gap` each take precedence over the shorthand.
/// Values that do not resolve to pixels count as `0`.
#[must_use]
pub fn resolve_gaps(styles: &Styles, ctx: &ResolutionContext) -> Gaps {
    let px = |raw: &str| parse_px(raw, ctx).unwrap_or(0.0);

    let (mut row, mut column) = match styles.get("gap").map(split_components).as_deref() {
        Some(&[both]) => (px(both), px(both)),
        Some(&[first, second, ..]) => (px(first), px(second)),
        _ => (0.0, 0.0),
    };

    if let Some(raw) = styles.get("row-gap") {
        row = px(raw);
    }
    if let Some(raw) = styles.get("column-gap") {
        column = px(raw);
    }
    Gaps { row, column }
}

/// A directional auto-layout configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayoutProperties {
    /// Stacking direction, from `flex-direction`.
    pub layout_mode: LayoutMode,
    /// Main-axis distribution, from `justify-content`.
    pub primary_axis_align_items: PrimaryAxisAlign,
    /// Cross-axis placement, from `align-items`.
    pub counter_axis_align_items: CounterAxisAlign,
    /// Top padding in pixels.
    pub padding_top: f64,
    /// Right padding in pixels.
    pub padding_right: f64,
    /// Bottom padding in pixels.
    pub padding_bottom: f64,
    /// Left padding in pixels.
    pub padding_left: f64,
    /// Gap between consecutive children along the stacking axis.
    pub item_spacing: f64,
}

impl AutoLayoutProperties {
    /// Translate a flex container's styles.
    ///
    /// Returns `None` when the element is not a flex container: no auto
    /// layout applies to it.
    #[must_use]
    pub fn from_styles(styles: &Styles, ctx: &ResolutionContext) -> Option<Self> {
        if !is_flex_container(styles) {
            return None;
        }

        let layout_mode = layout_mode_for(styles.get("flex-direction"));
        let gaps = resolve_gaps(styles, ctx);
        // The stacking axis of a row is horizontal, so consecutive children
        // are separated by the column gutter.
        let item_spacing = match layout_mode {
            LayoutMode::Horizontal => gaps.column,
            LayoutMode::Vertical => gaps.row,
        };

        Some(
            Self {
                layout_mode,
                primary_axis_align_items: primary_align_for(styles.get("justify-content")),
                counter_axis_align_items: counter_align_for(styles.get("align-items")),
                item_spacing,
                ..Self::default()
            }
            .with_padding(styles.padding(ctx).unwrap_or_default()),
        )
    }

    /// Padding as four sides.
    #[must_use]
    pub const fn padding(&self) -> BoxSides {
        BoxSides {
            top: self.padding_top,
            right: self.padding_right,
            bottom: self.padding_bottom,
            left: self.padding_left,
        }
    }

    /// Copy with a different layout mode.
    #[must_use]
    pub const fn with_layout_mode(self, layout_mode: LayoutMode) -> Self {
        Self {
            layout_mode,
            ..self
        }
    }

    /// Copy with a different main-axis alignment.
    #[must_use]
    pub const fn with_primary_axis_align(self, align: PrimaryAxisAlign) -> Self {
        Self {
            primary_axis_align_items: align,
            ..self
        }
    }

    /// Copy with a different cross-axis alignment.
    #[must_use]
    pub const fn with_counter_axis_align(self, align: CounterAxisAlign) -> Self {
        Self {
            counter_axis_align_items: align,
            ..self
        }
    }

    /// Copy with a different item spacing.
    #[must_use]
    pub const fn with_item_spacing(self, item_spacing: f64) -> Self {
        Self {
            item_spacing,
            ..self
        }
    }

    /// Copy with different padding on all four sides.
    #[must_use]
    pub const fn with_padding(self, padding: BoxSides) -> Self {
        Self {
            padding_top: padding.top,
            padding_right: padding.right,
            padding_bottom: padding.bottom,
            padding_left: padding.left,
            ..self
        }
    }
}
