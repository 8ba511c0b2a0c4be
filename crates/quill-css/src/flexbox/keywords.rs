//! Flexbox keyword → auto-layout value tables.
//!
//! Auto layout has fewer states than flexbox, so several of these mappings
//! are many-to-one and lose information:
//!
//! - `row-reverse` / `column-reverse` map onto the same mode as `row` /
//!   `column`. Item order is not reversed.
//! - `space-around` and `space-evenly` map onto `SPACE_BETWEEN`.
//! - `baseline` maps onto `CENTER`; `stretch` onto `MIN`.
//!
//! The tables are public so callers can see exactly which keywords collapse.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Direction in which children are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// Children flow left to right.
    #[default]
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

/// Distribution of children along the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    /// Packed toward the start.
    #[default]
    Min,
    /// Packed toward the center.
    Center,
    /// Packed toward the end.
    Max,
    /// Free space distributed between children.
    SpaceBetween,
}

/// Placement of children across the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    /// Aligned to the start edge.
    #[default]
    Min,
    /// Centered.
    Center,
    /// Aligned to the end edge.
    Max,
}

/// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
pub const FLEX_DIRECTION_MODES: &[(&str, LayoutMode)] = &[
    ("row", LayoutMode::Horizontal),
    ("row-reverse", LayoutMode::Horizontal),
    ("column", LayoutMode::Vertical),
    ("column-reverse", LayoutMode::Vertical),
];

/// [§ 8.2 'justify-content'](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
pub const JUSTIFY_CONTENT_ALIGNMENTS: &[(&str, PrimaryAxisAlign)] = &[
    ("flex-start", PrimaryAxisAlign::Min),
    ("start", PrimaryAxisAlign::Min),
    ("center", PrimaryAxisAlign::Center),
    ("flex-end", PrimaryAxisAlign::Max),
    ("end", PrimaryAxisAlign::Max),
    ("space-between", PrimaryAxisAlign::SpaceBetween),
    ("space-around", PrimaryAxisAlign::SpaceBetween),
    ("space-evenly", PrimaryAxisAlign::SpaceBetween),
];

/// [§ 8.3 'align-items'](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
pub const ALIGN_ITEMS_ALIGNMENTS: &[(&str, CounterAxisAlign)] = &[
    ("flex-start", CounterAxisAlign::Min),
    ("start", CounterAxisAlign::Min),
    ("center", CounterAxisAlign::Center),
    ("baseline", CounterAxisAlign::Center),
    ("flex-end", CounterAxisAlign::Max),
    ("end", CounterAxisAlign::Max),
    ("stretch", CounterAxisAlign::Min),
];

/// Find `keyword` in a table, ASCII case-insensitively.
fn lookup<T: Copy>(table: &[(&str, T)], keyword: &str) -> Option<T> {
    let keyword = keyword.trim();
    table
        .iter()
        .find(|(k, _)| keyword.eq_ignore_ascii_case(k))
        .map(|&(_, v)| v)
}

/// Map a `flex-direction` value; absent or unknown is `HORIZONTAL`.
#[must_use]
pub fn layout_mode_for(direction: Option<&str>) -> LayoutMode {
    direction
        .and_then(|d| lookup(FLEX_DIRECTION_MODES, d))
        .unwrap_or_default()
}

/// Map a `justify-content` value; absent or unknown is `MIN`.
#[must_use]
pub fn primary_align_for(justify_content: Option<&str>) -> PrimaryAxisAlign {
    justify_content
        .and_then(|j| lookup(JUSTIFY_CONTENT_ALIGNMENTS, j))
        .unwrap_or_default()
}

/// Map an `align-items` value; absent or unknown is `MIN`.
#[must_use]
pub fn counter_align_for(align_items: Option<&str>) -> CounterAxisAlign {
    align_items
        .and_then(|a| lookup(ALIGN_ITEMS_ALIGNMENTS, a))
        .unwrap_or_default()
}
