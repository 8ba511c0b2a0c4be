//! Before/after comparison of two style models.

use serde::Serialize;

use crate::style::Styles;

/// Property-level difference between two style models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleComparison {
    /// Properties only in the after model.
    pub added: Vec<String>,
    /// Properties only in the before model.
    pub removed: Vec<String>,
    /// Properties in both with different values.
    pub changed: Vec<String>,
    /// Properties in both with the same value.
    pub unchanged: Vec<String>,
    /// `round((before - after) / before * 100)`; `0` for an empty before
    /// model. Negative when the after model grew.
    pub reduction_percentage: i64,
}

/// Compare two style models by property name.
#[must_use]
pub fn compare(before: &Styles, after: &Styles) -> StyleComparison {
    let mut comparison = StyleComparison {
        reduction_percentage: reduction_percentage(before.len(), after.len()),
        ..StyleComparison::default()
    };

    for (property, value) in before.iter() {
        match after.get(property) {
            None => comparison.removed.push(property.to_string()),
            Some(new) if new == value => comparison.unchanged.push(property.to_string()),
            Some(_) => comparison.changed.push(property.to_string()),
        }
    }
    comparison.added = after
        .properties()
        .filter(|property| !before.contains(property))
        .map(str::to_string)
        .collect();

    comparison
}

/// Rounded half up, matching how the percentage is displayed elsewhere.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn reduction_percentage(before: usize, after: usize) -> i64 {
    if before == 0 {
        return 0;
    }
    let ratio = (before as f64 - after as f64) / before as f64 * 100.0;
    (ratio + 0.5).floor() as i64
}
