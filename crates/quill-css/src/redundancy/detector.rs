//! Redundancy detection over a style model.
//!
//! Every detector is a pure function of its input. Absence of an issue is
//! the failure mode: anything the detector cannot prove safe is left alone.

use crate::style::{Declaration, Styles, parse_declarations};

use super::initial_values::{is_default_value, is_override_sensitive};
use super::issue::{IssueKind, IssueType, RedundancyIssue, Severity};
use super::shorthand::SHORTHAND_RULES;

/// Run default-value, shorthand-opportunity, and shorthand-conflict detection.
///
/// `tag_name` selects the default `display` for the element, if known.
#[must_use]
pub fn detect(styles: &Styles, tag_name: Option<&str>) -> Vec<RedundancyIssue> {
    let mut issues = detect_duplicates(styles);
    issues.extend(detect_default_values(styles, tag_name));
    issues.extend(detect_shorthand_opportunities(styles, tag_name));
    issues.extend(detect_shorthand_conflicts(styles));
    issues
}

/// Like [`detect`], but starts from declaration text so that literal repeats
/// of a property (which [`Styles::parse`] collapses) are reported too.
#[must_use]
pub fn detect_source(text: &str, tag_name: Option<&str>) -> Vec<RedundancyIssue> {
    let mut issues = detect_duplicate_declarations(&parse_declarations(text));
    issues.extend(detect(&Styles::parse(text), tag_name));
    issues
}

/// Literal duplicate detection on a parsed model.
///
/// Always empty: a property → value mapping cannot hold two entries for one
/// property. Use [`detect_duplicate_declarations`] on the declaration stream.
#[must_use]
pub fn detect_duplicates(_styles: &Styles) -> Vec<RedundancyIssue> {
    Vec::new()
}

/// Report every declaration that a later declaration of the same property
/// overrides.
#[must_use]
pub fn detect_duplicate_declarations(declarations: &[Declaration]) -> Vec<RedundancyIssue> {
    declarations
        .iter()
        .enumerate()
        .filter(|(i, decl)| {
            declarations[i + 1..]
                .iter()
                .any(|later| later.property == decl.property)
        })
        .map(|(_, decl)| RedundancyIssue {
            severity: Severity::Medium,
            description: format!(
                "`{}` is declared again later in the block; `{}` here is overridden",
                decl.property, decl.value
            ),
            property: decl.property.clone(),
            kind: IssueKind::DuplicateProperty {
                current_value: decl.value.clone(),
            },
        })
        .collect()
}

/// Report declarations equal to their property's initial value.
#[must_use]
pub fn detect_default_values(styles: &Styles, tag_name: Option<&str>) -> Vec<RedundancyIssue> {
    styles
        .iter()
        .filter(|(property, value)| is_default_value(property, value, tag_name))
        .map(|(property, value)| RedundancyIssue {
            severity: IssueType::DefaultValue.default_severity(),
            description: format!(
                "`{property}: {value}` restates the initial value and can be removed"
            ),
            property: property.to_string(),
            kind: IssueKind::DefaultValue {
                current_value: value.to_string(),
            },
        })
        .collect()
}

/// Report complete longhand sets that could be written as one shorthand.
///
/// A rule fires only when every longhand is present, the shorthand itself is
/// absent, no longhand carries `!important` or `var()`, and at least one
/// longhand is not already a default (otherwise removing the defaults is the
/// better fix and [`detect_default_values`] reports them).
#[must_use]
pub fn detect_shorthand_opportunities(
    styles: &Styles,
    tag_name: Option<&str>,
) -> Vec<RedundancyIssue> {
    let mut issues = Vec::new();

    for rule in SHORTHAND_RULES {
        if styles.contains(rule.shorthand) {
            continue;
        }
        let Some(values) = rule
            .longhands
            .iter()
            .map(|longhand| styles.get(longhand))
            .collect::<Option<Vec<&str>>>()
        else {
            continue;
        };
        if values.iter().any(|v| is_override_sensitive(v)) {
            continue;
        }
        let all_default = rule
            .longhands
            .iter()
            .zip(&values)
            .all(|(longhand, value)| is_default_value(longhand, value, tag_name));
        if all_default {
            continue;
        }
        let Some(shorthand_value) = rule.build_value(&values) else {
            continue;
        };

        let current_value = rule
            .longhands
            .iter()
            .zip(&values)
            .map(|(longhand, value)| format!("{longhand}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");

        issues.push(RedundancyIssue {
            severity: IssueType::ShorthandOpportunity.default_severity(),
            description: format!(
                "{} longhands can be combined into `{}`",
                rule.longhands.len(),
                rule.shorthand
            ),
            property: rule.shorthand.to_string(),
            kind: IssueKind::ShorthandOpportunity {
                longhands: rule.longhands.iter().map(ToString::to_string).collect(),
                current_value,
                suggested_value: format!("{}: {shorthand_value}", rule.shorthand),
            },
        });
    }

    issues
}

/// Report longhands declared alongside their shorthand.
///
/// The shorthand is treated as authoritative regardless of declaration
/// order, so each such longhand is reported as a high-severity duplicate.
#[must_use]
pub fn detect_shorthand_conflicts(styles: &Styles) -> Vec<RedundancyIssue> {
    let mut issues = Vec::new();

    for rule in SHORTHAND_RULES {
        if !styles.contains(rule.shorthand) {
            continue;
        }
        for longhand in rule.longhands {
            let Some(value) = styles.get(longhand) else {
                continue;
            };
            issues.push(RedundancyIssue {
                severity: IssueType::DuplicateProperty.default_severity(),
                description: format!(
                    "`{longhand}` is also set by `{}`; the shorthand is treated as authoritative",
                    rule.shorthand
                ),
                property: (*longhand).to_string(),
                kind: IssueKind::DuplicateProperty {
                    current_value: value.to_string(),
                },
            });
        }
    }

    issues
}
