//! Redundancy issue types.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How much a redundancy matters.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Harmless noise.
    Low,
    /// Worth cleaning up.
    Medium,
    /// Likely to confuse readers or produce surprising results.
    High,
}

/// The category of an issue, without its payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    /// A declaration shadowed by another one in the same block.
    DuplicateProperty,
    /// A declaration equal to the property's initial value.
    DefaultValue,
    /// Longhands that could be written as one shorthand.
    ShorthandOpportunity,
}

impl IssueType {
    /// The severity issues of this type are reported with by default.
    #[must_use]
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::DuplicateProperty => Severity::High,
            Self::DefaultValue => Severity::Low,
            Self::ShorthandOpportunity => Severity::Medium,
        }
    }
}

/// Type-specific issue payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum IssueKind {
    /// The reported declaration is overridden or shadowed.
    DuplicateProperty {
        /// Value of the shadowed declaration.
        current_value: String,
    },
    /// The reported declaration restates the initial value.
    DefaultValue {
        /// The declared value.
        current_value: String,
    },
    /// The reported shorthand can replace its longhands.
    ShorthandOpportunity {
        /// Longhand properties the shorthand replaces.
        longhands: Vec<String>,
        /// The longhand declarations as currently written.
        current_value: String,
        /// The replacement declaration, as `shorthand: value`.
        suggested_value: String,
    },
}

/// A detected opportunity to remove or consolidate a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedundancyIssue {
    /// Payload, tagged by issue type.
    #[serde(flatten)]
    pub kind: IssueKind,
    /// How much the issue matters.
    pub severity: Severity,
    /// The affected property. For shorthand opportunities, the shorthand.
    pub property: String,
    /// Human-readable explanation.
    pub description: String,
}

impl RedundancyIssue {
    /// The issue's category.
    #[must_use]
    pub const fn issue_type(&self) -> IssueType {
        match self.kind {
            IssueKind::DuplicateProperty { .. } => IssueType::DuplicateProperty,
            IssueKind::DefaultValue { .. } => IssueType::DefaultValue,
            IssueKind::ShorthandOpportunity { .. } => IssueType::ShorthandOpportunity,
        }
    }

    /// The value currently declared for the affected property or properties.
    #[must_use]
    pub fn current_value(&self) -> &str {
        match &self.kind {
            IssueKind::DuplicateProperty { current_value }
            | IssueKind::DefaultValue { current_value }
            | IssueKind::ShorthandOpportunity { current_value, .. } => current_value,
        }
    }

    /// The suggested `shorthand: value` declaration, for shorthand opportunities.
    #[must_use]
    pub fn suggested_value(&self) -> Option<&str> {
        match &self.kind {
            IssueKind::ShorthandOpportunity {
                suggested_value, ..
            } => Some(suggested_value),
            _ => None,
        }
    }

    /// Longhands replaced by a shorthand opportunity; empty otherwise.
    #[must_use]
    pub fn longhands(&self) -> &[String] {
        match &self.kind {
            IssueKind::ShorthandOpportunity { longhands, .. } => longhands,
            _ => &[],
        }
    }
}
