//! Optimization proposals derived from redundancy issues.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::redundancy::{IssueKind, IssueType, RedundancyIssue};

/// Confidence for removing a declaration that restates its initial value.
pub const DEFAULT_VALUE_CONFIDENCE: f64 = 0.9;

/// Confidence for collapsing longhands into a shorthand. Safe, but the
/// rewritten text differs from what the author wrote.
pub const SHORTHAND_CONFIDENCE: f64 = 0.8;

/// Confidence attached to duplicate-property proposals, which are only ever
/// flagged for review.
pub const DUPLICATE_REVIEW_CONFIDENCE: f64 = 0.5;

/// What applying a proposal does.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ProposalAction {
    /// Delete the affected declaration.
    Remove,
    /// Replace the affected declaration(s) with the proposal's after-value.
    Replace,
    /// Merge longhands into their shorthand.
    Merge,
    /// Needs a human decision; never applied automatically.
    Review,
}

/// Where a proposal came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ProposalSource {
    /// Generated from the local redundancy detector.
    Local,
    /// Supplied by an external suggestion service.
    Ai,
}

/// A concrete, confidence-scored edit derived from one issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationProposal {
    /// Unique within the process.
    pub id: String,
    /// The issue this proposal resolves.
    pub issue: RedundancyIssue,
    /// What applying it does.
    pub action: ProposalAction,
    /// The declaration text before the edit.
    pub before_value: String,
    /// The declaration text after the edit; empty for removals.
    pub after_value: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Origin of the proposal.
    pub source: ProposalSource,
    /// Location of the element in the host document, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_path: Option<String>,
}

static NEXT_PROPOSAL_ID: AtomicU64 = AtomicU64::new(1);

/// A fresh, process-unique proposal id.
#[must_use]
pub fn next_proposal_id() -> String {
    format!("proposal-{}", NEXT_PROPOSAL_ID.fetch_add(1, Ordering::Relaxed))
}

impl OptimizationProposal {
    /// Build the local proposal for an issue.
    ///
    /// | issue type            | action | confidence |
    /// |-----------------------|--------|------------|
    /// | default-value         | remove | 0.9        |
    /// | shorthand-opportunity | merge  | 0.8        |
    /// | duplicate-property    | review | 0.5        |
    #[must_use]
    pub fn from_issue(issue: &RedundancyIssue) -> Self {
        let (action, confidence, before_value, after_value) = match &issue.kind {
            IssueKind::DefaultValue { current_value } => (
                ProposalAction::Remove,
                DEFAULT_VALUE_CONFIDENCE,
                format!("{}: {current_value}", issue.property),
                String::new(),
            ),
            IssueKind::ShorthandOpportunity {
                current_value,
                suggested_value,
                ..
            } => (
                ProposalAction::Merge,
                SHORTHAND_CONFIDENCE,
                current_value.clone(),
                suggested_value.clone(),
            ),
            IssueKind::DuplicateProperty { current_value } => {
                let declaration = format!("{}: {current_value}", issue.property);
                (
                    ProposalAction::Review,
                    DUPLICATE_REVIEW_CONFIDENCE,
                    declaration.clone(),
                    declaration,
                )
            }
        };

        Self {
            id: next_proposal_id(),
            issue: issue.clone(),
            action,
            before_value,
            after_value,
            confidence,
            source: ProposalSource::Local,
            element_path: None,
        }
    }

    /// The property this proposal affects.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.issue.property
    }

    /// The category of the underlying issue.
    #[must_use]
    pub const fn issue_type(&self) -> IssueType {
        self.issue.issue_type()
    }

    /// Check if the proposal may be applied without human review.
    #[must_use]
    pub fn is_auto_applicable(&self) -> bool {
        self.action != ProposalAction::Review
    }

    /// Copy tagged with an element path.
    #[must_use]
    pub fn with_element_path(mut self, path: impl Into<String>) -> Self {
        self.element_path = Some(path.into());
        self
    }
}

/// Generate one local proposal per issue, in issue order.
#[must_use]
pub fn generate_proposals(issues: &[RedundancyIssue]) -> Vec<OptimizationProposal> {
    issues.iter().map(OptimizationProposal::from_issue).collect()
}

/// Combine local and external proposals, keeping one per affected property.
///
/// When both sources propose for the same property, the higher confidence
/// wins; on a tie the local proposal wins. Later proposals from the same
/// source for an already-seen property are dropped. Output order is first
/// appearance, local proposals first.
#[must_use]
pub fn merge_proposals(
    local: &[OptimizationProposal],
    ai: &[OptimizationProposal],
) -> Vec<OptimizationProposal> {
    let mut merged: Vec<OptimizationProposal> = Vec::with_capacity(local.len() + ai.len());

    for proposal in local.iter().chain(ai) {
        match merged
            .iter_mut()
            .find(|kept| kept.property() == proposal.property())
        {
            Some(kept) => {
                if proposal.source != kept.source && proposal.confidence > kept.confidence {
                    *kept = proposal.clone();
                }
            }
            None => merged.push(proposal.clone()),
        }
    }

    merged
}
