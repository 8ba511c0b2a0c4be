//! End-to-end optimization: generate, apply, summarize.

use serde::Serialize;

use crate::redundancy::{IssueType, RedundancyIssue};
use crate::style::Styles;

use super::apply::apply_all;
use super::compare::reduction_percentage;
use super::proposal::{OptimizationProposal, generate_proposals};

/// Counts describing one [`optimize`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    /// All issues passed in.
    pub total_issues: usize,
    /// Issues of type `default-value`.
    pub default_values: usize,
    /// Issues of type `shorthand-opportunity`.
    pub shorthand_opportunities: usize,
    /// Issues of type `duplicate-property`.
    pub duplicate_properties: usize,
    /// Proposals that were auto-applicable.
    pub applied: usize,
    /// Declaration count reduction, in percent.
    pub reduction_percentage: i64,
}

/// Optimized styles together with the proposals that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Styles after every auto-applicable proposal.
    pub styles: Styles,
    /// One proposal per issue, including those left for review.
    pub proposals: Vec<OptimizationProposal>,
    /// Per-type counts and the overall reduction.
    pub summary: OptimizationSummary,
}

/// Generate proposals for `issues`, apply them all, and summarize.
///
/// `review` proposals are returned but not applied.
#[must_use]
pub fn optimize(styles: &Styles, issues: &[RedundancyIssue]) -> OptimizationResult {
    let proposals = generate_proposals(issues);
    let optimized = apply_all(styles, &proposals);

    let count = |issue_type: IssueType| {
        issues
            .iter()
            .filter(|issue| issue.issue_type() == issue_type)
            .count()
    };
    let summary = OptimizationSummary {
        total_issues: issues.len(),
        default_values: count(IssueType::DefaultValue),
        shorthand_opportunities: count(IssueType::ShorthandOpportunity),
        duplicate_properties: count(IssueType::DuplicateProperty),
        applied: proposals.iter().filter(|p| p.is_auto_applicable()).count(),
        reduction_percentage: reduction_percentage(styles.len(), optimized.len()),
    };

    OptimizationResult {
        styles: optimized,
        proposals,
        summary,
    }
}
