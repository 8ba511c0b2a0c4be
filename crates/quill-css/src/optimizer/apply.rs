//! Applying proposals to a style model.

use std::collections::HashSet;

use quill_common::warning::warn_once;

use crate::redundancy::IssueType;
use crate::style::{Styles, parse_declarations};

use super::proposal::{OptimizationProposal, ProposalAction};

/// Apply one proposal, returning the edited styles.
///
/// - `review` proposals leave the styles unchanged.
/// - `remove` deletes the affected property.
/// - `merge`/`replace` for a shorthand opportunity parses the suggested
///   `shorthand: value` declaration, deletes every recorded longhand, and
///   sets the shorthand.
/// - `replace` for any other issue sets the property to the after-value;
///   an empty after-value leaves the styles unchanged.
#[must_use]
pub fn apply_proposal(styles: &Styles, proposal: &OptimizationProposal) -> Styles {
    if proposal.action == ProposalAction::Review {
        return styles.clone();
    }

    #[cfg(feature = "optimizer-trace")]
    eprintln!(
        "[Quill Optimizer] applying {} ({} {})",
        proposal.id,
        proposal.action,
        proposal.property()
    );

    match proposal.action {
        ProposalAction::Remove => styles.remove(proposal.property()),
        ProposalAction::Merge | ProposalAction::Replace
            if proposal.issue_type() == IssueType::ShorthandOpportunity =>
        {
            apply_shorthand(styles, proposal)
        }
        ProposalAction::Merge | ProposalAction::Replace | ProposalAction::Review => {
            apply_replacement(styles, proposal)
        }
    }
}

/// An empty replacement carries no value to write, so the styles are kept.
fn apply_replacement(styles: &Styles, proposal: &OptimizationProposal) -> Styles {
    let value = replacement_value(proposal);
    if value.is_empty() {
        warn_once(
            "Optimizer",
            &format!(
                "{} replaces '{}' with an empty value; left unchanged",
                proposal.id,
                proposal.property()
            ),
        );
        return styles.clone();
    }
    styles.set(proposal.property(), value)
}

/// Swap the recorded longhands for the suggested shorthand declaration. The
/// issue's suggestion is preferred over the proposal's after-value.
fn apply_shorthand(styles: &Styles, proposal: &OptimizationProposal) -> Styles {
    let suggestion = proposal
        .issue
        .suggested_value()
        .unwrap_or(proposal.after_value.as_str());

    let Some(declaration) = parse_declarations(suggestion).into_iter().next() else {
        warn_once(
            "Optimizer",
            &format!(
                "cannot parse suggested shorthand '{suggestion}' of {}; left unchanged",
                proposal.id
            ),
        );
        return styles.clone();
    };

    proposal
        .issue
        .longhands()
        .iter()
        .fold(styles.clone(), |acc, longhand| acc.remove(longhand))
        .set(&declaration.property, &declaration.value)
}

/// Accepts either a bare value or a `property: value` declaration.
fn replacement_value(proposal: &OptimizationProposal) -> &str {
    let after = proposal.after_value.trim();
    match after.split_once(':') {
        Some((property, value)) if property.trim().eq_ignore_ascii_case(proposal.property()) => {
            value.trim().trim_end_matches(';').trim_end()
        }
        _ => after,
    }
}

/// Apply every proposal in order.
#[must_use]
pub fn apply_all(styles: &Styles, proposals: &[OptimizationProposal]) -> Styles {
    proposals
        .iter()
        .fold(styles.clone(), |acc, proposal| apply_proposal(&acc, proposal))
}

/// Apply, in order, only the proposals whose id is in `approved_ids`.
#[allow(clippy::implicit_hasher)]
#[must_use]
pub fn apply_approved(
    styles: &Styles,
    proposals: &[OptimizationProposal],
    approved_ids: &HashSet<String>,
) -> Styles {
    proposals
        .iter()
        .filter(|proposal| approved_ids.contains(&proposal.id))
        .fold(styles.clone(), |acc, proposal| apply_proposal(&acc, proposal))
}
