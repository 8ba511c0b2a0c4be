//! Ingestion of externally generated (AI-sourced) proposals.
//!
//! The payload is JSON: either an array of proposal records or an object
//! carrying one under `proposals`. A record needs at least `property`,
//! `issueType` and `confidence`; everything else is filled in from the
//! issue type the same way local proposals are.
//!
//! ```json
//! {
//!   "proposals": [
//!     { "property": "margin", "issueType": "shorthand-opportunity",
//!       "confidence": 0.85, "afterValue": "margin: 8px 16px",
//!       "longhands": ["margin-top", "margin-right", "margin-bottom", "margin-left"] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use quill_common::warning::warn_once;

use crate::redundancy::{IssueKind, IssueType, RedundancyIssue, Severity};

use super::proposal::{
    OptimizationProposal, ProposalAction, ProposalSource, next_proposal_id,
};

/// Failure to read an external proposal payload as a whole.
#[derive(Debug, Error)]
pub enum ProposalSourceError {
    /// The payload is not valid JSON.
    #[error("proposal payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is JSON of the wrong shape.
    #[error("unexpected proposal payload shape: {0}")]
    UnexpectedShape(&'static str),
}

/// One external proposal as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProposalRecord {
    property: String,
    issue_type: IssueType,
    #[serde(default)]
    action: Option<ProposalAction>,
    confidence: f64,
    #[serde(default)]
    before_value: Option<String>,
    #[serde(default)]
    after_value: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    longhands: Vec<String>,
    #[serde(default)]
    element_path: Option<String>,
}

impl ProposalRecord {
    fn into_proposal(self) -> OptimizationProposal {
        let before_value = self.before_value.unwrap_or_default();
        let after_value = self.after_value.unwrap_or_default();

        let (kind, default_action) = match self.issue_type {
            IssueType::DefaultValue => (
                IssueKind::DefaultValue {
                    current_value: before_value.clone(),
                },
                ProposalAction::Remove,
            ),
            IssueType::ShorthandOpportunity => (
                IssueKind::ShorthandOpportunity {
                    longhands: self.longhands,
                    current_value: before_value.clone(),
                    suggested_value: after_value.clone(),
                },
                ProposalAction::Merge,
            ),
            IssueType::DuplicateProperty => (
                IssueKind::DuplicateProperty {
                    current_value: before_value.clone(),
                },
                ProposalAction::Review,
            ),
        };

        let issue = RedundancyIssue {
            kind,
            severity: self
                .severity
                .unwrap_or_else(|| self.issue_type.default_severity()),
            description: self.description.unwrap_or_default(),
            property: self.property,
        };

        OptimizationProposal {
            id: next_proposal_id(),
            issue,
            action: self.action.unwrap_or(default_action),
            before_value,
            after_value,
            confidence: self.confidence.clamp(0.0, 1.0),
            source: ProposalSource::Ai,
            element_path: self.element_path,
        }
    }
}

/// Parse an external proposal payload.
///
/// Records that do not match the expected shape are dropped with a warning;
/// only a payload that is not JSON, or whose top level is neither an array
/// nor an object with a `proposals` array, is an error.
///
/// # Errors
///
/// Returns [`ProposalSourceError::Json`] for malformed JSON and
/// [`ProposalSourceError::UnexpectedShape`] for a wrong top-level shape.
pub fn proposals_from_json(text: &str) -> Result<Vec<OptimizationProposal>, ProposalSourceError> {
    let records = match serde_json::from_str::<Value>(text)? {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("proposals") {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(ProposalSourceError::UnexpectedShape(
                    "`proposals` is not an array",
                ));
            }
            None => {
                return Err(ProposalSourceError::UnexpectedShape(
                    "object has no `proposals` field",
                ));
            }
        },
        _ => {
            return Err(ProposalSourceError::UnexpectedShape(
                "expected an array or an object",
            ));
        }
    };

    let proposals = records
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, record)| match serde_json::from_value::<ProposalRecord>(record) {
                Ok(record) => Some(record.into_proposal()),
                Err(err) => {
                    warn_once(
                        "Optimizer",
                        &format!("dropping external proposal #{index}: {err}"),
                    );
                    None
                }
            },
        )
        .collect();

    Ok(proposals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_issue_type() {
        let proposals = proposals_from_json(
            r#"[{"property": "color", "issueType": "duplicate-property", "confidence": 0.7}]"#,
        )
        .unwrap();
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].action, ProposalAction::Review);
        assert_eq!(proposals[0].issue.severity, Severity::High);
        assert_eq!(proposals[0].source, ProposalSource::Ai);
    }

    #[test]
    fn test_malformed_record_is_dropped() {
        let proposals = proposals_from_json(
            r#"[{"property": "color"}, {"property": "top", "issueType": "default-value", "confidence": 3}]"#,
        )
        .unwrap();
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].property(), "top");
        assert!((proposals[0].confidence - 1.0).abs() < f64::EPSILON);
    }
}
