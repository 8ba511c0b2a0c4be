//! Integration tests for proposal generation, merging, and application.

use std::collections::HashSet;

use quill_css::optimizer::{
    OptimizationProposal, ProposalAction, ProposalSource, ProposalSourceError, apply_all,
    apply_approved, apply_proposal, compare, generate_proposals, merge_proposals, optimize,
    proposals_from_json,
};
use quill_css::redundancy::{IssueType, detect};
use quill_css::style::Styles;

const LONGHAND_MARGINS: &str =
    "margin-top:10px;margin-right:10px;margin-bottom:10px;margin-left:10px";

fn proposals_for(css: &str) -> (Styles, Vec<OptimizationProposal>) {
    let styles = Styles::parse(css);
    let proposals = generate_proposals(&detect(&styles, None));
    (styles, proposals)
}

fn with_source(
    proposal: &OptimizationProposal,
    source: ProposalSource,
    confidence: f64,
) -> OptimizationProposal {
    OptimizationProposal {
        source,
        confidence,
        ..proposal.clone()
    }
}

// --- Generation ---

#[test]
fn test_action_and_confidence_by_issue_type() {
    let (_, defaults) = proposals_for("position: static");
    assert_eq!(defaults[0].action, ProposalAction::Remove);
    assert!((defaults[0].confidence - 0.9).abs() < f64::EPSILON);
    assert_eq!(defaults[0].before_value, "position: static");
    assert_eq!(defaults[0].after_value, "");

    let (_, shorthand) = proposals_for(LONGHAND_MARGINS);
    assert_eq!(shorthand[0].action, ProposalAction::Merge);
    assert!((shorthand[0].confidence - 0.8).abs() < f64::EPSILON);
    assert_eq!(shorthand[0].after_value, "margin: 10px");

    let (_, conflict) = proposals_for("margin: 10px; margin-top: 20px");
    assert_eq!(conflict[0].action, ProposalAction::Review);
    assert!((conflict[0].confidence - 0.5).abs() < f64::EPSILON);
    assert!(!conflict[0].is_auto_applicable());
    assert_eq!(conflict[0].issue_type(), IssueType::DuplicateProperty);
}

#[test]
fn test_proposal_ids_are_unique() {
    let (_, first) = proposals_for("position: static; visibility: visible");
    let (_, second) = proposals_for("position: static");
    let ids: HashSet<&str> = first
        .iter()
        .chain(&second)
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids.len(), 3);
}

// --- Merging ---

#[test]
fn test_merge_prefers_higher_confidence() {
    let (_, local) = proposals_for("position: static");
    let ai = vec![with_source(&local[0], ProposalSource::Ai, 0.95)];
    let merged = merge_proposals(&local, &ai);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, ProposalSource::Ai);
}

#[test]
fn test_merge_tie_keeps_local() {
    let (_, local) = proposals_for("position: static");
    let ai = vec![with_source(&local[0], ProposalSource::Ai, local[0].confidence)];
    let merged = merge_proposals(&local, &ai);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, ProposalSource::Local);
}

#[test]
fn test_merge_keeps_distinct_properties() {
    let (_, local) = proposals_for("position: static");
    let (_, other) = proposals_for("visibility: visible");
    let ai = vec![with_source(&other[0], ProposalSource::Ai, 0.1)];
    let merged = merge_proposals(&local, &ai);
    let properties: Vec<&str> = merged.iter().map(OptimizationProposal::property).collect();
    assert_eq!(properties, vec!["position", "visibility"]);
}

// --- Application ---

#[test]
fn test_apply_remove() {
    let (styles, proposals) = proposals_for("position: static; color: red");
    let applied = apply_proposal(&styles, &proposals[0]);
    assert_eq!(applied, Styles::parse("color: red"));
    // The input is untouched.
    assert!(styles.contains("position"));
}

#[test]
fn test_apply_shorthand_merge() {
    let (styles, proposals) = proposals_for(&format!("{LONGHAND_MARGINS}; color: red"));
    let applied = apply_all(&styles, &proposals);
    assert_eq!(applied, Styles::parse("color: red; margin: 10px"));
}

#[test]
fn test_apply_review_is_noop() {
    let (styles, proposals) = proposals_for("margin: 10px; margin-top: 20px");
    assert_eq!(apply_all(&styles, &proposals), styles);
}

#[test]
fn test_apply_replace() {
    let (styles, proposals) = proposals_for("position: static");
    let replace = OptimizationProposal {
        action: ProposalAction::Replace,
        after_value: "position: relative".to_string(),
        ..proposals[0].clone()
    };
    assert_eq!(
        apply_proposal(&styles, &replace).get("position"),
        Some("relative")
    );
}

#[test]
fn test_apply_replace_with_empty_value_keeps_styles() {
    let styles = Styles::parse("position: static; color: red");
    let proposals = proposals_from_json(
        r#"[{"property": "position", "issueType": "default-value", "action": "replace",
             "confidence": 0.9}]"#,
    )
    .unwrap();
    let applied = apply_proposal(&styles, &proposals[0]);
    assert_eq!(applied, styles);
    assert_eq!(Styles::parse(&applied.to_string()), applied);

    let declaration_only = OptimizationProposal {
        after_value: "position:".to_string(),
        ..proposals[0].clone()
    };
    assert_eq!(apply_proposal(&styles, &declaration_only), styles);
}

#[test]
fn test_apply_approved_only() {
    let (styles, proposals) =
        proposals_for("position: static; visibility: visible; color: red");
    let approved: HashSet<String> = [proposals[1].id.clone()].into_iter().collect();
    let applied = apply_approved(&styles, &proposals, &approved);
    assert_eq!(applied, Styles::parse("position: static; color: red"));
    assert_eq!(apply_approved(&styles, &proposals, &HashSet::new()), styles);
}

// --- Comparison ---

#[test]
fn test_compare() {
    let before = Styles::parse("a: 1; b: 2; c: 3; d: 4");
    let after = Styles::parse("a: 1; b: 20; e: 5");
    let comparison = compare(&before, &after);
    assert_eq!(comparison.added, vec!["e"]);
    assert_eq!(comparison.removed, vec!["c", "d"]);
    assert_eq!(comparison.changed, vec!["b"]);
    assert_eq!(comparison.unchanged, vec!["a"]);
    assert_eq!(comparison.reduction_percentage, 25);
}

#[test]
fn test_compare_empty_before() {
    let comparison = compare(&Styles::new(), &Styles::parse("a: 1"));
    assert_eq!(comparison.reduction_percentage, 0);
    assert_eq!(comparison.added, vec!["a"]);
}

// --- End to end ---

#[test]
fn test_optimize_summary() {
    let styles = Styles::parse(&format!(
        "{LONGHAND_MARGINS}; position: static; padding: 4px; padding-top: 8px"
    ));
    let issues = detect(&styles, None);
    let result = optimize(&styles, &issues);

    assert_eq!(result.summary.total_issues, 3);
    assert_eq!(result.summary.default_values, 1);
    assert_eq!(result.summary.shorthand_opportunities, 1);
    assert_eq!(result.summary.duplicate_properties, 1);
    assert_eq!(result.summary.applied, 2);
    // 7 declarations down to 3.
    assert_eq!(result.summary.reduction_percentage, 57);
    assert_eq!(
        result.styles,
        Styles::parse("margin: 10px; padding: 4px; padding-top: 8px")
    );
    assert_eq!(result.proposals.len(), 3);
}

#[test]
fn test_optimize_is_stable_on_clean_styles() {
    let styles = Styles::parse("color: red; width: 10px");
    let result = optimize(&styles, &detect(&styles, None));
    assert_eq!(result.styles, styles);
    assert_eq!(result.summary.total_issues, 0);
    assert_eq!(result.summary.reduction_percentage, 0);
}

// --- External proposals ---

#[test]
fn test_external_proposals_from_object() {
    let proposals = proposals_from_json(
        r#"{
            "proposals": [
                {
                    "property": "margin",
                    "issueType": "shorthand-opportunity",
                    "confidence": 0.85,
                    "afterValue": "margin: 10px",
                    "longhands": ["margin-top", "margin-right", "margin-bottom", "margin-left"],
                    "elementPath": "body > div:nth-child(2)"
                }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(proposals.len(), 1);
    let proposal = &proposals[0];
    assert_eq!(proposal.source, ProposalSource::Ai);
    assert_eq!(proposal.action, ProposalAction::Merge);
    assert_eq!(proposal.element_path.as_deref(), Some("body > div:nth-child(2)"));

    let styles = Styles::parse(LONGHAND_MARGINS);
    assert_eq!(apply_proposal(&styles, proposal), Styles::parse("margin: 10px"));
}

#[test]
fn test_external_proposals_merge_with_local() {
    let (styles, local) = proposals_for(LONGHAND_MARGINS);
    let ai = proposals_from_json(
        r#"[{"property": "margin", "issueType": "shorthand-opportunity", "action": "review",
             "confidence": 0.99, "afterValue": "margin: 1em"}]"#,
    )
    .unwrap();
    let merged = merge_proposals(&local, &ai);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, ProposalSource::Ai);
    // The winning proposal is review-only.
    assert_eq!(apply_all(&styles, &merged), styles);
}

#[test]
fn test_external_proposals_shape_errors() {
    assert!(matches!(
        proposals_from_json("not json"),
        Err(ProposalSourceError::Json(_))
    ));
    assert!(matches!(
        proposals_from_json("42"),
        Err(ProposalSourceError::UnexpectedShape(_))
    ));
    assert!(matches!(
        proposals_from_json(r#"{"items": []}"#),
        Err(ProposalSourceError::UnexpectedShape(_))
    ));
    assert!(matches!(
        proposals_from_json(r#"{"proposals": {}}"#),
        Err(ProposalSourceError::UnexpectedShape(_))
    ));
    assert!(proposals_from_json("[]").unwrap().is_empty());
}

#[test]
fn test_proposal_serialization() {
    let (_, proposals) = proposals_for("position: static");
    let json = serde_json::to_value(&proposals[0]).unwrap();
    assert_eq!(json["action"], "remove");
    assert_eq!(json["source"], "local");
    assert_eq!(json["beforeValue"], "position: static");
    assert_eq!(json["issue"]["type"], "default-value");
    assert!(json.get("elementPath").is_none());
}
