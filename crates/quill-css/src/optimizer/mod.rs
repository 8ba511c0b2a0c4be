//! Turning redundancy issues into applied edits.
//!
//! ```text
//!  issues ──generate_proposals──▶ proposals ──merge_proposals(ai)──▶ proposals
//!                                     │
//!                                     └──apply_all / apply_approved──▶ Styles ──compare──▶ StyleComparison
//! ```
//!
//! Proposals are plain values: generating one never touches a [`Styles`],
//! and applying one always returns a new model.
//!
//! [`Styles`]: crate::style::Styles

mod apply;
mod compare;
mod external;
mod optimize;
mod proposal;

pub use apply::{apply_all, apply_approved, apply_proposal};
pub use compare::{StyleComparison, compare};
pub use external::{ProposalSourceError, proposals_from_json};
pub use optimize::{OptimizationResult, OptimizationSummary, optimize};
pub use proposal::{
    DEFAULT_VALUE_CONFIDENCE, DUPLICATE_REVIEW_CONFIDENCE, OptimizationProposal, ProposalAction,
    ProposalSource, SHORTHAND_CONFIDENCE, generate_proposals, merge_proposals, next_proposal_id,
};
