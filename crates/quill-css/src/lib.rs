//! Inline CSS resolution, flexbox translation, and redundancy optimization.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value resolution** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Lengths in px, rem, em, vw, vh and percentages
//!   - Simple `calc()` expressions
//!   - Hex, `rgb()`/`rgba()` and named colors
//!   - Border and box (margin/padding) shorthands
//!
//! - **Style model** ([CSS Style Attributes](https://www.w3.org/TR/css-style-attr/))
//!   - Parsing `style="..."` declaration text
//!   - Immutable set/remove/merge
//!   - Semantic getters resolved against a [`ResolutionContext`]
//!
//! - **Auto layout** ([CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/))
//!   - Flex container detection
//!   - Direction, alignment, gap and padding translation
//!
//! - **Redundancy detection** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Declarations restating initial values
//!   - Longhand sets that fit one shorthand
//!   - Longhands shadowed by their shorthand, literal repeats
//!
//! - **Optimization**
//!   - Confidence-scored proposals, merged with externally supplied ones
//!   - Applying all or approved proposals, before/after comparison
//!
//! # Not Implemented
//!
//! - Selectors, the cascade across rules, inheritance
//! - `hsl()` and other color functions
//! - Nested or multiplicative `calc()`

/// Unit, color, and shorthand resolution per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;
/// Inline declaration model per [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/).
pub mod style;
/// Flex container → auto-layout translation per [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/).
pub mod flexbox;
/// Redundant-declaration detection.
pub mod redundancy;
/// Proposal generation, merging, and application.
pub mod optimizer;

// Re-exports for convenience
pub use flexbox::{AutoLayoutProperties, is_flex_container};
pub use optimizer::{
    OptimizationProposal, OptimizationResult, ProposalSourceError, apply_all, compare, optimize,
};
pub use redundancy::{RedundancyIssue, detect, detect_source};
pub use style::{Declaration, Styles};
pub use values::{BorderStyle, ResolutionContext, Rgb, SizeValue};
