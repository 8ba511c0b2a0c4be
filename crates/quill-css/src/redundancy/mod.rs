//! Redundant-declaration detection.
//!
//! Finds declarations that can be removed or consolidated without changing
//! the rendered result:
//!
//! - **default values** - a declaration equal to the property's initial value
//!   ([§ 7.1 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values));
//! - **shorthand opportunities** - a full set of longhands that one shorthand
//!   can express ([§ 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand));
//! - **duplicates** - longhands shadowed by their shorthand, and literal
//!   repeats in the declaration text.

mod detector;
mod initial_values;
mod issue;
mod shorthand;

pub use detector::{
    detect, detect_default_values, detect_duplicate_declarations, detect_duplicates,
    detect_shorthand_conflicts, detect_shorthand_opportunities, detect_source,
};
pub use initial_values::{
    INITIAL_VALUES, display_for_tag, initial_value, is_default_value, is_override_sensitive,
    normalize_value,
};
pub use issue::{IssueKind, IssueType, RedundancyIssue, Severity};
pub use shorthand::{SHORTHAND_RULES, ShorthandForm, ShorthandRule, build_box_shorthand};
