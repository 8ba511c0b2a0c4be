//! Flexbox → auto-layout translation.
//!
//! [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! Classification is single-shot: an element either is a flex container and
//! gets an [`AutoLayoutProperties`], or it is not and gets `None`.

mod auto_layout;
mod keywords;

pub use auto_layout::{AutoLayoutProperties, Gaps, is_flex_container, resolve_gaps};
pub use keywords::{
    ALIGN_ITEMS_ALIGNMENTS, CounterAxisAlign, FLEX_DIRECTION_MODES, JUSTIFY_CONTENT_ALIGNMENTS,
    LayoutMode, PrimaryAxisAlign, counter_align_for, layout_mode_for, primary_align_for,
};
