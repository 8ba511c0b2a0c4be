//! CSS value resolution per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
//!
//! Turns raw declaration values into absolute semantic values:
//!
//! ```text
//!  "1.5rem"            ──parse_size──▶  SizeValue::Px(24.0)
//!  "50%"               ──parse_size──▶  SizeValue::Percent(50.0)
//!  "calc(1rem + 4px)"  ──parse_size──▶  SizeValue::Px(20.0)
//!  "#f80"              ──parse_color─▶  Rgb { 255, 136, 0 }
//!  "dashed 2px navy"   ──parse_border▶ BorderStyle { 2.0, Dashed, navy }
//!  "4px 8px"           ──parse_box_shorthand▶ BoxSides { 4, 8, 4, 8 }
//! ```
//!
//! Every entry point is total: unrecognized input becomes `None` or a
//! documented default, never a panic. Relative units resolve against an
//! explicit [`ResolutionContext`].

mod border;
mod box_sides;
mod color;
mod context;
mod length;
mod tokens;

pub use border::{BorderLineStyle, BorderStyle, parse_border};
pub use box_sides::{BoxSides, expand_box_components, parse_box_shorthand};
pub use color::{Rgb, parse_color};
pub use context::{
    ContextOverrides, DEFAULT_FONT_SIZE_PX, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
    ResolutionContext,
};
pub use length::{LengthUnit, SizeValue, parse_px, parse_size};
pub use tokens::split_components;
