//! Inline style model: parsing, pure updates, and semantic accessors.
//!
//! - [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

mod declaration;
mod getters;
mod styles;

pub use declaration::{Declaration, parse_declarations};
pub use styles::Styles;
