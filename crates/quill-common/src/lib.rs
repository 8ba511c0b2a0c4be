//! Shared infrastructure for the Quill style crates.
//!
//! - **Warnings** - a process-wide stderr channel that prints each distinct
//!   diagnostic once, used where input is skipped rather than rejected

pub mod warning;
