//! Resolution context for relative units.
//!
//! [§ 4.4 Used Values](https://www.w3.org/TR/css-cascade-4/#used-value)
//!
//! "The used value is the result of taking the computed value and completing
//! any remaining calculations to make it the absolute theoretical value."
//!
//! The context is an ordinary value threaded through every resolver call.
//! There is no process-wide resolution state: two callers resolving against
//! different viewports simply pass different contexts.

use serde::{Deserialize, Serialize};

/// User agent default font size.
///
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// "Initial: medium" - we define medium as 16px per common browser convention.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Default viewport width used when the host supplies none.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1920.0;

/// Default viewport height used when the host supplies none.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 1080.0;

/// Context required to resolve relative CSS units to absolute pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolutionContext {
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    ///
    /// "The viewport-percentage lengths are relative to the size of the
    /// initial containing block."
    pub viewport_width: f64,

    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    pub viewport_height: f64,

    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// Both `em` and `rem` resolve against this size; inline declarations
    /// carry no element tree to distinguish the root font size.
    pub font_size: f64,
}

impl ResolutionContext {
    /// Create a context with the default font size (16px) and the given viewport.
    #[must_use]
    pub const fn with_viewport(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            font_size: DEFAULT_FONT_SIZE_PX,
        }
    }

    /// Create a context with all parameters specified.
    #[must_use]
    pub const fn new(viewport_width: f64, viewport_height: f64, font_size: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            font_size,
        }
    }

    /// Overlay a partial set of values on top of this context.
    ///
    /// Fields left `None` in `overrides` keep their current value. Resetting is
    /// just `ResolutionContext::default()`.
    #[must_use]
    pub fn merged(&self, overrides: &ContextOverrides) -> Self {
        Self {
            viewport_width: overrides.viewport_width.unwrap_or(self.viewport_width),
            viewport_height: overrides.viewport_height.unwrap_or(self.viewport_height),
            font_size: overrides.font_size.unwrap_or(self.font_size),
        }
    }
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::new(
            DEFAULT_VIEWPORT_WIDTH,
            DEFAULT_VIEWPORT_HEIGHT,
            DEFAULT_FONT_SIZE_PX,
        )
    }
}

/// A partial [`ResolutionContext`], as supplied by a host configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextOverrides {
    /// Replacement viewport width, if any.
    pub viewport_width: Option<f64>,
    /// Replacement viewport height, if any.
    pub viewport_height: Option<f64>,
    /// Replacement font size, if any.
    pub font_size: Option<f64>,
}
