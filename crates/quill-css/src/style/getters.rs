//! Semantic accessors on [`Styles`].
//!
//! Each accessor combines a raw lookup with the matching resolver from
//! [`crate::values`]. Absent or unparseable properties yield `None`.

use crate::values::{
    BorderStyle, BoxSides, ResolutionContext, Rgb, SizeValue, parse_border, parse_box_shorthand,
    parse_color, parse_px, parse_size, split_components,
};

use super::Styles;

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

impl Styles {
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// The declared display keyword, trimmed.
    #[must_use]
    pub fn display(&self) -> Option<&str> {
        self.get("display").map(str::trim)
    }

    /// Resolve an arbitrary property as a size.
    #[must_use]
    pub fn size(&self, property: &str, ctx: &ResolutionContext) -> Option<SizeValue> {
        parse_size(self.get(property)?, ctx)
    }

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    #[must_use]
    pub fn width(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("width", ctx)
    }

    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    #[must_use]
    pub fn height(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("height", ctx)
    }

    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    #[must_use]
    pub fn min_width(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("min-width", ctx)
    }

    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    #[must_use]
    pub fn max_width(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("max-width", ctx)
    }

    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    #[must_use]
    pub fn min_height(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("min-height", ctx)
    }

    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    #[must_use]
    pub fn max_height(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("max-height", ctx)
    }

    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    #[must_use]
    pub fn font_size(&self, ctx: &ResolutionContext) -> Option<SizeValue> {
        self.size("font-size", ctx)
    }

    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        parse_color(self.get("color")?)
    }

    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    ///
    /// Falls back to the first color component of the `background` shorthand.
    #[must_use]
    pub fn background_color(&self) -> Option<Rgb> {
        if let Some(raw) = self.get("background-color") {
            return parse_color(raw);
        }
        split_components(self.get("background")?)
            .into_iter()
            .find_map(parse_color)
    }

    /// [§ 4.4 'border' shorthand](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    ///
    /// Uses `border` when declared, otherwise composes `border-width`,
    /// `border-style` and `border-color`. `None` when none of them exist.
    #[must_use]
    pub fn border(&self, ctx: &ResolutionContext) -> Option<BorderStyle> {
        if let Some(raw) = self.get("border") {
            return Some(parse_border(raw, ctx));
        }
        let parts: Vec<&str> = ["border-width", "border-style", "border-color"]
            .iter()
            .filter_map(|p| self.get(p))
            .collect();
        (!parts.is_empty()).then(|| parse_border(&parts.join(" "), ctx))
    }

    /// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    ///
    /// The first radius component, in pixels.
    #[must_use]
    pub fn border_radius(&self, ctx: &ResolutionContext) -> Option<f64> {
        let first = split_components(self.get("border-radius")?).into_iter().next()?;
        parse_px(first, ctx)
    }

    /// [§ 6.2 Padding](https://www.w3.org/TR/css-box-4/#paddings)
    ///
    /// The `padding` shorthand, with any `padding-*` longhand overriding its side.
    #[must_use]
    pub fn padding(&self, ctx: &ResolutionContext) -> Option<BoxSides> {
        self.box_edges("padding", ctx)
    }

    /// [§ 6.1 Margins](https://www.w3.org/TR/css-box-4/#margins)
    ///
    /// The `margin` shorthand, with any `margin-*` longhand overriding its side.
    #[must_use]
    pub fn margin(&self, ctx: &ResolutionContext) -> Option<BoxSides> {
        self.box_edges("margin", ctx)
    }

    /// [§ 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
    ///
    /// "Any values outside the range 0.0 (fully transparent) to 1.0 (fully
    /// opaque) will be clamped to this range."
    #[must_use]
    pub fn opacity(&self) -> Option<f64> {
        let raw = self.get("opacity")?.trim();
        let value = match raw.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
            None => raw.parse::<f64>().ok()?,
        };
        value.is_finite().then(|| value.clamp(0.0, 1.0))
    }

    /// Shorthand-then-longhand resolution shared by `margin` and `padding`.
    fn box_edges(&self, shorthand: &str, ctx: &ResolutionContext) -> Option<BoxSides> {
        let base = self.get(shorthand).and_then(|raw| parse_box_shorthand(raw, ctx));
        let longhands = SIDES.map(|side| self.get(&format!("{shorthand}-{side}")));
        if base.is_none() && longhands.iter().all(Option::is_none) {
            return None;
        }

        let base = base.unwrap_or_default().to_array();
        let [top, right, bottom, left] = std::array::from_fn(|i| match longhands[i] {
            Some(raw) => parse_px(raw, ctx).unwrap_or(0.0),
            None => base[i],
        });
        Some(BoxSides {
            top,
            right,
            bottom,
            left,
        })
    }
}
