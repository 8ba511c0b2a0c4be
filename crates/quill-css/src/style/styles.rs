//! The inline style model.
//!
//! [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)
//!
//! A `Styles` value is a flat property → raw value mapping. It is never
//! mutated in place: `set`, `remove` and `merge` all return a new value.

use std::fmt;

use serde::{Serialize, Serializer};

use super::declaration::{Declaration, parse_declarations};

/// Inline declarations keyed by property name.
///
/// Property names are kept as written. Iteration follows first-insertion
/// order; re-assigning a property keeps its position. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    entries: Vec<Declaration>,
}

impl Styles {
    /// Create an empty style model.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse declaration-block text (the contents of a `style="..."` attribute).
    ///
    /// Later declarations of the same property overwrite earlier ones.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut styles = Self::new();
        for decl in parse_declarations(text) {
            styles.insert(decl.property, decl.value);
        }
        styles
    }

    /// Look up the raw value of a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Check if a property is declared.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.entries.iter().any(|d| d.property == property)
    }

    /// Return a copy with `property` set to `value`.
    ///
    /// Both sides are trimmed as in [`Styles::parse`]. An empty property
    /// leaves the styles unchanged; an empty value removes the property.
    #[must_use]
    pub fn set(&self, property: &str, value: &str) -> Self {
        let (property, value) = (property.trim(), value.trim());
        if property.is_empty() {
            return self.clone();
        }
        if value.is_empty() {
            return self.remove(property);
        }
        let mut next = self.clone();
        next.insert(property.to_string(), value.to_string());
        next
    }

    /// Return a copy without `property`. Removing an absent property is a no-op.
    #[must_use]
    pub fn remove(&self, property: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|d| d.property != property)
                .cloned()
                .collect(),
        }
    }

    /// Shallow right-biased union: values in `overrides` win.
    #[must_use]
    pub fn merge(&self, overrides: &Self) -> Self {
        let mut next = self.clone();
        for decl in &overrides.entries {
            next.insert(decl.property.clone(), decl.value.clone());
        }
        next
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no properties are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(property, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|d| (d.property.as_str(), d.value.as_str()))
    }

    /// Iterate declared property names.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.property.as_str())
    }

    /// Insert or overwrite in place. Only used while building a new value.
    fn insert(&mut self, property: String, value: String) {
        match self.entries.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Declaration { property, value }),
        }
    }
}

impl PartialEq for Styles {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(p, v)| other.get(p) == Some(v))
    }
}

impl<K, V> FromIterator<(K, V)> for Styles
where
    K: Into<String>,
    V: Into<String>,
{
    /// Build from pairs with the same trimming and empty-dropping rules as
    /// [`Styles::parse`].
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut styles = Self::new();
        for (property, value) in iter {
            let property: String = property.into();
            let value: String = value.into();
            let (property, value) = (property.trim(), value.trim());
            if !property.is_empty() && !value.is_empty() {
                styles.insert(property.to_string(), value.to_string());
            }
        }
        styles
    }
}

impl fmt::Display for Styles {
    /// Serialize as `prop: value; prop2: value2` with no trailing separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

impl Serialize for Styles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
