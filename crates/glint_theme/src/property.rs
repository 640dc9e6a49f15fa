//! Property maps produced by style resolution
//!
//! A [`PropertyMap`] is what a style function returns and what the merge
//! engine combines: widget property name -> [`PropertyValue`]. The map
//! distinguishes "key absent" from "key present with a falsy value" - merge
//! precedence is decided by key presence alone, never by the value stored
//! under the key. A property explicitly set to `false`, `0`, or `""` still
//! overrides the same property from an included or inherited entry.

use glint_core::Color;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A single widget property value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Str(String),
    Color(Color),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

/// Map of widget properties as returned by a style function.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    entries: FxHashMap<String, PropertyValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set), convenient inside style functions.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    /// Whether the property is set at all, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, PropertyValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_differs_from_falsy_value() {
        let mut map = PropertyMap::new();
        map.set("visible", false);
        map.set("opacity", 0.0f32);

        assert!(map.contains("visible"));
        assert!(map.contains("opacity"));
        assert!(!map.contains("border"));
        assert_eq!(map.get("visible"), Some(&PropertyValue::Bool(false)));
        assert_eq!(map.get("border"), None);
    }

    #[test]
    fn set_replaces_value() {
        let map = PropertyMap::new()
            .with("text-color", Color::BLACK)
            .with("text-color", Color::WHITE);

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("text-color"),
            Some(&PropertyValue::Color(Color::WHITE))
        );
    }

    #[test]
    fn collect_from_pairs() {
        let map: PropertyMap = [("padding", 4i64), ("spacing", 8i64)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("padding"), Some(&PropertyValue::Int(4)));
    }
}
