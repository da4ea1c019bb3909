//! Contextual key-value fields attached to loggers and messages
//!
//! This module provides:
//! - `FieldValue`: the value stored under a key
//! - `Keys`: an owned mapping of keys to values
//! - `KeyStyle`: the delimiters used when keys are rendered into a line

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Value type for key fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Delimiters used when rendering keys into a log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyStyle {
    pub open: String,
    pub close: String,
    pub separator: String,
}

impl Default for KeyStyle {
    fn default() -> Self {
        Self {
            open: "{ ".to_string(),
            close: " }".to_string(),
            separator: ", ".to_string(),
        }
    }
}

/// Key-value fields carried by a logger or passed with a single message
///
/// A key whose value is [`FieldValue::Null`] keeps its slot (it still
/// overrides an inherited value) but is never rendered.
///
/// # Example
///
/// ```
/// use timber::Keys;
///
/// let base = Keys::new().with("service", "api");
/// let derived = base.derive(&Keys::new().with("request", 7));
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(derived.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keys {
    fields: BTreeMap<String, FieldValue>,
}

impl Keys {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field, returning the updated set
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    /// Copy of `self` with every entry of `incoming` written on top.
    ///
    /// The result owns its storage; later changes to either input are not
    /// visible through it.
    #[must_use]
    pub fn derive(&self, incoming: &Keys) -> Keys {
        let mut fields = self.fields.clone();
        for (key, value) in &incoming.fields {
            fields.insert(key.clone(), value.clone());
        }
        Keys { fields }
    }

    /// Render message keys over inherited keys as `{ key: value, ... }`.
    ///
    /// Message keys win on collision. Null values are skipped, and an empty
    /// string is returned when nothing is left to show.
    pub fn render(local: Option<&Keys>, inherited: &Keys, style: &KeyStyle) -> String {
        let merged;
        let keys = match local {
            Some(local) if !local.is_empty() => {
                merged = inherited.derive(local);
                &merged
            }
            _ => inherited,
        };

        let pairs: Vec<String> = keys
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();
        if pairs.is_empty() {
            return String::new();
        }

        format!(
            "{}{}{}",
            style.open,
            pairs.join(&style.separator),
            style.close
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Keys
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Keys {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Keys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Keys::render(None, self, &KeyStyle::default()))
    }
}
