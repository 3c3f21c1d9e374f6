//! Flat request parameter maps.
//!
//! A [`Params`] value keeps insertion order for transport and offers a
//! key-sorted view for signing. Values stay typed until the last moment:
//! the signature sees native JSON booleans and integers, the wire sees
//! strings (`"true"`/`"false"` for booleans).

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::error::BiscointError;
use crate::types::Side;

/// Parameter key carrying the versioned endpoint path.
pub const REQUEST_KEY: &str = "request";

/// A single request parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Absent value; removed before signing and sending.
    Null,
    /// Boolean, sent as `"true"`/`"false"`.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// String.
    Str(String),
}

impl ParamValue {
    /// Check if this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Transport form of the value. `None` for nulls.
    pub fn to_wire(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            ParamValue::Bool(true) => Some("true".to_string()),
            ParamValue::Bool(false) => Some("false".to_string()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Str(s) => Some(s.clone()),
        }
    }
}

/// Serializes as the native JSON token, used for the signing payload.
impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::Null => serializer.serialize_unit(),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Int(n) => serializer.serialize_i64(*n),
            ParamValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<Side> for ParamValue {
    fn from(value: Side) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl<T> From<Option<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// An ordered, string-keyed parameter map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check if a parameter is present (null or not).
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every parameter whose value is absent. `false` and `0` are kept.
    pub fn without_nulls(mut self) -> Self {
        self.entries.retain(|(_, v)| !v.is_null());
        self
    }

    /// Key-sorted view of the parameters, as signed.
    pub fn signing_view(&self) -> BTreeMap<&str, &ParamValue> {
        self.iter().collect()
    }

    /// Parameters as transmitted, in insertion order, with booleans
    /// normalized to `"true"`/`"false"`. Null values are skipped.
    pub fn to_wire(&self) -> Vec<(&str, String)> {
        self.iter()
            .filter_map(|(k, v)| v.to_wire().map(|w| (k, w)))
            .collect()
    }

    /// URL-encode the transmitted parameters for a query string or form body.
    pub fn to_urlencoded(&self) -> Result<String, BiscointError> {
        serde_urlencoded::to_string(self.to_wire())
            .map_err(|e| BiscointError::Encoding(e.to_string()))
    }
}
