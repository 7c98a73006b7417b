//! Field lookups over decoded JSON objects
//!
//! Required lookups fail with `MissingField` when the key is absent and with
//! `InvalidField` when the value has the wrong JSON type. Optional lookups
//! treat an absent key and an explicit `null` the same way.

use crate::error::{Result, TinybeansError};
use serde_json::{Map, Value};

/// A decoded JSON object tagged with the name of the entity being built
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    object: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap a value that must be a JSON object
    pub fn new(object: &'static str, value: &'a Value) -> Result<Self> {
        match value.as_object() {
            Some(map) => Ok(Fields { object, map }),
            None => Err(TinybeansError::InvalidField {
                object,
                field: "<root>",
                expected: "an object",
            }),
        }
    }

    /// Raw value of a required key
    pub fn value(&self, key: &'static str) -> Result<&'a Value> {
        self.map
            .get(key)
            .ok_or_else(|| TinybeansError::missing(self.object, key))
    }

    /// Raw value of an optional key; `null` counts as absent
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub fn str(&self, key: &'static str) -> Result<String> {
        self.value(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(key, "a string"))
    }

    /// Required key whose value may be `null`
    pub fn nullable_str(&self, key: &'static str) -> Result<Option<String>> {
        match self.value(key)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.invalid(key, "a string")),
        }
    }

    pub fn i64(&self, key: &'static str) -> Result<i64> {
        self.value(key)?
            .as_i64()
            .ok_or_else(|| self.invalid(key, "an integer"))
    }

    pub fn opt_f64(&self, key: &'static str) -> Result<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.invalid(key, "a number")),
        }
    }

    /// Nested required object
    pub fn object(&self, key: &'static str, object: &'static str) -> Result<Fields<'a>> {
        let value = self.value(key)?;
        value
            .as_object()
            .map(|map| Fields { object, map })
            .ok_or_else(|| self.invalid(key, "an object"))
    }

    pub fn array(&self, key: &'static str) -> Result<&'a Vec<Value>> {
        self.value(key)?
            .as_array()
            .ok_or_else(|| self.invalid(key, "an array"))
    }

    /// Optional array; absent or `null` yields an empty slice
    pub fn opt_array(&self, key: &'static str) -> Result<&'a [Value]> {
        match self.get(key) {
            None => Ok(&[]),
            Some(value) => value
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| self.invalid(key, "an array")),
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> TinybeansError {
        TinybeansError::InvalidField {
            object: self.object,
            field,
            expected,
        }
    }
}
