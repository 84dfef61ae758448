//! Grant payloads and the omission-aware builder every grant encodes with.
//!
//! An unset optional field never shows up in a payload: empty strings and
//! empty objects are skipped rather than written as `""`, `{}` or `null`.

use serde_json::{Map, Value};

/// The key-value object a grant contributes to a token's claims.
pub type Payload = Map<String, Value>;

/// Chainable builder that applies the omission rule per field.
#[derive(Debug, Default)]
#[must_use]
pub struct PayloadBuilder {
    map: Payload,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` unless it is empty.
    pub fn string(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.map.insert(key.to_string(), Value::String(value.to_string()));
        }
        self
    }

    /// Insert a copy of `value` under `key` unless it has no entries.
    pub fn object(mut self, key: &str, value: &Payload) -> Self {
        if !value.is_empty() {
            self.map.insert(key.to_string(), Value::Object(value.clone()));
        }
        self
    }

    /// Insert `value` under `key` regardless of its content.
    pub fn always(mut self, key: &str, value: Value) -> Self {
        self.map.insert(key.to_string(), value);
        self
    }

    /// Insert the value produced by `value` only when `condition` holds.
    pub fn when(mut self, condition: bool, key: &str, value: impl FnOnce() -> Value) -> Self {
        if condition {
            self.map.insert(key.to_string(), value());
        }
        self
    }

    pub fn build(self) -> Payload {
        self.map
    }
}
