//! Element records
//!
//! A `Record` is a borrowed view over one JSON object in the document.
//! Accessors mirror what the exporter actually writes: strings default to
//! empty, numbers to zero, and flags are presence-only.

use std::sync::OnceLock;

use serde_json::{Map, Value};
use sprig_geometry::Vec2;

/// Borrowed key/value view of one element record
#[derive(Debug, Clone, Copy)]
pub struct Record<'a>(&'a Map<String, Value>);

impl<'a> Record<'a> {
    /// View of a JSON value, if it is an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Record)
    }

    /// The shared empty record.
    pub fn empty() -> Record<'static> {
        static EMPTY: OnceLock<Map<String, Value>> = OnceLock::new();
        Record(EMPTY.get_or_init(Map::new))
    }

    /// Whether the key is present at all (presence-only flags).
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value, empty when absent or not a string.
    pub fn str(&self, key: &str) -> &'a str {
        self.opt_str(key).unwrap_or("")
    }

    /// String value, `None` when absent.
    pub fn opt_str(&self, key: &str) -> Option<&'a str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numeric value, zero when absent.
    pub fn f32(&self, key: &str) -> f32 {
        self.opt_f32(key).unwrap_or(0.0)
    }

    /// Numeric value, `None` when absent.
    pub fn opt_f32(&self, key: &str) -> Option<f32> {
        self.0.get(key).and_then(Value::as_f64).map(|v| v as f32)
    }

    /// Numeric value truncated to an integer, zero when absent.
    pub fn i32(&self, key: &str) -> i32 {
        self.f32(key) as i32
    }

    /// Two numeric keys as a vector, zero when either is absent.
    pub fn vec2(&self, key_x: &str, key_y: &str) -> Vec2 {
        self.opt_vec2(key_x, key_y).unwrap_or(Vec2::ZERO)
    }

    /// Two numeric keys as a vector, `None` unless both are present.
    pub fn opt_vec2(&self, key_x: &str, key_y: &str) -> Option<Vec2> {
        Some(Vec2::new(self.opt_f32(key_x)?, self.opt_f32(key_y)?))
    }

    /// Child element records, in document order. Non-object entries in
    /// the `elements` array are skipped.
    pub fn elements(&self) -> impl Iterator<Item = Record<'a>> {
        self.0
            .get("elements")
            .and_then(Value::as_array)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(Record::from_value)
    }
}
