//! Keyed access to a JSON object being decoded.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::types::{CollisionFlags, Colour, Point, WireToken};

use super::path::FieldPath;
use super::scalar::{
    decode_boolean, decode_collision_flags, decode_colour, decode_enum, decode_index,
    decode_number, decode_point, decode_string, mismatch,
};

/// A JSON object paired with its location in the document.
///
/// Field accessors forward to the scalar decoders with the field's path, so
/// every error names the exact key that failed.
#[derive(Debug, Clone)]
pub struct ObjectNode<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> ObjectNode<'a> {
    /// Wrap a node that must be an object.
    pub fn new(value: &'a Value, path: FieldPath) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(mismatch(&path, "object", other)),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Raw lookup. `None` means the key is absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Path of a key in this object.
    pub fn field(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    pub fn string(&self, key: &str, fallback: Option<&str>) -> Result<String> {
        decode_string(self.get(key), fallback, &self.field(key))
    }

    pub fn number(&self, key: &str, fallback: Option<f64>) -> Result<f64> {
        decode_number(self.get(key), fallback, &self.field(key))
    }

    pub fn boolean(&self, key: &str, fallback: Option<bool>) -> Result<bool> {
        decode_boolean(self.get(key), fallback, &self.field(key))
    }

    pub fn colour(&self, key: &str, fallback: Option<Colour>) -> Result<Colour> {
        decode_colour(self.get(key), fallback, &self.field(key))
    }

    pub fn flags(&self, key: &str, fallback: Option<CollisionFlags>) -> Result<CollisionFlags> {
        decode_collision_flags(self.get(key), fallback, &self.field(key))
    }

    pub fn point(&self, key: &str, fallback: Option<Point>) -> Result<Point> {
        decode_point(self.get(key), fallback, &self.field(key))
    }

    pub fn token<T: WireToken>(&self, key: &str, fallback: Option<T>) -> Result<T> {
        decode_enum(self.get(key), fallback, &self.field(key))
    }

    pub fn index(&self, key: &str, len: usize) -> Result<usize> {
        decode_index(self.get(key), len, &self.field(key))
    }

    /// Decode a key only when it is present.
    pub fn optional<T>(&self, key: &str, decode: impl FnOnce(&Self, &str) -> Result<T>) -> Result<Option<T>> {
        if self.contains(key) {
            decode(self, key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Decode every element of an array field, in order.
    ///
    /// An absent key is an empty list; any other non-array is a type mismatch.
    pub fn list<T>(&self, key: &str, mut decode: impl FnMut(&'a Value, FieldPath) -> Result<T>) -> Result<Vec<T>> {
        let path = self.field(key);
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| decode(item, path.index(i)))
                .collect(),
            Some(other) => Err(mismatch(&path, "array", other)),
        }
    }

    /// Iterate over the object's entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.map.iter()
    }
}
