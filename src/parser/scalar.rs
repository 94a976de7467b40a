//! Scalar decoders.
//!
//! Each decoder takes an optional JSON node (`None` when the key is missing)
//! and an optional fallback. A missing node takes the fallback, or fails with
//! `MissingRequired` when there is none. A present node of the wrong kind is
//! always a `TypeMismatch`, even when a fallback exists.

use serde_json::Value;

use crate::error::{HbsError, Result};
use crate::types::{CollisionFlags, Colour, Point, WireToken};

use super::path::FieldPath;

/// Name of a JSON node's kind, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(path: &FieldPath, expected: &'static str, found: &Value) -> HbsError {
    HbsError::TypeMismatch {
        field: path.to_string(),
        expected,
        found: kind_name(found),
    }
}

fn missing(path: &FieldPath) -> HbsError {
    HbsError::MissingRequired {
        field: path.to_string(),
    }
}

/// Resolve an absent node to its fallback.
fn absent<T>(fallback: Option<T>, path: &FieldPath) -> Result<T> {
    fallback.ok_or_else(|| missing(path))
}

pub fn decode_string(node: Option<&Value>, fallback: Option<&str>, path: &FieldPath) -> Result<String> {
    match node {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(path, "string", other)),
        None => absent(fallback, path).map(str::to_string),
    }
}

pub fn decode_number(node: Option<&Value>, fallback: Option<f64>, path: &FieldPath) -> Result<f64> {
    match node {
        Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or_default()),
        Some(other) => Err(mismatch(path, "number", other)),
        None => absent(fallback, path),
    }
}

pub fn decode_boolean(node: Option<&Value>, fallback: Option<bool>, path: &FieldPath) -> Result<bool> {
    match node {
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(mismatch(path, "boolean", other)),
        None => absent(fallback, path),
    }
}

/// Decode a colour: `"RRGGBB"`, `"AARRGGBB"`, `"transparent"` or `[R, G, B]`.
pub fn decode_colour(node: Option<&Value>, fallback: Option<Colour>, path: &FieldPath) -> Result<Colour> {
    let invalid = |value: &Value| HbsError::InvalidColor {
        field: path.to_string(),
        value: value.to_string(),
    };

    let value = match node {
        None => return absent(fallback, path),
        Some(value) => value,
    };

    match value {
        Value::String(s) if s == "transparent" => Ok(Colour::TRANSPARENT),
        Value::String(s) => Colour::from_hex(s).ok_or_else(|| invalid(value)),
        Value::Array(items) => {
            if items.len() != 3 {
                return Err(invalid(value));
            }
            let mut rgb = [0u8; 3];
            for (slot, item) in rgb.iter_mut().zip(items) {
                let n = item.as_f64().ok_or_else(|| invalid(value))?;
                *slot = (n as i64 & 0xff) as u8;
            }
            Ok(Colour::rgb(rgb[0], rgb[1], rgb[2]))
        }
        _ => Err(invalid(value)),
    }
}

/// Decode one collision token into its bit (or the aggregate for `"all"`).
pub fn decode_collision_flag_token(value: &Value, path: &FieldPath) -> Result<CollisionFlags> {
    let token = value.as_str().ok_or_else(|| mismatch(path, "string", value))?;

    CollisionFlags::from_token(token).ok_or_else(|| HbsError::InvalidEnumValue {
        field: path.to_string(),
        value: token.to_string(),
        help: Some(format!(
            "Collision flags are one of: {}",
            CollisionFlags::token_names().collect::<Vec<_>>().join(", ")
        )),
    })
}

/// Decode a collision flag set: a single token or an array of tokens OR'd
/// together.
pub fn decode_collision_flags(
    node: Option<&Value>,
    fallback: Option<CollisionFlags>,
    path: &FieldPath,
) -> Result<CollisionFlags> {
    match node {
        None => absent(fallback, path),
        Some(Value::Array(items)) => {
            let mut flags = CollisionFlags::empty();
            for (i, item) in items.iter().enumerate() {
                flags |= decode_collision_flag_token(item, &path.index(i))?;
            }
            Ok(flags)
        }
        Some(value) if value.is_string() => decode_collision_flag_token(value, path),
        Some(other) => Err(mismatch(path, "array of collision flags", other)),
    }
}

/// Decode a closed string enum.
pub fn decode_enum<T: WireToken>(node: Option<&Value>, fallback: Option<T>, path: &FieldPath) -> Result<T> {
    match node {
        None => absent(fallback, path),
        Some(Value::String(s)) => T::from_token(s).ok_or_else(|| HbsError::InvalidEnumValue {
            field: path.to_string(),
            value: s.clone(),
            help: Some(format!("Expected one of {}", T::expected())),
        }),
        Some(other) => Err(mismatch(path, "string", other)),
    }
}

/// Decode an `[x, y]` pair.
pub fn decode_point(node: Option<&Value>, fallback: Option<Point>, path: &FieldPath) -> Result<Point> {
    let value = match node {
        None => return absent(fallback, path),
        Some(value) => value,
    };

    let pair = value.as_array().map(Vec::as_slice);
    match pair {
        Some([x, y]) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(mismatch(path, "[x, y] number pair", value)),
        },
        _ => Err(mismatch(path, "[x, y] number pair", value)),
    }
}

/// Decode a required index into a list of `len` elements.
pub fn decode_index(node: Option<&Value>, len: usize, path: &FieldPath) -> Result<usize> {
    let value = node.ok_or_else(|| missing(path))?;
    let n = value.as_f64().ok_or_else(|| mismatch(path, "integer", value))?;

    if n.fract() != 0.0 {
        return Err(mismatch(path, "integer", value));
    }

    if n < 0.0 || n >= len as f64 {
        return Err(HbsError::IndexOutOfRange {
            field: path.to_string(),
            index: n as i64,
            len,
        });
    }

    Ok(n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::CameraFollow;
    use serde_json::json;

    fn path() -> FieldPath {
        FieldPath::root().key("field")
    }

    #[test]
    fn test_number_present_absent_fallback() {
        assert_eq!(decode_number(Some(&json!(2.5)), None, &path()).unwrap(), 2.5);
        assert_eq!(decode_number(None, Some(1.0), &path()).unwrap(), 1.0);

        let err = decode_number(None, None, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
    }

    #[test]
    fn test_wrong_kind_ignores_fallback() {
        let err = decode_number(Some(&json!("1")), Some(0.0), &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let err = decode_boolean(Some(&json!(null)), Some(true), &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let err = decode_string(Some(&json!(3)), None, &path()).unwrap_err();
        assert!(err.to_string().contains("expected string, got number"));
    }

    #[test]
    fn test_string_fallback() {
        assert_eq!(decode_string(None, Some("x"), &path()).unwrap(), "x");
    }

    #[test]
    fn test_colour_forms() {
        assert_eq!(
            decode_colour(Some(&json!("transparent")), None, &path()).unwrap(),
            Colour::TRANSPARENT
        );
        assert_eq!(
            decode_colour(Some(&json!("ff0000")), None, &path()).unwrap(),
            Colour::rgb(255, 0, 0)
        );
        assert_eq!(
            decode_colour(Some(&json!([255, 0, 0])), None, &path()).unwrap(),
            Colour::rgb(255, 0, 0)
        );
        assert_eq!(
            decode_colour(Some(&json!("40FFFFFF")), None, &path()).unwrap(),
            Colour::new(255, 255, 255, 0x40)
        );
    }

    #[test]
    fn test_colour_rejects_malformed() {
        for bad in [json!("zz0000"), json!("ff00"), json!([1, 2]), json!(["a", 0, 0]), json!(7)] {
            let err = decode_colour(Some(&bad), None, &path()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidColor, "{}", bad);
        }
    }

    #[test]
    fn test_collision_flags_or() {
        let flags = decode_collision_flags(Some(&json!(["red", "kick"])), None, &path()).unwrap();
        assert_eq!(flags, CollisionFlags::RED | CollisionFlags::KICK);

        let flags = decode_collision_flags(Some(&json!(["all", "c0"])), None, &path()).unwrap();
        assert_eq!(flags, CollisionFlags::ALL | CollisionFlags::C0);
    }

    #[test]
    fn test_collision_flags_single_token_and_empty() {
        let flags = decode_collision_flags(Some(&json!("wall")), None, &path()).unwrap();
        assert_eq!(flags, CollisionFlags::WALL);

        let flags = decode_collision_flags(Some(&json!([])), None, &path()).unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_collision_flags_unknown_token() {
        let err = decode_collision_flags(Some(&json!(["red", "purple"])), None, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
        assert!(err.to_string().contains("field[1]"));
    }

    #[test]
    fn test_enum_decode() {
        assert_eq!(
            decode_enum(Some(&json!("player")), Some(CameraFollow::Ball), &path()).unwrap(),
            CameraFollow::Player
        );
        assert_eq!(
            decode_enum::<CameraFollow>(None, Some(CameraFollow::Ball), &path()).unwrap(),
            CameraFollow::Ball
        );
        let err = decode_enum::<CameraFollow>(Some(&json!("Ball")), None, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
    }

    #[test]
    fn test_point_decode() {
        assert_eq!(
            decode_point(Some(&json!([1, -2.5])), None, &path()).unwrap(),
            Point::new(1.0, -2.5)
        );
        for bad in [json!([1]), json!([1, 2, 3]), json!({"x": 1}), json!([1, "2"])] {
            let err = decode_point(Some(&bad), None, &path()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(decode_index(Some(&json!(3)), 4, &path()).unwrap(), 3);

        let err = decode_index(Some(&json!(4)), 4, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

        let err = decode_index(Some(&json!(-1)), 4, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

        let err = decode_index(Some(&json!(1.5)), 4, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let err = decode_index(None, 4, &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
    }
}
