//! Joint decoding.

use serde_json::Value;

use crate::error::{HbsError, Result};
use crate::types::{Colour, Joint, JointLength, JointStrength};

use super::node::ObjectNode;
use super::path::FieldPath;
use super::scalar::mismatch;

/// Decode a joint whose ends index into the final disc list.
pub fn decode_joint(value: &Value, path: FieldPath, disc_count: usize) -> Result<Joint> {
    let obj = ObjectNode::new(value, path)?;

    Ok(Joint {
        d0: obj.index("d0", disc_count)?,
        d1: obj.index("d1", disc_count)?,
        length: decode_joint_length(obj.get("length"), &obj.field("length"))?,
        strength: decode_joint_strength(obj.get("strength"), &obj.field("strength"))?,
        colour: obj.colour("color", Some(Colour::BLACK))?,
    })
}

/// `number` is fixed, `[min, max]` is a range, `null` or absent is auto.
pub fn decode_joint_length(node: Option<&Value>, path: &FieldPath) -> Result<JointLength> {
    let expected = "number, [min, max] or null";

    match node {
        None | Some(Value::Null) => Ok(JointLength::Auto),
        Some(Value::Number(n)) => Ok(JointLength::Fixed(n.as_f64().unwrap_or_default())),
        Some(value) => match value.as_array().map(Vec::as_slice) {
            Some([min, max]) => match (min.as_f64(), max.as_f64()) {
                (Some(min), Some(max)) => Ok(JointLength::Range { min, max }),
                _ => Err(mismatch(path, expected, value)),
            },
            _ => Err(mismatch(path, expected, value)),
        },
    }
}

/// `"rigid"` or a spring constant. Absent is rigid.
pub fn decode_joint_strength(node: Option<&Value>, path: &FieldPath) -> Result<JointStrength> {
    match node {
        None => Ok(JointStrength::Rigid),
        Some(Value::String(s)) if s == "rigid" => Ok(JointStrength::Rigid),
        Some(Value::String(s)) => Err(HbsError::InvalidEnumValue {
            field: path.to_string(),
            value: s.clone(),
            help: Some("Joint strength is \"rigid\" or a number".to_string()),
        }),
        Some(Value::Number(n)) => Ok(JointStrength::Spring(n.as_f64().unwrap_or_default())),
        Some(other) => Err(mismatch(path, "\"rigid\" or number", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn path() -> FieldPath {
        FieldPath::root().key("joints").index(0)
    }

    #[test]
    fn test_joint_defaults() {
        let joint = decode_joint(&json!({ "d0": 1, "d1": 2 }), path(), 3).unwrap();
        assert_eq!(joint.length, JointLength::Auto);
        assert_eq!(joint.strength, JointStrength::Rigid);
        assert_eq!(joint.colour, Colour::BLACK);
    }

    #[test]
    fn test_joint_disc_bounds() {
        let err = decode_joint(&json!({ "d0": 0, "d1": 3 }), path(), 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert!(err.to_string().contains("joints[0].d1"));
    }

    #[test]
    fn test_length_forms() {
        let p = path().key("length");
        assert_eq!(decode_joint_length(Some(&json!(50)), &p).unwrap(), JointLength::Fixed(50.0));
        assert_eq!(
            decode_joint_length(Some(&json!([10, 20])), &p).unwrap(),
            JointLength::Range { min: 10.0, max: 20.0 }
        );
        assert_eq!(decode_joint_length(Some(&json!(null)), &p).unwrap(), JointLength::Auto);
        assert_eq!(decode_joint_length(None, &p).unwrap(), JointLength::Auto);

        for bad in [json!([1]), json!([1, 2, 3]), json!("auto"), json!([1, "2"])] {
            let err = decode_joint_length(Some(&bad), &p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_strength_forms() {
        let p = path().key("strength");
        assert_eq!(decode_joint_strength(Some(&json!("rigid")), &p).unwrap(), JointStrength::Rigid);
        assert_eq!(
            decode_joint_strength(Some(&json!(0.25)), &p).unwrap(),
            JointStrength::Spring(0.25)
        );

        let err = decode_joint_strength(Some(&json!("soft")), &p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);

        let err = decode_joint_strength(Some(&json!(true)), &p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
