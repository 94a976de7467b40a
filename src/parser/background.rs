//! Background decoding.

use serde_json::Value;

use crate::error::Result;
use crate::types::Background;

use super::node::ObjectNode;
use super::path::FieldPath;

/// Decode `bg`. Absent is a plain background with the default colour.
pub fn decode_background(node: Option<&Value>, path: FieldPath) -> Result<Background> {
    let base = Background::default();
    let Some(value) = node else {
        return Ok(base);
    };

    let obj = ObjectNode::new(value, path)?;
    Ok(Background {
        kind: obj.token("type", Some(base.kind))?,
        width: obj.number("width", Some(base.width))?,
        height: obj.number("height", Some(base.height))?,
        kick_off_radius: obj.number("kickOffRadius", Some(base.kick_off_radius))?,
        corner_radius: obj.number("cornerRadius", Some(base.corner_radius))?,
        goal_line: obj.number("goalLine", Some(base.goal_line))?,
        colour: obj.colour("color", Some(base.colour))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{BackgroundType, Colour};
    use serde_json::json;

    #[test]
    fn test_absent_background() {
        assert_eq!(decode_background(None, FieldPath::root()).unwrap(), Background::default());
    }

    #[test]
    fn test_grass_background() {
        let bg = decode_background(
            Some(&json!({ "type": "grass", "width": 550, "height": 240, "kickOffRadius": 80 })),
            FieldPath::root().key("bg"),
        )
        .unwrap();
        assert_eq!(bg.kind, BackgroundType::Grass);
        assert_eq!(bg.width, 550.0);
        assert_eq!(bg.kick_off_radius, 80.0);
        assert_eq!(bg.corner_radius, 0.0);
        assert_eq!(bg.colour, Colour::GRASS);
    }

    #[test]
    fn test_unknown_type() {
        let err = decode_background(Some(&json!({ "type": "sand" })), FieldPath::root().key("bg")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
        assert!(err.to_string().contains("bg.type"));
    }
}
