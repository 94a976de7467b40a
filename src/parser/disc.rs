//! Disc, ball and player physics decoders, and the ball/disc merge.

use serde_json::Value;
use tracing::trace;

use crate::error::{HbsError, Result};
use crate::types::{Disc, PlayerPhysics, TraitTable};

use super::node::ObjectNode;
use super::path::FieldPath;
use super::traits::resolve_trait;

/// Where the ball disc comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum BallPhysics {
    /// An explicit `ballPhysics` object.
    Disc(Disc),
    /// No `ballPhysics`: a default ball goes in front of the general discs.
    Synthesized,
    /// `"disc0"`: the first general disc is the ball.
    FirstDisc,
}

/// Decode a disc over a set of built-in defaults.
fn decode_disc_with(value: &Value, path: FieldPath, traits: &TraitTable, base: Disc) -> Result<Disc> {
    let obj = ObjectNode::new(value, path)?;
    let t = resolve_trait(&obj, traits)?;

    Ok(Disc {
        pos: obj.point("pos", Some(base.pos))?,
        speed: obj.point("speed", Some(base.speed))?,
        gravity: obj.point("gravity", Some(base.gravity))?,
        radius: obj.number("radius", Some(t.and_then(|t| t.radius).unwrap_or(base.radius)))?,
        inv_mass: obj.number("invMass", Some(t.and_then(|t| t.inv_mass).unwrap_or(base.inv_mass)))?,
        damping: obj.number("damping", Some(t.and_then(|t| t.damping).unwrap_or(base.damping)))?,
        colour: obj.colour("color", Some(t.and_then(|t| t.colour).unwrap_or(base.colour)))?,
        b_coef: obj.number("bCoef", Some(t.and_then(|t| t.b_coef).unwrap_or(base.b_coef)))?,
        c_group: obj.flags("cGroup", Some(t.and_then(|t| t.c_group).unwrap_or(base.c_group)))?,
        c_mask: obj.flags("cMask", Some(t.and_then(|t| t.c_mask).unwrap_or(base.c_mask)))?,
    })
}

pub fn decode_disc(value: &Value, path: FieldPath, traits: &TraitTable) -> Result<Disc> {
    decode_disc_with(value, path, traits, Disc::default())
}

/// Decode the `ballPhysics` field.
pub fn decode_ball_physics(node: Option<&Value>, path: FieldPath, traits: &TraitTable) -> Result<BallPhysics> {
    match node {
        None => {
            trace!("no ballPhysics, synthesizing default ball");
            Ok(BallPhysics::Synthesized)
        }
        Some(Value::String(s)) if s == "disc0" => Ok(BallPhysics::FirstDisc),
        Some(Value::String(s)) => Err(HbsError::InvalidEnumValue {
            field: path.to_string(),
            value: s.clone(),
            help: Some("ballPhysics is an object or \"disc0\"".to_string()),
        }),
        Some(value) => {
            let mut ball = decode_disc_with(value, path, traits, Disc::ball())?;
            ball.c_group |= Disc::BALL_GROUP;
            Ok(BallPhysics::Disc(ball))
        }
    }
}

/// Build the final disc list with the ball at index 0.
///
/// Only an explicit ball object may stand alone. A synthesized ball or
/// `"disc0"` needs at least one general disc; `discs_path` names that list
/// in the resulting `MissingRequired`.
pub fn merge_discs(ball: BallPhysics, mut discs: Vec<Disc>, discs_path: &FieldPath) -> Result<Vec<Disc>> {
    let missing = || HbsError::MissingRequired {
        field: discs_path.to_string(),
    };

    match ball {
        BallPhysics::Disc(ball) => {
            discs.insert(0, ball);
            Ok(discs)
        }
        BallPhysics::Synthesized => {
            if discs.is_empty() {
                return Err(missing());
            }
            discs.insert(0, Disc::ball());
            Ok(discs)
        }
        BallPhysics::FirstDisc => {
            let first = discs.first_mut().ok_or_else(missing)?;
            first.c_group |= Disc::BALL_GROUP;
            Ok(discs)
        }
    }
}

/// Decode `playerPhysics`. Absent means the stadium uses the built-in values.
pub fn decode_player_physics(node: Option<&Value>, path: FieldPath) -> Result<Option<PlayerPhysics>> {
    let Some(value) = node else {
        return Ok(None);
    };

    let obj = ObjectNode::new(value, path)?;
    let base = PlayerPhysics::default();

    Ok(Some(PlayerPhysics {
        gravity: obj.point("gravity", Some(base.gravity))?,
        radius: obj.number("radius", Some(base.radius))?,
        inv_mass: obj.number("invMass", Some(base.inv_mass))?,
        b_coef: obj.number("bCoef", Some(base.b_coef))?,
        damping: obj.number("damping", Some(base.damping))?,
        c_group: obj.flags("cGroup", Some(base.c_group))?,
        acceleration: obj.number("acceleration", Some(base.acceleration))?,
        kicking_acceleration: obj.number("kickingAcceleration", Some(base.kicking_acceleration))?,
        kicking_damping: obj.number("kickingDamping", Some(base.kicking_damping))?,
        kick_strength: obj.number("kickStrength", Some(base.kick_strength))?,
        kickback: obj.number("kickback", Some(base.kickback))?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{CollisionFlags, Colour, Point, Trait};
    use serde_json::json;

    fn path() -> FieldPath {
        FieldPath::root().key("discs")
    }

    fn traits() -> TraitTable {
        [Trait {
            radius: Some(8.0),
            inv_mass: Some(0.0),
            colour: Some(Colour::rgb(0xcc, 0xcc, 0xff)),
            ..Trait::new("goalPost")
        }]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_disc_defaults() {
        let disc = decode_disc(&json!({}), path(), &traits()).unwrap();
        assert_eq!(disc, Disc::default());
    }

    #[test]
    fn test_disc_trait_and_explicit() {
        let disc = decode_disc(
            &json!({ "pos": [-700, 85], "radius": 5, "trait": "goalPost" }),
            path(),
            &traits(),
        )
        .unwrap();
        assert_eq!(disc.pos, Point::new(-700.0, 85.0));
        assert_eq!(disc.radius, 5.0);
        assert_eq!(disc.colour, Colour::rgb(0xcc, 0xcc, 0xff));
        assert_eq!(disc.damping, 0.99);
    }

    #[test]
    fn test_ball_object_forces_group_bits() {
        let ball = decode_ball_physics(
            Some(&json!({ "radius": 6.4, "cGroup": ["wall"] })),
            FieldPath::root().key("ballPhysics"),
            &traits(),
        )
        .unwrap();

        let BallPhysics::Disc(ball) = ball else {
            panic!("expected an explicit ball");
        };
        assert_eq!(ball.radius, 6.4);
        assert_eq!(ball.inv_mass, 1.0);
        assert_eq!(ball.c_group, CollisionFlags::WALL | Disc::BALL_GROUP);
        assert_eq!(ball.c_mask, CollisionFlags::ALL);
    }

    #[test]
    fn test_ball_physics_string_forms() {
        let path = FieldPath::root().key("ballPhysics");
        assert_eq!(
            decode_ball_physics(Some(&json!("disc0")), path.clone(), &traits()).unwrap(),
            BallPhysics::FirstDisc
        );
        let err = decode_ball_physics(Some(&json!("disc1")), path, &traits()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
    }

    #[test]
    fn test_merge_prepends_synthesized_ball() {
        let supplied = Disc {
            radius: 3.0,
            ..Disc::default()
        };
        let discs = merge_discs(BallPhysics::Synthesized, vec![supplied], &path()).unwrap();
        assert_eq!(discs, vec![Disc::ball(), supplied]);
    }

    #[test]
    fn test_merge_synthesized_ball_needs_discs() {
        let err = merge_discs(BallPhysics::Synthesized, vec![], &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert!(err.to_string().contains("discs"));
    }

    #[test]
    fn test_merge_explicit_ball_stands_alone() {
        let ball = Disc {
            radius: 6.0,
            ..Disc::ball()
        };
        let discs = merge_discs(BallPhysics::Disc(ball), vec![], &path()).unwrap();
        assert_eq!(discs, vec![ball]);
    }

    #[test]
    fn test_merge_disc0_aliases_first() {
        let first = Disc {
            radius: 7.0,
            ..Disc::default()
        };
        let discs = merge_discs(BallPhysics::FirstDisc, vec![first], &path()).unwrap();
        assert_eq!(discs.len(), 1);
        assert_eq!(discs[0].radius, 7.0);
        assert!(discs[0].c_group.contains(Disc::BALL_GROUP));

        let err = merge_discs(BallPhysics::FirstDisc, vec![], &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
    }

    #[test]
    fn test_player_physics() {
        assert_eq!(decode_player_physics(None, FieldPath::root()).unwrap(), None);

        let physics = decode_player_physics(Some(&json!({ "kickStrength": 6.5 })), FieldPath::root())
            .unwrap()
            .unwrap();
        assert_eq!(physics.kick_strength, 6.5);
        assert_eq!(physics.radius, 15.0);
    }
}
