//! Stadium encoding.
//!
//! Each encoder writes the resolved values of one entity. Trait references
//! are never written back: every property an entity ended up with is emitted
//! explicitly, so the output parses to an equal model with or without the
//! trait table.
//!
//! The ball is written as an explicit `ballPhysics` object and `discs` holds
//! the remaining discs, which keeps disc indices stable across a round trip.

use serde_json::{json, Map, Value};

use crate::types::{
    Background, CollisionFlags, Colour, Disc, Goal, Joint, JointLength, JointStrength, Plane,
    PlayerPhysics, Point, Segment, Stadium, Trait, TraitTable, Vertex, WireToken,
};

pub fn encode_colour(colour: Colour) -> Value {
    Value::String(colour.to_string())
}

pub fn encode_flags(flags: CollisionFlags) -> Value {
    json!(flags.to_tokens())
}

pub fn encode_point(point: Point) -> Value {
    json!([point.x, point.y])
}

/// Encode a trait's present properties.
pub fn encode_trait(t: &Trait) -> Value {
    let mut map = Map::new();

    if let Some(v) = t.curve {
        map.insert("curve".into(), json!(v));
    }
    if let Some(v) = t.damping {
        map.insert("damping".into(), json!(v));
    }
    if let Some(v) = t.inv_mass {
        map.insert("invMass".into(), json!(v));
    }
    if let Some(v) = t.radius {
        map.insert("radius".into(), json!(v));
    }
    if let Some(v) = t.b_coef {
        map.insert("bCoef".into(), json!(v));
    }
    if let Some(v) = t.colour {
        map.insert("color".into(), encode_colour(v));
    }
    if let Some(v) = t.vis {
        map.insert("vis".into(), json!(v));
    }
    if let Some(v) = t.c_group {
        map.insert("cGroup".into(), encode_flags(v));
    }
    if let Some(v) = t.c_mask {
        map.insert("cMask".into(), encode_flags(v));
    }

    Value::Object(map)
}

pub fn encode_trait_table(traits: &TraitTable) -> Value {
    Value::Object(
        traits
            .iter()
            .map(|t| (t.name.clone(), encode_trait(t)))
            .collect(),
    )
}

pub fn encode_background(bg: &Background) -> Value {
    json!({
        "type": bg.kind.token(),
        "width": bg.width,
        "height": bg.height,
        "kickOffRadius": bg.kick_off_radius,
        "cornerRadius": bg.corner_radius,
        "goalLine": bg.goal_line,
        "color": encode_colour(bg.colour),
    })
}

pub fn encode_vertex(v: &Vertex) -> Value {
    json!({
        "x": v.x,
        "y": v.y,
        "bCoef": v.b_coef,
        "cGroup": encode_flags(v.c_group),
        "cMask": encode_flags(v.c_mask),
    })
}

pub fn encode_segment(s: &Segment) -> Value {
    json!({
        "v0": s.v0,
        "v1": s.v1,
        "bCoef": s.b_coef,
        "curve": s.curve,
        "bias": s.bias,
        "vis": s.vis,
        "color": encode_colour(s.colour),
        "cGroup": encode_flags(s.c_group),
        "cMask": encode_flags(s.c_mask),
    })
}

pub fn encode_goal(g: &Goal) -> Value {
    json!({
        "p0": encode_point(g.p0),
        "p1": encode_point(g.p1),
        "team": g.team.token(),
    })
}

pub fn encode_disc(d: &Disc) -> Value {
    json!({
        "pos": encode_point(d.pos),
        "speed": encode_point(d.speed),
        "gravity": encode_point(d.gravity),
        "radius": d.radius,
        "invMass": d.inv_mass,
        "damping": d.damping,
        "color": encode_colour(d.colour),
        "bCoef": d.b_coef,
        "cGroup": encode_flags(d.c_group),
        "cMask": encode_flags(d.c_mask),
    })
}

pub fn encode_plane(p: &Plane) -> Value {
    json!({
        "normal": encode_point(p.normal),
        "dist": p.dist,
        "bCoef": p.b_coef,
        "cGroup": encode_flags(p.c_group),
        "cMask": encode_flags(p.c_mask),
    })
}

pub fn encode_joint_length(length: JointLength) -> Value {
    match length {
        JointLength::Fixed(len) => json!(len),
        JointLength::Range { min, max } => json!([min, max]),
        JointLength::Auto => Value::Null,
    }
}

pub fn encode_joint_strength(strength: JointStrength) -> Value {
    match strength {
        JointStrength::Rigid => json!("rigid"),
        JointStrength::Spring(k) => json!(k),
    }
}

pub fn encode_joint(j: &Joint) -> Value {
    json!({
        "d0": j.d0,
        "d1": j.d1,
        "length": encode_joint_length(j.length),
        "strength": encode_joint_strength(j.strength),
        "color": encode_colour(j.colour),
    })
}

pub fn encode_player_physics(p: &PlayerPhysics) -> Value {
    json!({
        "gravity": encode_point(p.gravity),
        "radius": p.radius,
        "invMass": p.inv_mass,
        "bCoef": p.b_coef,
        "damping": p.damping,
        "cGroup": encode_flags(p.c_group),
        "acceleration": p.acceleration,
        "kickingAcceleration": p.kicking_acceleration,
        "kickingDamping": p.kicking_damping,
        "kickStrength": p.kick_strength,
        "kickback": p.kickback,
    })
}

/// Encode a whole stadium as a JSON tree.
pub fn to_value(stadium: &Stadium) -> Value {
    let mut map = Map::new();

    map.insert("name".into(), json!(stadium.name));
    map.insert("width".into(), json!(stadium.width));
    map.insert("height".into(), json!(stadium.height));
    map.insert("cameraWidth".into(), json!(stadium.camera_width));
    map.insert("cameraHeight".into(), json!(stadium.camera_height));
    map.insert("maxViewWidth".into(), json!(stadium.max_view_width));
    map.insert("cameraFollow".into(), json!(stadium.camera_follow.token()));
    map.insert("spawnDistance".into(), json!(stadium.spawn_distance));
    map.insert("canBeStored".into(), json!(stadium.can_be_stored));
    map.insert("kickOffReset".into(), json!(stadium.kick_off_reset.token()));
    map.insert("bg".into(), encode_background(&stadium.bg));
    map.insert("traits".into(), encode_trait_table(&stadium.traits));
    map.insert("vertexes".into(), stadium.vertexes.iter().map(encode_vertex).collect());
    map.insert("segments".into(), stadium.segments.iter().map(encode_segment).collect());
    map.insert("goals".into(), stadium.goals.iter().map(encode_goal).collect());
    if let Some(ball) = stadium.ball() {
        map.insert("ballPhysics".into(), encode_disc(ball));
    }
    map.insert("discs".into(), stadium.other_discs().iter().map(encode_disc).collect());
    map.insert("planes".into(), stadium.planes.iter().map(encode_plane).collect());
    map.insert("joints".into(), stadium.joints.iter().map(encode_joint).collect());
    map.insert(
        "redSpawnPoints".into(),
        stadium.red_spawn_points.iter().copied().map(encode_point).collect(),
    );
    map.insert(
        "blueSpawnPoints".into(),
        stadium.blue_spawn_points.iter().copied().map(encode_point).collect(),
    );
    if let Some(physics) = &stadium.player_physics {
        map.insert("playerPhysics".into(), encode_player_physics(physics));
    }

    Value::Object(map)
}

/// Canonical pretty-printed JSON.
pub fn serialize(stadium: &Stadium) -> String {
    format!("{:#}", to_value(stadium))
}

/// Canonical JSON on one line.
pub fn serialize_compact(stadium: &Stadium) -> String {
    to_value(stadium).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::types::Team;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_vertex() {
        let v = Vertex {
            x: 1.0,
            y: -2.0,
            b_coef: 0.5,
            c_group: CollisionFlags::empty(),
            c_mask: CollisionFlags::BALL | CollisionFlags::RED,
        };
        insta::assert_snapshot!(
            encode_vertex(&v).to_string(),
            @r#"{"x":1.0,"y":-2.0,"bCoef":0.5,"cGroup":[],"cMask":["ball","red"]}"#
        );
    }

    #[test]
    fn test_encode_trait_only_present() {
        let t = Trait {
            b_coef: Some(0.1),
            c_mask: Some(CollisionFlags::ALL),
            ..Trait::new("ballArea")
        };
        insta::assert_snapshot!(encode_trait(&t).to_string(), @r#"{"bCoef":0.1,"cMask":["all"]}"#);
    }

    #[test]
    fn test_encode_goal() {
        let g = Goal {
            p0: Point::new(-700.0, 85.0),
            p1: Point::new(-700.0, -85.0),
            team: Team::Red,
        };
        assert_eq!(
            encode_goal(&g),
            json!({ "p0": [-700.0, 85.0], "p1": [-700.0, -85.0], "team": "red" })
        );
    }

    #[test]
    fn test_encode_joint_forms() {
        assert_eq!(encode_joint_length(JointLength::Auto), Value::Null);
        assert_eq!(encode_joint_length(JointLength::Range { min: 1.0, max: 2.0 }), json!([1.0, 2.0]));
        assert_eq!(encode_joint_strength(JointStrength::Rigid), json!("rigid"));
        assert_eq!(encode_joint_strength(JointStrength::Spring(0.5)), json!(0.5));
    }

    #[test]
    fn test_encode_colours() {
        assert_eq!(encode_colour(Colour::TRANSPARENT), json!("transparent"));
        assert_eq!(encode_colour(Colour::GRASS), json!("718C5A"));
        assert_eq!(encode_colour(Colour::new(255, 255, 255, 0x40)), json!("40FFFFFF"));
    }

    #[test]
    fn test_stadium_round_trip() {
        let text = r#"{
            "name": "Round",
            "width": 420,
            "traits": { "post": { "radius": 8, "invMass": 0, "color": "ccccff" } },
            "vertexes": [{ "x": -10, "y": 0, "cMask": ["all", "c1"] }, { "x": 10, "y": 0 }],
            "segments": [{ "v0": 0, "v1": 1, "curve": 90, "color": "transparent" }],
            "goals": [{ "p0": [0, 1], "p1": [0, -1], "team": "blue" }],
            "discs": [{ "pos": [5, 5], "trait": "post" }],
            "planes": [{ "normal": [0, -1], "dist": -200 }],
            "joints": [{ "d0": 0, "d1": 1, "length": [10, 20], "strength": 0.2 }],
            "redSpawnPoints": [[-50, 0]],
            "playerPhysics": { "kickStrength": 6 }
        }"#;

        let stadium = parse(text).unwrap();
        let again = parse(&serialize(&stadium)).unwrap();
        assert_eq!(again, stadium);

        let compact = parse(&serialize_compact(&stadium)).unwrap();
        assert_eq!(compact, stadium);
    }

    #[test]
    fn test_disc0_round_trip() {
        let text = r#"{
            "name": "Alias",
            "ballPhysics": "disc0",
            "discs": [{ "radius": 6.25, "invMass": 1.5 }, { "pos": [30, 0] }]
        }"#;

        let stadium = parse(text).unwrap();
        assert_eq!(stadium.discs.len(), 2);

        let again = parse(&serialize(&stadium)).unwrap();
        assert_eq!(again, stadium);
    }
}
