//! Decoders for static geometry: vertexes, segments, goals, planes and spawn
//! points.
//!
//! Trait-overridable properties resolve per property: the entity's own value,
//! then its trait's value, then the built-in default.

use serde_json::Value;

use crate::error::{HbsError, Result};
use crate::types::{Colour, Goal, Plane, Point, Segment, Team, TraitTable, Vertex};

use super::node::ObjectNode;
use super::path::FieldPath;
use super::scalar::decode_point;
use super::traits::resolve_trait;

pub fn decode_vertex(value: &Value, path: FieldPath, traits: &TraitTable) -> Result<Vertex> {
    let obj = ObjectNode::new(value, path)?;
    let t = resolve_trait(&obj, traits)?;

    Ok(Vertex {
        x: obj.number("x", None)?,
        y: obj.number("y", None)?,
        b_coef: obj.number("bCoef", Some(t.and_then(|t| t.b_coef).unwrap_or(0.0)))?,
        c_group: obj.flags("cGroup", Some(t.and_then(|t| t.c_group).unwrap_or_default()))?,
        c_mask: obj.flags("cMask", Some(t.and_then(|t| t.c_mask).unwrap_or_default()))?,
    })
}

/// Decode a segment whose ends index into `vertex_count` decoded vertexes.
pub fn decode_segment(
    value: &Value,
    path: FieldPath,
    traits: &TraitTable,
    vertex_count: usize,
) -> Result<Segment> {
    let obj = ObjectNode::new(value, path)?;
    let t = resolve_trait(&obj, traits)?;

    Ok(Segment {
        v0: obj.index("v0", vertex_count)?,
        v1: obj.index("v1", vertex_count)?,
        b_coef: obj.number("bCoef", Some(t.and_then(|t| t.b_coef).unwrap_or(1.0)))?,
        curve: obj.number("curve", Some(t.and_then(|t| t.curve).unwrap_or(0.0)))?,
        bias: obj.number("bias", Some(0.0))?,
        vis: obj.boolean("vis", Some(t.and_then(|t| t.vis).unwrap_or(true)))?,
        colour: obj.colour("color", Some(t.and_then(|t| t.colour).unwrap_or(Colour::BLACK)))?,
        c_group: obj.flags("cGroup", Some(t.and_then(|t| t.c_group).unwrap_or_default()))?,
        c_mask: obj.flags("cMask", Some(t.and_then(|t| t.c_mask).unwrap_or_default()))?,
    })
}

/// Decode a goal. Only red and blue may own one.
pub fn decode_goal(value: &Value, path: FieldPath) -> Result<Goal> {
    let obj = ObjectNode::new(value, path)?;

    let p0 = obj.point("p0", None)?;
    let p1 = obj.point("p1", None)?;
    let team: Team = obj.token("team", None)?;

    if team == Team::Spectator {
        return Err(HbsError::InvalidTeam {
            field: obj.field("team").to_string(),
            team: obj.string("team", None)?,
        });
    }

    Ok(Goal { p0, p1, team })
}

pub fn decode_plane(value: &Value, path: FieldPath, traits: &TraitTable) -> Result<Plane> {
    let obj = ObjectNode::new(value, path)?;
    let t = resolve_trait(&obj, traits)?;

    Ok(Plane {
        normal: obj.point("normal", None)?,
        dist: obj.number("dist", None)?,
        b_coef: obj.number("bCoef", Some(t.and_then(|t| t.b_coef).unwrap_or(1.0)))?,
        c_group: obj.flags("cGroup", Some(t.and_then(|t| t.c_group).unwrap_or_default()))?,
        c_mask: obj.flags("cMask", Some(t.and_then(|t| t.c_mask).unwrap_or_default()))?,
    })
}

pub fn decode_spawn_point(value: &Value, path: FieldPath) -> Result<Point> {
    decode_point(Some(value), None, &path)
}
