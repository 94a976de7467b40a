//! Stadium assembly.
//!
//! Stages run in dependency order, and each later stage only sees lists that
//! already decoded cleanly. The first failure aborts the whole parse.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::types::{CameraFollow, KickOffReset, Stadium};

use super::background::decode_background;
use super::disc::{decode_ball_physics, decode_disc, decode_player_physics, merge_discs, BallPhysics};
use super::geometry::{decode_goal, decode_plane, decode_segment, decode_spawn_point, decode_vertex};
use super::joint::decode_joint;
use super::node::ObjectNode;
use super::path::FieldPath;
use super::traits::decode_trait_table;

/// Decode a stadium from a JSON tree.
pub fn decode_stadium(root: &Value) -> Result<Stadium> {
    let obj = ObjectNode::new(root, FieldPath::root())?;

    let name = obj.string("name", None)?;
    debug!(name = %name, "decoding stadium");

    let width = obj.number("width", Some(0.0))?;
    let height = obj.number("height", Some(0.0))?;
    let camera_width = obj.number("cameraWidth", Some(0.0))?;
    let camera_height = obj.number("cameraHeight", Some(0.0))?;
    let max_view_width = obj.number("maxViewWidth", Some(0.0))?;
    let camera_follow = obj.token("cameraFollow", Some(CameraFollow::default()))?;
    let spawn_distance = obj.number("spawnDistance", Some(0.0))?;
    let can_be_stored = obj.boolean("canBeStored", Some(true))?;
    let kick_off_reset = obj.token("kickOffReset", Some(KickOffReset::default()))?;
    let bg = decode_background(obj.get("bg"), obj.field("bg"))?;

    let traits = decode_trait_table(obj.get("traits"), obj.field("traits"))?;
    debug!(count = traits.len(), "traits");

    let vertexes = obj.list("vertexes", |v, p| decode_vertex(v, p, &traits))?;
    debug!(count = vertexes.len(), "vertexes");

    let segments = obj.list("segments", |v, p| decode_segment(v, p, &traits, vertexes.len()))?;
    debug!(count = segments.len(), "segments");

    let goals = obj.list("goals", decode_goal)?;
    debug!(count = goals.len(), "goals");

    let ball = decode_ball_physics(obj.get("ballPhysics"), obj.field("ballPhysics"), &traits)?;
    debug!(source = %ball_source(&ball), "ball physics");

    let discs = obj.list("discs", |v, p| decode_disc(v, p, &traits))?;
    let discs = merge_discs(ball, discs, &obj.field("discs"))?;
    debug!(count = discs.len(), "discs");

    let planes = obj.list("planes", |v, p| decode_plane(v, p, &traits))?;
    debug!(count = planes.len(), "planes");

    let joints = obj.list("joints", |v, p| decode_joint(v, p, discs.len()))?;
    debug!(count = joints.len(), "joints");

    let red_spawn_points = obj.list("redSpawnPoints", decode_spawn_point)?;
    let blue_spawn_points = obj.list("blueSpawnPoints", decode_spawn_point)?;
    debug!(
        red = red_spawn_points.len(),
        blue = blue_spawn_points.len(),
        "spawn points"
    );

    let player_physics = decode_player_physics(obj.get("playerPhysics"), obj.field("playerPhysics"))?;

    Ok(Stadium {
        name,
        width,
        height,
        camera_width,
        camera_height,
        max_view_width,
        camera_follow,
        spawn_distance,
        can_be_stored,
        kick_off_reset,
        bg,
        traits,
        vertexes,
        segments,
        goals,
        discs,
        planes,
        joints,
        red_spawn_points,
        blue_spawn_points,
        player_physics,
    })
}

fn ball_source(ball: &BallPhysics) -> &'static str {
    match ball {
        BallPhysics::Disc(_) => "object",
        BallPhysics::Synthesized => "default",
        BallPhysics::FirstDisc => "disc0",
    }
}
