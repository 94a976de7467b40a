//! Stadium decoding.
//!
//! Turns stadium JSON into a fully resolved [`Stadium`]: trait references are
//! applied, cross-references are bounds checked, and the ball disc is placed
//! at index 0. Decoding is fail-fast; the first problem is returned with the
//! path of the field that caused it.
//!
//! # Usage
//!
//! ```ignore
//! use hbs::parser::load;
//!
//! let stadium = load(Path::new("stadiums/classic.hbs"))?;
//! println!("{} has {} segments", stadium.name, stadium.segments.len());
//! ```

mod background;
mod disc;
mod geometry;
mod joint;
mod node;
mod path;
mod scalar;
mod stadium;
mod traits;

use std::path::Path;

use tracing::debug;

use crate::error::{HbsError, Result};
use crate::types::Stadium;

pub use background::decode_background;
pub use disc::{decode_ball_physics, decode_disc, decode_player_physics, merge_discs, BallPhysics};
pub use geometry::{decode_goal, decode_plane, decode_segment, decode_spawn_point, decode_vertex};
pub use joint::{decode_joint, decode_joint_length, decode_joint_strength};
pub use node::ObjectNode;
pub use path::FieldPath;
pub use scalar::{
    decode_boolean, decode_collision_flag_token, decode_collision_flags, decode_colour, decode_enum,
    decode_index, decode_number, decode_point, decode_string, kind_name,
};
pub use stadium::decode_stadium;
pub use traits::{decode_trait, decode_trait_table, resolve_trait};

/// Parse stadium JSON text.
pub fn parse(text: &str) -> Result<Stadium> {
    let root: serde_json::Value = serde_json::from_str(text).map_err(|e| HbsError::MalformedJson {
        message: e.to_string(),
    })?;
    decode_stadium(&root)
}

/// Read a stadium file and parse it.
pub fn load(path: &Path) -> Result<Stadium> {
    let text = std::fs::read_to_string(path).map_err(|e| HbsError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded stadium file");
    parse(&text)
}
