//! Core domain types for hbs.
//!
//! This module contains the stadium model produced by the parser:
//! - `Stadium` - the root, owning every list below
//! - `Trait` / `TraitTable` - named default bundles
//! - `Vertex`, `Segment`, `Goal`, `Plane` - static geometry
//! - `Disc`, `PlayerPhysics`, `Joint` - dynamic bodies and constraints
//! - `Colour`, `CollisionFlags` - shared value types

mod collision;
mod colour;
mod disc;
mod geometry;
mod joint;
mod stadium;
mod token;
mod traits;

pub use collision::CollisionFlags;
pub use colour::Colour;
pub use disc::{Disc, PlayerPhysics};
pub use geometry::{Goal, Plane, Point, Segment, Vertex};
pub use joint::{Joint, JointLength, JointStrength};
pub use stadium::{Background, Stadium};
pub use token::{BackgroundType, CameraFollow, KickOffReset, Team, WireToken};
pub use traits::{Trait, TraitTable};
