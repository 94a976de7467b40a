//! The stadium root and its background.

use super::{
    BackgroundType, CameraFollow, Colour, Disc, Goal, Joint, KickOffReset, Plane, PlayerPhysics,
    Point, Segment, TraitTable, Vertex,
};

/// Decorative field markings drawn behind the bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub kind: BackgroundType,
    pub width: f64,
    pub height: f64,
    pub kick_off_radius: f64,
    pub corner_radius: f64,
    pub goal_line: f64,
    pub colour: Colour,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundType::None,
            width: 0.0,
            height: 0.0,
            kick_off_radius: 0.0,
            corner_radius: 0.0,
            goal_line: 0.0,
            colour: Colour::GRASS,
        }
    }
}

/// A fully resolved stadium.
///
/// Built in one pass by [`crate::parser::parse`] and read-only afterwards.
/// Every list is in document order, and that order is the index space used by
/// segments (into `vertexes`) and joints (into `discs`). `discs[0]` is the
/// ball.
#[derive(Debug, Clone, PartialEq)]
pub struct Stadium {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub camera_width: f64,
    pub camera_height: f64,
    pub max_view_width: f64,
    pub camera_follow: CameraFollow,
    pub spawn_distance: f64,
    pub can_be_stored: bool,
    pub kick_off_reset: KickOffReset,
    pub bg: Background,
    pub traits: TraitTable,
    pub vertexes: Vec<Vertex>,
    pub segments: Vec<Segment>,
    pub goals: Vec<Goal>,
    pub discs: Vec<Disc>,
    pub planes: Vec<Plane>,
    pub joints: Vec<Joint>,
    pub red_spawn_points: Vec<Point>,
    pub blue_spawn_points: Vec<Point>,
    pub player_physics: Option<PlayerPhysics>,
}

impl Stadium {
    /// The ball disc.
    pub fn ball(&self) -> Option<&Disc> {
        self.discs.first()
    }

    /// Discs other than the ball.
    pub fn other_discs(&self) -> &[Disc] {
        self.discs.get(1..).unwrap_or(&[])
    }

    /// The two end vertexes of a segment.
    pub fn segment_ends(&self, segment: &Segment) -> Option<(&Vertex, &Vertex)> {
        Some((self.vertexes.get(segment.v0)?, self.vertexes.get(segment.v1)?))
    }

    /// The two discs a joint connects.
    pub fn joint_discs(&self, joint: &Joint) -> Option<(&Disc, &Disc)> {
        Some((self.discs.get(joint.d0)?, self.discs.get(joint.d1)?))
    }

    /// Player physics, or the built-in defaults when the stadium has none.
    pub fn effective_player_physics(&self) -> PlayerPhysics {
        self.player_physics.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_stadium() -> Stadium {
        Stadium {
            name: "empty".to_string(),
            width: 0.0,
            height: 0.0,
            camera_width: 0.0,
            camera_height: 0.0,
            max_view_width: 0.0,
            camera_follow: CameraFollow::Ball,
            spawn_distance: 0.0,
            can_be_stored: true,
            kick_off_reset: KickOffReset::Partial,
            bg: Background::default(),
            traits: TraitTable::new(),
            vertexes: vec![],
            segments: vec![],
            goals: vec![],
            discs: vec![Disc::ball(), Disc::default()],
            planes: vec![],
            joints: vec![],
            red_spawn_points: vec![],
            blue_spawn_points: vec![],
            player_physics: None,
        }
    }

    #[test]
    fn test_ball_is_first_disc() {
        let stadium = empty_stadium();
        assert_eq!(stadium.ball(), Some(&Disc::ball()));
        assert_eq!(stadium.other_discs().len(), 1);
    }

    #[test]
    fn test_effective_player_physics() {
        let stadium = empty_stadium();
        assert_eq!(stadium.effective_player_physics().radius, 15.0);
    }

    #[test]
    fn test_background_default_colour() {
        assert_eq!(Background::default().colour, Colour::rgb(0x71, 0x8c, 0x5a));
    }
}
