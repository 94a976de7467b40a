//! Dynamic bodies: discs, the ball, and player physics.

use super::{CollisionFlags, Colour, Point};

/// A circular rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub pos: Point,
    pub speed: Point,
    pub gravity: Point,
    pub radius: f64,
    pub inv_mass: f64,
    pub damping: f64,
    pub colour: Colour,
    pub b_coef: f64,
    pub c_group: CollisionFlags,
    pub c_mask: CollisionFlags,
}

impl Disc {
    /// Collision layers every ball disc belongs to, whatever the file says.
    pub const BALL_GROUP: CollisionFlags = CollisionFlags::BALL
        .union(CollisionFlags::KICK)
        .union(CollisionFlags::SCORE);

    /// The ball used when a stadium does not describe one.
    pub fn ball() -> Self {
        Self {
            inv_mass: 1.0,
            c_group: Self::BALL_GROUP,
            c_mask: CollisionFlags::ALL,
            ..Self::default()
        }
    }

    /// Mass derived from the inverse mass; static discs are infinitely heavy.
    pub fn mass(&self) -> f64 {
        if self.inv_mass == 0.0 {
            f64::INFINITY
        } else {
            1.0 / self.inv_mass
        }
    }
}

impl Default for Disc {
    fn default() -> Self {
        Self {
            pos: Point::ORIGIN,
            speed: Point::ORIGIN,
            gravity: Point::ORIGIN,
            radius: 10.0,
            inv_mass: 0.0,
            damping: 0.99,
            colour: Colour::WHITE,
            b_coef: 0.5,
            c_group: CollisionFlags::empty(),
            c_mask: CollisionFlags::empty(),
        }
    }
}

/// Physical properties shared by every player disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPhysics {
    pub gravity: Point,
    pub radius: f64,
    pub inv_mass: f64,
    pub b_coef: f64,
    pub damping: f64,
    pub c_group: CollisionFlags,
    pub acceleration: f64,
    pub kicking_acceleration: f64,
    pub kicking_damping: f64,
    pub kick_strength: f64,
    pub kickback: f64,
}

impl Default for PlayerPhysics {
    fn default() -> Self {
        Self {
            gravity: Point::ORIGIN,
            radius: 15.0,
            inv_mass: 0.5,
            b_coef: 0.5,
            damping: 0.96,
            c_group: CollisionFlags::empty(),
            acceleration: 0.1,
            kicking_acceleration: 0.07,
            kicking_damping: 0.96,
            kick_strength: 5.0,
            kickback: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_defaults() {
        let ball = Disc::ball();
        assert_eq!(ball.radius, 10.0);
        assert_eq!(ball.inv_mass, 1.0);
        assert!(ball.c_group.contains(CollisionFlags::KICK | CollisionFlags::SCORE));
        assert_eq!(ball.c_mask, CollisionFlags::ALL);
    }

    #[test]
    fn test_mass() {
        assert_eq!(Disc::ball().mass(), 1.0);
        assert!(Disc::default().mass().is_infinite());
    }
}
