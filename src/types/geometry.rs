//! Static field geometry: vertexes, segments, goals and planes.

use super::{CollisionFlags, Colour, Team};

/// A bare 2D coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A collidable point that segments connect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub b_coef: f64,
    pub c_group: CollisionFlags,
    pub c_mask: CollisionFlags,
}

impl Vertex {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A wall between two vertexes, straight or curved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index into the stadium's vertex list.
    pub v0: usize,
    /// Index into the stadium's vertex list.
    pub v1: usize,
    pub b_coef: f64,
    /// Arc angle in degrees; 0 is a straight line.
    pub curve: f64,
    pub bias: f64,
    pub vis: bool,
    pub colour: Colour,
    pub c_group: CollisionFlags,
    pub c_mask: CollisionFlags,
}

impl Segment {
    pub fn is_curved(&self) -> bool {
        self.curve != 0.0
    }
}

/// A scoring line owned by one team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub p0: Point,
    pub p1: Point,
    /// Always red or blue.
    pub team: Team,
}

/// An infinite collision half-plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Point,
    pub dist: f64,
    pub b_coef: f64,
    pub c_group: CollisionFlags,
    pub c_mask: CollisionFlags,
}
