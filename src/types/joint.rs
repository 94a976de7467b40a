//! Distance constraints between discs.

use super::Colour;

/// Rest length of a joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointLength {
    Fixed(f64),
    Range { min: f64, max: f64 },
    /// Taken from the discs' initial distance when the simulation starts.
    Auto,
}

/// How hard a joint pulls back toward its length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JointStrength {
    #[default]
    Rigid,
    Spring(f64),
}

/// A joint between two discs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Index into the stadium's final disc list (ball at 0).
    pub d0: usize,
    /// Index into the stadium's final disc list (ball at 0).
    pub d1: usize,
    pub length: JointLength,
    pub strength: JointStrength,
    pub colour: Colour,
}

impl JointLength {
    /// The fixed length or range bounds, if the length is not automatic.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            JointLength::Fixed(len) => Some((len, len)),
            JointLength::Range { min, max } => Some((min, max)),
            JointLength::Auto => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(JointLength::Fixed(5.0).bounds(), Some((5.0, 5.0)));
        assert_eq!(
            JointLength::Range { min: 10.0, max: 20.0 }.bounds(),
            Some((10.0, 20.0))
        );
        assert_eq!(JointLength::Auto.bounds(), None);
    }

    #[test]
    fn test_default_strength_is_rigid() {
        assert_eq!(JointStrength::default(), JointStrength::Rigid);
    }
}
