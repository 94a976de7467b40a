//! Collision group/mask flags.

use bitflags::bitflags;

bitflags! {
    /// Bitset over the named collision layers shared by every collidable body.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionFlags: u32 {
        const BALL = 1 << 0;
        const RED = 1 << 1;
        const BLUE = 1 << 2;
        const RED_KO = 1 << 3;
        const BLUE_KO = 1 << 4;
        const WALL = 1 << 5;
        /// Aggregate of the first six layers.
        const ALL = (1 << 6) - 1;
        const KICK = 1 << 6;
        const SCORE = 1 << 7;
        const C0 = 1 << 28;
        const C1 = 1 << 29;
        const C2 = 1 << 30;
        const C3 = 1 << 31;
    }
}

/// Single-bit tokens in canonical output order.
const NAMED: &[(&str, CollisionFlags)] = &[
    ("ball", CollisionFlags::BALL),
    ("red", CollisionFlags::RED),
    ("blue", CollisionFlags::BLUE),
    ("redKO", CollisionFlags::RED_KO),
    ("blueKO", CollisionFlags::BLUE_KO),
    ("wall", CollisionFlags::WALL),
    ("kick", CollisionFlags::KICK),
    ("score", CollisionFlags::SCORE),
    ("c0", CollisionFlags::C0),
    ("c1", CollisionFlags::C1),
    ("c2", CollisionFlags::C2),
    ("c3", CollisionFlags::C3),
];

impl CollisionFlags {
    /// Look up a single wire token. `"all"` maps to the aggregate mask.
    /// Tokens are case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "all" {
            return Some(Self::ALL);
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, flag)| *flag)
    }

    /// Expand into wire tokens.
    ///
    /// When every bit of the aggregate is set it is emitted as `"all"`,
    /// followed by any bits outside the aggregate.
    pub fn to_tokens(self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        let mut rest = self;

        if self.contains(Self::ALL) {
            tokens.push("all");
            rest.remove(Self::ALL);
        }

        for (name, flag) in NAMED {
            if rest.contains(*flag) {
                tokens.push(name);
            }
        }

        tokens
    }

    /// Every token accepted by [`CollisionFlags::from_token`].
    pub fn token_names() -> impl Iterator<Item = &'static str> {
        std::iter::once("all").chain(NAMED.iter().map(|(name, _)| *name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(CollisionFlags::from_token("red"), Some(CollisionFlags::RED));
        assert_eq!(
            CollisionFlags::from_token("redKO"),
            Some(CollisionFlags::RED_KO)
        );
        assert_eq!(CollisionFlags::from_token("all"), Some(CollisionFlags::ALL));
        assert_eq!(CollisionFlags::from_token("Red"), None);
        assert_eq!(CollisionFlags::from_token("c4"), None);
    }

    #[test]
    fn test_all_spans_first_six() {
        let six = CollisionFlags::BALL
            | CollisionFlags::RED
            | CollisionFlags::BLUE
            | CollisionFlags::RED_KO
            | CollisionFlags::BLUE_KO
            | CollisionFlags::WALL;
        assert_eq!(CollisionFlags::ALL, six);
        assert!(!CollisionFlags::ALL.contains(CollisionFlags::KICK));
    }

    #[test]
    fn test_to_tokens_aggregate() {
        let flags = CollisionFlags::ALL | CollisionFlags::C0;
        assert_eq!(flags.to_tokens(), vec!["all", "c0"]);
    }

    #[test]
    fn test_to_tokens_partial() {
        let flags = CollisionFlags::RED | CollisionFlags::KICK;
        assert_eq!(flags.to_tokens(), vec!["red", "kick"]);
        assert!(CollisionFlags::empty().to_tokens().is_empty());
    }

    #[test]
    fn test_c3_is_high_bit() {
        assert_eq!(CollisionFlags::C3.bits(), 0x8000_0000);
    }
}
