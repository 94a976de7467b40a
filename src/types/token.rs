//! Closed string enums used on the wire.

/// A fieldless enum spelled as one of a fixed, case-sensitive set of strings.
pub trait WireToken: Copy + PartialEq + 'static {
    /// Every accepted spelling and the value it decodes to. The first
    /// spelling listed for a value is the one written back out.
    const TOKENS: &'static [(&'static str, Self)];

    fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| *value)
    }

    fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Comma separated list of accepted spellings, for help text.
    fn expected() -> String {
        Self::TOKENS
            .iter()
            .map(|(name, _)| format!("\"{}\"", name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which body the camera tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFollow {
    #[default]
    Ball,
    Player,
}

impl WireToken for CameraFollow {
    const TOKENS: &'static [(&'static str, Self)] =
        &[("ball", Self::Ball), ("player", Self::Player)];
}

/// How bodies are reset after a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KickOffReset {
    #[default]
    Partial,
    Full,
}

impl WireToken for KickOffReset {
    const TOKENS: &'static [(&'static str, Self)] =
        &[("partial", Self::Partial), ("full", Self::Full)];
}

/// Background texture drawn behind the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundType {
    #[default]
    None,
    Grass,
    Hockey,
}

impl WireToken for BackgroundType {
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("grass", Self::Grass),
        ("hockey", Self::Hockey),
    ];
}

/// A team token. Goals only accept red or blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Red,
    Blue,
    Spectator,
}

impl WireToken for Team {
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("red", Self::Red),
        ("blue", Self::Blue),
        ("spect", Self::Spectator),
        ("spectator", Self::Spectator),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_tokens() {
        assert_eq!(CameraFollow::from_token("player"), Some(CameraFollow::Player));
        assert_eq!(KickOffReset::Full.token(), "full");
        assert_eq!(BackgroundType::from_token("hockey"), Some(BackgroundType::Hockey));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(CameraFollow::from_token("Ball"), None);
        assert_eq!(BackgroundType::from_token("GRASS"), None);
    }

    #[test]
    fn test_team_aliases() {
        assert_eq!(Team::from_token("spect"), Some(Team::Spectator));
        assert_eq!(Team::from_token("spectator"), Some(Team::Spectator));
        assert_eq!(Team::Spectator.token(), "spect");
    }

    #[test]
    fn test_expected_lists_tokens() {
        assert_eq!(KickOffReset::expected(), "\"partial\", \"full\"");
    }
}
