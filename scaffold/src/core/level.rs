//! Difficulty levels and their root directories.

use std::fmt;
use std::str::FromStr;

use crate::core::args::ArgsError;

/// Difficulty classification of an exercise.
///
/// Each level doubles as the name of the top-level directory that holds its
/// exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Level string, also the directory name under the project root.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ArgsError;

    /// Exact, case-sensitive match.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            other => Err(ArgsError::InvalidLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_level() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().expect("parse"), level);
        }
    }

    #[test]
    fn rejects_other_casing() {
        let err = "Easy".parse::<Level>().expect_err("should reject");
        assert_eq!(err, ArgsError::InvalidLevel("Easy".to_string()));
    }

    #[test]
    fn rejects_unknown_and_padded_values() {
        assert!("extreme".parse::<Level>().is_err());
        assert!(" hard".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn display_matches_level_string() {
        assert_eq!(Level::Medium.as_str(), "medium");
        assert_eq!(Level::Hard.to_string(), "hard");
    }
}
