//! Validation of the raw positional arguments.

use thiserror::Error;

use crate::core::level::Level;

/// Argument errors reported before any filesystem work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// Name or level missing (or empty).
    #[error("Please provide a name and level (easy, medium, hard).")]
    Usage,
    /// Level present but not one of the known values.
    #[error("Invalid level. Please choose between easy, medium, or hard.")]
    InvalidLevel(String),
}

/// A validated request to create one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Exercise name, relative to the level directory.
    pub name: String,
    pub level: Level,
}

/// Turn the raw positional arguments into an [`Invocation`].
///
/// The presence check runs first, so a missing name with an invalid level
/// still reports [`ArgsError::Usage`]. Leading path separators are stripped
/// from the name so it always lands under the level directory; a name made
/// only of separators counts as missing.
pub fn validate_args(name: Option<&str>, level: Option<&str>) -> Result<Invocation, ArgsError> {
    let name = name.map(|name| name.trim_start_matches(std::path::is_separator));
    let (name, level) = match (non_empty(name), non_empty(level)) {
        (Some(name), Some(level)) => (name, level),
        _ => return Err(ArgsError::Usage),
    };
    let level = level.parse::<Level>()?;
    Ok(Invocation {
        name: name.to_string(),
        level,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_and_level() {
        let invocation = validate_args(Some("00007_readonly"), Some("easy")).expect("valid");
        assert_eq!(
            invocation,
            Invocation {
                name: "00007_readonly".to_string(),
                level: Level::Easy,
            }
        );
    }

    #[test]
    fn missing_arguments_are_usage_errors() {
        assert_eq!(validate_args(None, None), Err(ArgsError::Usage));
        assert_eq!(validate_args(Some("foo"), None), Err(ArgsError::Usage));
        assert_eq!(validate_args(None, Some("easy")), Err(ArgsError::Usage));
    }

    #[test]
    fn empty_arguments_are_usage_errors() {
        assert_eq!(validate_args(Some(""), Some("easy")), Err(ArgsError::Usage));
        assert_eq!(validate_args(Some("foo"), Some("")), Err(ArgsError::Usage));
    }

    #[test]
    fn usage_check_precedes_level_check() {
        assert_eq!(validate_args(None, Some("bogus")), Err(ArgsError::Usage));
    }

    #[test]
    fn unknown_level_is_reported() {
        let err = validate_args(Some("foo"), Some("expert")).expect_err("invalid");
        assert_eq!(err, ArgsError::InvalidLevel("expert".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid level. Please choose between easy, medium, or hard."
        );
    }

    #[test]
    fn absolute_name_is_made_relative() {
        let invocation = validate_args(Some("/tmp/escaped"), Some("easy")).expect("valid");
        assert_eq!(invocation.name, "tmp/escaped");
    }

    #[test]
    fn separator_only_name_is_usage_error() {
        assert_eq!(validate_args(Some("//"), Some("easy")), Err(ArgsError::Usage));
    }

    #[test]
    fn name_is_otherwise_kept_verbatim() {
        let invocation = validate_args(Some("odd name/with slash"), Some("hard")).expect("valid");
        assert_eq!(invocation.name, "odd name/with slash");
    }
}
