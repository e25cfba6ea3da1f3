use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strictness level applied when deciding whether a token is offending.
///
/// The levels are mutually exclusive. `Strict` and `Moderate` additionally
/// consult the character-substitution table, so `d4mn` matches a blocked
/// `damn`; `Lenient` counts exact normalized matches only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLevel {
    Strict,
    Moderate,
    Lenient,
}

impl FilterLevel {
    /// The wire and CLI name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Moderate => "moderate",
            Self::Lenient => "lenient",
        }
    }
}

impl Default for FilterLevel {
    fn default() -> Self {
        Self::Moderate
    }
}

impl fmt::Display for FilterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterLevel {
    type Err = ValidationError;

    /// Parses a level name, case-insensitively. Unrecognized input fails
    /// validation here, before it can reach engine state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "moderate" => Ok(Self::Moderate),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ValidationError::UnknownLevel {
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("strict".parse::<FilterLevel>().unwrap(), FilterLevel::Strict);
        assert_eq!(
            "Moderate".parse::<FilterLevel>().unwrap(),
            FilterLevel::Moderate
        );
        assert_eq!(
            "LENIENT".parse::<FilterLevel>().unwrap(),
            FilterLevel::Lenient
        );
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "medium".parse::<FilterLevel>(),
            Err(ValidationError::UnknownLevel { .. })
        ));
        assert!("".parse::<FilterLevel>().is_err());
    }

    #[test]
    fn wire_form() {
        assert_eq!(serde_json::to_string(&FilterLevel::Strict).unwrap(), "\"strict\"");
        assert_eq!(
            serde_json::from_str::<FilterLevel>("\"lenient\"").unwrap(),
            FilterLevel::Lenient
        );
        assert_eq!(FilterLevel::Moderate.to_string(), "moderate");
    }
}
