//! The part attribute: which class of platform a name describes

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// CPE part attribute
///
/// A name describes an application, an operating system, or a hardware
/// device. `NotSet` is the state of a freshly constructed name: it renders
/// as absent and compares as undefined, but is not accepted by the strict
/// setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Application ('a')
    Application,
    /// Operating system ('o')
    OperatingSystem,
    /// Hardware device ('h')
    Hardware,
    /// No part assigned
    #[default]
    NotSet,
}

impl Part {
    /// True for the three concrete machine classes
    pub fn is_valid(&self) -> bool {
        !matches!(self, Part::NotSet)
    }

    /// True when the attribute carries no value
    pub fn is_empty(&self) -> bool {
        matches!(self, Part::NotSet)
    }

    /// The single-letter form used by every binding, or None for `NotSet`
    pub fn letter(&self) -> Option<&'static str> {
        match self {
            Part::Application => Some("a"),
            Part::OperatingSystem => Some("o"),
            Part::Hardware => Some("h"),
            Part::NotSet => None,
        }
    }

    /// Parse the single-letter form
    pub fn from_letter(s: &str) -> Result<Self> {
        match s {
            "a" => Ok(Part::Application),
            "o" => Ok(Part::OperatingSystem),
            "h" => Ok(Part::Hardware),
            _ => Err(Error::InvalidPart(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trip() {
        for part in [Part::Application, Part::OperatingSystem, Part::Hardware] {
            let letter = part.letter().unwrap();
            assert_eq!(Part::from_letter(letter).unwrap(), part);
        }
    }

    #[test]
    fn test_not_set_is_empty_and_invalid() {
        assert!(Part::NotSet.is_empty());
        assert!(!Part::NotSet.is_valid());
        assert_eq!(Part::NotSet.letter(), None);
        assert_eq!(Part::default(), Part::NotSet);
    }

    #[test]
    fn test_bad_letter() {
        assert!(matches!(
            Part::from_letter("x"),
            Err(Error::InvalidPart(_))
        ));
        assert!(Part::from_letter("").is_err());
        assert!(Part::from_letter("aa").is_err());
    }
}
