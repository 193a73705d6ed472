//! Event category as the single source of truth for category names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The three fixed event classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Personal,
    Timetable,
    Zoom,
}

impl Category {
    /// Every category, in the order lists are visited.
    pub const ALL: [Self; 3] = [Self::Personal, Self::Timetable, Self::Zoom];

    /// Canonical name, also used for database storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Timetable => "Timetable",
            Self::Zoom => "Zoom",
        }
    }

    /// Single-letter tag shown in listings.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Personal => 'P',
            Self::Timetable => 'T',
            Self::Zoom => 'Z',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capitalizes the first character and lowercases the rest.
fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s.trim()).as_str() {
            "Personal" => Ok(Self::Personal),
            "Timetable" => Ok(Self::Timetable),
            "Zoom" => Ok(Self::Zoom),
            _ => Err(Error::UnrecognizedCategory(s.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
