//! The fixed set of selectable sections.

use crate::error::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable area of the application.
///
/// The set is closed: every value of this type is a valid selection and
/// every `match` over it is checked for exhaustiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Roles,
    Teams,
    People,
}

impl Section {
    /// All sections in menu order.
    pub const ALL: [Self; 3] = [Self::Roles, Self::Teams, Self::People];

    /// Display title used in the menu.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Roles => "Roles",
            Self::Teams => "Teams",
            Self::People => "People",
        }
    }

    /// Stable string identifier for config files and the CLI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Roles => "roles",
            Self::Teams => "teams",
            Self::People => "people",
        }
    }

    /// Keyboard shortcut shown next to the menu entry.
    #[must_use]
    pub const fn shortcut(&self) -> char {
        match self {
            Self::Roles => '1',
            Self::Teams => '2',
            Self::People => '3',
        }
    }

    /// Position in [`Section::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Roles => 0,
            Self::Teams => 1,
            Self::People => 2,
        }
    }

    /// Look up a section by its shortcut key.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.shortcut() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "roles" => Ok(Self::Roles),
            "teams" => Ok(Self::Teams),
            "people" => Ok(Self::People),
            _ => Err(Error::UnknownSection(s.to_string())),
        }
    }
}

// Config files accept the same spellings as the command line.
impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
