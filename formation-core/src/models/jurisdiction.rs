use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseKeyError;

/// A state in which the company can be formed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jurisdiction {
    Delaware,
    Wyoming,
    Nevada,
    Florida,
    California,
    #[serde(rename = "New York")]
    NewYork,
    #[default]
    Colorado,
}

impl Jurisdiction {
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Jurisdiction::Delaware,
            Jurisdiction::Wyoming,
            Jurisdiction::Nevada,
            Jurisdiction::Florida,
            Jurisdiction::California,
            Jurisdiction::NewYork,
            Jurisdiction::Colorado,
        ]
    }

    /// The stable key used by lookup tables and price schedules.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delaware => "Delaware",
            Self::Wyoming => "Wyoming",
            Self::Nevada => "Nevada",
            Self::Florida => "Florida",
            Self::California => "California",
            Self::NewYork => "New York",
            Self::Colorado => "Colorado",
        }
    }

    /// Parses a key, ignoring ASCII case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|j| j.as_str().eq_ignore_ascii_case(key))
    }
}

impl FromStr for Jurisdiction {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseKeyError::UnknownJurisdiction(s.to_string()))
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
