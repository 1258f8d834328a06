use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseKeyError;

/// The service the customer is ordering. Display only; it carries no price.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessService {
    #[serde(rename = "registration")]
    #[default]
    Registration,
    #[serde(rename = "annual")]
    AnnualReview,
    #[serde(rename = "taxation")]
    Taxation,
}

impl BusinessService {
    pub fn all() -> &'static [BusinessService] {
        &[
            BusinessService::Registration,
            BusinessService::AnnualReview,
            BusinessService::Taxation,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::AnnualReview => "annual",
            Self::Taxation => "taxation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|b| b.as_str().eq_ignore_ascii_case(key))
    }
}

impl FromStr for BusinessService {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseKeyError::UnknownBusinessService(s.to_string()))
    }
}

impl fmt::Display for BusinessService {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
