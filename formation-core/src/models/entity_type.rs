use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseKeyError;

/// Legal form of the company being formed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "CORP")]
    #[default]
    Corporation,
    #[serde(rename = "LLC")]
    Llc,
    #[serde(rename = "NONPROFIT")]
    Nonprofit,
}

impl EntityType {
    pub fn all() -> &'static [EntityType] {
        &[EntityType::Corporation, EntityType::Llc, EntityType::Nonprofit]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporation => "CORP",
            Self::Llc => "LLC",
            Self::Nonprofit => "NONPROFIT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(key))
    }

    /// Example name shown in the company-name input for this entity type.
    pub fn company_name_placeholder(&self) -> &'static str {
        match self {
            Self::Corporation => "示例名称：Apple Inc",
            Self::Llc => "示例名称：Apple LLC",
            Self::Nonprofit => "示例名称：Apple Foundation",
        }
    }
}

impl FromStr for EntityType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseKeyError::UnknownEntityType(s.to_string()))
    }
}

impl fmt::Display for EntityType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_keys() {
        assert_eq!(EntityType::parse("CORP"), Some(EntityType::Corporation));
        assert_eq!(EntityType::parse("llc"), Some(EntityType::Llc));
        assert_eq!(EntityType::parse("NonProfit"), Some(EntityType::Nonprofit));
    }

    #[test]
    fn from_str_rejects_unknown_key() {
        assert_eq!(
            "LLP".parse::<EntityType>(),
            Err(ParseKeyError::UnknownEntityType("LLP".to_string()))
        );
    }

    #[test]
    fn placeholder_follows_entity_type() {
        assert_eq!(
            EntityType::Llc.company_name_placeholder(),
            "示例名称：Apple LLC"
        );
        assert_eq!(
            EntityType::Corporation.company_name_placeholder(),
            "示例名称：Apple Inc"
        );
        assert_eq!(
            EntityType::Nonprofit.company_name_placeholder(),
            "示例名称：Apple Foundation"
        );
    }
}
