use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseKeyError;

/// Kind of mailing address provided with the formation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Shared mail-receiving address.
    #[default]
    Public,
    /// Mail-receiving address with a dedicated box number.
    Unique,
    /// Address supplied by the customer.
    Custom,
}

impl AddressType {
    pub fn all() -> &'static [AddressType] {
        &[AddressType::Public, AddressType::Unique, AddressType::Custom]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unique => "unique",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|a| a.as_str().eq_ignore_ascii_case(key))
    }
}

impl FromStr for AddressType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseKeyError::UnknownAddressType(s.to_string()))
    }
}

impl fmt::Display for AddressType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
