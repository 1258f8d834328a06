use serde::{Deserialize, Serialize};

use super::{AddressType, BusinessService, EntityType, Jurisdiction};

/// Everything the customer has selected in the calculator.
///
/// Created with defaults when the calculator opens and replaced on every
/// interaction. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub jurisdiction: Jurisdiction,
    pub entity_type: EntityType,
    pub address_type: AddressType,

    /// Free-form address, only consulted when `address_type` is
    /// [`AddressType::Custom`].
    pub custom_address_text: Option<String>,

    // Add-ons
    pub wants_boi_filing: bool,
    pub wants_paper_seal: bool,
    pub wants_ein: bool,

    /// Only offered in Wyoming. Ignored for pricing anywhere else.
    pub wants_anonymous_formation: bool,

    pub business_service: BusinessService,
}

impl SelectionConfig {
    /// Whether the anonymous-formation add-on takes effect.
    pub fn anonymous_formation_applies(&self) -> bool {
        self.jurisdiction == Jurisdiction::Wyoming && self.wants_anonymous_formation
    }

    /// The customer's own address, when they chose to supply one.
    pub fn custom_address(&self) -> Option<&str> {
        match self.address_type {
            AddressType::Custom => self.custom_address_text.as_deref(),
            _ => None,
        }
    }
}
