use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AddressType, Jurisdiction};

/// Errors reported by [`PriceTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceTableError {
    /// A fee or surcharge is below zero.
    #[error("price component '{component}' is negative: {amount}")]
    NegativeAmount { component: String, amount: Decimal },
}

/// Fee schedule used by the pricing engine. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub base_fee: Decimal,
    pub address_type_fee: BTreeMap<AddressType, Decimal>,

    /// Per-state surcharge. A missing entry contributes nothing.
    pub jurisdiction_surcharge: BTreeMap<Jurisdiction, Decimal>,

    pub boi_fee: Decimal,
    pub seal_fee: Decimal,
    pub ein_fee: Decimal,
    pub anonymous_formation_fee: Decimal,
}

static STANDARD: LazyLock<PriceTable> = LazyLock::new(|| {
    let address_type_fee = BTreeMap::from([
        (AddressType::Public, Decimal::from(99)),
        (AddressType::Unique, Decimal::from(199)),
        (AddressType::Custom, Decimal::ZERO),
    ]);

    let jurisdiction_surcharge = BTreeMap::from([
        (Jurisdiction::Delaware, Decimal::from(90)),
        (Jurisdiction::Wyoming, Decimal::from(50)),
        (Jurisdiction::Nevada, Decimal::from(75)),
        (Jurisdiction::Florida, Decimal::from(125)),
        (Jurisdiction::California, Decimal::from(800)),
        (Jurisdiction::NewYork, Decimal::from(200)),
        (Jurisdiction::Colorado, Decimal::from(150)),
    ]);

    PriceTable {
        base_fee: Decimal::from(299),
        address_type_fee,
        jurisdiction_surcharge,
        boi_fee: Decimal::from(99),
        seal_fee: Decimal::from(49),
        ein_fee: Decimal::from(199),
        anonymous_formation_fee: Decimal::from(299),
    }
});

impl PriceTable {
    /// The built-in fee schedule shared by the whole process.
    pub fn standard() -> &'static PriceTable {
        &STANDARD
    }

    /// Surcharge for `jurisdiction`, or `None` if the table has no entry.
    pub fn surcharge(
        &self,
        jurisdiction: Jurisdiction,
    ) -> Option<Decimal> {
        self.jurisdiction_surcharge.get(&jurisdiction).copied()
    }

    /// Fee for `address_type`, or `None` if the table has no entry.
    pub fn address_fee(
        &self,
        address_type: AddressType,
    ) -> Option<Decimal> {
        self.address_type_fee.get(&address_type).copied()
    }

    /// Checks that no amount in the table is negative.
    ///
    /// A table that passes guarantees that enabling an add-on never lowers a
    /// quote.
    pub fn validate(&self) -> Result<(), PriceTableError> {
        let scalars = [
            ("base", self.base_fee),
            ("boi", self.boi_fee),
            ("seal", self.seal_fee),
            ("ein", self.ein_fee),
            ("anonymous", self.anonymous_formation_fee),
        ];

        let addresses = self
            .address_type_fee
            .iter()
            .map(|(k, v)| (format!("address:{k}"), *v));
        let surcharges = self
            .jurisdiction_surcharge
            .iter()
            .map(|(k, v)| (format!("surcharge:{k}"), *v));

        scalars
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .chain(addresses)
            .chain(surcharges)
            .find(|(_, amount)| *amount < Decimal::ZERO)
            .map_or(Ok(()), |(component, amount)| {
                Err(PriceTableError::NegativeAmount { component, amount })
            })
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}
