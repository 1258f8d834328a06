//! Pricing engine for formation quotes.
//!
//! A quote is the sum of the following components:
//!
//! | Step | Component | Condition |
//! |------|-----------|-----------|
//! | 1    | Base fee | always |
//! | 2    | Jurisdiction surcharge | always (zero when the table has no entry) |
//! | 3    | Address-type fee | always (zero when the table has no entry) |
//! | 4    | BOI filing | `wants_boi_filing` |
//! | 5    | Paper seal | `wants_paper_seal` |
//! | 6    | EIN application | `wants_ein` |
//! | 7    | Anonymous formation | Wyoming and `wants_anonymous_formation` |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use formation_core::{
//!     AddressType, EntityType, Jurisdiction, PriceTable, SelectionConfig, compute_total,
//! };
//!
//! let config = SelectionConfig {
//!     jurisdiction: Jurisdiction::Colorado,
//!     entity_type: EntityType::Llc,
//!     address_type: AddressType::Public,
//!     ..Default::default()
//! };
//!
//! // 299 base + 150 Colorado + 99 public address
//! assert_eq!(compute_total(&config, PriceTable::standard()), dec!(548));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::display;
use crate::models::{AddressType, Jurisdiction, PriceTable, SelectionConfig};

/// Computes the total price of `config` under `table`.
///
/// Pure: the same inputs always produce the same total. Never fails; table
/// entries that are missing contribute zero.
pub fn compute_total(
    config: &SelectionConfig,
    table: &PriceTable,
) -> Decimal {
    QuoteCalculator::new(table).calculate(config).total
}

/// What a single quote line charges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteLineKind {
    BaseFee,
    JurisdictionSurcharge(Jurisdiction),
    AddressFee(AddressType),
    BoiFiling,
    PaperSeal,
    Ein,
    AnonymousFormation,
}

impl fmt::Display for QuoteLineKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::BaseFee => f.write_str("Base formation fee"),
            Self::JurisdictionSurcharge(j) => write!(
                f,
                "State fee: {}",
                display::lookup_display_name(j.as_str(), display::JURISDICTION_NAMES)
            ),
            Self::AddressFee(a) => write!(
                f,
                "Address: {}",
                display::lookup_display_name(a.as_str(), display::ADDRESS_TYPE_NAMES)
            ),
            Self::BoiFiling => f.write_str("BOI filing"),
            Self::PaperSeal => f.write_str("Paper seal"),
            Self::Ein => f.write_str("EIN application"),
            Self::AnonymousFormation => f.write_str("Anonymous formation"),
        }
    }
}

/// One charged component of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub kind: QuoteLineKind,
    pub amount: Decimal,
}

/// An itemized quote. `total` always equals the sum of `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total: Decimal,
}

impl fmt::Display for Quote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{:<40} ${:>6}", line.kind.to_string(), line.amount)?;
        }
        write!(f, "{:<40} ${:>6}", "Total", self.total)
    }
}

/// Calculator for formation quotes.
///
/// Borrows a [`PriceTable`] and prices any number of selections against it.
#[derive(Debug, Clone)]
pub struct QuoteCalculator<'a> {
    table: &'a PriceTable,
}

impl<'a> QuoteCalculator<'a> {
    pub fn new(table: &'a PriceTable) -> Self {
        Self { table }
    }

    /// Prices `config` and returns the itemized quote.
    ///
    /// The base fee, jurisdiction surcharge and address fee are always listed
    /// (a surcharge missing from the table is listed at zero). Add-ons are
    /// listed only when selected and applicable.
    pub fn calculate(
        &self,
        config: &SelectionConfig,
    ) -> Quote {
        let mut lines = vec![
            QuoteLine {
                kind: QuoteLineKind::BaseFee,
                amount: self.table.base_fee,
            },
            QuoteLine {
                kind: QuoteLineKind::JurisdictionSurcharge(config.jurisdiction),
                amount: self.jurisdiction_surcharge(config.jurisdiction),
            },
            QuoteLine {
                kind: QuoteLineKind::AddressFee(config.address_type),
                amount: self.address_fee(config.address_type),
            },
        ];

        lines.extend(self.add_on_lines(config));

        let total = lines.iter().map(|line| line.amount).sum();
        debug!(
            jurisdiction = %config.jurisdiction,
            address_type = %config.address_type,
            total = %total,
            "quote calculated"
        );

        Quote { lines, total }
    }

    /// Step 2: surcharge for the selected state, zero when the table has none.
    fn jurisdiction_surcharge(
        &self,
        jurisdiction: Jurisdiction,
    ) -> Decimal {
        self.table.surcharge(jurisdiction).unwrap_or_else(|| {
            warn!(%jurisdiction, "no surcharge configured; charging zero");
            Decimal::ZERO
        })
    }

    /// Step 3: fee for the selected address type.
    fn address_fee(
        &self,
        address_type: AddressType,
    ) -> Decimal {
        self.table.address_fee(address_type).unwrap_or_else(|| {
            warn!(%address_type, "no address fee configured; charging zero");
            Decimal::ZERO
        })
    }

    /// Steps 4-7: optional services.
    fn add_on_lines(
        &self,
        config: &SelectionConfig,
    ) -> Vec<QuoteLine> {
        let mut lines = Vec::new();

        if config.wants_boi_filing {
            lines.push(QuoteLine {
                kind: QuoteLineKind::BoiFiling,
                amount: self.table.boi_fee,
            });
        }

        if config.wants_paper_seal {
            lines.push(QuoteLine {
                kind: QuoteLineKind::PaperSeal,
                amount: self.table.seal_fee,
            });
        }

        if config.wants_ein {
            lines.push(QuoteLine {
                kind: QuoteLineKind::Ein,
                amount: self.table.ein_fee,
            });
        }

        if config.anonymous_formation_applies() {
            lines.push(QuoteLine {
                kind: QuoteLineKind::AnonymousFormation,
                amount: self.table.anonymous_formation_fee,
            });
        } else if config.wants_anonymous_formation {
            debug!(
                jurisdiction = %config.jurisdiction,
                "anonymous formation requested outside Wyoming; not charged"
            );
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::EntityType;

    fn standard() -> &'static PriceTable {
        PriceTable::standard()
    }

    /// Every combination of the four add-on flags for one base selection.
    fn add_on_combinations(base: &SelectionConfig) -> Vec<SelectionConfig> {
        (0u8..16)
            .map(|bits| SelectionConfig {
                wants_boi_filing: bits & 1 != 0,
                wants_paper_seal: bits & 2 != 0,
                wants_ein: bits & 4 != 0,
                wants_anonymous_formation: bits & 8 != 0,
                ..base.clone()
            })
            .collect()
    }

    // =========================================================================
    // compute_total scenarios
    // =========================================================================

    #[test]
    fn colorado_public_llc_without_add_ons() {
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::Colorado,
            entity_type: EntityType::Llc,
            address_type: AddressType::Public,
            ..Default::default()
        };

        assert_eq!(compute_total(&config, standard()), dec!(548));
    }

    #[test]
    fn wyoming_unique_with_anonymous_formation() {
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::Wyoming,
            address_type: AddressType::Unique,
            wants_anonymous_formation: true,
            ..Default::default()
        };

        assert_eq!(compute_total(&config, standard()), dec!(847));
    }

    #[test]
    fn california_custom_with_every_add_on() {
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::California,
            address_type: AddressType::Custom,
            wants_boi_filing: true,
            wants_paper_seal: true,
            wants_ein: true,
            ..Default::default()
        };

        // 299 + 800 + 0 + 99 + 49 + 199
        assert_eq!(compute_total(&config, standard()), dec!(1446));
    }

    #[test]
    fn entity_type_has_no_price_effect() {
        for entity_type in EntityType::all() {
            let config = SelectionConfig {
                entity_type: *entity_type,
                ..Default::default()
            };

            assert_eq!(compute_total(&config, standard()), dec!(548));
        }
    }

    // =========================================================================
    // invariants
    // =========================================================================

    #[test]
    fn anonymous_formation_outside_wyoming_is_free() {
        for jurisdiction in Jurisdiction::all() {
            if *jurisdiction == Jurisdiction::Wyoming {
                continue;
            }
            let without = SelectionConfig {
                jurisdiction: *jurisdiction,
                ..Default::default()
            };
            let with = SelectionConfig {
                wants_anonymous_formation: true,
                ..without.clone()
            };

            assert_eq!(
                compute_total(&with, standard()),
                compute_total(&without, standard()),
                "anonymous formation changed the price in {jurisdiction}"
            );
        }
    }

    #[test]
    fn enabling_an_add_on_never_lowers_the_total() {
        for jurisdiction in Jurisdiction::all() {
            for address_type in AddressType::all() {
                let base = SelectionConfig {
                    jurisdiction: *jurisdiction,
                    address_type: *address_type,
                    ..Default::default()
                };

                for config in add_on_combinations(&base) {
                    let total = compute_total(&config, standard());
                    let toggles: [fn(&mut SelectionConfig); 4] = [
                        |c| c.wants_boi_filing = true,
                        |c| c.wants_paper_seal = true,
                        |c| c.wants_ein = true,
                        |c| c.wants_anonymous_formation = true,
                    ];
                    for toggle in toggles {
                        let mut more = config.clone();
                        toggle(&mut more);
                        assert!(compute_total(&more, standard()) >= total);
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_calls_return_the_same_total() {
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::NewYork,
            wants_ein: true,
            ..Default::default()
        };

        let first = compute_total(&config, standard());
        let second = compute_total(&config, standard());

        assert_eq!(first, second);
    }

    #[test]
    fn missing_surcharge_contributes_zero() {
        let mut table = PriceTable::default();
        table.jurisdiction_surcharge.remove(&Jurisdiction::Delaware);
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::Delaware,
            ..Default::default()
        };

        // 299 base + 99 public address
        assert_eq!(compute_total(&config, &table), dec!(398));
    }

    // =========================================================================
    // itemized quote
    // =========================================================================

    #[test]
    fn quote_lines_sum_to_total() {
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::Wyoming,
            address_type: AddressType::Unique,
            wants_boi_filing: true,
            wants_anonymous_formation: true,
            ..Default::default()
        };

        let quote = QuoteCalculator::new(standard()).calculate(&config);
        let sum: Decimal = quote.lines.iter().map(|l| l.amount).sum();

        assert_eq!(sum, quote.total);
        assert_eq!(quote.total, dec!(946));
    }

    #[test]
    fn quote_lists_only_applicable_add_ons() {
        let config = SelectionConfig {
            jurisdiction: Jurisdiction::Nevada,
            wants_paper_seal: true,
            wants_anonymous_formation: true,
            ..Default::default()
        };

        let quote = QuoteCalculator::new(standard()).calculate(&config);
        let kinds: Vec<QuoteLineKind> = quote.lines.iter().map(|l| l.kind).collect();

        assert_eq!(
            kinds,
            vec![
                QuoteLineKind::BaseFee,
                QuoteLineKind::JurisdictionSurcharge(Jurisdiction::Nevada),
                QuoteLineKind::AddressFee(AddressType::Public),
                QuoteLineKind::PaperSeal,
            ]
        );
    }

    #[test]
    fn quote_display_ends_with_total() {
        let quote = QuoteCalculator::new(standard()).calculate(&SelectionConfig::default());
        let rendered = quote.to_string();

        assert!(rendered.lines().last().unwrap().starts_with("Total"));
        assert!(rendered.contains("548"));
    }
}
