//! Quote calculations for company formation orders.
//!
//! The pricing engine turns a [`SelectionConfig`](crate::SelectionConfig)
//! into an itemized quote by summing a base fee and table-driven surcharges.

pub mod pricing;

pub use pricing::{Quote, QuoteCalculator, QuoteLine, QuoteLineKind, compute_total};
