pub mod calculations;
pub mod display;
pub mod document;
pub mod models;
pub mod store;

pub use calculations::{Quote, QuoteCalculator, QuoteLine, QuoteLineKind, compute_total};
pub use models::*;
pub use store::CompanyInfoStore;
