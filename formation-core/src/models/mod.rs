mod address_type;
mod business_service;
mod company_info;
mod entity_type;
mod jurisdiction;
mod price_table;
mod selection_config;

pub use address_type::AddressType;
pub use business_service::BusinessService;
pub use company_info::{CompanyInfo, CompanyInfoPatch};
pub use entity_type::EntityType;
pub use jurisdiction::Jurisdiction;
pub use price_table::{PriceTable, PriceTableError};
pub use selection_config::SelectionConfig;

use thiserror::Error;

/// Error returned when a raw key does not name a member of one of the closed
/// selection enums.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),

    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    #[error("unknown address type '{0}'")]
    UnknownAddressType(String),

    #[error("unknown business service '{0}'")]
    UnknownBusinessService(String),
}
