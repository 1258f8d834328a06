//! Field derivation for the mock formation document preview.
//!
//! Turns the free-form [`CompanyInfo`](crate::CompanyInfo) record into the
//! normalized fields the preview renders: address lines, cosmetic filing
//! identifiers, the filing timestamp and the template variant.

pub mod address;
pub mod fields;
pub mod identifiers;
pub mod render;
pub mod template;
pub mod timestamp;

pub use address::{address_line, format_address};
pub use fields::{DOCUMENT_YEARS, DocumentFields, DocumentSettings, InvalidDocumentYear};
pub use identifiers::{
    FixedIdentifiers, IdentifierSource, RandomIdentifiers, generate_document_number,
    generate_filing_id,
};
pub use render::{DocumentPreview, render_document};
pub use template::{DocumentPage, TemplateVariant, select_document_template};
pub use timestamp::{Clock, FixedClock, SystemClock, format_filing_timestamp};

/// Year printed on generated documents and used as the identifier prefix.
pub const DEFAULT_DOCUMENT_YEAR: i32 = 2025;
