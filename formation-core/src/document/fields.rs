//! The normalized field set a preview is rendered from.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::address::format_address;
use super::identifiers::{IdentifierSource, generate_document_number, generate_filing_id};
use super::template::{TemplateVariant, select_document_template};
use super::timestamp::{Clock, format_filing_timestamp};
use super::DEFAULT_DOCUMENT_YEAR;
use crate::display::{
    ADDRESS_TYPE_NAMES, ENTITY_TYPE_NAMES, JURISDICTION_NAMES, lookup_display_name,
};
use crate::models::{AddressType, CompanyInfo};

/// Shown when the customer has not entered a company name yet.
pub const PLACEHOLDER_COMPANY_NAME: &str = "Fineparts trading INC";

/// Shown when the customer has not entered an owner name yet.
pub const PLACEHOLDER_OWNER_NAME: &str = "Yifan Pei";

/// Knobs for document generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Year printed in the filing stamp and used as the identifier prefix.
    pub year: i32,
}

/// Years that keep identifiers at their fixed 12 and 9 characters.
pub const DOCUMENT_YEARS: RangeInclusive<i32> = 1000..=9999;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("document year {0} is not a four-digit year")]
pub struct InvalidDocumentYear(pub i32);

impl DocumentSettings {
    pub fn new(year: i32) -> Result<Self, InvalidDocumentYear> {
        if DOCUMENT_YEARS.contains(&year) {
            Ok(Self { year })
        } else {
            Err(InvalidDocumentYear(year))
        }
    }
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            year: DEFAULT_DOCUMENT_YEAR,
        }
    }
}

/// Everything the preview interpolates into its template text.
///
/// Built once per preview render. Building again draws fresh identifiers
/// and reads the clock again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFields {
    pub company_name: String,
    pub owner_name: String,
    pub principal_address: [String; 3],
    pub filing_id: String,
    pub document_number: String,
    pub filed_on: String,
    pub template: TemplateVariant,
    pub jurisdiction_name: String,
    pub entity_type_name: String,
    pub address_type_name: String,
}

impl DocumentFields {
    pub fn derive<C, S>(
        info: &CompanyInfo,
        address_type: AddressType,
        settings: &DocumentSettings,
        clock: &C,
        ids: &mut S,
    ) -> Self
    where
        C: Clock + ?Sized,
        S: IdentifierSource + ?Sized,
    {
        let fields = Self {
            company_name: non_blank_or(&info.company_name, PLACEHOLDER_COMPANY_NAME),
            owner_name: non_blank_or(&info.owner_name, PLACEHOLDER_OWNER_NAME),
            principal_address: format_address(&info.address),
            filing_id: generate_filing_id(ids, settings.year),
            document_number: generate_document_number(ids, settings.year),
            filed_on: format_filing_timestamp(&clock.now(), settings.year),
            template: select_document_template(info.entity_type),
            jurisdiction_name: lookup_display_name(info.jurisdiction.as_str(), JURISDICTION_NAMES),
            entity_type_name: lookup_display_name(info.entity_type.as_str(), ENTITY_TYPE_NAMES),
            address_type_name: lookup_display_name(address_type.as_str(), ADDRESS_TYPE_NAMES),
        };

        debug!(
            filing_id = %fields.filing_id,
            template = ?fields.template,
            "document fields derived"
        );

        fields
    }
}

fn non_blank_or(
    value: &str,
    fallback: &str,
) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
