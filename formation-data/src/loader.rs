use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use formation_core::{AddressType, Jurisdiction, ParseKeyError, PriceTable, PriceTableError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading a price schedule.
#[derive(Debug, Error)]
pub enum PriceScheduleError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open price schedule '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown price component kind '{0}'")]
    UnknownKind(String),

    #[error("invalid key: {0}")]
    InvalidKey(#[from] ParseKeyError),

    #[error("price component '{0}' appears more than once")]
    Duplicate(String),

    #[error("price component '{0}' is missing")]
    Missing(&'static str),

    #[error("invalid price table: {0}")]
    Invalid(#[from] PriceTableError),
}

impl From<csv::Error> for PriceScheduleError {
    fn from(err: csv::Error) -> Self {
        PriceScheduleError::CsvParse(err.to_string())
    }
}

/// A single row of a price schedule CSV.
///
/// - `kind`: one of `base`, `address`, `surcharge`, `boi`, `seal`, `ein`,
///   `anonymous`
/// - `key`: address type for `address`, jurisdiction for `surcharge`,
///   empty otherwise
/// - `amount`: whole currency units
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PriceScheduleRecord {
    pub kind: String,
    #[serde(default)]
    pub key: String,
    pub amount: Decimal,
}

/// Scalar fees collected while walking the records.
#[derive(Default)]
struct Scalars {
    base: Option<Decimal>,
    boi: Option<Decimal>,
    seal: Option<Decimal>,
    ein: Option<Decimal>,
    anonymous: Option<Decimal>,
}

/// Loader for price schedules stored as CSV.
///
/// Every scalar fee must appear exactly once. Address fees and surcharges
/// may be partial; entries that are left out price at zero.
pub struct PriceScheduleLoader;

impl PriceScheduleLoader {
    /// Parse records from any CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PriceScheduleRecord>, PriceScheduleError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PriceScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assemble and validate a [`PriceTable`] from parsed records.
    pub fn build(records: &[PriceScheduleRecord]) -> Result<PriceTable, PriceScheduleError> {
        let mut scalars = Scalars::default();
        let mut address_type_fee = BTreeMap::new();
        let mut jurisdiction_surcharge = BTreeMap::new();

        for record in records {
            let kind = record.kind.to_ascii_lowercase();
            match kind.as_str() {
                "base" => set_once(&mut scalars.base, "base", record.amount)?,
                "boi" => set_once(&mut scalars.boi, "boi", record.amount)?,
                "seal" => set_once(&mut scalars.seal, "seal", record.amount)?,
                "ein" => set_once(&mut scalars.ein, "ein", record.amount)?,
                "anonymous" => set_once(&mut scalars.anonymous, "anonymous", record.amount)?,
                "address" => {
                    let address_type: AddressType = record.key.parse()?;
                    if address_type_fee.insert(address_type, record.amount).is_some() {
                        return Err(PriceScheduleError::Duplicate(format!(
                            "address:{address_type}"
                        )));
                    }
                }
                "surcharge" => {
                    let jurisdiction: Jurisdiction = record.key.parse()?;
                    if jurisdiction_surcharge
                        .insert(jurisdiction, record.amount)
                        .is_some()
                    {
                        return Err(PriceScheduleError::Duplicate(format!(
                            "surcharge:{jurisdiction}"
                        )));
                    }
                }
                _ => return Err(PriceScheduleError::UnknownKind(record.kind.clone())),
            }
        }

        for address_type in AddressType::all() {
            if !address_type_fee.contains_key(address_type) {
                warn!(%address_type, "price schedule has no fee for address type");
            }
        }
        for jurisdiction in Jurisdiction::all() {
            if !jurisdiction_surcharge.contains_key(jurisdiction) {
                warn!(%jurisdiction, "price schedule has no surcharge for jurisdiction");
            }
        }

        let table = PriceTable {
            base_fee: scalars.base.ok_or(PriceScheduleError::Missing("base"))?,
            address_type_fee,
            jurisdiction_surcharge,
            boi_fee: scalars.boi.ok_or(PriceScheduleError::Missing("boi"))?,
            seal_fee: scalars.seal.ok_or(PriceScheduleError::Missing("seal"))?,
            ein_fee: scalars.ein.ok_or(PriceScheduleError::Missing("ein"))?,
            anonymous_formation_fee: scalars
                .anonymous
                .ok_or(PriceScheduleError::Missing("anonymous"))?,
        };
        table.validate()?;

        debug!(records = records.len(), "price schedule loaded");
        Ok(table)
    }

    /// Parse and build a table from a CSV file on disk.
    pub fn load_from_path(path: &Path) -> Result<PriceTable, PriceScheduleError> {
        let file = File::open(path).map_err(|source| PriceScheduleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records = Self::parse(file)?;
        Self::build(&records)
    }
}

fn set_once(
    slot: &mut Option<Decimal>,
    name: &'static str,
    amount: Decimal,
) -> Result<(), PriceScheduleError> {
    if slot.replace(amount).is_some() {
        return Err(PriceScheduleError::Duplicate(name.to_string()));
    }
    Ok(())
}
