//! Cosmetic identifiers printed on the document preview.
//!
//! These are not validated or stored anywhere. The random draw sits behind
//! [`IdentifierSource`] so tests can pin the output.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Serial appended to the year for the filing ID (8 digits).
pub const FILING_SERIAL_RANGE: RangeInclusive<u32> = 10_000_000..=99_999_999;

/// Serial appended to the year for the document number (5 digits).
pub const DOCUMENT_SERIAL_RANGE: RangeInclusive<u32> = 10_000..=99_999;

/// Supplies the numeric part of generated identifiers.
pub trait IdentifierSource {
    /// Returns a value inside `range`.
    fn draw(
        &mut self,
        range: RangeInclusive<u32>,
    ) -> u32;
}

/// Uniformly random serials.
#[derive(Debug, Clone)]
pub struct RandomIdentifiers {
    rng: StdRng,
}

impl RandomIdentifiers {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, for demos and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdentifiers {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for RandomIdentifiers {
    fn draw(
        &mut self,
        range: RangeInclusive<u32>,
    ) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Always yields the same serial, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIdentifiers(pub u32);

impl IdentifierSource for FixedIdentifiers {
    fn draw(
        &mut self,
        range: RangeInclusive<u32>,
    ) -> u32 {
        self.0.clamp(*range.start(), *range.end())
    }
}

/// Year followed by an 8-digit serial, e.g. `202512345678`.
pub fn generate_filing_id<S: IdentifierSource + ?Sized>(
    source: &mut S,
    year: i32,
) -> String {
    format!("{year:04}{}", source.draw(FILING_SERIAL_RANGE))
}

/// Year followed by a 5-digit serial, e.g. `202512345`.
pub fn generate_document_number<S: IdentifierSource + ?Sized>(
    source: &mut S,
    year: i32,
) -> String {
    format!("{year:04}{}", source.draw(DOCUMENT_SERIAL_RANGE))
}
