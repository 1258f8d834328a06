//! Splitting of a free-form address into the three lines the document shows.

pub const DEFAULT_STREET: &str = "418 Broadway # 6438";
pub const DEFAULT_CITY_LINE: &str = "Albany NY 12207";
pub const DEFAULT_COUNTRY: &str = "US";

/// Splits `raw` on commas into street, city/state/zip and country lines.
///
/// | segments | result |
/// |----------|--------|
/// | blank    | the default Albany address |
/// | 1        | `[seg, "Albany NY 12207", "US"]` |
/// | 2        | `[seg0, seg1, "US"]` |
/// | 3+       | `[first, middle segments joined by ", ", last]` |
///
/// A one-segment address keeps the default city line, so any city the
/// customer typed without a comma is dropped.
///
/// ```
/// use formation_core::document::format_address;
///
/// assert_eq!(
///     format_address("123 Main St, Denver CO 80202"),
///     ["123 Main St", "Denver CO 80202", "US"]
/// );
/// ```
pub fn format_address(raw: &str) -> [String; 3] {
    let parts: Vec<&str> = if raw.trim().is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::trim).collect()
    };

    match parts.as_slice() {
        [] => [
            DEFAULT_STREET.to_string(),
            DEFAULT_CITY_LINE.to_string(),
            DEFAULT_COUNTRY.to_string(),
        ],
        [street] => [
            street.to_string(),
            DEFAULT_CITY_LINE.to_string(),
            DEFAULT_COUNTRY.to_string(),
        ],
        [street, city] => [
            street.to_string(),
            city.to_string(),
            DEFAULT_COUNTRY.to_string(),
        ],
        [street, middle @ .., country] => [
            street.to_string(),
            middle.join(", "),
            country.to_string(),
        ],
    }
}

/// The formatted address on a single line.
pub fn address_line(raw: &str) -> String {
    format_address(raw).join(", ")
}
