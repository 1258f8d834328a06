//! Display names for selection keys.
//!
//! Each table is a closed list of `(key, display name)` pairs. Lookups that
//! miss fall back to the raw key so an unknown value still renders.

use tracing::debug;

pub type DisplayTable = &'static [(&'static str, &'static str)];

pub const JURISDICTION_NAMES: DisplayTable = &[
    ("Delaware", "特拉华州 (Delaware)"),
    ("Wyoming", "怀俄明州 (Wyoming)"),
    ("Nevada", "内华达州 (Nevada)"),
    ("Florida", "佛罗里达州 (Florida)"),
    ("California", "加利福尼亚州 (California)"),
    ("New York", "纽约州 (New York)"),
    ("Colorado", "科罗拉多州 (Colorado)"),
];

pub const ADDRESS_TYPE_NAMES: DisplayTable = &[
    ("public", "公共收信地址"),
    ("unique", "唯一编号收信地址"),
    ("custom", "自行提供地址"),
];

pub const ENTITY_TYPE_NAMES: DisplayTable = &[
    ("CORP", "股份有限公司 (CORP)"),
    ("LLC", "有限责任公司 (LLC)"),
    ("NONPROFIT", "非营利公司 (Non-Profit)"),
];

pub const BUSINESS_SERVICE_NAMES: DisplayTable = &[
    ("registration", "公司注册"),
    ("annual", "公司年审"),
    ("taxation", "税务申报"),
];

/// Returns the display name mapped to `key`, or `None` when the table has no
/// such key. Matching is exact.
pub fn lookup(
    key: &str,
    table: DisplayTable,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Returns the display name mapped to `key`, or `key` itself when absent.
pub fn lookup_display_name(
    key: &str,
    table: DisplayTable,
) -> String {
    match lookup(key, table) {
        Some(name) => name.to_string(),
        None => {
            debug!(key, "no display name; using raw key");
            key.to_string()
        }
    }
}
