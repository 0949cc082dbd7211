// src/names.rs
//! Driver-name normalization: clean, then resolve through the alias table.

use crate::config::AliasTable;
use crate::core::sanitize::clean_name;

/// Normalize against the built-in alias table.
pub fn normalize_driver_name(raw: Option<&str>) -> Option<String> {
    normalize_with(AliasTable::shared(), raw)
}

/// Absent input stays absent; unknown names come back cleaned.
pub fn normalize_with(aliases: &AliasTable, raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let cleaned = clean_name(raw);
    match aliases.resolve(&cleaned) {
        Some(canonical) => Some(s!(canonical)),
        None => Some(cleaned),
    }
}
