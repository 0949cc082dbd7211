// src/results.rs
//! Normalize stage: raw provider rows → sorted `NormalizedResult`s.

use crate::config::AliasTable;
use crate::data::{NormalizedResult, RawResult, RawTable};
use crate::names::normalize_with;

/// Coerce a provider position to a positive integer.
/// Numeric text ("3", " 3 ", "3.0") converts; anything else ("DNF", "R",
/// "0", "2.5") is absent.
pub fn parse_position(raw: Option<&str>) -> Option<u32> {
    let v: f64 = raw?.trim().parse().ok()?;
    if v.is_finite() && v >= 1.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
        Some(v as u32)
    } else {
        None
    }
}

pub fn normalize_record(aliases: &AliasTable, raw: &RawResult) -> NormalizedResult {
    NormalizedResult {
        position: parse_position(raw.position.as_deref()),
        driver: normalize_with(aliases, raw.full_name.as_deref()).unwrap_or_default(),
        team: raw.team_name.clone().unwrap_or_default(),
        status: raw.status.clone().unwrap_or_default(),
    }
}

/// Stable sort, ascending by position; unplaced entries last, in input order.
pub fn sort_by_position(results: &mut [NormalizedResult]) {
    results.sort_by_key(|r| (r.position.is_none(), r.position));
}

pub fn normalize_records(aliases: &AliasTable, records: &[RawResult]) -> Vec<NormalizedResult> {
    let mut out: Vec<NormalizedResult> = records.iter().map(|r| normalize_record(aliases, r)).collect();
    sort_by_position(&mut out);
    out
}

/// Normalize a validated table. Empty when a required column is absent.
pub fn normalize_table(aliases: &AliasTable, table: &RawTable) -> Vec<NormalizedResult> {
    match table.records() {
        Some(records) => normalize_records(aliases, &records),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, team: &str, pos: &str, status: &str) -> RawResult {
        RawResult {
            full_name: Some(s!(name)),
            team_name: Some(s!(team)),
            position: Some(s!(pos)),
            status: Some(s!(status)),
        }
    }

    #[test]
    fn positions_coerce_like_numeric_text() {
        assert_eq!(parse_position(Some("1")), Some(1));
        assert_eq!(parse_position(Some(" 12 ")), Some(12));
        assert_eq!(parse_position(Some("3.0")), Some(3));
        for bad in ["DNF", "R", "", "0", "-1", "2.5", "NaN", "inf"] {
            assert_eq!(parse_position(Some(bad)), None, "{bad}");
        }
        assert_eq!(parse_position(None), None);
    }

    #[test]
    fn sorts_ascending_with_unplaced_last_stably() {
        let aliases = AliasTable::builtin();
        let recs = vec![
            raw("C Driver", "T", "DNF", "Retired"),
            raw("B Driver", "T", "2", "Finished"),
            raw("D Driver", "T", "DSQ", "Disqualified"),
            raw("A Driver", "T", "1", "Finished"),
        ];
        let out = normalize_records(&aliases, &recs);
        let order: Vec<&str> = out.iter().map(|r| r.driver.as_str()).collect();
        assert_eq!(order, vec!["A Driver", "B Driver", "C Driver", "D Driver"]);
        assert_eq!(out[0].position, Some(1));
        assert_eq!(out[3].position, None);
    }

    #[test]
    fn first_is_minimum_defined_position() {
        let aliases = AliasTable::builtin();
        let recs = vec![
            raw("X", "T", "7", "Finished"),
            raw("Y", "T", "R", "Retired"),
            raw("Z", "T", "4", "Finished"),
        ];
        let out = normalize_records(&aliases, &recs);
        let min = out.iter().filter_map(|r| r.position).min();
        assert_eq!(out[0].position, min);
        assert!(out.windows(2).all(|w| match (w[0].position, w[1].position) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) | (None, None) => true,
            (None, Some(_)) => false,
        }));
    }

    #[test]
    fn names_are_normalized_and_fields_selected() {
        let aliases = AliasTable::builtin();
        let out = normalize_records(&aliases, &[raw("Andrea Kimi Antonelli", "Mercedes", "6", "Finished")]);
        assert_eq!(out[0], NormalizedResult::new(Some(6), "Kimi Antonelli", "Mercedes", "Finished"));
    }

    #[test]
    fn missing_cells_become_empty_text() {
        let aliases = AliasTable::builtin();
        let out = normalize_records(&aliases, &[RawResult::default()]);
        assert_eq!(out[0], NormalizedResult::new(None, "", "", ""));
    }
}
