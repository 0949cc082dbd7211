// src/specs/results.rs
//! Spec for one race's classification: `{base}/{year}/{round}/results.json`.
//!
//! Output is a `RawTable` with the provider's result columns. A column is
//! present when at least one row carries a value for it, so a payload that
//! never names the team produces a table without `TeamName` and the loader
//! can report it as missing.

use reqwest::blocking::Client;

use crate::config::consts::RESULTS_PAGE_LIMIT;
use crate::core::net;
use crate::core::sanitize::normalize_ws;
use crate::data::*;
use crate::error::{FetchError, FetchResult};

use super::wire::{Envelope, ResultEntry};

/// Column order of the produced table (before dropping empty columns).
const COLUMNS: [&str; 11] = [
    COL_DRIVER_NUMBER,
    COL_ABBREVIATION,
    COL_FULL_NAME,
    COL_TEAM_NAME,
    COL_GRID_POSITION,
    COL_POSITION,
    COL_CLASSIFIED_POSITION,
    COL_POINTS,
    COL_LAPS,
    COL_STATUS,
    COL_TIME,
];

pub fn url(base: &str, year: i32, round: u32) -> String {
    format!(
        "{}/{}/{}/results.json?limit={}",
        base.trim_end_matches('/'),
        year,
        round,
        RESULTS_PAGE_LIMIT
    )
}

pub fn fetch(client: &Client, base: &str, year: i32, round: u32) -> FetchResult<RawTable> {
    let doc = net::http_get(client, &url(base, year, round))?;
    parse_doc(&doc)?.ok_or(FetchError::NoSessionData { year, round })
}

/// Split out for unit tests. `None` when the race has no published results.
pub fn parse_doc(doc: &str) -> FetchResult<Option<RawTable>> {
    let env: Envelope = serde_json::from_str(doc)?;
    let Some(race) = env.mr_data.race_table.races.into_iter().next() else {
        return Ok(None);
    };
    if race.results.is_empty() {
        return Ok(None);
    }

    let full_rows: Vec<[Option<String>; 11]> = race.results.iter().map(entry_cells).collect();

    // Keep only columns with at least one value.
    let keep: Vec<usize> = (0..COLUMNS.len())
        .filter(|&c| full_rows.iter().any(|r| r[c].is_some()))
        .collect();

    let mut table = RawTable::new(keep.iter().map(|&c| s!(COLUMNS[c])).collect());
    for row in full_rows {
        table.push_row(keep.iter().map(|&c| row[c].clone()).collect());
    }
    Ok(Some(table))
}

fn entry_cells(e: &ResultEntry) -> [Option<String>; 11] {
    let tidy = |v: &Option<String>| {
        v.as_deref().map(normalize_ws).filter(|s| !s.is_empty())
    };
    [
        tidy(&e.number),
        e.driver.as_ref().and_then(|d| tidy(&d.code)),
        e.driver.as_ref().and_then(|d| d.full_name()),
        e.constructor.as_ref().and_then(|c| tidy(&c.name)),
        tidy(&e.grid),
        tidy(&e.position),
        tidy(&e.position_text),
        tidy(&e.points),
        tidy(&e.laps),
        tidy(&e.status),
        e.time.as_ref().and_then(|t| tidy(&t.time)),
    ]
}
