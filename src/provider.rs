// src/provider.rs
//! The external results provider, behind a trait so the pipeline can run
//! against canned data in tests.

use reqwest::blocking::Client;
use tracing::info;

use crate::core::net;
use crate::data::RawTable;
use crate::error::{FetchError, FetchResult};
use crate::specs;

pub trait ResultsProvider {
    /// Race classification for `event` (name or round number) in `year`.
    fn fetch_race(&self, year: i32, event: &str) -> FetchResult<RawTable>;
}

/// Ergast-compatible REST API (Jolpica F1 by default).
pub struct JolpicaProvider {
    client: Client,
    base_url: String,
}

impl JolpicaProvider {
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        Ok(Self { client: net::build_client()?, base_url: base_url.into() })
    }
}

impl ResultsProvider for JolpicaProvider {
    fn fetch_race(&self, year: i32, event: &str) -> FetchResult<RawTable> {
        let events = specs::schedule::fetch(&self.client, &self.base_url, year)?;
        let found = specs::schedule::find_event(&events, event).ok_or_else(|| {
            FetchError::UnknownEvent { year, name: s!(event) }
        })?;
        info!(
            round = found.round,
            race = %found.race_name,
            circuit = %found.circuit_name,
            date = found.date.as_deref().unwrap_or("?"),
            "Resolved event"
        );
        specs::results::fetch(&self.client, &self.base_url, year, found.round)
    }
}

/// Serves one fixed table for every request, or `UnknownEvent` when empty.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    table: Option<RawTable>,
}

impl StaticProvider {
    pub fn new(table: RawTable) -> Self {
        Self { table: Some(table) }
    }

    pub fn unavailable() -> Self {
        Self { table: None }
    }
}

impl ResultsProvider for StaticProvider {
    fn fetch_race(&self, year: i32, event: &str) -> FetchResult<RawTable> {
        self.table
            .clone()
            .ok_or_else(|| FetchError::UnknownEvent { year, name: s!(event) })
    }
}
