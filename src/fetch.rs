// src/fetch.rs
//! Fetch stage: provider call, column check, normalization.
//!
//! `load_results` keeps the failure reason; `fetch_results` is the
//! boundary the CLI uses and folds every failure into an empty vector,
//! which is what callers treat as "no results".

use tracing::{error, info, warn};

use crate::config::AliasTable;
use crate::data::{NormalizedResult, REQUIRED_COLUMNS};
use crate::error::LoadError;
use crate::provider::ResultsProvider;
use crate::results::normalize_table;

pub fn load_results(
    provider: &dyn ResultsProvider,
    aliases: &AliasTable,
    year: i32,
    gp_name: &str,
) -> Result<Vec<NormalizedResult>, LoadError> {
    info!("Loading {gp_name} results for {year}...");
    let table = provider.fetch_race(year, gp_name)?;

    info!("Successfully loaded results for {year} {gp_name}");
    info!("Number of drivers: {}", table.len());
    info!("Columns available: {:?}", table.headers);

    let missing = table.missing_columns(&REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { missing, available: table.headers });
    }
    Ok(normalize_table(aliases, &table))
}

pub fn fetch_results(
    provider: &dyn ResultsProvider,
    aliases: &AliasTable,
    year: i32,
    gp_name: &str,
) -> Vec<NormalizedResult> {
    match load_results(provider, aliases, year, gp_name) {
        Ok(results) => results,
        Err(LoadError::MissingColumns { missing, available }) => {
            warn!(?missing, "Warning: Missing required columns. Available: {available:?}");
            Vec::new()
        }
        Err(LoadError::Fetch(e)) => {
            error!("Error loading {gp_name} results for {year}: {e}");
            Vec::new()
        }
    }
}
