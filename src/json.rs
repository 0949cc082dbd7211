// src/json.rs
//! JSON export.
//!
//! Document shape:
//! ```json
//! {
//!   "grand_prix": "Dutch Grand Prix",
//!   "year": 2025,
//!   "export_date": "2025-08-31T16:02:11.482913",
//!   "results": [
//!     { "position": 1, "driver": "Oscar Piastri", "team": "McLaren", "status": "Finished" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::consts::DEFAULT_JSON_FILE;
use crate::data::{EventMeta, NormalizedResult};
use crate::error::{ConfigError, ConfigResult, ExportResult};
use crate::file::{resolve_out_path, write_export};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub grand_prix: String,
    pub year: i32,
    pub export_date: NaiveDateTime,
    pub results: Vec<NormalizedResult>,
}

impl ExportDocument {
    pub fn new(event: &EventMeta, results: &[NormalizedResult]) -> Self {
        Self::at(event, results, chrono::Local::now().naive_local())
    }

    pub fn at(event: &EventMeta, results: &[NormalizedResult], export_date: NaiveDateTime) -> Self {
        Self {
            grand_prix: event.name.clone(),
            year: event.year,
            export_date,
            results: results.to_vec(),
        }
    }

    /// Two-space indented, UTF-8 as-is.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Write `results` as an export document. Empty input writes nothing and
/// returns `None`.
pub fn export_results_to_json(
    results: &[NormalizedResult],
    event: &EventMeta,
    path: &Path,
) -> ExportResult<Option<PathBuf>> {
    if results.is_empty() {
        info!("No results to export.");
        return Ok(None);
    }

    let doc = ExportDocument::new(event, results);
    let text = doc.to_json_string()?;
    let path = resolve_out_path(path, DEFAULT_JSON_FILE);
    let written = write_export(&path, &text)?;

    info!("Results exported to {}", written.display());
    info!("Total drivers: {}", doc.results.len());
    Ok(Some(written))
}

pub fn read_export_document(path: &Path) -> ConfigResult<ExportDocument> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
}
