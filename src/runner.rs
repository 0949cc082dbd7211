// src/runner.rs
use std::path::PathBuf;

use crate::{
    compare::{compare, load_prediction_sets, ComparisonReport},
    config::{AliasTable, AppOptions, ExportTarget},
    data::EventMeta,
    error::ExportResult,
    fetch::fetch_results,
    html::export_results_to_html,
    json::export_results_to_json,
    progress::Progress,
    provider::ResultsProvider,
    summary::{banner, Summary, FAILURE_BANNER, SUCCESS_BANNER},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub results_count: usize,
    pub comparisons: Vec<ComparisonReport>,
}

impl RunSummary {
    /// False when nothing could be loaded; the run still ends cleanly.
    pub fn loaded(&self) -> bool {
        self.results_count > 0
    }
}

/// Top-level pipeline: banner, fetch, summary, exports, optional comparison.
/// Only export I/O failures are returned as errors.
pub fn run(
    opts: &AppOptions,
    provider: &dyn ResultsProvider,
    aliases: &AliasTable,
    progress: &mut dyn Progress,
) -> ExportResult<RunSummary> {
    let fetch = &opts.fetch;
    progress.line(&banner(&fetch.gp_name));

    let results = fetch_results(provider, aliases, fetch.year, &fetch.gp_name);
    if results.is_empty() {
        progress.line(FAILURE_BANNER);
        progress.finish();
        return Ok(RunSummary::default());
    }

    for l in Summary::from_results(&results).lines() {
        progress.line(&l);
    }

    let event = EventMeta::new(&fetch.gp_name, fetch.year);
    let mut written = Vec::new();
    for (kind, path) in opts.export.targets() {
        let out = match kind {
            ExportTarget::Json => export_results_to_json(&results, &event, path)?,
            ExportTarget::Html => export_results_to_html(&results, &event, path)?,
        };
        if let Some(p) = out {
            progress.file_written(&p);
            written.push(p);
        }
    }

    let mut comparisons = Vec::new();
    if !opts.predictions.is_empty() {
        for set in load_prediction_sets(&opts.predictions, aliases) {
            let report = compare(&results, &set);
            for l in report.lines() {
                progress.line(&l);
            }
            comparisons.push(report);
        }
    }

    progress.line(SUCCESS_BANNER);
    progress.finish();
    Ok(RunSummary { files_written: written, results_count: results.len(), comparisons })
}
