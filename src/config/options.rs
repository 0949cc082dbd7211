// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::Datelike;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    pub log: LogOptions,
    /// Optional TOML file with extra driver aliases.
    pub aliases: Option<PathBuf>,
    /// Prediction files to grade against the official result.
    pub predictions: Vec<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub year: i32,
    pub gp_name: String,
    pub api_url: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            year: current_year(),
            gp_name: s!(DEFAULT_GP_NAME),
            api_url: s!(DEFAULT_API_URL),
        }
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Html,
    #[default]
    Both,
}

/// One concrete output selected by an `ExportFormat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    Json,
    Html,
}

impl ExportFormat {
    pub fn includes_json(self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }
    pub fn includes_html(self) -> bool {
        matches!(self, ExportFormat::Html | ExportFormat::Both)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Both,
            json_path: PathBuf::from(DEFAULT_JSON_FILE),
            html_path: PathBuf::from(DEFAULT_HTML_FILE),
        }
    }
}

impl ExportOptions {
    /// Output targets selected by `format`, JSON first.
    pub fn targets(&self) -> Vec<(ExportTarget, &Path)> {
        let mut out = Vec::with_capacity(2);
        if self.format.includes_json() {
            out.push((ExportTarget::Json, self.json_path.as_path()));
        }
        if self.format.includes_html() {
            out.push((ExportTarget::Html, self.html_path.as_path()));
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub json: bool,
    pub file: Option<PathBuf>,
}
