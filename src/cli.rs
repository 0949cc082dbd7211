// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_GP_NAME, DEFAULT_HTML_FILE, DEFAULT_JSON_FILE};
use crate::config::options::current_year;
use crate::config::{AppOptions, ExportFormat, ExportOptions, FetchOptions, LogOptions};

/// Load official Grand Prix results and export them as JSON and/or HTML.
#[derive(Parser, Debug)]
#[command(name = "gp_results", version, about, long_about = None)]
pub struct Cli {
    /// Season year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Event name or round number
    #[arg(long, default_value = DEFAULT_GP_NAME)]
    pub gp_name: String,

    /// JSON output path
    #[arg(long, default_value = DEFAULT_JSON_FILE)]
    pub output_json: PathBuf,

    /// HTML output path
    #[arg(long, default_value = DEFAULT_HTML_FILE)]
    pub output_html: PathBuf,

    /// Which exports to write
    #[arg(long, value_enum, default_value_t = ExportFormat::Both)]
    pub format: ExportFormat,

    /// Base URL of the Ergast-compatible results API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// TOML file with extra driver aliases (`[aliases]` table)
    #[arg(long)]
    pub aliases: Option<PathBuf>,

    /// Prediction file to grade against the result (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub predictions: Vec<PathBuf>,

    /// Debug-level logging (RUST_LOG still wins)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_options(self) -> AppOptions {
        AppOptions {
            fetch: FetchOptions {
                year: self.year.unwrap_or_else(current_year),
                gp_name: self.gp_name,
                api_url: self.api_url,
            },
            export: ExportOptions {
                format: self.format,
                json_path: self.output_json,
                html_path: self.output_html,
            },
            log: LogOptions { verbose: self.verbose, json: self.log_json, file: self.log_file },
            aliases: self.aliases,
            predictions: self.predictions,
        }
    }
}
