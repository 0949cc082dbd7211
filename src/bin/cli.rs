// src/bin/cli.rs
use clap::Parser;
use tracing::error;

use gp_results::{
    cli::Cli,
    config::AliasTable,
    log,
    progress::{ConsoleProgress, Progress},
    provider::JolpicaProvider,
    runner,
    summary::{banner, FAILURE_BANNER},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = Cli::parse().into_options();
    log::init(&opts.log)?;

    let aliases = AliasTable::load(opts.aliases.as_deref())?;
    let mut progress = ConsoleProgress;

    // A client that cannot be built is a fetch failure like any other.
    let provider = match JolpicaProvider::new(opts.fetch.api_url.as_str()) {
        Ok(p) => p,
        Err(e) => {
            progress.line(&banner(&opts.fetch.gp_name));
            error!("Error loading {} results for {}: {e}", opts.fetch.gp_name, opts.fetch.year);
            progress.line(FAILURE_BANNER);
            return Ok(());
        }
    };
    let summary = runner::run(&opts, &provider, &aliases, &mut progress)?;

    tracing::debug!(files = summary.files_written.len(), drivers = summary.results_count, "Run finished");
    Ok(())
}
