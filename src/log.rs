// src/log.rs
// Subscriber setup for the binary. Lines carry the elapsed time since start,
// e.g. `0.412s  INFO Loading Dutch Grand Prix results for 2025...`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogOptions;
use crate::error::LogError;

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "info,gp_results=debug" } else { "info" }
}

pub fn init(opts: &LogOptions) -> Result<(), LogError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(opts.verbose)));

    let writer = match &opts.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::Open { path: path.clone(), source })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(opts.file.is_none())
        .with_target(false)
        .with_timer(fmt::time::uptime());

    let registry = tracing_subscriber::registry().with(filter);
    if opts.json {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer).try_init()?;
    }
    Ok(())
}
