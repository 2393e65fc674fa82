//! tracee - Binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> TraceeConfig::load() -> RunSettings::resolve()
//!        -> Counter::for_revision(stdout) -> Driver::run(stdout, counter)
//!        -> counter dropped (destructor line, linked and final revisions)
//! ```
//!
//! Standard output carries only the demo's lines, so a tracer can compare it
//! byte for byte. Logs go to `~/.tracee/logs/tracee.log`, never to stdout.

use anyhow::{Context, Result};
use std::{
    env,
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
    process,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tracee_config::{RunSettings, TraceeConfig};
use tracee_core::Driver;
use tracee_types::Counter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match open_log_file() {
        Ok((log_path, file, failures)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();

            tracing::info!(path = %log_path.display(), pid = process::id(), "Logging initialized");
            for failure in failures {
                tracing::warn!("Skipped log file {failure}");
            }
        }
        // stdout and stderr belong to the tracer watching us; no file means no logs.
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

/// `~/.tracee/logs/tracee.log`, then the system temp dir. Never the working
/// directory or the config's directory: the tracer picks both of those.
fn log_file_candidates() -> Vec<PathBuf> {
    let fallback = env::temp_dir().join("tracee").join("tracee.log");
    tracee_config::log_path()
        .into_iter()
        .chain(std::iter::once(fallback))
        .collect()
}

type OpenedLog = (PathBuf, fs::File, Vec<String>);

/// First candidate that opens for append, plus why earlier ones did not.
fn open_log_file() -> Result<OpenedLog, Vec<String>> {
    let mut failures = Vec::new();
    for path in log_file_candidates() {
        let opened = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| OpenOptions::new().create(true).append(true).open(&path));
        match opened {
            Ok(file) => return Ok((path, file, failures)),
            Err(e) => failures.push(format!("{}: {e}", path.display())),
        }
    }
    Err(failures)
}

fn main() -> Result<()> {
    init_tracing();

    let config = TraceeConfig::load().context("failed to load tracee config")?;
    let settings = RunSettings::resolve(config.as_ref());
    tracing::info!(
        revision = %settings.revision,
        reporter = settings.reporter_message.is_some(),
        "Resolved run settings"
    );

    let mut counter = Counter::for_revision(io::stdout(), settings.revision);
    let mut out = io::stdout();
    Driver::from_settings(&settings)
        .run(&mut out, &mut counter)
        .context("demo run failed")?;

    Ok(())
}
