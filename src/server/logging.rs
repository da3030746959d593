//! Tracing subscriber setup.
//!
//! Every event goes to stdout and to an append-only log file, both prefixed with a local
//! `DD/MM/YYYY hh:mm:ssAM` timestamp. A failed write to the file never reaches a request.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::{
    fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %I:%M:%S%p";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// Falls back to stdout only when `log_file` cannot be opened for appending.
pub fn init(log_file: &Path) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, file_error) = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(file) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_writer(Mutex::new(file));

            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        )
        .with(file_layer)
        .init();

    if let Some(err) = file_error {
        tracing::warn!(
            "Unable to open log file {}, logging to stdout only: {}",
            log_file.display(),
            err
        );
    }
}
