//! Tracing (logging) initialization for the server binary.

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};


#[derive(Debug, Error)]
pub enum TracingInitializationError {
    #[error("unable to install the global tracing subscriber")]
    UnableToSetGlobalDefaultSubscriber {
        #[from]
        #[source]
        error: TryInitError,
    },
}


/// Initializes console and log file tracing output
/// with the given per-output filters.
///
/// Log files are rotated daily inside `log_file_output_directory`,
/// with file names starting with `log_file_name_prefix`.
///
/// The returned [`WorkerGuard`] must be kept alive for the duration
/// of the program, otherwise any buffered log lines are lost.
/// Dropping it flushes the background log file writer.
pub fn initialize_tracing<P>(
    console_output_filter: EnvFilter,
    log_file_output_filter: EnvFilter,
    log_file_output_directory: P,
    log_file_name_prefix: &str,
) -> Result<WorkerGuard, TracingInitializationError>
where
    P: AsRef<Path>,
{
    let (non_blocking_log_file_writer, log_file_worker_guard) = tracing_appender::non_blocking(
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix),
    );


    let console_output_layer =
        tracing_subscriber::fmt::layer().with_filter(console_output_filter);

    let log_file_output_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_log_file_writer)
        .with_filter(log_file_output_filter);


    tracing_subscriber::registry()
        .with(console_output_layer)
        .with(log_file_output_layer)
        .try_init()?;

    Ok(log_file_worker_guard)
}
