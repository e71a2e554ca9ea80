use crate::config::LoggingConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging and, if configured, a daily JSON log file.
///
/// RUST_LOG takes precedence over `config.level`. Console output goes to
/// stderr so report output on stdout stays machine-readable. The returned
/// guard must be held for the life of the process to flush the file writer.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if config.json_file {
        match fs::create_dir_all(&config.directory) {
            Ok(()) => {
                let file_appender =
                    tracing_appender::rolling::daily(&config.directory, "standings_scraper.log");
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
                (Some(fmt::layer().json().with_writer(non_blocking_writer)), Some(guard))
            }
            Err(e) => {
                eprintln!("Could not create log directory '{}': {}", config.directory, e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    // try_init: a second initialization (tests, embedding) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
