pub mod config;
pub mod paths;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::{LogConfig, LogFormat};

/// Initialize console logging, plus a JSON log file when a directory is set
///
/// Console output goes to stderr so normalized text on stdout stays clean.
/// The returned guard flushes the file writer on drop; keep it alive for the
/// life of the process.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let console_filter = EnvFilter::try_new(&config.console_log_level)
        .unwrap_or_else(|_| EnvFilter::new(LogConfig::default().console_log_level));

    let console_layer = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty()
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .with_filter(console_filter)
            .boxed(),
    };

    let (file_layer, guard) = match config.log_dir.as_deref() {
        Some(dir) => {
            let log_dir = paths::get_log_directory(dir)?;
            let appender = tracing_appender::rolling::daily(&log_dir, "normalizer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new(&config.file_log_level))
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = config.log_dir.as_deref() {
        tracing::debug!("Logging to directory: {}", dir);
    }

    Ok(guard)
}
