use marathi_normalizer::cli::{self, Command};
use marathi_normalizer::config::CliConfig;
use marathi_normalizer::error::{NormalizeError, Result};
use marathi_normalizer::logging::{init_logging, LogConfig};
use marathi_normalizer::services::batch;
use marathi_normalizer::text_processing::normalization::normalize;
use std::env;
use std::io::{self, BufRead};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let log_config = LogConfig::from_env();
    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(&log_config)
        .map_err(|e| NormalizeError::InvalidArgument(format!("logging setup failed: {}", e)))?;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = CliConfig::from_env();

    match cli::parse_args(&args, &mut config)? {
        Command::Help => cli::print_help(),
        Command::Version => cli::print_version(),
        Command::Text(text) => println!("{}", normalize(&text)),
        Command::Lines => {
            let reader: Box<dyn BufRead> = match config.input_path.as_deref() {
                Some(path) => {
                    tracing::info!("Reading lines from {}", path);
                    batch::open_input(path)?
                }
                None => Box::new(io::stdin().lock()),
            };

            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let stats = batch::process_lines(reader, &mut writer, &config)?;

            tracing::info!(
                lines_read = stats.lines_read,
                lines_written = stats.lines_written,
                skipped_trivial = stats.skipped_trivial,
                "Normalization complete"
            );
        }
    }

    Ok(())
}
