//! CLI argument parsing and help text
use crate::config::{CliConfig, OutputFormat};
use crate::error::{NormalizeError, Result};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    /// Normalize the joined positional arguments
    Text(String),
    /// Normalize input lines from stdin or `--file`
    Lines,
}

/// Parse arguments (without the program name), layering flags over `config`
pub fn parse_args(args: &[String], config: &mut CliConfig) -> Result<Command> {
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--json" => config.format = OutputFormat::Json,
            "--skip-trivial" => config.skip_trivial = true,
            "--file" => {
                let path = iter.next().ok_or_else(|| {
                    NormalizeError::InvalidArgument("--file requires a path".to_string())
                })?;
                config.input_path = Some(path.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(NormalizeError::InvalidArgument(format!(
                    "unknown option {}",
                    flag
                )));
            }
            word => words.push(word.to_string()),
        }
    }

    if words.is_empty() {
        Ok(Command::Lines)
    } else {
        Ok(Command::Text(words.join(" ")))
    }
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Marathi Normalizer v{}", version);
    println!("Spells out numbers, dates, times, currency and abbreviations in Marathi text for TTS");
    println!();
    println!("USAGE:");
    println!("    marathi_normalizer [OPTIONS] [TEXT]");
    println!();
    println!("OPTIONS:");
    println!("    --file <PATH>         Read input lines from a file instead of stdin");
    println!("    --json                Write JSON Lines with original and normalized text");
    println!("    --skip-trivial        Drop lines whose output is shorter than two characters");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize a single sentence");
    println!("    marathi_normalizer \"डॉ. पाटील यांनी 100 रुपये दिले\"");
    println!();
    println!("    # Normalize a transcript, one sentence per line");
    println!("    marathi_normalizer --file lines.txt --skip-trivial > normalized.txt");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    MARATHI_NORM_FORMAT              - Output format (text/json)");
    println!("    MARATHI_NORM_SKIP_TRIVIAL        - Drop trivial lines (true/false)");
    println!("    MARATHI_NORM_LOG_DIR             - Directory for JSON log files");
    println!("    MARATHI_NORM_FILE_LOG_LEVEL      - File log level (default: debug)");
    println!("    LOG_FORMAT                       - Console log format (compact/pretty)");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the current directory");
}

pub fn print_version() {
    println!("Marathi Normalizer v{}", env!("CARGO_PKG_VERSION"));
}
