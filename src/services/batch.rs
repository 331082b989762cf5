//! Line-by-line normalization for the command-line front end
//!
//! Whether an empty or near-empty normalization is worth keeping is the
//! caller's decision; `skip_trivial` applies the dataset-preparation policy.
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::config::constants::MIN_NORMALIZED_CHARS;
use crate::config::{CliConfig, OutputFormat};
use crate::error::{NormalizeError, Result};
use crate::models::{BatchStats, NormalizedRecord};
use crate::text_processing::normalization::normalize_with_info;

/// Whether a normalized line is too short to synthesize
pub fn is_trivial(normalized: &str) -> bool {
    normalized.trim().chars().count() < MIN_NORMALIZED_CHARS
}

/// Open an input file for line reading
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if !Path::new(path).exists() {
        return Err(NormalizeError::FileNotFound(path.to_string()));
    }
    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

/// Normalize every line of `reader` and write the results to `writer`
pub fn process_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &CliConfig,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        stats.lines_read += 1;

        let result = normalize_with_info(&line);
        let trivial = is_trivial(&result.normalized);

        if trivial && config.skip_trivial {
            tracing::debug!(line = index + 1, "Skipping trivial normalization");
            stats.skipped_trivial += 1;
            continue;
        }

        match config.format {
            OutputFormat::Text => writeln!(writer, "{}", result.normalized)?,
            OutputFormat::Json => {
                let record = NormalizedRecord::new(index + 1, &result, trivial);
                serde_json::to_writer(&mut *writer, &record)?;
                writeln!(writer)?;
            }
        }
        stats.lines_written += 1;
    }

    writer.flush()?;
    Ok(stats)
}
