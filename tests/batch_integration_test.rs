/// Integration tests for file-driven batch normalization
///
/// These tests go through `open_input` and `process_lines` the way the
/// command-line front end does, with real files on disk.
use std::fs;

use marathi_normalizer::config::{CliConfig, OutputFormat};
use marathi_normalizer::services::batch::{open_input, process_lines};
use marathi_normalizer::{spell, NormalizeError};
use tempfile::TempDir;

#[test]
fn test_batch_from_file_text_mode() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    fs::write(
        &input_path,
        "आज तापमान 25 अंश आहे.\nडॉ. पाटील यांनी 100 रुपये दिले\nHello\n",
    )
    .unwrap();

    let reader = open_input(input_path.to_str().unwrap()).unwrap();
    let mut output = Vec::new();
    let stats = process_lines(reader, &mut output, &CliConfig::default()).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "आज तापमान पंचवीस अंश आहे.\nडॉक्टर पाटील यांनी शंभर रुपये दिले\n\n"
    );
    assert_eq!(stats.lines_read, 3);
    assert_eq!(stats.lines_written, 3);
}

#[test]
fn test_batch_from_file_json_skips_trivial() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    fs::write(&input_path, "Hello\n15/08/1947\n").unwrap();

    let config = CliConfig {
        format: OutputFormat::Json,
        skip_trivial: true,
        ..CliConfig::default()
    };
    let reader = open_input(input_path.to_str().unwrap()).unwrap();
    let mut output = Vec::new();
    let stats = process_lines(reader, &mut output, &config).unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["line"], 2);
    assert_eq!(record["normalized"], "पंधरा ऑगस्ट एक हजार नऊशे सत्तेचाळीस");
    assert_eq!(record["digits_spelled"], 8);
    assert!(record.get("trivial").is_none());
    assert_eq!(stats.skipped_trivial, 1);
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let result = open_input(missing.to_str().unwrap());
    assert!(matches!(result, Err(NormalizeError::FileNotFound(_))));
}

#[test]
fn test_public_spell() {
    assert_eq!(spell(1947).unwrap(), "एक हजार नऊशे सत्तेचाळीस");
    assert_eq!(spell(-5).unwrap(), "उणे पाच");
    assert!(matches!(
        spell(i64::MIN),
        Err(NormalizeError::OutOfRange(_))
    ));
}
