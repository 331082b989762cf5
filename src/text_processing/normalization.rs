//! Text normalization pipeline for Marathi TTS
//!
//! Raw text goes through a Unicode pre-pass, the recognizer passes in a fixed
//! order, and finally the script filter and whitespace cleanup.
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

use crate::config::constants::MAX_SETTLE_ROUNDS;
use crate::text_processing::abbreviations::{expand_abbreviations, AbbreviationRecognizer};
use crate::text_processing::script_filter::clean;
use crate::text_processing::semantic_normalization::{
    CurrencyRecognizer, DateRecognizer, DecimalRecognizer, IntegerRecognizer, OrdinalRecognizer,
    PercentageRecognizer, Recognizer, TimeRecognizer,
};

/// Substitution passes, in the order they run
///
/// Order matters! Each pass only sees digit runs that earlier passes left
/// alone: dates before times, and plain integers last so they cannot shred a
/// date, time, amount or decimal into separate numbers.
pub const PASS_ORDER: &[&dyn Recognizer] = &[
    &AbbreviationRecognizer,
    &DateRecognizer,
    &TimeRecognizer,
    &CurrencyRecognizer,
    &PercentageRecognizer,
    &OrdinalRecognizer,
    &DecimalRecognizer,
    &IntegerRecognizer,
];

#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// Original text before normalization
    pub original: String,
    /// Spelled-out Devanagari text suitable for TTS
    pub normalized: String,
}

#[derive(Debug, Clone)]
pub struct NormalizationInfo {
    /// Number of character positions that differ
    pub changes_count: usize,
    /// Original length in characters
    pub original_length: usize,
    /// Normalized length in characters
    pub normalized_length: usize,
    /// ASCII or Devanagari digits in the original that were spelled out
    pub digits_spelled: usize,
}

/// Names of the passes in execution order
pub fn pass_names() -> Vec<&'static str> {
    PASS_ORDER.iter().map(|pass| pass.name()).collect()
}

/// Normalize Marathi text for TTS
///
/// Never fails: unrecognized digit runs become plain cardinals and characters
/// outside the Devanagari allow-set are dropped. The result may be empty.
///
/// Example: "डॉ. पाटील यांनी 100 रुपये दिले" → "डॉक्टर पाटील यांनी शंभर रुपये दिले"
pub fn normalize(text: &str) -> String {
    let mut current = fold_unicode(text);

    for pass in PASS_ORDER {
        let rewritten = match pass.apply(&current) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };
        if let Some(rewritten) = rewritten {
            tracing::debug!(pass = pass.name(), "Pass rewrote text");
            current = rewritten;
        }
    }

    let mut result = clean(&current);

    // Dropping characters can splice a new abbreviation together ("मX." → "म.")
    for _ in 0..MAX_SETTLE_ROUNDS {
        let next = match expand_abbreviations(&result) {
            Cow::Borrowed(_) => break,
            Cow::Owned(expanded) => clean(&expanded),
        };
        if next == result {
            break;
        }
        tracing::debug!("Cleanup exposed an abbreviation, expanding again");
        result = next;
    }

    tracing::trace!(
        input_chars = text.chars().count(),
        output_chars = result.chars().count(),
        "Normalized text"
    );

    result
}

/// Normalize text while keeping the original for reporting
pub fn normalize_with_info(text: &str) -> NormalizationResult {
    NormalizationResult {
        original: text.to_string(),
        normalized: normalize(text),
    }
}

/// Get information about what normalization was performed
pub fn get_normalization_info(result: &NormalizationResult) -> NormalizationInfo {
    let changes_count = result
        .original
        .chars()
        .zip(result.normalized.chars())
        .filter(|(a, b)| a != b)
        .count();

    let digits_spelled = result
        .original
        .chars()
        .filter(|c| c.is_ascii_digit() || devanagari_digit(*c).is_some())
        .count();

    NormalizationInfo {
        changes_count,
        original_length: result.original.chars().count(),
        normalized_length: result.normalized.chars().count(),
        digits_spelled,
    }
}

/// Fold typographic characters and Devanagari digits before the recognizers
///
/// This function handles:
/// - Devanagari digits (०-९) → ASCII digits, so they are spelled too
/// - Smart quotes → ASCII quotes
/// - En/em dashes → ASCII hyphen
/// - Ellipsis → three dots
/// - Non-breaking spaces → regular spaces
/// - Soft hyphens → removed
/// - Unicode normalization (NFC form)
pub fn fold_unicode(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            // Left and right double quotes → ASCII double quote
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => folded.push('"'),
            // Left and right single quotes → ASCII apostrophe
            '\u{2018}' | '\u{2019}' | '\u{02BC}' | '\u{00B4}' => folded.push('\''),
            // En dash and em dash → ASCII hyphen
            '\u{2013}' | '\u{2014}' => folded.push('-'),
            // Non-breaking space → regular space
            '\u{00A0}' | '\u{202F}' => folded.push(' '),
            '\u{2026}' => folded.push_str("..."),
            // Soft hyphen → remove
            '\u{00AD}' => continue,
            _ => match devanagari_digit(ch) {
                Some(ascii) => folded.push(ascii),
                None => folded.push(ch),
            },
        }
    }

    folded.nfc().collect()
}

/// ASCII counterpart of a Devanagari digit
fn devanagari_digit(ch: char) -> Option<char> {
    match ch {
        '०'..='९' => char::from_digit(ch as u32 - '०' as u32, 10),
        _ => None,
    }
}
