//! Final cleanup: script allow-listing and whitespace normalization
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::constants::{
    ALLOWED_PUNCTUATION, DEVANAGARI_END, DEVANAGARI_START, TIGHT_PUNCTUATION,
};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Whitespace before punctuation that attaches to the previous word
    static ref SPACE_BEFORE_PUNCTUATION: Regex = {
        let class: String = TIGHT_PUNCTUATION
            .iter()
            .map(|ch| regex::escape(&ch.to_string()))
            .collect();
        Regex::new(&format!(r"\s+([{}])", class)).unwrap()
    };
}

/// Whether `ch` may appear in normalizer output
pub fn is_allowed(ch: char) -> bool {
    (DEVANAGARI_START..=DEVANAGARI_END).contains(&ch)
        || ch.is_whitespace()
        || ALLOWED_PUNCTUATION.contains(&ch)
}

/// Devanagari letters and vowel signs; danda, digits and the abbreviation sign
/// do not count
pub fn is_devanagari_letter(ch: char) -> bool {
    (DEVANAGARI_START..=DEVANAGARI_END).contains(&ch) && !('\u{0964}'..='\u{0970}').contains(&ch)
}

/// Symbols that separate words when written between them (`/`, `+`, `=` ...)
///
/// Letters of other scripts and the zero-width joiners are not separators:
/// dropping them must not split a Devanagari word.
fn is_separator(ch: char) -> bool {
    !ch.is_alphanumeric() && !matches!(ch, '\u{200C}' | '\u{200D}')
}

/// Drop every character outside the allow-set
///
/// A dropped separator between two Devanagari letters leaves a single space,
/// so "चोवीस/तीन" reads as two words.
pub fn filter_script(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    let mut pending_break = false;

    for ch in text.chars() {
        if is_allowed(ch) {
            let after_letter = filtered.chars().next_back().map_or(false, is_devanagari_letter);
            if pending_break && after_letter && is_devanagari_letter(ch) {
                filtered.push(' ');
            }
            pending_break = false;
            filtered.push(ch);
        } else if is_separator(ch) {
            pending_break = true;
        }
    }

    filtered
}

/// Collapse whitespace runs to one space, trim, and pull tight punctuation
/// back onto the preceding word
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let trimmed = collapsed.trim();
    SPACE_BEFORE_PUNCTUATION
        .replace_all(trimmed, "$1")
        .into_owned()
}

/// Script filter, then NFC (dropping characters can leave marks out of
/// canonical order), then whitespace normalization
pub fn clean(text: &str) -> String {
    let composed: String = filter_script(text).nfc().collect();
    normalize_whitespace(&composed)
}
