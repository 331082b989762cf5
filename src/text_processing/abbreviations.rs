//! Abbreviation expansion
//!
//! Keys are matched literally, longest first, and only at the start of a
//! token so that `म.` does not fire inside a word such as `राम.`.
use lazy_static::lazy_static;
use std::borrow::Cow;

use crate::text_processing::lexicon::ABBREVIATIONS;
use crate::text_processing::script_filter::is_devanagari_letter;
use crate::text_processing::semantic_normalization::Recognizer;

lazy_static! {
    /// Abbreviation table sorted by descending key length (in characters)
    ///
    /// `sort_by` is stable, so equal-length keys keep table order.
    static ref LONGEST_FIRST: Vec<(&'static str, &'static str)> = {
        let mut entries = ABBREVIATIONS.to_vec();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        entries
    };
}

/// Abbreviation pass of the pipeline
pub struct AbbreviationRecognizer;

impl Recognizer for AbbreviationRecognizer {
    fn name(&self) -> &'static str {
        "abbreviation"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        expand_abbreviations(text)
    }
}

/// Keys in the order they are tried
pub fn expansion_order() -> Vec<&'static str> {
    LONGEST_FIRST.iter().map(|(key, _)| *key).collect()
}

/// Expand every abbreviation in `text`
///
/// One left-to-right scan over the source: at each token start the keys are
/// tried longest first. An expansion directly followed by a letter or digit
/// (such as a second abbreviation in `प्रा.डॉ.`) is separated from it by a space.
pub fn expand_abbreviations(text: &str) -> Cow<'_, str> {
    if !LONGEST_FIRST.iter().any(|(key, _)| text.contains(key)) {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len() + 32);
    let mut previous: Option<char> = None;
    let mut pos = 0;
    let mut replaced = false;

    while let Some(ch) = text[pos..].chars().next() {
        let rest = &text[pos..];
        let at_token_start = !previous.map_or(false, is_devanagari_letter);
        let hit = if at_token_start {
            LONGEST_FIRST.iter().find(|(key, _)| rest.starts_with(key))
        } else {
            None
        };

        match hit {
            Some((key, expansion)) => {
                output.push_str(expansion);
                pos += key.len();
                previous = key.chars().next_back();
                replaced = true;

                if text[pos..].chars().next().map_or(false, char::is_alphanumeric) {
                    output.push(' ');
                }
            }
            None => {
                output.push(ch);
                pos += ch.len_utf8();
                previous = Some(ch);
            }
        }
    }

    if !replaced {
        return Cow::Borrowed(text);
    }
    Cow::Owned(output)
}
