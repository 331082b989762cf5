//! Marathi number spelling
//!
//! Converts integers to words with the Indian grouping: हजार (1,000),
//! लाख (1,00,000) and कोटी (1,00,00,000). Values from 0 to 100 come straight
//! from the cardinal table; everything above decomposes recursively.
use crate::error::{NormalizeError, Result};
use crate::text_processing::lexicon::{
    digit_word, CARDINALS, CRORE, HUNDREDS, LAKH, NEGATIVE, ORDINALS, ORDINAL_SUFFIX, THOUSAND,
};

const THOUSAND_DIVISOR: u64 = 1_000;
const LAKH_DIVISOR: u64 = 100_000;
const CRORE_DIVISOR: u64 = 10_000_000;
/// Upper bound (exclusive) of the grouped range; above it digits are read out
const GROUPED_LIMIT: u64 = 10_000_000_000;

/// Grammatical form of an ordinal, picked from the suffix written after the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalGender {
    /// ला, रा, था, वा
    Masculine,
    /// ली, री, थी, वी
    Feminine,
    /// ले, रे, थे, वे
    Plural,
}

/// Spell a signed integer in Marathi words
///
/// Negative values are prefixed with `उणे`. `i64::MIN` has no positive
/// counterpart and yields [`NormalizeError::OutOfRange`].
///
/// Examples:
/// - 25 → "पंचवीस"
/// - 2024 → "दोन हजार चोवीस"
/// - -25 → "उणे पंचवीस"
pub fn spell(n: i64) -> Result<String> {
    if n < 0 {
        let magnitude = n.checked_neg().ok_or(NormalizeError::OutOfRange(n))?;
        return Ok(format!("{} {}", NEGATIVE, spell_unsigned(magnitude as u64)));
    }
    Ok(spell_unsigned(n as u64))
}

/// Spell a non-negative integer; total over `u64`
pub fn spell_unsigned(n: u64) -> String {
    match n {
        0..=100 => CARDINALS[n as usize].to_string(),
        101..=999 => {
            let hundreds = (n / 100) as usize;
            let remainder = n % 100;
            let mut result = HUNDREDS[hundreds - 1].to_string();
            if remainder != 0 {
                result.push(' ');
                result.push_str(&spell_unsigned(remainder));
            }
            result
        }
        _ if n < LAKH_DIVISOR => spell_group(n, THOUSAND_DIVISOR, THOUSAND),
        _ if n < CRORE_DIVISOR => spell_group(n, LAKH_DIVISOR, LAKH),
        _ if n < GROUPED_LIMIT => spell_group(n, CRORE_DIVISOR, CRORE),
        _ => spell_digits(&n.to_string()),
    }
}

/// Spell `n` as `<group> <magnitude> [<remainder>]`
///
/// A group of exactly one is always "एक <magnitude>".
fn spell_group(n: u64, divisor: u64, magnitude: &str) -> String {
    let group = n / divisor;
    let remainder = n % divisor;

    let mut result = format!("{} {}", spell_unsigned(group), magnitude);
    if remainder != 0 {
        result.push(' ');
        result.push_str(&spell_unsigned(remainder));
    }
    result
}

/// Spell every ASCII digit of `digits` separately, space-separated
///
/// Non-digit characters are skipped.
pub fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(digit_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spell a run of ASCII digits of any length
///
/// Runs that fit in `u64` are spelled as a number (leading zeros ignored);
/// longer runs are read digit by digit.
pub fn spell_digit_run(digits: &str) -> String {
    match digits.parse::<u64>() {
        Ok(n) => spell_unsigned(n),
        Err(_) => spell_digits(digits),
    }
}

/// Ordinal word for `n` in the given gender
///
/// 1..=20 come from the ordinal table; anything else is the cardinal plus `वा`.
///
/// Examples:
/// - (1, Masculine) → "पहिला"
/// - (1, Feminine) → "पहिली"
/// - (21, Masculine) → "एकवीसवा"
pub fn ordinal(n: u64, gender: OrdinalGender) -> String {
    let masculine = match n {
        1..=20 => ORDINALS[(n - 1) as usize].to_string(),
        _ => format!("{}{}", spell_unsigned(n), ORDINAL_SUFFIX),
    };
    inflect(masculine, gender)
}

/// Swap the final `ा` of a masculine ordinal for the requested gender
fn inflect(masculine: String, gender: OrdinalGender) -> String {
    let ending = match gender {
        OrdinalGender::Masculine => return masculine,
        OrdinalGender::Feminine => 'ी',
        OrdinalGender::Plural => 'े',
    };
    match masculine.strip_suffix('ा') {
        Some(stem) => format!("{}{}", stem, ending),
        None => masculine,
    }
}
