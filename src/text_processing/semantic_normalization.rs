//! Semantic recognizers: written numeric forms to spoken Marathi
//!
//! Each recognizer rewrites one surface pattern:
//! - Dates: "15/08/1947" → "पंधरा ऑगस्ट एक हजार नऊशे सत्तेचाळीस"
//! - Times: "10:30" → "दहा वाजून तीस मिनिटे"
//! - Currency: "₹500" → "पाचशे रुपये"
//! - Percentages: "50%" → "पन्नास टक्के"
//! - Ordinals: "5वी" → "पाचवी"
//! - Decimals: "3.14" → "तीन पूर्णांक एक चार"
//! - Plain integers: "42" → "बेचाळीस"
//!
//! Replacement text never contains ASCII digits, so a later recognizer cannot
//! re-read what an earlier one produced.
use lazy_static::lazy_static;
use regex::{Captures, Match, Regex};
use std::borrow::Cow;

use crate::text_processing::lexicon::{
    month_name, DECIMAL_POINT, DOLLARS, HOUR_EXACT, HOUR_PAST, MINUTES, ORDINAL_LOOKALIKE_STEMS,
    PERCENT, RUPEES,
};
use crate::text_processing::numbers::{
    ordinal, spell_digit_run, spell_digits, spell_unsigned, OrdinalGender,
};

lazy_static! {
    /// Day, month and four-digit year separated by `/` or `-`
    /// Matches: 15/08/1947, 1-1-2000
    static ref DATE_REGEX: Regex = Regex::new(
        r"([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})"
    ).unwrap();

    /// Hours and minutes
    /// Matches: 9:05, 10:30
    static ref TIME_REGEX: Regex = Regex::new(
        r"([0-9]{1,2}):([0-9]{2})"
    ).unwrap();

    /// Currency symbol, amount (plain or comma-grouped), optional paise/cents
    /// Matches: ₹500, ₹ 99.50, Rs. 20, रु.100, $5, ₹1,50,000, $1,500,000
    static ref CURRENCY_REGEX: Regex = Regex::new(
        r"(₹|\$|Rs\.?|रु\.)\s?([0-9]{1,3}(?:,[0-9]{2,3})*,[0-9]{3}|[0-9]+)(?:\.([0-9]+))?"
    ).unwrap();

    /// Percentages, optionally fractional
    /// Matches: 50%, 33.5 %
    static ref PERCENTAGE_REGEX: Regex = Regex::new(
        r"([0-9]+)(?:\.([0-9]+))?\s?%"
    ).unwrap();

    /// Digits immediately followed by an ordinal suffix
    /// Matches: 1ला, 2री, 4थे, 5वी, 21वा
    static ref ORDINAL_REGEX: Regex = Regex::new(
        r"([0-9]+)(ला|ली|ले|रा|री|रे|था|थी|थे|वा|वी|वे)"
    ).unwrap();

    /// Matches: 3.14, 0.5
    static ref DECIMAL_REGEX: Regex = Regex::new(
        r"([0-9]+)\.([0-9]+)"
    ).unwrap();

    static ref INTEGER_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// One substitution pass of the normalization pipeline
///
/// Implementations are stateless and rewrite every non-overlapping
/// occurrence of their pattern, leftmost first. Text with no occurrence is
/// returned borrowed.
pub trait Recognizer: Sync {
    /// Short stable name, used in logs and ordering checks
    fn name(&self) -> &'static str;

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

/// True when the match is not glued to further ASCII digits on either side
fn is_digit_bounded(text: &str, m: &Match) -> bool {
    let before = text[..m.start()].chars().next_back();
    let after = text[m.end()..].chars().next();
    !before.map_or(false, |c| c.is_ascii_digit()) && !after.map_or(false, |c| c.is_ascii_digit())
}

fn followed_by_digit(text: &str, m: &Match) -> bool {
    text[m.end()..].chars().next().map_or(false, |c| c.is_ascii_digit())
}

/// Parse a short ASCII digit field; the regexes bound every field to at most
/// four digits
fn field(caps: &Captures, index: usize) -> u64 {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0)
}

pub struct DateRecognizer;

impl Recognizer for DateRecognizer {
    fn name(&self) -> &'static str {
        "date"
    }

    /// Day and year are spelled as cardinals, the month by name. Impossible
    /// dates are not rejected: a month outside 1..=12 is spelled as a number.
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        DATE_REGEX.replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            if !caps.get(0).map_or(false, |m| is_digit_bounded(text, &m)) {
                return whole.to_string();
            }

            let day = field(caps, 1);
            let month = field(caps, 2);
            let year = field(caps, 3);

            let month_words = match month_name(month) {
                Some(name) => name.to_string(),
                None => spell_unsigned(month),
            };

            format!(
                "{} {} {}",
                spell_unsigned(day),
                month_words,
                spell_unsigned(year)
            )
        })
    }
}

pub struct TimeRecognizer;

impl Recognizer for TimeRecognizer {
    fn name(&self) -> &'static str {
        "time"
    }

    /// Examples:
    /// - "10:00" → "दहा वाजता"
    /// - "7:05" → "सात वाजून पाच मिनिटे"
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        TIME_REGEX.replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            if !caps.get(0).map_or(false, |m| is_digit_bounded(text, &m)) {
                return whole.to_string();
            }

            let hour = field(caps, 1);
            let minute = field(caps, 2);

            if minute == 0 {
                format!("{} {}", spell_unsigned(hour), HOUR_EXACT)
            } else {
                format!(
                    "{} {} {} {}",
                    spell_unsigned(hour),
                    HOUR_PAST,
                    spell_unsigned(minute),
                    MINUTES
                )
            }
        })
    }
}

pub struct CurrencyRecognizer;

impl Recognizer for CurrencyRecognizer {
    fn name(&self) -> &'static str {
        "currency"
    }

    /// Only the whole units are spoken; paise/cents are dropped. Grouping
    /// commas are ignored.
    ///
    /// Examples:
    /// - "₹500" → "पाचशे रुपये"
    /// - "₹99.50" → "नव्व्याण्णव रुपये"
    /// - "₹1,50,000" → "एक लाख पन्नास हजार रुपये"
    /// - "$20" → "वीस डॉलर"
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        CURRENCY_REGEX.replace_all(text, |caps: &Captures| {
            // A grouped amount running into more digits ("₹1,50,0001") is malformed
            if caps.get(0).map_or(false, |m| followed_by_digit(text, &m)) {
                return caps[0].to_string();
            }

            let currency = match &caps[1] {
                "$" => DOLLARS,
                _ => RUPEES,
            };

            if let Some(fraction) = caps.get(3) {
                tracing::debug!(
                    amount = &caps[0],
                    dropped = fraction.as_str(),
                    "Dropping fractional currency amount"
                );
            }

            let amount: String = caps[2].chars().filter(|&c| c != ',').collect();
            format!("{} {}", spell_digit_run(&amount), currency)
        })
    }
}

pub struct PercentageRecognizer;

impl Recognizer for PercentageRecognizer {
    fn name(&self) -> &'static str {
        "percentage"
    }

    /// Examples:
    /// - "50%" → "पन्नास टक्के"
    /// - "33.5%" → "तेहेतीस पूर्णांक पाच टक्के"
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        PERCENTAGE_REGEX.replace_all(text, |caps: &Captures| {
            let number_words = match caps.get(2) {
                Some(fraction) => format_decimal(&caps[1], fraction.as_str()),
                None => spell_digit_run(&caps[1]),
            };
            format!("{} {}", number_words, PERCENT)
        })
    }
}

pub struct OrdinalRecognizer;

impl OrdinalRecognizer {
    /// Marathi writes 1ला, 2रा, 3रा, 4था and 5वा onwards; the suffix must
    /// agree with the number. `5ला` is the dative "to five", not an ordinal.
    fn suffix_agrees(n: u64, suffix: &str) -> bool {
        let expected = match n {
            1 => 'ल',
            2 | 3 => 'र',
            4 => 'थ',
            _ => 'व',
        };
        suffix.starts_with(expected)
    }

    /// Whether the suffix is really the start of another word, as in `1लाख`
    /// or `3रात्री`, or its vowel sign carries a further sign (`4थांबा`)
    fn starts_other_word(continuation: &str) -> bool {
        continuation.chars().next().map_or(false, is_devanagari_sign)
            || ORDINAL_LOOKALIKE_STEMS
                .iter()
                .any(|stem| continuation.starts_with(stem))
    }

    fn gender(suffix: &str) -> OrdinalGender {
        match suffix.chars().last() {
            Some('ी') => OrdinalGender::Feminine,
            Some('े') => OrdinalGender::Plural,
            _ => OrdinalGender::Masculine,
        }
    }
}

impl Recognizer for OrdinalRecognizer {
    fn name(&self) -> &'static str {
        "ordinal"
    }

    /// Examples:
    /// - "1ला" → "पहिला"
    /// - "2री" → "दुसरी"
    /// - "21वे" → "एकवीसवे"
    /// - "1लाख" → "एक लाख" (a cardinal before a separate word)
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        ORDINAL_REGEX.replace_all(text, |caps: &Captures| {
            let suffix = &caps[2];
            let end = caps.get(0).map_or(text.len(), |m| m.end());
            if Self::starts_other_word(&text[end..]) {
                return format!("{} {}", spell_digit_run(&caps[1]), suffix);
            }

            let n = match caps[1].parse::<u64>() {
                Ok(n) => n,
                Err(_) => return caps[0].to_string(),
            };

            if !Self::suffix_agrees(n, suffix) {
                return caps[0].to_string();
            }

            ordinal(n, Self::gender(suffix))
        })
    }
}

pub struct DecimalRecognizer;

impl Recognizer for DecimalRecognizer {
    fn name(&self) -> &'static str {
        "decimal"
    }

    /// The fractional part is read digit by digit.
    ///
    /// Examples:
    /// - "3.14" → "तीन पूर्णांक एक चार"
    /// - "0.05" → "शून्य पूर्णांक शून्य पाच"
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        DECIMAL_REGEX.replace_all(text, |caps: &Captures| format_decimal(&caps[1], &caps[2]))
    }
}

pub struct IntegerRecognizer;

impl Recognizer for IntegerRecognizer {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        INTEGER_REGEX.replace_all(text, |caps: &Captures| spell_digit_run(&caps[0]))
    }
}

/// Dependent vowel signs and other marks that attach to a preceding letter
fn is_devanagari_sign(ch: char) -> bool {
    matches!(ch,
        '\u{0900}'..='\u{0903}'
        | '\u{093A}'..='\u{093C}'
        | '\u{093E}'..='\u{094F}'
        | '\u{0951}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}')
}

/// "<integer words> पूर्णांक <digit words>"
fn format_decimal(integer: &str, fraction: &str) -> String {
    format!(
        "{} {} {}",
        spell_digit_run(integer),
        DECIMAL_POINT,
        spell_digits(fraction)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Date Tests =====

    #[test]
    fn test_date_slashes() {
        assert_eq!(
            DateRecognizer.apply("15/08/1947"),
            "पंधरा ऑगस्ट एक हजार नऊशे सत्तेचाळीस"
        );
    }

    #[test]
    fn test_date_dashes() {
        assert_eq!(DateRecognizer.apply("1-1-2000"), "एक जानेवारी दोन हजार");
    }

    #[test]
    fn test_date_in_sentence() {
        assert_eq!(
            DateRecognizer.apply("दिनांक 26/01/1950 रोजी"),
            "दिनांक सव्वीस जानेवारी एक हजार नऊशे पन्नास रोजी"
        );
    }

    #[test]
    fn test_invalid_month_spelled_as_number() {
        assert_eq!(
            DateRecognizer.apply("99/99/9999"),
            "नव्व्याण्णव नव्व्याण्णव नऊ हजार नऊशे नव्व्याण्णव"
        );
    }

    #[test]
    fn test_date_glued_to_digits_untouched() {
        assert_eq!(DateRecognizer.apply("115/08/1947"), "115/08/1947");
        assert_eq!(DateRecognizer.apply("15/08/19470"), "15/08/19470");
    }

    #[test]
    fn test_two_digit_year_not_a_date() {
        assert_eq!(DateRecognizer.apply("15/08/47"), "15/08/47");
    }

    // ===== Time Tests =====

    #[test]
    fn test_time_on_the_hour() {
        assert_eq!(TimeRecognizer.apply("10:00"), "दहा वाजता");
    }

    #[test]
    fn test_time_with_minutes() {
        assert_eq!(TimeRecognizer.apply("10:30"), "दहा वाजून तीस मिनिटे");
        assert_eq!(TimeRecognizer.apply("7:05"), "सात वाजून पाच मिनिटे");
    }

    #[test]
    fn test_time_not_validated() {
        assert_eq!(TimeRecognizer.apply("25:61"), "पंचवीस वाजून एकसष्ट मिनिटे");
    }

    // ===== Currency Tests =====

    #[test]
    fn test_rupee_symbol() {
        assert_eq!(CurrencyRecognizer.apply("₹500"), "पाचशे रुपये");
        assert_eq!(CurrencyRecognizer.apply("₹ 100"), "शंभर रुपये");
    }

    #[test]
    fn test_rupee_fraction_dropped() {
        assert_eq!(CurrencyRecognizer.apply("₹99.50"), "नव्व्याण्णव रुपये");
        assert_eq!(CurrencyRecognizer.apply("₹10.5 फक्त"), "दहा रुपये फक्त");
    }

    #[test]
    fn test_rupee_written_forms() {
        assert_eq!(CurrencyRecognizer.apply("Rs. 20"), "वीस रुपये");
        assert_eq!(CurrencyRecognizer.apply("Rs20"), "वीस रुपये");
        assert_eq!(CurrencyRecognizer.apply("रु.150"), "शंभर पन्नास रुपये");
    }

    #[test]
    fn test_dollar() {
        assert_eq!(CurrencyRecognizer.apply("$20"), "वीस डॉलर");
    }

    #[test]
    fn test_large_amount() {
        assert_eq!(CurrencyRecognizer.apply("₹150000"), "एक लाख पन्नास हजार रुपये");
    }

    #[test]
    fn test_long_fraction_dropped_whole() {
        assert_eq!(CurrencyRecognizer.apply("₹99.505"), "नव्व्याण्णव रुपये");
        assert_eq!(CurrencyRecognizer.apply("$3.14159 फक्त"), "तीन डॉलर फक्त");
    }

    #[test]
    fn test_grouped_amounts() {
        assert_eq!(CurrencyRecognizer.apply("₹1,50,000"), "एक लाख पन्नास हजार रुपये");
        assert_eq!(CurrencyRecognizer.apply("$1,500,000"), "पंधरा लाख डॉलर");
        assert_eq!(CurrencyRecognizer.apply("₹2,500.75"), "दोन हजार पाचशे रुपये");
    }

    #[test]
    fn test_comma_after_amount_is_punctuation() {
        assert_eq!(CurrencyRecognizer.apply("₹5, ₹10"), "पाच रुपये, दहा रुपये");
        assert_eq!(CurrencyRecognizer.apply("₹10,5"), "दहा रुपये,5");
    }

    #[test]
    fn test_malformed_grouping_untouched() {
        assert_eq!(CurrencyRecognizer.apply("₹1,50,0001"), "₹1,50,0001");
    }

    // ===== Percentage Tests =====

    #[test]
    fn test_percentage_integer() {
        assert_eq!(PercentageRecognizer.apply("50%"), "पन्नास टक्के");
        assert_eq!(PercentageRecognizer.apply("100 %"), "शंभर टक्के");
    }

    #[test]
    fn test_percentage_decimal() {
        assert_eq!(
            PercentageRecognizer.apply("33.5%"),
            "तेहेतीस पूर्णांक पाच टक्के"
        );
    }

    // ===== Ordinal Tests =====

    #[test]
    fn test_ordinal_table_forms() {
        assert_eq!(OrdinalRecognizer.apply("1ला"), "पहिला");
        assert_eq!(OrdinalRecognizer.apply("2री"), "दुसरी");
        assert_eq!(OrdinalRecognizer.apply("3रे"), "तिसरे");
        assert_eq!(OrdinalRecognizer.apply("4था"), "चौथा");
        assert_eq!(OrdinalRecognizer.apply("5वी"), "पाचवी");
        assert_eq!(OrdinalRecognizer.apply("20वा"), "विसावा");
    }

    #[test]
    fn test_ordinal_fallback_suffix() {
        assert_eq!(OrdinalRecognizer.apply("21वा"), "एकवीसवा");
        assert_eq!(OrdinalRecognizer.apply("42वे वर्ष"), "बेचाळीसवे वर्ष");
    }

    #[test]
    fn test_mismatched_suffix_is_not_ordinal() {
        assert_eq!(OrdinalRecognizer.apply("5ला भेटू"), "5ला भेटू");
        assert_eq!(OrdinalRecognizer.apply("1वा"), "1वा");
    }

    #[test]
    fn test_lookalike_word_after_digits_is_cardinal() {
        assert_eq!(OrdinalRecognizer.apply("1लाख रुपये"), "एक लाख रुपये");
        assert_eq!(OrdinalRecognizer.apply("3रात्री"), "तीन रात्री");
        assert_eq!(OrdinalRecognizer.apply("5वाजता"), "पाच वाजता");
        assert_eq!(OrdinalRecognizer.apply("2वेळा"), "दोन वेळा");
        assert_eq!(OrdinalRecognizer.apply("4थांबे"), "चार थांबे");
    }

    #[test]
    fn test_inflected_ordinal_kept() {
        assert_eq!(OrdinalRecognizer.apply("5वीत"), "पाचवीत");
        assert_eq!(OrdinalRecognizer.apply("1ली तुकडी"), "पहिली तुकडी");
    }

    #[test]
    fn test_detached_suffix_is_not_ordinal() {
        assert_eq!(OrdinalRecognizer.apply("5 वी संख्या"), "5 वी संख्या");
    }

    // ===== Decimal Tests =====

    #[test]
    fn test_decimal() {
        assert_eq!(DecimalRecognizer.apply("3.14"), "तीन पूर्णांक एक चार");
        assert_eq!(DecimalRecognizer.apply("0.05"), "शून्य पूर्णांक शून्य पाच");
    }

    // ===== Integer Tests =====

    #[test]
    fn test_integers() {
        assert_eq!(IntegerRecognizer.apply("25 अंश"), "पंचवीस अंश");
        assert_eq!(IntegerRecognizer.apply("0 ते 100"), "शून्य ते शंभर");
    }

    #[test]
    fn test_integer_overflow_reads_digits() {
        assert_eq!(
            IntegerRecognizer.apply("123456789012345678901"),
            spell_digits("123456789012345678901")
        );
    }

    #[test]
    fn test_no_digits_borrows() {
        assert!(matches!(IntegerRecognizer.apply("अंक नाहीत"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_devanagari_digits_ignored_by_recognizers() {
        // Devanagari digits are folded to ASCII before the recognizers run
        assert_eq!(IntegerRecognizer.apply("२५"), "२५");
    }

    #[test]
    fn test_replacements_contain_no_digits() {
        let outputs = [
            DateRecognizer.apply("01/02/2003").into_owned(),
            TimeRecognizer.apply("12:45").into_owned(),
            CurrencyRecognizer.apply("₹12.34").into_owned(),
            PercentageRecognizer.apply("12.5%").into_owned(),
            OrdinalRecognizer.apply("12वा").into_owned(),
            DecimalRecognizer.apply("1.23").into_owned(),
            IntegerRecognizer.apply("12345678901").into_owned(),
        ];
        for output in outputs {
            assert!(!output.chars().any(|c| c.is_ascii_digit()), "{}", output);
        }
    }
}
