/// Punctuation kept by the script filter, besides Devanagari and whitespace
///
/// `।` is the Devanagari sentence terminator (danda).
pub const ALLOWED_PUNCTUATION: &[char] = &['।', ',', '!', '?', '.', '-', ':', ';'];

/// Punctuation that attaches to the preceding word (no space before it)
pub const TIGHT_PUNCTUATION: &[char] = &['।', ',', '!', '?', ';', ':'];

/// Devanagari Unicode block
pub const DEVANAGARI_START: char = '\u{0900}';
pub const DEVANAGARI_END: char = '\u{097F}';

/// Outputs shorter than this (in characters) are too trivial to synthesize
///
/// Used by callers that skip records; the normalizer itself never rejects text.
pub const MIN_NORMALIZED_CHARS: usize = 2;

/// Upper bound on abbreviation re-expansion rounds after cleanup
///
/// Every abbreviation key contains a period and no expansion does, so each
/// productive round removes at least one period.
pub const MAX_SETTLE_ROUNDS: usize = 8;
