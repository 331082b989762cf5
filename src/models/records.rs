use serde::Serialize;

use crate::text_processing::normalization::{get_normalization_info, NormalizationResult};

/// One normalized input line, as written by the JSON output mode
#[derive(Debug, Serialize, Clone)]
pub struct NormalizedRecord {
    /// 1-based input line number
    pub line: usize,
    /// Original text before normalization
    pub original: String,
    /// Spelled-out text (what the synthesizer will read)
    pub normalized: String,
    pub changes_count: usize,
    pub digits_spelled: usize,
    /// Output too short to synthesize
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub trivial: bool,
}

impl NormalizedRecord {
    pub fn new(line: usize, result: &NormalizationResult, trivial: bool) -> Self {
        let info = get_normalization_info(result);
        Self {
            line,
            original: result.original.clone(),
            normalized: result.normalized.clone(),
            changes_count: info.changes_count,
            digits_spelled: info.digits_spelled,
            trivial,
        }
    }
}

/// Totals for a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub skipped_trivial: usize,
}
