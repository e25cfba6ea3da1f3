use crate::level::FilterLevel;
use serde::{Deserialize, Serialize};

/// Per-message filtering report.
///
/// Immutable once built. `filtered_words_count` always equals
/// `inappropriate_words.len()`, because detection and rewrite share one
/// tokenization pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterReport {
    pub original_message: String,
    pub filtered_message: String,
    /// Offending tokens in order of first appearance, duplicates preserved,
    /// original spelling.
    pub inappropriate_words: Vec<String>,
    pub total_words: usize,
    pub filtered_words_count: usize,
    pub is_clean: bool,
    pub filter_level: FilterLevel,
    /// Message length in characters, not bytes.
    pub message_length: usize,
}

impl FilterReport {
    /// The report for absent input: clean, empty, zero-length.
    pub(crate) fn vacuous(level: FilterLevel) -> Self {
        Self {
            original_message: String::new(),
            filtered_message: String::new(),
            inappropriate_words: Vec::new(),
            total_words: 0,
            filtered_words_count: 0,
            is_clean: true,
            filter_level: level,
            message_length: 0,
        }
    }
}

/// Snapshot of the engine's process-lifetime counters and current settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Statistics {
    pub messages_processed: u64,
    pub words_filtered: u64,
    pub word_count: usize,
    pub filter_level: FilterLevel,
    pub replacement_char: char,
}
