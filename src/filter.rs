use crate::error::{ExportError, LoadError, ValidationError};
use crate::level::FilterLevel;
use crate::replacements::{decode_variants, normalize};
use crate::report::{FilterReport, Statistics};
use crate::tokenize::WordSpans;
use crate::word_list;
use crate::Set;
use std::iter;
use std::path::Path;

const DEFAULT_MAX_MESSAGE_LEN: usize = 1000;
const DEFAULT_MIN_MESSAGE_LEN: usize = 1;

/// Number of replacement characters emitted for an offending token when the
/// caller opts out of length preservation.
const FIXED_REPLACEMENT_LEN: usize = 3;

/// MessageFilter detects and censors block-listed words in chat messages.
///
/// The engine owns the block-list, the configured strictness level, the
/// replacement policy, and the running counters. Operations are synchronous
/// and run to completion; callers sharing one engine across threads must
/// serialize access themselves (the HTTP layer wraps it in a single mutex).
pub struct MessageFilter {
    words: Set<String>,
    level: FilterLevel,
    replacement: char,
    max_message_len: usize,
    min_message_len: usize,
    messages_processed: u64,
    words_filtered: u64,
}

impl MessageFilter {
    /// Creates an engine with an empty block-list. Every message is clean
    /// until words are added.
    pub fn new(level: FilterLevel) -> Self {
        Self {
            words: Set::default(),
            level,
            replacement: '*',
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            min_message_len: DEFAULT_MIN_MESSAGE_LEN,
            messages_processed: 0,
            words_filtered: 0,
        }
    }

    /// Creates an engine populated from a JSON word-list document.
    ///
    /// On failure the error is returned as-is; there is no fallback list.
    /// Callers that want to keep running construct an empty engine instead.
    pub fn from_path(path: impl AsRef<Path>, level: FilterLevel) -> Result<Self, LoadError> {
        let words = word_list::load_from_path(path.as_ref())?;
        let mut filter = Self::new(level);
        filter.words = words;
        Ok(filter)
    }

    /// Decides whether a single token is offending under the current level.
    ///
    /// Pure: no counters move. A token offends iff its normalized form is
    /// block-listed, or, under `Strict` and `Moderate`, its
    /// substitution-decoded form is.
    fn is_offending(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if self.words.contains(normalize(token).as_str()) {
            return true;
        }
        match self.level {
            FilterLevel::Strict | FilterLevel::Moderate => {
                self.words.contains(decode_variants(token).as_str())
            }
            FilterLevel::Lenient => false,
        }
    }

    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let len = text.chars().count();
        if len > self.max_message_len {
            return Err(ValidationError::MessageTooLong {
                max: self.max_message_len,
            });
        }
        // The minimum is 1, so only the empty check above can trigger in
        // practice.
        if len < self.min_message_len {
            return Err(ValidationError::MessageTooShort {
                min: self.min_message_len,
            });
        }
        Ok(())
    }

    /// One pass over the message that feeds both detection and rewrite.
    /// Offending spans are replaced in place; separators and clean spans are
    /// copied through untouched.
    fn scan(&self, text: &str, preserve_length: bool) -> (String, Vec<String>) {
        let mut filtered = String::with_capacity(text.len());
        let mut offending = Vec::new();
        let mut copied = 0;
        for (start, token) in WordSpans::new(text) {
            filtered.push_str(&text[copied..start]);
            if self.is_offending(token) {
                let len = if preserve_length {
                    token.chars().count()
                } else {
                    FIXED_REPLACEMENT_LEN
                };
                filtered.extend(iter::repeat(self.replacement).take(len));
                offending.push(token.to_owned());
            } else {
                filtered.push_str(token);
            }
            copied = start + token.len();
        }
        filtered.push_str(&text[copied..]);
        (filtered, offending)
    }

    /// Censors offending tokens, replacing each matched span with the
    /// replacement character repeated to the span's length (or a fixed 3
    /// when `preserve_length` is false).
    ///
    /// Counts one processed message and however many tokens were replaced.
    pub fn filter_message(
        &mut self,
        text: &str,
        preserve_length: bool,
    ) -> Result<String, ValidationError> {
        self.validate(text)?;
        let (filtered, offending) = self.scan(text, preserve_length);
        self.messages_processed += 1;
        self.words_filtered += offending.len() as u64;
        Ok(filtered)
    }

    /// Returns the offending tokens of `text` in order of first appearance,
    /// duplicates preserved, original spelling. Pure.
    pub fn offending_words(&self, text: &str) -> Vec<String> {
        WordSpans::new(text)
            .filter(|(_, token)| self.is_offending(token))
            .map(|(_, token)| token.to_owned())
            .collect()
    }

    /// Whether `text` contains no offending tokens. Pure.
    pub fn is_clean(&self, text: &str) -> bool {
        WordSpans::new(text).all(|(_, token)| !self.is_offending(token))
    }

    /// Builds a full [`FilterReport`] for `text`.
    ///
    /// Detection and rewrite come from the same scan, so the report's word
    /// list and count always agree, and the counters move exactly once per
    /// call. Empty input yields a vacuous clean report instead of the
    /// validation error `filter_message` would raise.
    pub fn build_report(&mut self, text: &str) -> Result<FilterReport, ValidationError> {
        if text.is_empty() {
            return Ok(FilterReport::vacuous(self.level));
        }
        self.validate(text)?;

        let (filtered, offending) = self.scan(text, true);
        self.messages_processed += 1;
        self.words_filtered += offending.len() as u64;

        Ok(FilterReport {
            original_message: text.to_owned(),
            filtered_message: filtered,
            total_words: WordSpans::new(text).count(),
            filtered_words_count: offending.len(),
            is_clean: offending.is_empty(),
            inappropriate_words: offending,
            filter_level: self.level,
            message_length: text.chars().count(),
        })
    }

    /// Adds a word to the block-list (trimmed, lowercased). Returns whether
    /// it was newly inserted.
    pub fn add_word(&mut self, word: &str) -> Result<bool, ValidationError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(ValidationError::EmptyWord);
        }
        Ok(self.words.insert(word))
    }

    /// Removes a word from the block-list. Returns whether it was present;
    /// absent words are not an error.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.words.remove(word.trim().to_lowercase().as_str())
    }

    /// Sets the censor replacement. The input must be exactly one character.
    pub fn set_replacement_char(&mut self, s: &str) -> Result<(), ValidationError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                self.replacement = c;
                Ok(())
            }
            _ => Err(ValidationError::ReplacementChar),
        }
    }

    /// Sets the strictness level. Infallible: unrecognized level names are
    /// rejected by `FilterLevel::from_str` before they get here.
    pub fn set_level(&mut self, level: FilterLevel) {
        self.level = level;
    }

    pub fn level(&self) -> FilterLevel {
        self.level
    }

    pub fn replacement_char(&self) -> char {
        self.replacement
    }

    /// The block-listed words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Snapshot of counters and current settings.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            messages_processed: self.messages_processed,
            words_filtered: self.words_filtered,
            word_count: self.words.len(),
            filter_level: self.level,
            replacement_char: self.replacement,
        }
    }

    /// Zeroes the running counters. Settings and words are untouched.
    pub fn reset_statistics(&mut self) {
        self.messages_processed = 0;
        self.words_filtered = 0;
    }

    /// Writes the block-list to `path` as a sorted JSON array.
    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        word_list::export_to_path(&self.words, path.as_ref())
    }
}
