/// Iterator over the word tokens of a message.
///
/// A token is a maximal run of word characters (alphanumerics and
/// underscore). Tokens are yielded in order with their starting byte offset
/// and original spelling; normalization happens downstream and never mutates
/// the emitted slice. Separator characters are skipped, never yielded.
pub(crate) struct WordSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> WordSpans<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Iterator for WordSpans<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let (offset, _) = rest.char_indices().find(|(_, c)| is_word_char(*c))?;
        let start = self.pos + offset;
        let end = self.text[start..]
            .char_indices()
            .find(|(_, c)| !is_word_char(*c))
            .map(|(i, _)| start + i)
            .unwrap_or(self.text.len());
        self.pos = end;
        Some((start, &self.text[start..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        WordSpans::new(text).map(|(_, w)| w).collect()
    }

    #[test]
    fn splits_on_separators() {
        assert_eq!(tokens("Salom suka qalesan"), vec!["Salom", "suka", "qalesan"]);
        assert_eq!(tokens("one,two;three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn preserves_original_spelling() {
        assert_eq!(tokens("D4mn th1s!"), vec!["D4mn", "th1s"]);
        assert_eq!(tokens("snake_case stays"), vec!["snake_case", "stays"]);
    }

    #[test]
    fn empty_and_separator_only() {
        assert!(tokens("").is_empty());
        assert!(tokens("... *** !!!").is_empty());
    }

    #[test]
    fn offsets_are_byte_positions() {
        let spans: Vec<_> = WordSpans::new("hi, there").collect();
        assert_eq!(spans, vec![(0, "hi"), (4, "there")]);
    }

    #[test]
    fn non_ascii_words() {
        // Unicode letters count as word characters, like the digits around
        // them; punctuation does not.
        assert_eq!(tokens("Привет мир!"), vec!["Привет", "мир"]);
    }

    #[test]
    fn leading_and_trailing_separators() {
        let spans: Vec<_> = WordSpans::new("  a b  ").collect();
        assert_eq!(spans, vec![(2, "a"), (4, "b")]);
    }
}
