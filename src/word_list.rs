use crate::error::{ExportError, LoadError};
use crate::Set;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Keys recognized as carrying the word list in a keyed document, in
/// preference order. The first one whose value is an array wins.
const LIST_KEYS: [&str; 5] = ["words", "curse", "curse_words", "bad_words", "profanity"];

/// Reads and parses a word-list document from disk.
pub(crate) fn load_from_path(path: &Path) -> Result<Set<String>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })?;
    parse_document(&doc)
}

/// Extracts a normalized word set from a JSON document.
///
/// Accepts an array of strings, an object with one of the recognized
/// list-bearing keys, or any other object, whose keys then become the words.
/// Words are trimmed and lowercased; entries that trim to empty are skipped.
/// An empty result is an error: an engine with no words must come from a
/// deliberate choice, not from a quietly useless document.
pub(crate) fn parse_document(doc: &Value) -> Result<Set<String>, LoadError> {
    let words = match doc {
        Value::Array(items) => collect_words(items.iter().filter_map(Value::as_str)),
        Value::Object(map) => {
            let listed = LIST_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array));
            match listed {
                Some(items) => collect_words(items.iter().filter_map(Value::as_str)),
                None => collect_words(map.keys().map(String::as_str)),
            }
        }
        _ => return Err(LoadError::UnsupportedFormat),
    };

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

fn collect_words<'a>(iter: impl Iterator<Item = &'a str>) -> Set<String> {
    iter.map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Serializes the word set to `path` as a sorted JSON array.
pub(crate) fn export_to_path(words: &Set<String>, path: &Path) -> Result<(), ExportError> {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    // Serializing a Vec<&str> only fails on I/O, which fs::write reports.
    let json = serde_json::to_string_pretty(&sorted).map_err(|source| ExportError::Write {
        path: path.to_owned(),
        source: source.into(),
    })?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn array_document() {
        let words = parse_document(&json!(["Blyat", " suka ", ""])).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("blyat"));
        assert!(words.contains("suka"));
    }

    #[test]
    fn keyed_document() {
        let words = parse_document(&json!({"curse": ["blyat", "suka"]})).unwrap();
        assert!(words.contains("blyat"));

        // "words" is preferred over "curse" when both are arrays.
        let words = parse_document(&json!({"curse": ["a"], "words": ["b"]})).unwrap();
        assert!(words.contains("b"));
        assert!(!words.contains("a"));
    }

    #[test]
    fn keyed_document_skips_non_array_values() {
        let words = parse_document(&json!({"words": "nope", "curse": ["blyat"]})).unwrap();
        assert!(words.contains("blyat"));
    }

    #[test]
    fn object_keys_become_words() {
        let words = parse_document(&json!({"damn": 1, "hell": true})).unwrap();
        assert!(words.contains("damn"));
        assert!(words.contains("hell"));
    }

    #[test]
    fn non_string_entries_skipped() {
        let words = parse_document(&json!(["damn", 5, null, false])).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(
            parse_document(&json!({"words": []})),
            Err(LoadError::Empty)
        ));
        assert!(matches!(parse_document(&json!([""])), Err(LoadError::Empty)));
    }

    #[test]
    fn scalar_document_is_an_error() {
        assert!(matches!(
            parse_document(&json!("just a string")),
            Err(LoadError::UnsupportedFormat)
        ));
        assert!(matches!(
            parse_document(&json!(42)),
            Err(LoadError::UnsupportedFormat)
        ));
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn load_from_invalid_json() {
        let file = file_with("not json at all {");
        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn load_from_valid_file() {
        let file = file_with(r#"{"curse": ["Blyat", "suka"]}"#);
        let words = load_from_path(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn export_sorted_roundtrip() {
        let words: Set<String> = ["suka", "blyat", "damn"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        let file = NamedTempFile::new().unwrap();
        export_to_path(&words, file.path()).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec!["blyat", "damn", "suka"]);

        // The export is itself a loadable document.
        let reloaded = load_from_path(file.path()).unwrap();
        assert_eq!(reloaded, words);
    }
}
