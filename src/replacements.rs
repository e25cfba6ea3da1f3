use crate::Map;
use lazy_static::lazy_static;

lazy_static! {
    /// Look-alike characters and the letters they stand in for.
    ///
    /// `y` maps to `u`, digits and symbols to the letters they resemble.
    /// Extending the table changes what the variant decoder can see, and
    /// nothing else.
    pub(crate) static ref SUBSTITUTIONS: Map<char, char> = include_str!("substitutions.csv")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let comma = line.find(',').unwrap();
            (
                line[..comma].chars().next().unwrap(),
                line[comma + 1..].chars().next().unwrap(),
            )
        })
        .collect();
}

/// Normalizes a token for block-list lookup: every character that is not an
/// ASCII letter is stripped, the rest lowercased.
///
/// Total; an all-symbol token normalizes to the empty string, which matches
/// nothing.
pub(crate) fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Decodes common substitution variants (`d4mn`, `cr@p`) back to the word
/// they stand in for, then normalizes.
///
/// Substitutions apply to every occurrence of a source character, not just
/// leading or trailing ones.
pub(crate) fn decode_variants(token: &str) -> String {
    let substituted: String = token
        .to_lowercase()
        .chars()
        .map(|c| SUBSTITUTIONS.get(&c).copied().unwrap_or(c))
        .collect();
    normalize(&substituted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize("Damn"), "damn");
        assert_eq!(normalize("d-a-m-n!"), "damn");
        assert_eq!(normalize("123_!?"), "");
        assert_eq!(normalize(""), "");
        // Non-ASCII letters are stripped, not transliterated.
        assert_eq!(normalize("héllo"), "hllo");
    }

    #[test]
    fn decode_leetspeak() {
        assert_eq!(decode_variants("D4mn"), "damn");
        assert_eq!(decode_variants("5tup1d"), "stupid");
        assert_eq!(decode_variants("cr@p"), "crap");
        assert_eq!(decode_variants("h3ll"), "hell");
    }

    #[test]
    fn decode_applies_to_every_occurrence() {
        assert_eq!(decode_variants("b4n4n4"), "banana");
        assert_eq!(decode_variants("$a$$y"), "sassu");
    }

    #[test]
    fn decode_maps_y_to_u() {
        // The table deliberately rewrites y, so "blyat" only matches
        // directly, while "bluat" matches through the decoder.
        assert_eq!(decode_variants("blyat"), "bluat");
    }

    #[test]
    fn decode_plain_word_is_normalize() {
        assert_eq!(decode_variants("suka"), "suka");
        assert_eq!(decode_variants("Hello"), "hello");
    }
}
