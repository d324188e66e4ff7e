use crate::config::MIN_TOKEN_CHARS;
use crate::stopwords::is_stopword;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Maximal runs of letters, digits and underscore. Marks and joiners are
    // delimiters, unlike regex's Unicode `\w`.
    static ref WORD_RUN: Regex = Regex::new(r"[\p{L}\p{N}_]+").unwrap();
}

/// Prepare raw corpus text for tokenizing: optional NFC, then lowercase.
pub fn normalize_text(text: &str, nfc: bool) -> String {
    let text: Cow<'_, str> = if nfc && !unicode_normalization::is_nfc(text) {
        Cow::Owned(text.nfc().collect())
    } else {
        Cow::Borrowed(text)
    };
    text.to_lowercase()
}

/// Iterate the tokens of already-normalized text that survive the length and
/// stopword filters, in corpus order.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    WORD_RUN
        .find_iter(normalized)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|t| !is_stopword(t))
}

/// Normalize a single lookup key the same way corpus tokens are.
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        let normalized = normalize_text(text, true);
        tokens(&normalized).map(str::to_string).collect()
    }

    #[test]
    fn test_tokens_filter_short_and_stopwords() {
        assert_eq!(
            collect("The Cat sat. The cat SAT on the mat."),
            vec!["cat", "sat", "cat", "sat", "mat"]
        );
    }

    #[test]
    fn test_short_runs_are_dropped_not_merged() {
        assert_eq!(collect("ab-cd ef_gh x1 x12"), vec!["ef_gh", "x12"]);
    }

    #[test]
    fn test_digits_and_punctuation() {
        assert_eq!(
            collect("In 2009, U.S. health-care cost $1,000."),
            vec!["2009", "health", "care", "cost", "000"]
        );
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(collect("Café naïve Ωmega"), vec!["café", "naïve", "ωmega"]);
    }

    #[test]
    fn test_nfc_merges_decomposed_forms() {
        let decomposed = "cafe\u{0301} caf\u{00e9}";
        let normalized = normalize_text(decomposed, true);
        let found: Vec<&str> = tokens(&normalized).collect();
        assert_eq!(found, vec!["caf\u{00e9}", "caf\u{00e9}"]);
    }

    #[test]
    fn test_marks_and_joiners_are_delimiters() {
        let normalized = normalize_text("cafe\u{0301}s ab\u{200d}cd x\u{0301}\u{0301}", false);
        let found: Vec<&str> = tokens(&normalized).collect();
        assert_eq!(found, vec!["cafe"]);

        assert!(collect("x\u{301}\u{301}").is_empty());
        assert!(collect("ab\u{200d}cd").is_empty());
    }

    #[test]
    fn test_only_stopwords_yields_nothing() {
        assert!(collect("the and of to a an is it").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Country \n"), "country");
    }
}
