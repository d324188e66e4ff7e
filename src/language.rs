//! Corpus language sanity check.
//!
//! The stopword list is English-only. Running it over another language still
//! works but the reports fill up with that language's function words, so the
//! pipeline logs a warning when detection is confident the corpus is not English.

use crate::config::LANGUAGE_SAMPLE_CHARS;
use whatlang::Lang;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedLanguage {
    pub lang: Lang,
    pub confidence: f64,
    pub reliable: bool,
}

impl DetectedLanguage {
    pub fn is_english(&self) -> bool {
        self.lang == Lang::Eng
    }

    /// ISO 639-3 code, e.g. `eng`.
    pub fn code(&self) -> &'static str {
        self.lang.code()
    }
}

/// Detect the language of the leading sample of `text`.
pub fn detect_language(text: &str) -> Option<DetectedLanguage> {
    let sample = match text.char_indices().nth(LANGUAGE_SAMPLE_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    };
    let info = whatlang::detect(sample)?;
    Some(DetectedLanguage {
        lang: info.lang(),
        confidence: info.confidence(),
        reliable: info.is_reliable(),
    })
}

/// Detect and log; returns the detection for the run summary.
pub fn check_corpus_language(text: &str) -> Option<DetectedLanguage> {
    let detected = detect_language(text);
    match detected {
        Some(d) if d.reliable && !d.is_english() => tracing::warn!(
            "Corpus looks like {} (confidence {:.2}); English stopwords will be applied anyway",
            d.lang.eng_name(),
            d.confidence
        ),
        Some(d) => tracing::debug!("Detected corpus language {} ({:.2})", d.code(), d.confidence),
        None => tracing::debug!("Corpus language could not be detected"),
    }
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let text = "We have made great progress on education and health care, \
                    and tonight I want to talk about the future of our country \
                    and the work that remains to be done for American families.";
        let detected = detect_language(text).unwrap();
        assert!(detected.is_english());
        assert_eq!(detected.code(), "eng");
    }

    #[test]
    fn test_detects_non_english() {
        let text = "Die Bundesregierung hat heute beschlossen, die Förderung von \
                    Schulen und Universitäten im ganzen Land deutlich zu erhöhen, \
                    damit alle Kinder eine gute Ausbildung bekommen.";
        let detected = detect_language(text).unwrap();
        assert!(!detected.is_english());
    }

    #[test]
    fn test_empty_text() {
        assert!(detect_language("").is_none());
    }
}
