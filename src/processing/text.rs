//! Text normalization

use regex::Regex;

/// Normalizes raw document text for downstream matching and scoring.
///
/// The pipeline is: lowercase, delete ASCII punctuation, collapse whitespace
/// runs to a single space, trim. Non-ASCII punctuation is left alone; there
/// is no locale-aware casing.
pub struct TextNormalizer {
    punctuation_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let punctuation_regex = Regex::new(r#"[!-/:-@\[-`{-~]"#)
            .expect("Invalid punctuation regex");
        let whitespace_regex = Regex::new(r"\s+")
            .expect("Invalid whitespace regex");

        Self {
            punctuation_regex,
            whitespace_regex,
        }
    }

    /// Normalize text. Empty input degrades to an empty string, never an
    /// error: a resume that fails upstream extraction simply scores as a
    /// low-information profile.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.punctuation_regex.replace_all(&lowered, "");
        self.whitespace_regex
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalizer = TextNormalizer::new();
        let result = normalizer.normalize("Senior Python Engineer, 5+ years!");
        assert_eq!(result, "senior python engineer 5 years");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let normalizer = TextNormalizer::new();
        let result = normalizer.normalize("python\n\n\tdeveloper   with  AWS");
        assert_eq!(result, "python developer with aws");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t  "), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let inputs = [
            "Hello, World! This is a TEST.",
            "  spaced   out\ttext\n",
            "already normalized text",
            "",
        ];
        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_non_ascii_punctuation_is_preserved() {
        let normalizer = TextNormalizer::new();
        let result = normalizer.normalize("résumé — engineer");
        assert_eq!(result, "résumé — engineer");
    }
}
