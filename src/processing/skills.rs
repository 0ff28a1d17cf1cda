//! Skill vocabulary matching over normalized text

use crate::error::{Result, ResumeRankerError};
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// Matches a fixed vocabulary of technology and process terms against
/// normalized text. Matching is exact and whole-word only: a term never
/// matches as a substring of a longer word, and multi-word terms must
/// appear as contiguous phrases. There is no fuzzy or partial matching.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    vocabulary: Vec<String>,
}

impl SkillExtractor {
    /// Build an extractor from an injected vocabulary of canonical terms.
    pub fn new(vocabulary: &[String]) -> Result<Self> {
        let vocabulary: Vec<String> = vocabulary.iter().map(|s| s.to_lowercase()).collect();

        let patterns: Vec<&str> = vocabulary.iter().map(|s| s.as_str()).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest) // Prefer longer matches
            .build(&patterns)
            .map_err(|e| ResumeRankerError::TextProcessing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { matcher, vocabulary })
    }

    /// Extract the set of distinct vocabulary terms found in the text.
    /// Expects already-normalized input; returns canonical lowercase terms
    /// in sorted order so downstream output is reproducible.
    pub fn extract_skills(&self, normalized_text: &str) -> BTreeSet<String> {
        let bytes = normalized_text.as_bytes();
        let mut found = BTreeSet::new();

        for mat in self.matcher.find_iter(normalized_text) {
            if Self::is_word_bounded(bytes, mat.start(), mat.end()) {
                found.insert(self.vocabulary[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    /// Whole-word check: the match must not touch an alphanumeric
    /// character on either side.
    fn is_word_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
        let left_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let right_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        left_ok && right_ok
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn default_extractor() -> SkillExtractor {
        let config = Config::default();
        SkillExtractor::new(&config.vocabulary.skills).unwrap()
    }

    #[test]
    fn test_extracts_known_terms() {
        let extractor = default_extractor();
        let skills = extractor.extract_skills("python developer with aws and docker");

        assert!(skills.contains("python"));
        assert!(skills.contains("aws"));
        assert!(skills.contains("docker"));
    }

    #[test]
    fn test_case_insensitive_via_normalized_input() {
        let extractor = default_extractor();
        // Normalized input is lowercase already, but the matcher itself is
        // case-insensitive too.
        let skills = extractor.extract_skills("Python AWS");
        assert!(skills.contains("python"));
        assert!(skills.contains("aws"));
    }

    #[test]
    fn test_whole_word_boundaries() {
        let extractor = default_extractor();
        // "java" must not match inside "javascript"
        let skills = extractor.extract_skills("javascript specialist");
        assert!(skills.contains("javascript"));
        assert!(!skills.contains("java"));

        // "node" must not match inside "nodejs"
        let skills = extractor.extract_skills("nodejs specialist");
        assert!(!skills.contains("node"));
    }

    #[test]
    fn test_multi_word_phrase_matching() {
        let extractor = default_extractor();
        let skills = extractor.extract_skills("background in machine learning and data science");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("data science"));

        // The words out of order do not form the phrase
        let skills = extractor.extract_skills("learning about machine tools");
        assert!(!skills.contains("machine learning"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let extractor = default_extractor();
        let skills = extractor.extract_skills("python python python");
        assert_eq!(skills.iter().filter(|s| s.as_str() == "python").count(), 1);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let extractor = default_extractor();
        assert!(extractor.extract_skills("").is_empty());
    }

    #[test]
    fn test_custom_vocabulary_is_injected() {
        let vocabulary = vec!["elixir".to_string(), "phoenix framework".to_string()];
        let extractor = SkillExtractor::new(&vocabulary).unwrap();

        let skills = extractor.extract_skills("elixir with the phoenix framework");
        assert!(skills.contains("elixir"));
        assert!(skills.contains("phoenix framework"));
        assert_eq!(extractor.vocabulary_size(), 2);
    }
}
