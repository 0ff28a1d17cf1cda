//! Document similarity scoring

use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Capability seam for document similarity so the ranking engine does not
/// assume a particular vectorization scheme.
pub trait SimilarityScorer {
    /// Similarity between two documents, in [0, 1].
    fn similarity(&self, doc_a: &str, doc_b: &str) -> f64;
}

/// TF-IDF cosine similarity over the two-document corpus formed by the
/// inputs. Terms are unigrams and bigrams after stop-word removal. Both
/// documents are vectorized jointly against a shared vocabulary; scoring
/// them separately would produce incomparable vectors.
pub struct TfidfScorer {
    stop_words: HashSet<String>,
}

impl Default for TfidfScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfScorer {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
        }
    }

    /// Tokenize a document and expand into unigram + bigram terms.
    fn terms(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| !self.stop_words.contains(w))
            .collect();

        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }

        terms
    }

    fn term_frequencies(terms: &[String]) -> HashMap<&str, usize> {
        let mut frequencies = HashMap::new();
        for term in terms {
            *frequencies.entry(term.as_str()).or_insert(0) += 1;
        }
        frequencies
    }

    /// Smoothed inverse document frequency over the two-document corpus.
    fn idf(document_frequency: usize) -> f64 {
        let n_docs = 2.0;
        ((n_docs + 1.0) / (document_frequency as f64 + 1.0)).ln() + 1.0
    }
}

impl SimilarityScorer for TfidfScorer {
    fn similarity(&self, doc_a: &str, doc_b: &str) -> f64 {
        let terms_a = self.terms(doc_a);
        let terms_b = self.terms(doc_b);

        // A side with no surviving terms cannot be vectorized meaningfully.
        if terms_a.is_empty() || terms_b.is_empty() {
            return 0.0;
        }

        let tf_a = Self::term_frequencies(&terms_a);
        let tf_b = Self::term_frequencies(&terms_b);

        // Shared vocabulary across both documents
        let vocabulary: HashSet<&str> = tf_a.keys().chain(tf_b.keys()).copied().collect();

        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;

        for term in vocabulary {
            let count_a = tf_a.get(term).copied().unwrap_or(0);
            let count_b = tf_b.get(term).copied().unwrap_or(0);

            let document_frequency =
                (count_a > 0) as usize + (count_b > 0) as usize;
            let idf = Self::idf(document_frequency);

            let weight_a = count_a as f64 * idf;
            let weight_b = count_b as f64 * idf;

            dot += weight_a * weight_b;
            norm_a += weight_a * weight_a;
            norm_b += weight_b * weight_b;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
    }
}

impl TfidfScorer {
    /// Standard English stop words excluded from vectorization
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "after", "again", "against", "all", "am",
            "an", "and", "any", "are", "as", "at", "be", "because", "been",
            "before", "being", "below", "between", "both", "but", "by",
            "can", "cannot", "could", "did", "do", "does", "doing", "down",
            "during", "each", "few", "for", "from", "further", "had", "has",
            "have", "having", "he", "her", "here", "hers", "herself", "him",
            "himself", "his", "how", "i", "if", "in", "into", "is", "it",
            "its", "itself", "just", "me", "more", "most", "my", "myself",
            "no", "nor", "not", "now", "of", "off", "on", "once", "only",
            "or", "other", "ought", "our", "ours", "ourselves", "out",
            "over", "own", "same", "she", "should", "so", "some", "such",
            "than", "that", "the", "their", "theirs", "them", "themselves",
            "then", "there", "these", "they", "this", "those", "through",
            "to", "too", "under", "until", "up", "very", "was", "we",
            "were", "what", "when", "where", "which", "while", "who",
            "whom", "why", "will", "with", "would", "you", "your", "yours",
            "yourself", "yourselves",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_one() {
        let scorer = TfidfScorer::new();
        let text = "python developer with aws and docker experience";
        let similarity = scorer.similarity(text, text);
        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let scorer = TfidfScorer::new();
        let similarity = scorer.similarity("python backend services", "watercolor painting classes");
        assert!(similarity.abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let scorer = TfidfScorer::new();
        let similarity = scorer.similarity(
            "senior python engineer aws docker",
            "python developer using aws",
        );
        assert!(similarity > 0.0);
        assert!(similarity < 1.0);
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let scorer = TfidfScorer::new();
        assert_eq!(scorer.similarity("", "python developer"), 0.0);
        assert_eq!(scorer.similarity("python developer", ""), 0.0);
        // All stop words leaves nothing to vectorize
        assert_eq!(scorer.similarity("the of and", "python developer"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let scorer = TfidfScorer::new();
        let a = "rust systems programming";
        let b = "rust web services programming";
        assert!((scorer.similarity(a, b) - scorer.similarity(b, a)).abs() < 1e-12);
    }

    #[test]
    fn test_bigrams_reward_contiguous_phrases() {
        let scorer = TfidfScorer::new();
        // Same unigrams, but only one candidate preserves the phrase order
        let jd = "machine learning engineer";
        let in_order = scorer.similarity(jd, "machine learning practitioner");
        let shuffled = scorer.similarity(jd, "learning about machine repair");
        assert!(in_order > shuffled);
    }
}
