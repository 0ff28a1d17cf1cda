//! Ranking engine combining similarity, skill gap, and experience signals

use crate::config::Config;
use crate::error::{Result, ResumeRankerError};
use crate::processing::experience::{ExperienceDetector, SeniorityLevel};
use crate::processing::similarity::{SimilarityScorer, TfidfScorer};
use crate::processing::skills::SkillExtractor;
use crate::processing::text::TextNormalizer;
use serde::{Deserialize, Serialize};

/// Display caps for the skill lists in a report
const MAX_MATCHED_SKILLS: usize = 15;
const MAX_MISSING_SKILLS: usize = 10;

/// Scoring weights for the three signal groups. They do not need to sum to
/// anything in particular; the engine normalizes by the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Weights {
    pub fn new(skills: f64, experience: f64, education: f64) -> Self {
        Self {
            skills,
            experience,
            education,
        }
    }

    fn sum(&self) -> f64 {
        self.skills + self.experience + self.education
    }

    /// Reject weight triples the score formula cannot normalize.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ResumeRankerError::InvalidInput(format!(
                    "Weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.sum() <= 0.0 {
            return Err(ResumeRankerError::InvalidInput(
                "Weights must not all be zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<&Config> for Weights {
    fn from(config: &Config) -> Self {
        Self {
            skills: config.scoring.skills_weight,
            experience: config.scoring.experience_weight,
            education: config.scoring.education_weight,
        }
    }
}

/// Per-candidate analysis result. Immutable once produced; skill lists are
/// sorted alphabetically and capped for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Overall match score, 0-100, rounded to one decimal
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_summary: String,
    pub seniority_level: SeniorityLevel,
    pub summary: String,
}

/// Orchestrates normalization, similarity scoring, skill gap analysis, and
/// experience detection into a single weighted score.
///
/// The engine is stateless across calls: `rank` reads only its inputs, so
/// ranking a batch of candidates is safe to run concurrently from multiple
/// tasks sharing one engine.
pub struct RankingEngine {
    normalizer: TextNormalizer,
    skill_extractor: SkillExtractor,
    experience_detector: ExperienceDetector,
    scorer: Box<dyn SimilarityScorer + Send + Sync>,
    education_score: f64,
}

impl RankingEngine {
    /// Build an engine from configuration with the default TF-IDF scorer.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_scorer(config, Box::new(TfidfScorer::new()))
    }

    /// Build an engine with a custom similarity implementation.
    pub fn with_scorer(
        config: &Config,
        scorer: Box<dyn SimilarityScorer + Send + Sync>,
    ) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(),
            skill_extractor: SkillExtractor::new(&config.vocabulary.skills)?,
            experience_detector: ExperienceDetector::new(),
            scorer,
            education_score: config.scoring.education_score,
        })
    }

    /// Rank one resume against one job description.
    pub fn rank(&self, resume_text: &str, job_text: &str, weights: &Weights) -> Result<MatchReport> {
        weights.validate()?;

        let clean_resume = self.normalizer.normalize(resume_text);
        let clean_job = self.normalizer.normalize(job_text);

        // Semantic similarity over the normalized pair
        let similarity = self.scorer.similarity(&clean_job, &clean_resume);

        // Skill gap analysis
        let job_skills = self.skill_extractor.extract_skills(&clean_job);
        let resume_skills = self.skill_extractor.extract_skills(&clean_resume);

        let matched: Vec<String> = job_skills.intersection(&resume_skills).cloned().collect();
        let missing: Vec<String> = job_skills.difference(&resume_skills).cloned().collect();

        // Experience runs on the raw texts so forms like "10+" are still
        // visible before punctuation stripping
        let resume_exp = self.experience_detector.detect_experience(resume_text);
        let job_exp = self.experience_detector.detect_experience(job_text);

        let experience_ratio = if resume_exp.years >= job_exp.years {
            1.0
        } else {
            f64::from(resume_exp.years) / f64::from(job_exp.years.max(1))
        };

        let weighted = (similarity * weights.skills)
            + (experience_ratio * weights.experience)
            + (self.education_score * weights.education);
        let score = round_to_decimal(weighted / weights.sum() * 100.0);

        let summary = Self::generate_summary(&matched, resume_exp.years, resume_exp.level);

        log::debug!(
            "Ranked candidate: score={:.1} similarity={:.3} exp_ratio={:.2} matched={} missing={}",
            score,
            similarity,
            experience_ratio,
            matched.len(),
            missing.len()
        );

        Ok(MatchReport {
            score,
            matched_skills: matched.into_iter().take(MAX_MATCHED_SKILLS).collect(),
            missing_skills: missing.into_iter().take(MAX_MISSING_SKILLS).collect(),
            experience_summary: format!("{} Years Found", resume_exp.years),
            seniority_level: resume_exp.level,
            summary,
        })
    }

    fn generate_summary(matched: &[String], years: u32, level: SeniorityLevel) -> String {
        if matched.is_empty() {
            return "Generic profile with low semantic match to core tech requirements.".to_string();
        }

        let strengths: Vec<&str> = matched.iter().take(3).map(|s| s.as_str()).collect();
        format!(
            "A {} professional with {} years of experience. Demonstrated strength in {}.",
            level,
            years,
            strengths.join(", ")
        )
    }
}

fn round_to_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_engine() -> RankingEngine {
        RankingEngine::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_identical_documents_hit_score_ceiling() {
        let engine = default_engine();
        let text = "Senior Python Engineer with 6 years of AWS and Docker experience";
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine.rank(text, text, &weights).unwrap();

        // similarity = 1.0, experience ratio = 1.0, education stub = 0.8:
        // (50 + 30 + 0.8 * 20) / 100 * 100 = 96.0
        assert_eq!(report.score, 96.0);
    }

    #[test]
    fn test_zero_weight_sum_is_rejected() {
        let engine = default_engine();
        let result = engine.rank("some resume", "some job", &Weights::new(0.0, 0.0, 0.0));
        assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let engine = default_engine();
        let result = engine.rank("some resume", "some job", &Weights::new(50.0, -30.0, 20.0));
        assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
    }

    #[test]
    fn test_matched_and_missing_partition_job_skills() {
        let engine = default_engine();
        let job = "Looking for Python, AWS, Docker, and Kubernetes experience";
        let resume = "Python developer who knows AWS well";
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine.rank(resume, job, &weights).unwrap();

        let matched: std::collections::BTreeSet<_> = report.matched_skills.iter().collect();
        let missing: std::collections::BTreeSet<_> = report.missing_skills.iter().collect();

        assert!(matched.contains(&"python".to_string()));
        assert!(matched.contains(&"aws".to_string()));
        assert!(missing.contains(&"docker".to_string()));
        assert!(missing.contains(&"kubernetes".to_string()));
        assert!(matched.is_disjoint(&missing));
    }

    #[test]
    fn test_skill_lists_are_sorted() {
        let engine = default_engine();
        let job = "Need Python, AWS, Docker, Kubernetes, Linux, SQL";
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine.rank("I know sql python linux", job, &weights).unwrap();

        let mut sorted_matched = report.matched_skills.clone();
        sorted_matched.sort();
        assert_eq!(report.matched_skills, sorted_matched);

        let mut sorted_missing = report.missing_skills.clone();
        sorted_missing.sort();
        assert_eq!(report.missing_skills, sorted_missing);
    }

    #[test]
    fn test_experience_ratio_with_zero_jd_years() {
        let engine = default_engine();
        let weights = Weights::new(0.0, 100.0, 0.0);

        // Candidate 0 years vs JD asking for nothing: ratio is 1.0
        let report = engine.rank("no experience listed", "any candidate welcome", &weights).unwrap();
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_candidate_short_on_years_scores_partial_ratio() {
        let engine = default_engine();
        let weights = Weights::new(0.0, 100.0, 0.0);

        let report = engine
            .rank("junior with 2 years experience", "requires 8+ years", &weights)
            .unwrap();
        // ratio 2/8 = 0.25
        assert_eq!(report.score, 25.0);
    }

    #[test]
    fn test_summary_names_level_years_and_top_skills() {
        let engine = default_engine();
        let job = "Senior Python Engineer, 5+ years required, AWS and Docker a must";
        let resume = "Python developer with 6 years experience using AWS";
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine.rank(resume, job, &weights).unwrap();

        assert_eq!(report.seniority_level, SeniorityLevel::Senior);
        assert_eq!(report.experience_summary, "6 Years Found");
        assert!(report.summary.contains("Senior"));
        assert!(report.summary.contains("6 years"));
        assert!(report.summary.contains("aws"));
    }

    #[test]
    fn test_empty_match_produces_generic_summary() {
        let engine = default_engine();
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine
            .rank("watercolor artist portfolio", "Python and AWS required", &weights)
            .unwrap();

        assert!(report.matched_skills.is_empty());
        assert!(report.summary.starts_with("Generic profile"));
    }

    #[test]
    fn test_empty_inputs_degrade_gracefully() {
        let engine = default_engine();
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine.rank("", "", &weights).unwrap();
        assert!(report.score >= 0.0);
        assert!(report.matched_skills.is_empty());
        assert_eq!(report.experience_summary, "0 Years Found");
    }

    #[test]
    fn test_end_to_end_senior_python_scenario() {
        let engine = default_engine();
        let job = "Senior Python Engineer, 5+ years required, AWS and Docker a must";
        let resume = "Python developer with 6 years experience using AWS";
        let weights = Weights::new(50.0, 30.0, 20.0);

        let report = engine.rank(resume, job, &weights).unwrap();

        assert!(report.matched_skills.contains(&"python".to_string()));
        assert!(report.matched_skills.contains(&"aws".to_string()));
        assert!(report.missing_skills.contains(&"docker".to_string()));
        // 6 >= 5 so the experience component contributes fully
        assert!(report.score > 0.0);
        assert_eq!(report.seniority_level, SeniorityLevel::Senior);
    }
}
