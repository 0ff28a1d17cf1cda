//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub vocabulary: VocabularyConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skills_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
    /// Flat education sub-score applied to every candidate. There is no
    /// education signal extracted from the documents yet; this constant is
    /// a stub kept configurable until a real detector exists.
    pub education_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Canonical skill terms recognized by the extractor. Matching is
    /// case-insensitive and whole-word; multi-word entries are matched as
    /// contiguous phrases.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                skills_weight: 50.0,
                experience_weight: 30.0,
                education_weight: 20.0,
                education_score: 0.8,
            },
            vocabulary: VocabularyConfig {
                skills: Self::default_skill_vocabulary(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path instead of the platform config dir
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    /// Default technology and process vocabulary
    fn default_skill_vocabulary() -> Vec<String> {
        vec![
            // Languages
            "python", "java", "javascript", "typescript", "kotlin", "swift",
            "c++", "sql",
            // Frameworks and platforms
            "react", "node", "flutter", "rest api", "mongodb", "postgresql",
            // Cloud and infrastructure
            "aws", "azure", "docker", "kubernetes", "linux",
            // Data
            "machine learning", "data science", "spark", "hadoop",
            // Process
            "agile", "scrum", "devops",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_weights() {
        let config = Config::default();
        assert_eq!(config.scoring.skills_weight, 50.0);
        assert_eq!(config.scoring.experience_weight, 30.0);
        assert_eq!(config.scoring.education_weight, 20.0);
        assert_eq!(config.scoring.education_score, 0.8);
    }

    #[test]
    fn test_default_vocabulary_contains_core_terms() {
        let config = Config::default();
        assert!(config.vocabulary.skills.contains(&"python".to_string()));
        assert!(config.vocabulary.skills.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scoring.education_score, config.scoring.education_score);
        assert_eq!(parsed.vocabulary.skills, config.vocabulary.skills);
    }
}
