//! Years-of-experience detection and seniority mapping

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Junior,
    Intermediate,
    Senior,
    Principal,
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeniorityLevel::Junior => write!(f, "Junior"),
            SeniorityLevel::Intermediate => write!(f, "Intermediate"),
            SeniorityLevel::Senior => write!(f, "Senior"),
            SeniorityLevel::Principal => write!(f, "Architect/Principal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceInfo {
    pub years: u32,
    pub level: SeniorityLevel,
}

/// Extracts a years-of-experience figure from free text and maps it to a
/// seniority tier. Runs over the raw (lowercased but not punctuation-
/// stripped) text so that forms like "10+" survive intact.
pub struct ExperienceDetector {
    patterns: Vec<Regex>,
}

impl Default for ExperienceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceDetector {
    pub fn new() -> Self {
        let patterns = vec![
            Regex::new(r"(\d+)\+?\s*years?\b").expect("Invalid years regex"),
            Regex::new(r"(\d+)\+?\s*yrs?\b").expect("Invalid yrs regex"),
        ];

        Self { patterns }
    }

    /// Detect experience from raw text. `years` is the maximum across all
    /// numeric mentions found by any pattern, so multiple experience
    /// statements never undercount; no mention means zero.
    pub fn detect_experience(&self, raw_text: &str) -> ExperienceInfo {
        let lowered = raw_text.to_lowercase();

        let years = self
            .patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(&lowered))
            .filter_map(|cap| cap[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        ExperienceInfo {
            years,
            level: Self::seniority_for(years),
        }
    }

    /// Step function over years, highest tier first. Thresholds are
    /// exclusive: exactly 8 years is Senior, 9 is Architect/Principal.
    fn seniority_for(years: u32) -> SeniorityLevel {
        if years > 8 {
            SeniorityLevel::Principal
        } else if years > 5 {
            SeniorityLevel::Senior
        } else if years > 2 {
            SeniorityLevel::Intermediate
        } else {
            SeniorityLevel::Junior
        }
    }
}
