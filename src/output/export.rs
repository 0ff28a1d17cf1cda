//! Batch results and CSV export

use crate::error::Result;
use crate::processing::ranker::MatchReport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One ranked candidate in a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    pub report: MatchReport,
}

impl RankedCandidate {
    /// Display name, with the file name hidden under blind screening
    pub fn display_name(&self, blind_mode: bool) -> &str {
        if blind_mode {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Sort candidates best-first. Ties resolve by name so output is stable.
pub fn sort_by_score(candidates: &mut [RankedCandidate]) {
    candidates.sort_by(|a, b| {
        b.report
            .score
            .partial_cmp(&a.report.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Write a ranked batch to a CSV file
pub fn export_csv(path: &Path, candidates: &[RankedCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "ID",
        "Name",
        "Score",
        "Matched Skills",
        "Missing Skills",
        "Experience",
        "Level",
        "Summary",
    ])?;

    for candidate in candidates {
        let record = [
            candidate.id.clone(),
            candidate.name.clone(),
            format!("{:.1}", candidate.report.score),
            candidate.report.matched_skills.join("; "),
            candidate.report.missing_skills.join("; "),
            candidate.report.experience_summary.clone(),
            candidate.report.seniority_level.to_string(),
            candidate.report.summary.clone(),
        ];
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
