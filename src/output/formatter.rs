//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::ranker::MatchReport;
use colored::Colorize;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, candidate_name: &str, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter;

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn score_line(&self, score: f64) -> String {
        let text = format!("{:.1}%", score);
        if !self.use_colors {
            return text;
        }
        if score >= 75.0 {
            text.green().bold().to_string()
        } else if score >= 50.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, candidate_name: &str, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("Candidate: {}\n", candidate_name));
        out.push_str(&format!("Match Score: {}\n", self.score_line(report.score)));
        out.push_str(&format!(
            "Seniority: {} ({})\n",
            report.seniority_level, report.experience_summary
        ));
        out.push_str(&format!("Summary: {}\n", report.summary));

        if !report.matched_skills.is_empty() {
            out.push_str(&format!(
                "Matched Skills: {}\n",
                report.matched_skills.join(", ")
            ));
        }

        if !report.missing_skills.is_empty() {
            out.push_str(&format!(
                "Missing Skills: {}\n",
                report.missing_skills.join(", ")
            ));
        }

        if self.detailed {
            out.push_str(&format!(
                "Skill coverage: {} matched, {} missing\n",
                report.matched_skills.len(),
                report.missing_skills.len()
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, candidate_name: &str, report: &MatchReport) -> Result<String> {
        let value = serde_json::json!({
            "candidate": candidate_name,
            "report": report,
        });

        let output = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, candidate_name: &str, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("# Match Report: {}\n\n", candidate_name));
        out.push_str(&format!(
            "_Generated: {}_\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M")
        ));
        out.push_str(&format!("**Score:** {:.1}%\n\n", report.score));
        out.push_str(&format!(
            "**Seniority:** {} ({})\n\n",
            report.seniority_level, report.experience_summary
        ));
        out.push_str(&format!("{}\n\n", report.summary));

        if !report.matched_skills.is_empty() {
            out.push_str("## Matched Skills\n\n");
            for skill in &report.matched_skills {
                out.push_str(&format!("- {}\n", skill));
            }
            out.push('\n');
        }

        if !report.missing_skills.is_empty() {
            out.push_str("## Missing Skills\n\n");
            for skill in &report.missing_skills {
                out.push_str(&format!("- {}\n", skill));
            }
            out.push('\n');
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn format(
        &self,
        format: &OutputFormat,
        candidate_name: &str,
        report: &MatchReport,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(candidate_name, report),
            OutputFormat::Json => self.json_formatter.format_report(candidate_name, report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(candidate_name, report),
        }
    }
}
