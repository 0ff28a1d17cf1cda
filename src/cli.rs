//! CLI interface for the resume ranker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Resume screening and candidate ranking tool")]
#[command(
    long_about = "Score candidate resumes against a job description using TF-IDF similarity, skill gap analysis, and experience heuristics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a single resume against a job description
    Rank {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Weight for the skills/similarity component
        #[arg(long, default_value_t = 50.0)]
        skills_weight: f64,

        /// Weight for the experience component
        #[arg(long, default_value_t = 30.0)]
        experience_weight: f64,

        /// Weight for the education component
        #[arg(long, default_value_t = 20.0)]
        education_weight: f64,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank every resume in a directory against a job description
    Batch {
        /// Directory containing resume files
        #[arg(short, long)]
        resumes: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Weight for the skills/similarity component
        #[arg(long, default_value_t = 50.0)]
        skills_weight: f64,

        /// Weight for the experience component
        #[arg(long, default_value_t = 30.0)]
        experience_weight: f64,

        /// Weight for the education component
        #[arg(long, default_value_t = 20.0)]
        education_weight: f64,

        /// Hide candidate file names in the ranked table
        #[arg(long)]
        blind: bool,

        /// Export the ranked results to a CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
