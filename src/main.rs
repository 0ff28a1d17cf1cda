//! Resume ranker: resume screening and candidate ranking tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeRankerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info};
use output::export::{self, RankedCandidate};
use output::formatter::ReportGenerator;
use processing::ranker::{RankingEngine, Weights};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            resume,
            job,
            skills_weight,
            experience_weight,
            education_weight,
            output,
            save,
        } => {
            info!("Starting single-candidate ranking");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeRankerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeRankerError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;

            let weights = Weights::new(skills_weight, experience_weight, education_weight);
            weights.validate()?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            info!(
                "Extracted {} chars of resume text, {} chars of job text",
                resume_text.len(),
                job_text.len()
            );

            let engine = RankingEngine::new(&config)?;
            let report = engine.rank(&resume_text, &job_text, &weights)?;

            let candidate_name = file_name(&resume);
            let generator =
                ReportGenerator::new(config.output.color_output, config.output.detailed);
            let rendered = generator.format(&output_format, &candidate_name, &report)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Batch {
            resumes,
            job,
            skills_weight,
            experience_weight,
            education_weight,
            blind,
            export: export_path,
        } => {
            info!("Starting batch ranking for directory: {}", resumes.display());

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeRankerError::InvalidInput(format!("Job description file: {}", e)))?;

            let weights = Weights::new(skills_weight, experience_weight, education_weight);
            weights.validate()?;

            let resume_files = collect_resume_files(&resumes)?;
            if resume_files.is_empty() {
                return Err(ResumeRankerError::InvalidInput(format!(
                    "No resumes found in {}",
                    resumes.display()
                )));
            }

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;
            let engine = RankingEngine::new(&config)?;

            let progress = ProgressBar::new(resume_files.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                    .expect("Invalid progress template"),
            );

            let mut candidates = Vec::new();
            let mut skipped = 0usize;

            for (idx, path) in resume_files.iter().enumerate() {
                progress.set_message(file_name(path));

                // One bad file never aborts the batch
                match input_manager.try_extract_text(path).await {
                    Some(text) => {
                        let report = engine.rank(&text, &job_text, &weights)?;
                        candidates.push(RankedCandidate {
                            id: format!("C-{}", 1000 + idx),
                            name: file_name(path),
                            report,
                        });
                    }
                    None => skipped += 1,
                }

                progress.inc(1);
            }
            progress.finish_and_clear();

            export::sort_by_score(&mut candidates);

            print_ranked_table(&candidates, blind);
            if skipped > 0 {
                println!("\n{} file(s) skipped due to extraction failures", skipped);
            }

            if let Some(path) = export_path {
                export::export_csv(&path, &candidates)?;
                println!("Results exported to {}", path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Scoring Weights:");
                println!("  Skills: {:.1}", config.scoring.skills_weight);
                println!("  Experience: {:.1}", config.scoring.experience_weight);
                println!("  Education: {:.1}", config.scoring.education_weight);
                println!(
                    "  Education sub-score (fixed stub): {:.2}",
                    config.scoring.education_score
                );
                println!("\nVocabulary: {} skill terms", config.vocabulary.skills.len());
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// Resume files in the directory with a supported extension, sorted by name
fn collect_resume_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| input::file_detector::FileType::from_extension(ext).is_supported())
            .unwrap_or(false);
        if supported {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_ranked_table(candidates: &[RankedCandidate], blind: bool) {
    println!("\nRanked Candidates ({})\n", candidates.len());
    println!("{:<5} {:<10} {:<30} {:>7}  {:<20}", "Rank", "ID", "Candidate", "Score", "Level");

    for (rank, candidate) in candidates.iter().enumerate() {
        println!(
            "{:<5} {:<10} {:<30} {:>6.1}%  {:<20}",
            rank + 1,
            candidate.id,
            candidate.display_name(blind),
            candidate.report.score,
            candidate.report.seniority_level.to_string(),
        );
    }
}
