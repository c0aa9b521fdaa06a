//! Leadscore CLI binary.
//!
//! Loads an artifact bundle and scores either one customer record or a CSV
//! batch, for manual verification.

use clap::{Parser, Subcommand};
use leadscore::artifacts::{ArtifactBundle, DEFAULT_ARTIFACTS_DIR, load_artifacts};
use leadscore::features::CustomerRecord;
use leadscore::model::DEFAULT_TOP_REASONS;
use leadscore::output::{ExportFormat, Exporter};
use leadscore::{BatchConfig, PipelineConfig, example_record, run_inference_with, score_csv_path};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "leadscore")]
#[command(about = "Explainable bank-marketing lead scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the five artifact files.
    #[arg(long, env = "LEADSCORE_ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR, global = true)]
    artifacts_dir: PathBuf,

    /// Reason codes per score (1 to 5).
    #[arg(
        long,
        default_value_t = DEFAULT_TOP_REASONS as u64,
        value_parser = clap::value_parser!(u64).range(1..=DEFAULT_TOP_REASONS as u64),
        global = true
    )]
    top_reasons: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one customer record and print the result as JSON.
    Score {
        /// JSON file with the record (defaults to a built-in example).
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Score every row of a CSV file.
    Batch {
        /// CSV file, comma or semicolon separated.
        csv: PathBuf,

        /// Largest accepted number of data rows.
        #[arg(long, default_value_t = BatchConfig::default().max_rows)]
        max_rows: usize,

        /// Write the full report here (.csv, otherwise pretty JSON).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let pipeline = PipelineConfig {
        top_reasons: usize::try_from(cli.top_reasons)?,
    };

    let artifacts = load_artifacts(&cli.artifacts_dir)?;

    match cli.command {
        Commands::Score { input } => score(&artifacts, input.as_deref(), &pipeline)?,
        Commands::Batch {
            csv,
            max_rows,
            output,
        } => {
            let config = BatchConfig { max_rows, pipeline };
            batch(&artifacts, &csv, output.as_deref(), &config)?;
        }
    }

    Ok(())
}

fn score(
    artifacts: &ArtifactBundle,
    input: Option<&Path>,
    config: &PipelineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let record: CustomerRecord = match input {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => {
            tracing::info!("No input given, scoring the example record");
            example_record()
        }
    };

    let result = run_inference_with(&record, artifacts, config)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn batch(
    artifacts: &ArtifactBundle,
    csv: &Path,
    output: Option<&Path>,
    config: &BatchConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = score_csv_path(csv, artifacts, config)?;

    println!("Batch Summary");
    println!("=============\n");
    println!("{}", report.summary);

    if !report.invalid_rows.is_empty() {
        println!("\nDropped rows:");
        for row in &report.invalid_rows {
            println!("  row {}: {}", row.row_index, row.error);
        }
    }

    if let Some(path) = output {
        let format = ExportFormat::from_path(path);
        report.export_to_file(path, format)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_reasons_range() {
        let cli = Cli::try_parse_from(["leadscore", "score"]).unwrap();
        assert_eq!(cli.top_reasons, 5);

        assert!(Cli::try_parse_from(["leadscore", "--top-reasons", "3", "score"]).is_ok());
        assert!(Cli::try_parse_from(["leadscore", "--top-reasons", "12", "score"]).is_err());
        assert!(Cli::try_parse_from(["leadscore", "--top-reasons", "0", "score"]).is_err());
    }
}
