use clap::{Parser, Subcommand};
use pvn_core::NarrativeService;
use pvn_types::CaseRecord;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pvn")]
#[command(about = "Pharmacovigilance case narrative generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate narratives from a JSON file of case records
    Generate {
        /// Path to a JSON array of case records
        file: PathBuf,
    },
    /// Check case records for missing required fields
    Validate {
        /// Path to a JSON array of case records
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let service = NarrativeService::new();

    match cli.command {
        Commands::Generate { file } => {
            let records = read_records(&file)?;
            if records.is_empty() {
                println!("No records found.");
                return Ok(());
            }
            for result in service.generate_batch(records) {
                println!("=== {} ===", result.regulatory_id);
                println!("{}\n", result.narrative);
            }
        }
        Commands::Validate { file } => {
            let records = read_records(&file)?;
            let errors = service.validate_batch(&records);
            if errors.is_empty() {
                println!("All {} record(s) carry the required fields.", records.len());
            } else {
                for error in &errors {
                    println!("{error}");
                }
            }
        }
    }

    Ok(())
}

fn read_records(file: &Path) -> Result<Vec<CaseRecord>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&contents)?)
}
