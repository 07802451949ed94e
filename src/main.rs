use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use receipt_processor::config::LogFormat;
use receipt_processor::{logging, PointsCalculator, Receipt, ReceiptValidator};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "receipt-processor", version, about = "Score purchase receipts")]
struct Cli {
    /// Log filter, e.g. "debug"
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a receipt JSON file and print the per-rule breakdown
    Score {
        /// Path to the receipt JSON
        file: PathBuf,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogFormat::Text, &cli.log_level)?;

    match cli.command {
        Command::Score { file, json } => run_score(&file, json),
    }
}

fn run_score(path: &Path, as_json: bool) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;

    let receipt: Receipt = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse receipt JSON: {:?}", path))?;

    let validated = match ReceiptValidator::new().validate(&receipt) {
        Ok(validated) => validated,
        Err(errors) => {
            eprintln!("❌ Invalid receipt: {:?}", path);
            for error in &errors {
                eprintln!("   {}", error);
            }
            bail!("{} field(s) failed validation", errors.len());
        }
    };

    let breakdown = PointsCalculator::new().breakdown(&validated);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("🧾 {} - {} {}", validated.retailer, validated.purchase_date, validated.purchase_time);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for contribution in &breakdown.contributions {
        println!(
            "  {}  {:>4}  {}",
            contribution.code, contribution.points, contribution.description
        );
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Total: {} points", breakdown.total);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_receipt(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_score_invalid_receipt_returns_error() {
        let path = write_receipt("invalid-receipt", r#"{"total": "1.00"}"#);

        let err = run_score(&path, false).unwrap_err();
        assert_eq!(err.to_string(), "3 field(s) failed validation");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_score_valid_receipt() {
        let path = write_receipt(
            "valid-receipt",
            r#"{"retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "13:01", "total": "35.35"}"#,
        );

        assert!(run_score(&path, true).is_ok());

        fs::remove_file(&path).unwrap();
    }
}
