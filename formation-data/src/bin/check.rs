use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use formation_core::{Jurisdiction, QuoteCalculator, SelectionConfig};
use formation_data::PriceScheduleLoader;

/// Validate a price schedule CSV and print the base quote for every state.
///
/// The CSV file should have the following columns:
/// - kind: base, address, surcharge, boi, seal, ein or anonymous
/// - key: address type or jurisdiction (empty for scalar fees)
/// - amount: whole currency units
#[derive(Parser, Debug)]
#[command(name = "price-table-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the price schedule
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading price schedule from: {}", args.file.display());

    let table = PriceScheduleLoader::load_from_path(&args.file)
        .with_context(|| format!("Failed to load price schedule: {}", args.file.display()))?;

    let calculator = QuoteCalculator::new(&table);
    for jurisdiction in Jurisdiction::all() {
        let config = SelectionConfig {
            jurisdiction: *jurisdiction,
            ..Default::default()
        };
        let quote = calculator.calculate(&config);
        println!("{:<12} ${}", jurisdiction.as_str(), quote.total);
    }

    println!("Price schedule is valid.");
    Ok(())
}
