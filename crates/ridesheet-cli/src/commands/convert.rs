//! Convert command - turn a single invoice PDF into an XLSX workbook.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use ridesheet_core::{build_workbook, load_geometry, Converter};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: rides_<timestamp>.xlsx next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat hyphenated tokens as single plate candidates
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    hyphen_plates: bool,
}

pub async fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Converting file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(&args.input)?;
    let pages = load_geometry(&data)?;
    debug!("PDF has {} pages", pages.len());

    pb.set_message("Extracting rows...");
    pb.set_position(40);

    let converter = Converter::new().with_hyphen_plates(args.hyphen_plates);
    let records = converter.extract_records(&pages)?;

    pb.set_message("Building workbook...");
    pb.set_position(70);

    let buffer = build_workbook(&records)?;
    pb.set_position(100);
    pb.finish_with_message("Done");

    let output_path = args.output.unwrap_or_else(|| {
        let name = format!("rides_{}.xlsx", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
        args.input.with_file_name(name)
    });
    fs::write(&output_path, &buffer)?;

    let plates: BTreeSet<&str> = records
        .iter()
        .map(|r| r.license_plate.as_str())
        .collect();

    println!(
        "{} Workbook written to {}",
        style("✓").green(),
        output_path.display()
    );
    println!(
        "   {} records across {} plates",
        style(records.len()).green(),
        style(plates.len()).green()
    );

    debug!("Total conversion time: {:?}", start.elapsed());

    Ok(())
}
