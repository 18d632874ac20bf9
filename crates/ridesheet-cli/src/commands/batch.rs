//! Batch command - convert multiple invoice PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use ridesheet_core::Converter;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Treat hyphenated tokens as single plate candidates
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    hyphen_plates: bool,
}

/// Result of converting a single file.
struct ConvertResult {
    path: PathBuf,
    records: Option<usize>,
    output: Option<PathBuf>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to convert (started {})",
        style("ℹ").blue(),
        files.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let converter = Converter::new().with_hyphen_plates(args.hyphen_plates);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = convert_single_file(&path, &converter, &args);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok((records, output)) => {
                debug!("Wrote output to {}", output.display());
                results.push(ConvertResult {
                    path: path.clone(),
                    records: Some(records),
                    output: Some(output),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to convert {}: {}", path.display(), error_msg);
                    results.push(ConvertResult {
                        path: path.clone(),
                        records: None,
                        output: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to convert {}: {}", path.display(), error_msg);
                    anyhow::bail!("Conversion failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.records.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Converted {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn convert_single_file(
    path: &PathBuf,
    converter: &Converter,
    args: &BatchArgs,
) -> anyhow::Result<(usize, PathBuf)> {
    let data = fs::read(path)?;
    let pages = ridesheet_core::load_geometry(&data)?;
    let records = converter.extract_records(&pages)?;
    let buffer = ridesheet_core::build_workbook(&records)?;

    let output_path = match &args.output_dir {
        Some(dir) => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("invoice");
            dir.join(format!("{}.xlsx", stem))
        }
        None => path.with_extension("xlsx"),
    };

    fs::write(&output_path, &buffer)?;
    Ok((records.len(), output_path))
}

fn write_summary(path: &PathBuf, results: &[ConvertResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "records",
        "output",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(records) = result.records {
            wtr.write_record([
                filename,
                "success",
                &records.to_string(),
                &result
                    .output
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
