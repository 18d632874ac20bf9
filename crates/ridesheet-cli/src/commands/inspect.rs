//! Inspect command - show extracted rows and records without writing a workbook.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use ridesheet_core::layout::page_lines;
use ridesheet_core::{load_geometry, Converter, RideRecord, RowAssembler, COLUMNS};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show reassembled row strings instead of parsed records
    #[arg(long)]
    raw_rows: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub async fn run(args: InspectArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Inspecting file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let pages = load_geometry(&data)?;

    if args.raw_rows {
        return print_raw_rows(&pages);
    }

    let records = Converter::new().extract_records(&pages)?;
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Csv => format_csv(&records)?,
        OutputFormat::Text => format_text(&records),
    };
    println!("{}", output);

    Ok(())
}

/// Dump the assembled row strings per table page, before field parsing.
fn print_raw_rows(pages: &[ridesheet_core::PageGeometry]) -> anyhow::Result<()> {
    if pages.len() <= 1 {
        anyhow::bail!("Document has no table pages past the cover page");
    }

    for page in &pages[1..] {
        println!("{}", style(format!("--- page {} ---", page.number)).cyan());
        let mut assembler = RowAssembler::new();
        let mut rows = Vec::new();
        for line in page_lines(page) {
            rows.extend(assembler.push_line(&line));
        }
        rows.extend(assembler.finish());
        for row in rows {
            println!("{}", row);
        }
    }

    Ok(())
}

fn format_csv(records: &[RideRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.write_record(record.fields())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[RideRecord]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&format!("Booking: {}\n", record.booking_no));
        output.push_str(&format!("  Accept date: {}\n", record.accept_date));
        output.push_str(&format!("  Ride date:   {}\n", record.ride_date));
        output.push_str(&format!("  Driver:      {}\n", record.driver));
        output.push_str(&format!("  Plate:       {}\n", record.license_plate));
        output.push_str(&format!("  Pickup:      {}\n", record.pickup));
        output.push_str(&format!("  Destination: {}\n", record.destination));
        output.push_str(&format!(
            "  Amounts:     net {} / waiting {} / added km {} / GST {} / total {}\n",
            record.net_amount,
            record.waiting_charge,
            record.added_km,
            record.gst,
            record.total
        ));
        output.push('\n');
    }

    output.push_str(&format!("{} record(s)\n", records.len()));
    output
}
