//! CLI application for ride-invoice PDF to XLSX conversion.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, convert, inspect};

/// Ride invoice converter - turn ride-invoice PDFs into XLSX workbooks
#[derive(Parser)]
#[command(name = "ridesheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single invoice PDF to an XLSX workbook
    Convert(convert::ConvertArgs),

    /// Convert multiple invoice PDFs
    Batch(batch::BatchArgs),

    /// Show the rows and records extracted from a PDF without writing a workbook
    Inspect(inspect::InspectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Convert(args) => convert::run(args).await,
        Commands::Batch(args) => batch::run(args).await,
        Commands::Inspect(args) => inspect::run(args).await,
    }
}
