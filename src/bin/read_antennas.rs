use anyhow::{Context, Result};
use antenna_grid::core::console::write_antenna_listing;
use antenna_grid::core::exporter::decode_registry;
use antenna_grid::core::RecordLayout;
use antenna_grid::utils::logger;
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "read-antennas")]
#[command(about = "Print the antennas stored in an exported binary file")]
struct Args {
    /// Binary file written by antenna-grid
    #[arg(default_value = "antenas.bin")]
    path: PathBuf,

    /// Record layout used when the file was exported
    #[arg(long, value_enum, default_value_t = RecordLayout::Native)]
    layout: RecordLayout,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let file = File::open(&args.path)
        .with_context(|| format!("Failed to open {}", args.path.display()))?;
    let registry = decode_registry(BufReader::new(file), args.layout)
        .with_context(|| format!("Failed to decode {}", args.path.display()))?;
    tracing::debug!("Decoded {} records from {}", registry.len(), args.path.display());

    let stdout = std::io::stdout();
    write_antenna_listing(&mut stdout.lock(), &registry)?;
    Ok(())
}
