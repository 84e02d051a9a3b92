//! tlm-convert - CLI tool to convert SOLIDWORKS CAM tool libraries to
//! Inventor CAM tool tables.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tlm_convert_rs::{
    convert_tlm_to_lathe_table, convert_tlm_to_mill_table, parse_tlm_file, prettify_tlm_file,
};

/// Tool family contained in the input library.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Family {
    Mill,
    Lathe,
}

/// Convert SOLIDWORKS CAM tool libraries (.tlm) to Inventor CAM tool tables.
#[derive(Parser, Debug)]
#[command(name = "tlm-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input TLM file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tool family of the input library
    #[arg(short, long, value_enum, default_value = "mill")]
    family: Family,

    /// Pretty-print the library instead of converting it
    #[arg(long)]
    prettify: bool,

    /// Output the parsed tree as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Prettify mode has its own output convention and no family.
    if args.prettify {
        let written = prettify_tlm_file(&args.input, args.output.as_deref())
            .with_context(|| format!("Failed to prettify {}", args.input.display()))?;
        info!("Prettified: {}", written.display());
        return Ok(());
    }

    // Debug output
    if args.debug {
        let root = parse_tlm_file(&args.input)
            .with_context(|| format!("Failed to parse {}", args.input.display()))?;
        let json = serde_json::to_string_pretty(&root)?;
        println!("{}", json);
        return Ok(());
    }

    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("tsv");
        path
    });

    let summary = match args.family {
        Family::Mill => convert_tlm_to_mill_table(&args.input, &output_path),
        Family::Lathe => convert_tlm_to_lathe_table(&args.input, &output_path),
    }
    .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    info!(
        "Generated: {} ({} tools, {} skipped)",
        output_path.display(),
        summary.rows,
        summary.skipped
    );

    Ok(())
}
