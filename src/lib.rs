//! tlm-convert-rs - Convert SOLIDWORKS CAM tool libraries to Inventor CAM
//! tool tables.
//!
//! A `.tlm` library is an XML tree of typed entries; the target format is a
//! flat tab-separated table. Milling and turning tools live in structurally
//! different libraries, so there is one conversion pipeline per family. A
//! small pretty-printer for the source format rides along for inspection.
//!
//! # Example
//!
//! ```no_run
//! use tlm_convert_rs::convert_tlm_to_mill_table;
//! use std::path::Path;
//!
//! let summary = convert_tlm_to_mill_table(
//!     Path::new("ToolKit_Haas_MiniMill.tlm"),
//!     Path::new("Inventor_mill.tsv"),
//! ).unwrap();
//! println!("{} tools converted", summary.rows);
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod model;
pub mod parser;
pub mod prettify;

// Re-exports for convenience
pub use error::{ConvertError, Result};
pub use extract::{extract_lathe_rows, extract_mill_rows};
pub use generator::{generate_lathe_table, generate_mill_table, IdGenerator, SequentialIds, UuidIds};
pub use model::{LatheRow, LatheToolType, MillRow, MillToolType, ToolNode};
pub use parser::{parse_tlm_file, parse_tlm_str};
pub use prettify::{prettify_str, prettify_tlm_file};

use std::fs;
use std::path::Path;

/// Outcome of one conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertSummary {
    /// Rows written to the output table.
    pub rows: usize,
    /// Tool containers dropped for lacking the required nesting chain.
    pub skipped: usize,
}

/// Convert a mill tool library to a 48-column tool table.
///
/// The full pipeline: parse the library, extract one row per qualifying
/// container, assemble the table, write it in a single operation. Parse
/// failures happen before any output byte is written.
pub fn convert_tlm_to_mill_table(input: &Path, output: &Path) -> Result<ConvertSummary> {
    let root = parse_tlm_file(input)?;

    let mut ids = UuidIds;
    let (rows, skipped) = extract_mill_rows(&root, &mut ids);
    let table = generate_mill_table(&rows);

    fs::write(output, table)?;

    let summary = ConvertSummary {
        rows: rows.len(),
        skipped,
    };
    log_summary("mill", &summary);
    Ok(summary)
}

/// Convert a lathe tool library to a 46-column tool table.
pub fn convert_tlm_to_lathe_table(input: &Path, output: &Path) -> Result<ConvertSummary> {
    let root = parse_tlm_file(input)?;

    let mut ids = UuidIds;
    let (rows, skipped) = extract_lathe_rows(&root, &mut ids);
    let table = generate_lathe_table(&rows);

    fs::write(output, table)?;

    let summary = ConvertSummary {
        rows: rows.len(),
        skipped,
    };
    log_summary("lathe", &summary);
    Ok(summary)
}

fn log_summary(family: &str, summary: &ConvertSummary) {
    if summary.skipped > 0 {
        tracing::info!(
            family,
            rows = summary.rows,
            skipped = summary.skipped,
            "conversion finished with skipped containers"
        );
    } else {
        tracing::info!(family, rows = summary.rows, "conversion finished");
    }
}
