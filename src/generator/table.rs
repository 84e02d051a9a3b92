//! Tool-table file assembly.
//!
//! The whole table is built into one `String` so the caller can write it in
//! a single operation; a failed run never leaves a half-written file behind.

use crate::config::TABLE_FORMAT_VERSION;
use crate::model::{LatheRow, MillRow, LATHE_HEADERS, MILL_HEADERS};
use std::fmt::Write;

/// Assemble the version preamble, header row and data rows.
///
/// Fields are joined with tabs and never quoted; tool names in this format
/// cannot contain tabs or newlines.
fn write_table<'a, I>(headers: &[&str], records: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut output = String::new();

    writeln!(output, "version").unwrap();
    writeln!(output, "{}", TABLE_FORMAT_VERSION).unwrap();
    writeln!(output, "{}", headers.join("\t")).unwrap();

    for record in records {
        writeln!(output, "{}", record.join("\t")).unwrap();
    }

    output
}

/// Generate the 48-column milling tool table.
pub fn generate_mill_table(rows: &[MillRow]) -> String {
    write_table(&MILL_HEADERS, rows.iter().map(MillRow::to_record))
}

/// Generate the 46-column turning tool table.
pub fn generate_lathe_table(rows: &[LatheRow]) -> String {
    write_table(&LATHE_HEADERS, rows.iter().map(LatheRow::to_record))
}
