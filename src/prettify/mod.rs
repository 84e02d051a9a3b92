//! Tool-library pretty-printer.
//!
//! Re-serializes a `.tlm` file with two-space indentation for inspection.
//! This is a side utility with no connection to the conversion pipelines:
//! it streams events from a reader straight into an indenting writer and
//! never interprets the tree.

use crate::error::{ConvertError, Result};
use crate::parser::decode_latin1;
use quick_xml::events::{BytesDecl, Event};
use quick_xml::{Reader, Writer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Suffix appended to the input file stem for the default output path.
const PRETTY_SUFFIX: &str = "_pretty.xml";

/// Re-indent already-decoded TLM text.
///
/// Whitespace-only text is dropped, so the result has no blank lines. The
/// original declaration is replaced with a fresh one naming the ISO-8859-1
/// encoding the file is written back in.
pub fn prettify_str(content: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("ISO-8859-1"), None)))?;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Decl(_)) => {} // replaced above
            Ok(event) => writer.write_event(event)?,
            Err(e) => return Err(ConvertError::Rewrite(e)),
        }
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Encode text back to ISO-8859-1 bytes.
fn encode_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| u8::try_from(ch as u32).map_err(|_| ConvertError::Encoding { ch }))
        .collect()
}

/// Pretty-print a `.tlm` file to a sibling `_pretty.xml` file.
///
/// With no explicit output path the result lands next to the input with the
/// `_pretty.xml` suffix. A parse failure produces no output file at all.
pub fn prettify_tlm_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    if !input.exists() {
        return Err(ConvertError::FileNotFound {
            path: input.to_path_buf(),
        });
    }

    let content = decode_latin1(&fs::read(input)?);
    if content.trim().is_empty() {
        return Err(ConvertError::EmptyFile {
            path: input.to_path_buf(),
        });
    }

    let pretty = prettify_str(&content)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    };

    fs::write(&output_path, encode_latin1(&pretty)?)?;
    info!(output = %output_path.display(), "prettified");

    Ok(output_path)
}

/// `library.tlm` -> `library_pretty.xml`, alongside the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}{PRETTY_SUFFIX}"))
}
