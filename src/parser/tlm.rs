//! TLM library file parser.
//!
//! `.tlm` files are XML with an ISO-8859-1 text encoding. The file is
//! decoded byte-for-byte (Latin-1 code points map directly onto Unicode),
//! parsed with roxmltree, and converted into an owned [`ToolNode`] tree so
//! the extraction pipelines carry no document lifetimes.

use crate::error::{ConvertError, Result};
use crate::model::ToolNode;
use std::fs;
use std::path::Path;

/// Decode ISO-8859-1 bytes into a string.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parse a TLM library from a file path.
pub fn parse_tlm_file(path: &Path) -> Result<ToolNode> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let content = decode_latin1(&bytes);

    if content.trim().is_empty() {
        return Err(ConvertError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_tlm_str(&content)
}

/// Parse a TLM library from already-decoded text.
pub fn parse_tlm_str(content: &str) -> Result<ToolNode> {
    let doc = roxmltree::Document::parse(content)?;
    Ok(build_node(doc.root_element()))
}

/// Convert a roxmltree element into an owned node, recursively.
fn build_node(node: roxmltree::Node<'_, '_>) -> ToolNode {
    let mut out = ToolNode::new(node.tag_name().name());
    for attr in node.attributes() {
        out.attrs
            .insert(attr.name().to_string(), attr.value().to_string());
    }
    out.children = node
        .children()
        .filter(|n| n.is_element())
        .map(build_node)
        .collect();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_library() {
        let root = parse_tlm_str(
            r#"<TLMDoc><CompTool Type="0" ToolNumber="4"/></TLMDoc>"#,
        )
        .unwrap();
        assert_eq!(root.tag, "TLMDoc");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].attr("ToolNumber"), Some("4"));
    }

    #[test]
    fn test_parse_preserves_nesting_order() {
        let root = parse_tlm_str(
            r#"<Doc><A x="1"/><B><C/></B></Doc>"#,
        )
        .unwrap();
        assert_eq!(root.children[0].tag, "A");
        assert_eq!(root.children[1].tag, "B");
        assert_eq!(root.children[1].children[0].tag, "C");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let err = parse_tlm_str("<Doc><Unclosed></Doc>").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
        assert_eq!(err.code_value(), -3);
    }

    #[test]
    fn test_decode_latin1_high_bytes() {
        // 0xE9 is 'é' in ISO-8859-1.
        let s = decode_latin1(&[0x54, 0xE9]);
        assert_eq!(s, "Té");
    }
}
