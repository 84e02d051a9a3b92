//! Owned source-tree node for a parsed tool library.

use serde::Serialize;
use std::collections::BTreeMap;

/// One element of the source tool-library tree.
///
/// The library nests typed `CompTool` entries (containers, definitions,
/// turning tools) around untyped geometry and feed-table elements. The
/// discriminating `Type` attribute is kept in `attrs` like any other
/// attribute; the kind-specific lookups below interpret it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolNode {
    /// Element tag name.
    pub tag: String,
    /// Attribute name to value.
    pub attrs: BTreeMap<String, String>,
    /// Nested elements in document order.
    pub children: Vec<ToolNode>,
}

/// Tag of the typed entry elements.
const COMP_TOOL_TAG: &str = "CompTool";

impl ToolNode {
    /// Create an empty node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Look up an attribute value, falling back to a default.
    pub fn attr_or(&self, name: &str, default: &str) -> String {
        self.attr(name).unwrap_or(default).to_string()
    }

    /// Whether this node is a `CompTool` entry with the given `Type` code.
    pub fn is_comp_tool_of(&self, kind: &str) -> bool {
        self.tag == COMP_TOOL_TAG && self.attr("Type") == Some(kind)
    }

    /// Find the first descendant with the given tag.
    ///
    /// Depth-first in document order, self excluded, first match wins.
    /// Later siblings may well contain an element of the same tag; the
    /// earlier one is always the answer.
    pub fn find_descendant(&self, tag: &str) -> Option<&ToolNode> {
        for child in &self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Find the first descendant `CompTool` entry with the given `Type` code.
    ///
    /// Same traversal policy as [`find_descendant`](Self::find_descendant).
    pub fn find_comp_tool(&self, kind: &str) -> Option<&ToolNode> {
        for child in &self.children {
            if child.is_comp_tool_of(kind) {
                return Some(child);
            }
            if let Some(found) = child.find_comp_tool(kind) {
                return Some(found);
            }
        }
        None
    }

    /// Collect every descendant `CompTool` entry with the given `Type` code,
    /// in document order.
    pub fn comp_tools(&self, kind: &str) -> Vec<&ToolNode> {
        let mut out = Vec::new();
        self.collect_comp_tools(kind, &mut out);
        out
    }

    fn collect_comp_tools<'a>(&'a self, kind: &str, out: &mut Vec<&'a ToolNode>) {
        for child in &self.children {
            if child.is_comp_tool_of(kind) {
                out.push(child);
            }
            child.collect_comp_tools(kind, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(tag: &str, attrs: &[(&str, &str)], children: Vec<ToolNode>) -> ToolNode {
        let mut n = ToolNode::new(tag);
        for (k, v) in attrs {
            n.attrs.insert(k.to_string(), v.to_string());
        }
        n.children = children;
        n
    }

    #[test]
    fn test_attr_or_present_and_absent() {
        let n = node("Shape", &[("NumFlutes", "4")], vec![]);
        assert_eq!(n.attr_or("NumFlutes", "2"), "4");
        assert_eq!(n.attr_or("Missing", "2"), "2");
    }

    #[test]
    fn test_find_descendant_prefers_document_order() {
        // The deep Shape under the first child comes before the shallow
        // Shape under the second child.
        let deep = node("Shape", &[("Which", "deep")], vec![]);
        let first = node("Wrapper", &[], vec![deep]);
        let shallow = node("Shape", &[("Which", "shallow")], vec![]);
        let root = node("Root", &[], vec![first, shallow]);

        let found = root.find_descendant("Shape").unwrap();
        assert_eq!(found.attr("Which"), Some("deep"));
    }

    #[test]
    fn test_find_descendant_excludes_self() {
        let root = node("Shape", &[], vec![]);
        assert!(root.find_descendant("Shape").is_none());
    }

    #[test]
    fn test_find_comp_tool_matches_kind() {
        let insert = node("CompTool", &[("Type", "1")], vec![]);
        let turning = node("CompTool", &[("Type", "5")], vec![insert]);
        let root = node("Root", &[], vec![turning]);

        assert!(root.find_comp_tool("5").is_some());
        assert!(root.find_comp_tool("1").is_some());
        assert!(root.find_comp_tool("7").is_none());
        // Nested lookup starts below the turning tool.
        let t = root.find_comp_tool("5").unwrap();
        assert!(t.find_comp_tool("1").is_some());
    }

    #[test]
    fn test_comp_tools_collects_all_in_order() {
        let a = node("CompTool", &[("Type", "0"), ("ToolNumber", "1")], vec![]);
        let b = node("CompTool", &[("Type", "0"), ("ToolNumber", "2")], vec![]);
        let lib = node("Library", &[], vec![a, b]);
        let root = node("Root", &[], vec![lib]);

        let tools = root.comp_tools("0");
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].attr("ToolNumber"), Some("1"));
        assert_eq!(tools[1].attr("ToolNumber"), Some("2"));
    }
}
