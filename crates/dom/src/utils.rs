//! Utility functions for DOM processing

use crate::arena::DomArena;
use crate::error::{DomError, NameKind, Result};
use crate::types::{NodeId, NodeType};

/// Check that a name is a well-formed XML `Name`
///
/// ASCII letters, `_` and `:` may start a name; digits, `-` and `.` may
/// follow. Non-ASCII alphanumerics are accepted anywhere.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let is_start = |c: char| {
        c.is_ascii_alphabetic() || c == '_' || c == ':' || (!c.is_ascii() && c.is_alphanumeric())
    };
    let is_rest = |c: char| is_start(c) || c.is_ascii_digit() || c == '-' || c == '.';

    is_start(first) && chars.all(is_rest)
}

/// Validate a name, mapping failure to `InvalidCharacter`
pub fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DomError::InvalidCharacter {
            kind,
            name: name.to_string(),
        })
    }
}

/// Escape character data for element content
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in a double-quoted attribute value
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Get all text content from node and its descendants
pub fn get_text_content(arena: &DomArena, node_id: NodeId) -> Result<String> {
    let mut text = String::new();

    arena.traverse_df(node_id, |node| {
        if node.node_type == NodeType::Text {
            text.push_str(&node.node_value);
        }
        Ok(())
    })?;

    Ok(text)
}
