//! Markup serializer - Convert a document tree to HTML or XHTML text
//!
//! This module handles:
//! - Void elements (no end tag in HTML mode)
//! - Flag attributes (bare name in HTML, `name=""` in XHTML)
//! - Escaping of text and attribute values (`script` / `style` text is
//!   written verbatim in HTML mode)
//! - Optional indentation for debugging output

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;
use crate::types::*;
use crate::utils::{escape_attr, escape_text};

/// Output dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    #[default]
    Html,
    Xhtml,
}

/// Serializer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    pub mode: MarkupMode,
    /// Emit `<!DOCTYPE html>` before the document's children
    pub doctype: bool,
    /// Spaces per nesting level; `None` writes everything on one line
    pub indent: Option<usize>,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            mode: MarkupMode::Html,
            doctype: false,
            indent: None,
        }
    }
}

/// Markup serializer
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer {
    config: SerializerConfig,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serialize everything attached to the document node
    pub fn serialize(&self, doc: &Document) -> Result<String> {
        let mut output = String::with_capacity(1024);

        if self.config.doctype {
            output.push_str("<!DOCTYPE html>");
            self.newline(&mut output);
        }

        self.serialize_node(doc, doc.root(), 0, &mut output)?;
        Ok(output)
    }

    /// Serialize a single node and its subtree (outer markup)
    pub fn serialize_fragment(&self, doc: &Document, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        self.serialize_node(doc, node_id, 0, &mut output)?;
        Ok(output)
    }

    fn serialize_node(
        &self,
        doc: &Document,
        node_id: NodeId,
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        let node = doc.get(node_id)?;

        match node.node_type {
            NodeType::Element => self.serialize_element(doc, node, depth, output)?,
            NodeType::Text => {
                self.indent(depth, output);
                self.push_text(doc, node, output)?;
                self.newline(output);
            }
            NodeType::Document => {
                // For document nodes, just serialize children
                for &child_id in &node.children_ids {
                    self.serialize_node(doc, child_id, depth, output)?;
                }
            }
        }

        Ok(())
    }

    fn serialize_element(
        &self,
        doc: &Document,
        node: &DomNode,
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        self.indent(depth, output);
        output.push('<');
        output.push_str(&node.node_name);

        for attr in node.attributes.iter() {
            output.push(' ');
            output.push_str(&attr.name);
            match (&attr.value, self.config.mode) {
                (AttrValue::Flag, MarkupMode::Html) => {}
                (AttrValue::Flag, MarkupMode::Xhtml) => output.push_str("=\"\""),
                (AttrValue::Text(value), _) => {
                    output.push_str("=\"");
                    output.push_str(&escape_attr(value));
                    output.push('"');
                }
            }
        }

        let void = self.config.mode == MarkupMode::Html && is_void_element(&node.node_name);
        if void || (self.config.mode == MarkupMode::Xhtml && node.children_ids.is_empty()) {
            output.push_str(if void { ">" } else { " />" });
            self.newline(output);
            return Ok(());
        }

        output.push('>');

        // A lone text child stays on the element's line
        let inline = match node.children_ids.as_slice() {
            [only] => doc.get(*only)?.is_text(),
            _ => node.children_ids.is_empty(),
        };

        if inline {
            if let Some(&text_id) = node.children_ids.first() {
                self.push_text(doc, doc.get(text_id)?, output)?;
            }
        } else {
            self.newline(output);
            for &child_id in &node.children_ids {
                self.serialize_node(doc, child_id, depth + 1, output)?;
            }
            self.indent(depth, output);
        }

        output.push_str("</");
        output.push_str(&node.node_name);
        output.push('>');
        self.newline(output);

        Ok(())
    }

    fn push_text(&self, doc: &Document, text: &DomNode, output: &mut String) -> Result<()> {
        let raw = match (self.config.mode, text.parent_id) {
            (MarkupMode::Html, Some(parent)) => {
                doc.get(parent)?.tag_name().is_some_and(is_raw_text_element)
            }
            _ => false,
        };

        if raw {
            output.push_str(&text.node_value);
        } else {
            output.push_str(&escape_text(&text.node_value));
        }
        Ok(())
    }

    fn indent(&self, depth: usize, output: &mut String) {
        if let Some(width) = self.config.indent {
            output.push_str(&" ".repeat(width * depth));
        }
    }

    fn newline(&self, output: &mut String) {
        if self.config.indent.is_some() {
            output.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId) {
        let mut doc = Document::new();
        let select = doc.create_element("select").unwrap();
        doc.set_attribute(select, "name", "fruit").unwrap();
        doc.set_flag(select, "required", Presence::Present).unwrap();

        let option = doc.create_element("option").unwrap();
        doc.set_attribute(option, "value", "a&b").unwrap();
        doc.set_text_content(option, "Apples & <Pears>").unwrap();
        doc.append_child(select, option).unwrap();
        doc.append_child(doc.root(), select).unwrap();
        (doc, select)
    }

    #[test]
    fn test_serialize_html() {
        let (doc, _) = sample();
        let output = HtmlSerializer::new().serialize(&doc).unwrap();

        assert_eq!(
            output,
            "<select name=\"fruit\" required><option value=\"a&amp;b\">Apples &amp; &lt;Pears&gt;</option></select>"
        );
    }

    #[test]
    fn test_serialize_xhtml_flags_and_empty_elements() {
        let mut doc = Document::new();
        let script = doc.create_element("script").unwrap();
        doc.set_attribute(script, "src", "/app.js").unwrap();
        doc.set_flag(script, "async", Presence::Present).unwrap();

        let serializer = HtmlSerializer::with_config(SerializerConfig {
            mode: MarkupMode::Xhtml,
            ..Default::default()
        });
        assert_eq!(
            serializer.serialize_fragment(&doc, script).unwrap(),
            "<script src=\"/app.js\" async=\"\" />"
        );
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let mut doc = Document::new();
        let meta = doc.create_element("meta").unwrap();
        doc.set_attribute(meta, "charset", "utf-8").unwrap();
        let script = doc.create_element("script").unwrap();

        let serializer = HtmlSerializer::new();
        assert_eq!(
            serializer.serialize_fragment(&doc, meta).unwrap(),
            "<meta charset=\"utf-8\">"
        );
        assert_eq!(
            serializer.serialize_fragment(&doc, script).unwrap(),
            "<script></script>"
        );
    }

    #[test]
    fn test_script_and_style_text_is_verbatim() {
        let mut doc = Document::new();
        let script = doc.create_element("script").unwrap();
        doc.set_text_content(script, "if (a < b && c) {}").unwrap();
        let style = doc.create_element("style").unwrap();
        doc.set_text_content(style, "a > b { color: red }").unwrap();

        let html = HtmlSerializer::new();
        assert_eq!(
            html.serialize_fragment(&doc, script).unwrap(),
            "<script>if (a < b && c) {}</script>"
        );
        assert_eq!(
            html.serialize_fragment(&doc, style).unwrap(),
            "<style>a > b { color: red }</style>"
        );

        // XHTML is parsed as XML, so the same text must stay escaped
        let xhtml = HtmlSerializer::with_config(SerializerConfig {
            mode: MarkupMode::Xhtml,
            ..Default::default()
        });
        assert_eq!(
            xhtml.serialize_fragment(&doc, script).unwrap(),
            "<script>if (a &lt; b &amp;&amp; c) {}</script>"
        );
    }

    #[test]
    fn test_indented_script_text_is_verbatim() {
        let mut doc = Document::new();
        let script = doc.create_element("script").unwrap();
        let code = doc.create_text_node("x && y");
        let more = doc.create_text_node(" < z");
        doc.append_child(script, code).unwrap();
        doc.append_child(script, more).unwrap();

        let serializer = HtmlSerializer::with_config(SerializerConfig {
            indent: Some(2),
            ..Default::default()
        });
        assert_eq!(
            serializer.serialize_fragment(&doc, script).unwrap(),
            "<script>\n  x && y\n   < z\n</script>\n"
        );
    }

    #[test]
    fn test_indented_output_with_doctype() {
        let (doc, _) = sample();
        let serializer = HtmlSerializer::with_config(SerializerConfig {
            doctype: true,
            indent: Some(2),
            ..Default::default()
        });

        let output = serializer.serialize(&doc).unwrap();
        assert_eq!(
            output,
            "<!DOCTYPE html>\n<select name=\"fruit\" required>\n  <option value=\"a&amp;b\">Apples &amp; &lt;Pears&gt;</option>\n</select>\n"
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: SerializerConfig =
            serde_json::from_str(r#"{ "mode": "xhtml", "indent": 4 }"#).unwrap();
        assert_eq!(config.mode, MarkupMode::Xhtml);
        assert_eq!(config.indent, Some(4));
        assert!(!config.doctype);
    }
}
