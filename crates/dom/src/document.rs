//! Document - Main entry point for DOM operations
//!
//! This handles:
//! - Element and text node creation (with name checks)
//! - Attribute get/set, including presence-encoded flags
//! - Child append with `appendChild` move semantics
//! - Tree queries over the nodes attached to the document

use serde::{Deserialize, Serialize};

use crate::arena::DomArena;
use crate::error::{DomError, NameKind, Result};
use crate::types::*;
use crate::utils;

/// Configuration for a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Node slots reserved up front
    pub initial_capacity: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

/// Owning context for every node created through it
///
/// Nodes are addressed by `NodeId`. A freshly created element is detached
/// until it is appended somewhere; only attached nodes are reachable from
/// [`Document::root`].
#[derive(Debug, Clone)]
pub struct Document {
    arena: DomArena,
    root: NodeId,
}

impl Document {
    /// Create new document with default config
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// Create document with custom config
    pub fn with_config(config: DocumentConfig) -> Self {
        let mut arena = DomArena::with_capacity(config.initial_capacity.max(1));
        let root = arena.alloc(NodeType::Document, "#document");
        Self { arena, root }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get reference to internal arena
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.arena.get(node_id)
    }

    /// Create a detached element
    ///
    /// Fails with `InvalidCharacter` when `tag_name` is empty or not a
    /// well-formed name.
    pub fn create_element(&mut self, tag_name: &str) -> Result<NodeId> {
        utils::validate_name(NameKind::Element, tag_name)?;
        Ok(self.arena.alloc(NodeType::Element, tag_name))
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.arena.alloc_text(data)
    }

    /// Tag name of an element
    pub fn tag_name(&self, node_id: NodeId) -> Result<&str> {
        Ok(&self.element(node_id)?.node_name)
    }

    pub fn get_attribute(&self, node_id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.element(node_id)?.attr(name))
    }

    pub fn has_attribute(&self, node_id: NodeId, name: &str) -> Result<bool> {
        Ok(self.element(node_id)?.has_attr(name))
    }

    /// Set a string-valued attribute, replacing any previous value
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        utils::validate_name(NameKind::Attribute, name)?;
        self.element_mut(node_id)?
            .attributes
            .set(name, AttrValue::Text(value.to_string()));
        Ok(())
    }

    /// Set or clear a presence-encoded boolean attribute
    ///
    /// `Absent` removes the attribute if it exists.
    pub fn set_flag(&mut self, node_id: NodeId, name: &str, presence: Presence) -> Result<()> {
        utils::validate_name(NameKind::Attribute, name)?;
        let attributes = &mut self.element_mut(node_id)?.attributes;
        match presence {
            Presence::Present => attributes.set(name, AttrValue::Flag),
            Presence::Absent => {
                attributes.remove(name);
            }
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, node_id: NodeId, name: &str) -> Result<()> {
        self.element_mut(node_id)?.attributes.remove(name);
        Ok(())
    }

    /// Replace all children with a single text node
    ///
    /// Empty text leaves the element without children, matching the
    /// `textContent` setter. Void elements accept only empty text.
    pub fn set_text_content(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        let element = self.element(node_id)?;
        if !text.is_empty() && is_void_element(&element.node_name) {
            return Err(void_content_error(element));
        }
        self.arena.unlink_children(node_id)?;
        if !text.is_empty() {
            let text_id = self.create_text_node(text);
            self.arena.link_child(node_id, text_id)?;
        }
        Ok(())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        utils::get_text_content(&self.arena, node_id)
    }

    /// Append `child` as the last child of `parent`
    ///
    /// A child that already has a parent is moved. Returns `child` so
    /// calls can be nested.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId> {
        let parent_node = self.arena.get(parent)?;
        match parent_node.node_type {
            NodeType::Text => {
                return Err(DomError::HierarchyRequest(format!(
                    "node {} is a text node and cannot have children",
                    parent
                )));
            }
            NodeType::Element if is_void_element(&parent_node.node_name) => {
                return Err(void_content_error(parent_node));
            }
            _ => {}
        }

        if self.arena.get(child)?.node_type == NodeType::Document {
            return Err(DomError::HierarchyRequest(
                "the document node cannot be appended".to_string(),
            ));
        }

        if self.arena.is_inclusive_ancestor(child, parent)? {
            return Err(DomError::HierarchyRequest(format!(
                "node {} is an inclusive ancestor of node {}",
                child, parent
            )));
        }

        self.arena.link_child(parent, child)?;
        Ok(child)
    }

    /// Child ids of a node, in order
    pub fn children(&self, node_id: NodeId) -> Result<&[NodeId]> {
        Ok(self.arena.get(node_id)?.children_ids.as_slice())
    }

    /// Element children of a node, in order
    pub fn element_children(&self, node_id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self
            .arena
            .children(node_id)?
            .into_iter()
            .filter(|child| child.is_element())
            .map(|child| child.node_id)
            .collect())
    }

    pub fn parent(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.arena.get(node_id)?.parent_id)
    }

    /// All attached elements with this tag name, in tree order
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<NodeId>> {
        self.arena.find_by_tag(self.root, tag)
    }

    /// First attached element whose `id` attribute equals `id`
    pub fn find_by_id(&self, id: &str) -> Result<Option<NodeId>> {
        self.arena.find_by_id(self.root, id)
    }

    /// Dump every node, attached or not, as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        let nodes: Vec<&DomNode> = self.arena.iter().collect();
        Ok(serde_json::to_string_pretty(&nodes)?)
    }

    fn element(&self, node_id: NodeId) -> Result<&DomNode> {
        let node = self.arena.get(node_id)?;
        if node.is_element() {
            Ok(node)
        } else {
            Err(DomError::InvalidNodeType {
                expected: NodeType::Element.name().to_string(),
                actual: node.node_type.name().to_string(),
            })
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.element(node_id)?;
        self.arena.get_mut(node_id)
    }
}

fn void_content_error(node: &DomNode) -> DomError {
    DomError::HierarchyRequest(format!(
        "<{}> (node {}) is a void element and cannot have content",
        node.node_name, node.node_id
    ))
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();

        assert_eq!(doc.tag_name(div).unwrap(), "div");
        assert_eq!(doc.parent(div).unwrap(), None);
        assert_eq!(doc.arena().len(), 2);
    }

    #[test]
    fn test_create_element_rejects_bad_names() {
        let mut doc = Document::new();

        for bad in ["", "1div", "my div", "<p>"] {
            let err = doc.create_element(bad).unwrap_err();
            assert!(
                matches!(err, DomError::InvalidCharacter { kind: NameKind::Element, .. }),
                "expected InvalidCharacter for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_attributes_round_trip() {
        let mut doc = Document::new();
        let input = doc.create_element("input").unwrap();

        doc.set_attribute(input, "name", "email").unwrap();
        doc.set_flag(input, "required", Presence::Present).unwrap();

        assert_eq!(doc.get_attribute(input, "name").unwrap(), Some("email"));
        assert_eq!(doc.get_attribute(input, "required").unwrap(), Some(""));
        assert_eq!(doc.get_attribute(input, "missing").unwrap(), None);

        doc.set_flag(input, "required", Presence::Absent).unwrap();
        assert!(!doc.has_attribute(input, "required").unwrap());

        doc.remove_attribute(input, "name").unwrap();
        assert_eq!(doc.get_attribute(input, "name").unwrap(), None);
    }

    #[test]
    fn test_bad_attribute_name() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();

        let err = doc.set_attribute(div, "on click", "x").unwrap_err();
        assert!(matches!(
            err,
            DomError::InvalidCharacter {
                kind: NameKind::Attribute,
                ..
            }
        ));
    }

    #[test]
    fn test_attribute_on_text_node() {
        let mut doc = Document::new();
        let text = doc.create_text_node("hi");

        let err = doc.set_attribute(text, "id", "x").unwrap_err();
        assert!(matches!(err, DomError::InvalidNodeType { .. }));
    }

    #[test]
    fn test_text_content() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();

        doc.set_text_content(p, "first").unwrap();
        doc.set_text_content(p, "second").unwrap();
        assert_eq!(doc.text_content(p).unwrap(), "second");
        assert_eq!(doc.children(p).unwrap().len(), 1);

        doc.set_text_content(p, "").unwrap();
        assert!(doc.children(p).unwrap().is_empty());
    }

    #[test]
    fn test_append_child_moves() {
        let mut doc = Document::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        let span = doc.create_element("span").unwrap();

        doc.append_child(a, span).unwrap();
        doc.append_child(b, span).unwrap();

        assert!(doc.children(a).unwrap().is_empty());
        assert_eq!(doc.children(b).unwrap(), &[span]);
        assert_eq!(doc.parent(span).unwrap(), Some(b));
    }

    #[test]
    fn test_append_child_hierarchy_errors() {
        let mut doc = Document::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("div").unwrap();
        doc.append_child(outer, inner).unwrap();

        assert!(matches!(
            doc.append_child(inner, outer),
            Err(DomError::HierarchyRequest(_))
        ));
        assert!(matches!(
            doc.append_child(outer, outer),
            Err(DomError::HierarchyRequest(_))
        ));
        assert!(matches!(
            doc.append_child(outer, doc.root()),
            Err(DomError::HierarchyRequest(_))
        ));

        let text = doc.create_text_node("leaf");
        let extra = doc.create_element("b").unwrap();
        assert!(matches!(
            doc.append_child(text, extra),
            Err(DomError::HierarchyRequest(_))
        ));
    }

    #[test]
    fn test_void_elements_reject_content() {
        let mut doc = Document::new();
        let input = doc.create_element("input").unwrap();
        let span = doc.create_element("span").unwrap();

        assert!(matches!(
            doc.append_child(input, span),
            Err(DomError::HierarchyRequest(_))
        ));
        assert!(matches!(
            doc.set_text_content(input, "x"),
            Err(DomError::HierarchyRequest(_))
        ));
        assert!(doc.children(input).unwrap().is_empty());
        assert_eq!(doc.parent(span).unwrap(), None);

        // clearing text on a void element is harmless
        doc.set_text_content(input, "").unwrap();

        let meta = doc.create_element("META").unwrap();
        let text = doc.create_text_node("x");
        assert!(matches!(
            doc.append_child(meta, text),
            Err(DomError::HierarchyRequest(_))
        ));
    }

    #[test]
    fn test_queries_only_see_attached_nodes() {
        let mut doc = Document::new();
        let body = doc.create_element("body").unwrap();
        let field = doc.create_element("input").unwrap();
        doc.set_attribute(field, "id", "email").unwrap();
        doc.create_element("input").unwrap();

        doc.append_child(doc.root(), body).unwrap();
        doc.append_child(body, field).unwrap();

        assert_eq!(doc.find_by_tag("INPUT").unwrap(), vec![field]);
        assert_eq!(doc.find_by_id("email").unwrap(), Some(field));
        assert_eq!(doc.find_by_id("nope").unwrap(), None);
        assert_eq!(doc.element_children(doc.root()).unwrap(), vec![body]);
    }

    #[test]
    fn test_to_json() {
        let mut doc = Document::new();
        let link = doc.create_element("link").unwrap();
        doc.set_attribute(link, "rel", "stylesheet").unwrap();

        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(json[1]["node_name"], "link");
        assert_eq!(json[1]["attributes"][0]["name"], "rel");
        assert_eq!(json[1]["attributes"][0]["value"], "stylesheet");
    }
}
