//! Arena-based DOM tree storage
//!
//! Every node a document creates lives in one `Vec`, addressed by a 4-byte
//! index. Parent and child links are indices too, so moving an element
//! between parents is a matter of editing two lists.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena: Vec<DomNode>
//!        [Node0][Node1][Node2]...
//!         ↑ 4-byte index, not 8-byte pointer
//! ```

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId, NodeType};

/// Arena allocator for DOM nodes
///
/// Nodes are never freed individually; the arena lives as long as the
/// document that owns it.
#[derive(Debug, Clone)]
pub struct DomArena {
    /// All nodes stored sequentially
    nodes: Vec<DomNode>,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create arena with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a detached node, returns its ID
    pub fn alloc(&mut self, node_type: NodeType, node_name: impl Into<String>) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(DomNode::new(node_id, node_type, node_name.into()));
        node_id
    }

    /// Allocate a detached text node holding `data`
    pub fn alloc_text(&mut self, data: impl Into<String>) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        let mut node = DomNode::new(node_id, NodeType::Text, "#text".to_string());
        node.node_value = data.into();
        self.nodes.push(node);
        node_id
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over all nodes
    pub fn iter(&self) -> impl Iterator<Item = &DomNode> {
        self.nodes.iter()
    }

    /// Get children of a node
    pub fn children(&self, node_id: NodeId) -> Result<Vec<&DomNode>> {
        let node = self.get(node_id)?;
        node.children_ids
            .iter()
            .map(|&child_id| self.get(child_id))
            .collect()
    }

    /// Get parent of a node
    pub fn parent(&self, node_id: NodeId) -> Result<Option<&DomNode>> {
        let node = self.get(node_id)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(self.get(parent_id)?)),
            None => Ok(None),
        }
    }

    /// Check whether `ancestor` is `node_id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node_id: NodeId) -> Result<bool> {
        let mut current = Some(node_id);
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.get(id)?.parent_id;
        }
        Ok(false)
    }

    /// Link `child` as the last child of `parent`, unlinking it from any
    /// previous parent first
    ///
    /// Callers are responsible for hierarchy checks.
    pub(crate) fn link_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        if let Some(old_parent) = self.get(child)?.parent_id {
            self.get_mut(old_parent)?
                .children_ids
                .retain(|id| *id != child);
        }

        self.get_mut(child)?.parent_id = Some(parent);
        self.get_mut(parent)?.children_ids.push(child);
        Ok(())
    }

    /// Detach every child of `node_id`, leaving them parentless
    pub(crate) fn unlink_children(&mut self, node_id: NodeId) -> Result<()> {
        let children = std::mem::take(&mut self.get_mut(node_id)?.children_ids);
        for child in children {
            self.get_mut(child)?.parent_id = None;
        }
        Ok(())
    }

    /// Traverse tree depth-first (iterative, no recursion)
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }

    /// Find nodes in the subtree of `start_id` matching predicate, in tree order
    pub fn find<F>(&self, start_id: NodeId, predicate: F) -> Result<Vec<NodeId>>
    where
        F: Fn(&DomNode) -> bool,
    {
        let mut found = Vec::new();
        self.traverse_df(start_id, |node| {
            if predicate(node) {
                found.push(node.node_id);
            }
            Ok(())
        })?;
        Ok(found)
    }

    /// Find all elements by tag name (ASCII case-insensitive)
    pub fn find_by_tag(&self, start_id: NodeId, tag: &str) -> Result<Vec<NodeId>> {
        self.find(start_id, |node| {
            node.node_type == NodeType::Element && node.node_name.eq_ignore_ascii_case(tag)
        })
    }

    /// Find first element by ID attribute
    pub fn find_by_id(&self, start_id: NodeId, id: &str) -> Result<Option<NodeId>> {
        let found = self.find(start_id, |node| {
            node.node_type == NodeType::Element && node.attr("id") == Some(id)
        })?;
        Ok(found.first().copied())
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}
