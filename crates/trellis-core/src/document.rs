//! Document ownership of the widget forest.
//!
//! The document owns every node by value; an editing surface addresses
//! nodes by id and performs explicit operations. No node is ever aliased
//! through two owning paths.

use crate::errors::DocumentError;
use crate::node::Node;

/// An owned forest of widget trees.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Top-level widgets in document order.
    pub roots: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a parsed forest.
    pub fn from_roots(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of top-level widgets.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Iterate every node in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.roots.iter().flat_map(|root| root.walk())
    }

    /// Find a node by id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.iter().find(|n| n.id() == id)
    }

    /// Find a node by id, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        fn walk<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
            for node in nodes {
                if node.id() == id {
                    return Some(node);
                }
                if let Some(found) = walk(&mut node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&mut self.roots, id)
    }

    /// Append a node as the last child of `parent_id`, or as a new root
    /// when `parent_id` is `None`.
    pub fn insert(&mut self, parent_id: Option<&str>, node: Node) -> Result<(), DocumentError> {
        match parent_id {
            None => {
                self.roots.push(node);
                Ok(())
            }
            Some(id) => {
                let parent = self
                    .find_mut(id)
                    .ok_or_else(|| DocumentError::UnknownParent(id.to_string()))?;
                parent.children.push(node);
                Ok(())
            }
        }
    }

    /// Detach and return the subtree rooted at `id`.
    pub fn remove(&mut self, id: &str) -> Result<Node, DocumentError> {
        fn detach(nodes: &mut Vec<Node>, id: &str) -> Option<Node> {
            if let Some(pos) = nodes.iter().position(|n| n.id() == id) {
                return Some(nodes.remove(pos));
            }
            for node in nodes {
                if let Some(found) = detach(&mut node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        detach(&mut self.roots, id).ok_or_else(|| DocumentError::UnknownId(id.to_string()))
    }

    /// Duplicate the subtree rooted at `id`, minting fresh ids for the copy
    /// and every descendant. The copy is inserted directly after the
    /// original among its siblings; the copy's id is returned.
    pub fn duplicate(&mut self, id: &str) -> Result<String, DocumentError> {
        fn dup(nodes: &mut Vec<Node>, id: &str) -> Option<String> {
            if let Some(pos) = nodes.iter().position(|n| n.id() == id) {
                let copy = nodes[pos].duplicate();
                let copy_id = copy.id().to_string();
                nodes.insert(pos + 1, copy);
                return Some(copy_id);
            }
            for node in nodes {
                if let Some(copy_id) = dup(&mut node.children, id) {
                    return Some(copy_id);
                }
            }
            None
        }
        dup(&mut self.roots, id).ok_or_else(|| DocumentError::UnknownId(id.to_string()))
    }

    /// Replace the subtree rooted at `id` with `node`, preserving its
    /// position among its siblings. The old subtree is returned.
    pub fn replace(&mut self, id: &str, node: Node) -> Result<Node, DocumentError> {
        fn swap(nodes: &mut [Node], id: &str, node: &mut Option<Node>) -> Option<Node> {
            for slot in nodes {
                if slot.id() == id {
                    let replacement = node.take()?;
                    return Some(std::mem::replace(slot, replacement));
                }
                if let Some(old) = swap(&mut slot.children, id, node) {
                    return Some(old);
                }
            }
            None
        }
        let mut node = Some(node);
        swap(&mut self.roots, id, &mut node)
            .ok_or_else(|| DocumentError::UnknownId(id.to_string()))
    }
}
