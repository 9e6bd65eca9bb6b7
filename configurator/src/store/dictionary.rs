//! Node dictionary.
//!
//! Interns every node the store has seen and hands out dense `NodeId`s, so
//! the indexes compare and hash small integers instead of strings.

use indexmap::IndexSet;

use crate::types::Node;

/// Dense identifier of an interned node.
///
/// Only meaningful for the dictionary that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Insertion-ordered node interner.
#[derive(Debug, Default)]
pub struct Dictionary {
    nodes: IndexSet<Node>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a node, returning its existing id if it was seen before.
    pub fn intern(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.nodes.get_index_of(&node) {
            return NodeId(index);
        }
        let (index, _) = self.nodes.insert_full(node);
        NodeId(index)
    }

    /// Find the id of a node without interning it.
    #[must_use]
    pub fn lookup(&self, node: &Node) -> Option<NodeId> {
        self.nodes.get_index_of(node).map(NodeId)
    }

    /// Resolve an id issued by this dictionary.
    ///
    /// Ids are never removed, so every id handed out stays valid.
    #[must_use]
    pub fn resolve(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
