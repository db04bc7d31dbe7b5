//! Arena storage for automaton nodes.
//!
//! Nodes are addressed by stable integer index rather than owning
//! pointers: children are symbol-to-index maps and the failure link is a
//! plain index into the same arena. Dropping the arena drops the entire
//! node graph at once, so there is no recursive teardown and no dangling
//! cross links.

use std::hash::Hash;

use ahash::AHashMap;

/// Index of a node within a [`NodeArena`].
pub(crate) type NodeId = usize;

/// The root node is always the first slot in the arena.
pub(crate) const ROOT: NodeId = 0;

/// One automaton state.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    /// Outgoing trie edges, one per distinct symbol.
    pub children: AHashMap<S, NodeId>,
    /// Failure (suffix) link; the root points to itself.
    pub failure: NodeId,
    /// Id of the pattern ending exactly at this node, if any.
    pub pattern_end: Option<usize>,
    /// Patterns reported upon reaching this node: the pattern ending here
    /// plus everything inherited from the failure chain. Populated during
    /// sealing.
    pub outputs: Vec<usize>,
}

impl<S> Node<S> {
    fn new() -> Self {
        Node {
            children: AHashMap::new(),
            failure: ROOT,
            pattern_end: None,
            outputs: Vec::new(),
        }
    }

}

/// Flat store owning every node of an automaton.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S: Copy + Eq + Hash> NodeArena<S> {
    /// Create an arena holding only the root node.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![Node::new()],
        }
    }

    /// Allocate a fresh node and return its id.
    pub fn alloc(&mut self) -> NodeId {
        self.nodes.push(Node::new());
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<S> {
        &mut self.nodes[id]
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node<S>> {
        self.nodes.iter_mut()
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_starts_with_root() {
        let arena: NodeArena<char> = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.node(ROOT).failure, ROOT);
        assert!(arena.node(ROOT).pattern_end.is_none());
    }

    #[test]
    fn test_alloc_returns_sequential_ids() {
        let mut arena: NodeArena<char> = NodeArena::new();
        let a = arena.alloc();
        let b = arena.alloc();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(arena.len(), 3);

        arena.node_mut(a).children.insert('x', b);
        assert_eq!(arena.node(a).children.get(&'x'), Some(&b));
    }
}
