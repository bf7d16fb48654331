//! Backtracking parse tree
//!
//! Every grammar rule records what it consumed as a node in this tree. A node
//! covers the byte range `start..end` of the input; its `start` is fixed when
//! it is created (the parent's `end` at that moment) and its `end` always equals
//! the `end` of its last child, or its `start` when it has no children. Leaf
//! nodes holding a literal string extend `end` by the literal's length.
//!
//! Changing a node's `end` ripples up through every ancestor, so the root's
//! `end` is always the rightmost consumed offset of the whole parse. That offset
//! is the only cursor the grammar has.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Backtracking is done
//! with [`ParseTree::pop`], which detaches a node's most recent child and
//! recomputes the node's `end`. A node that is still attached to its parent is a
//! successful match; there is no separate success flag.

use alloc::vec::Vec;

use super::value::Value;

/// Index of a node inside a [`ParseTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Single node of the parse tree
#[derive(Debug, Clone)]
struct Node {
    /// Owning node, `None` only for the root
    parent: Option<NodeId>,
    /// Attached children in lexical order
    children: Vec<NodeId>,
    /// Offset where this node starts consuming input
    start: usize,
    /// Offset just past the last consumed byte
    end: usize,
    /// Rule payload
    value: Value,
}

impl Node {
    const fn new(parent: Option<NodeId>, start: usize) -> Self {
        Self {
            parent,
            children: Vec::new(),
            start,
            end: start,
            value: Value::Empty,
        }
    }
}

/// Arena-backed parse tree with ripple-up end tracking
#[derive(Debug, Clone)]
pub struct ParseTree {
    nodes: Vec<Node>,
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTree {
    /// Create a tree holding only the root node at offset 0
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(Node::new(None, 0));
        Self { nodes }
    }

    /// Root node of the tree
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Offset where `id` starts
    #[must_use]
    pub fn start(&self, id: NodeId) -> usize {
        self.nodes[id.0].start
    }

    /// Offset just past the input consumed by `id`
    #[must_use]
    pub fn end(&self, id: NodeId) -> usize {
        self.nodes[id.0].end
    }

    /// Attached children of `id` in lexical order
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Payload of `id`
    #[must_use]
    pub fn value(&self, id: NodeId) -> &Value {
        &self.nodes[id.0].value
    }

    /// Move the payload out of `id`, leaving [`Value::Empty`]
    ///
    /// The node keeps its range, so the tree's positions are unaffected.
    pub fn take_value(&mut self, id: NodeId) -> Value {
        core::mem::take(&mut self.nodes[id.0].value)
    }

    /// Attach a new empty child to `parent`, starting at the parent's end
    pub fn push(&mut self, parent: NodeId) -> NodeId {
        let start = self.nodes[parent.0].end;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(parent), start));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Attach a new leaf child holding `literal`, consuming its length
    pub fn push_literal(&mut self, parent: NodeId, literal: &str) -> NodeId {
        let id = self.push(parent);
        self.set_value(id, Value::Str(literal.into()));
        id
    }

    /// Replace the payload of `id`
    ///
    /// A string payload on a childless node makes the node consume exactly
    /// that string.
    pub fn set_value(&mut self, id: NodeId, value: Value) {
        let leaf_end = match &value {
            Value::Str(text) if self.nodes[id.0].children.is_empty() => {
                Some(self.nodes[id.0].start + text.len())
            }
            _ => None,
        };

        self.nodes[id.0].value = value;

        if let Some(end) = leaf_end {
            self.set_end(id, end);
        }
    }

    /// Detach the most recent child of `id` and restore `id`'s end
    pub fn pop(&mut self, id: NodeId) {
        self.nodes[id.0].children.pop();

        let node = &self.nodes[id.0];
        let end = node
            .children
            .last()
            .map_or(node.start, |last| self.nodes[last.0].end);

        self.set_end(id, end);
    }

    /// Update `id`'s end and ripple the change up through its ancestors
    fn set_end(&mut self, id: NodeId, end: usize) {
        let mut current = id;
        loop {
            let node = &mut self.nodes[current.0];
            node.end = end;
            let parent = node.parent;

            match parent {
                Some(parent) if self.nodes[parent.0].end != end => current = parent,
                _ => break,
            }
        }
    }
}
