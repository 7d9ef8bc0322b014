//! Arena storage for graph nodes and their outgoing edges.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node {0}")]
    UnknownNode(u32),
}

/// Index of a node in its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A graph node: an integer value and its ordered outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i32,
    pub edges: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, value: i32) -> NodeId {
        self.nodes.push(Node {
            value,
            edges: Vec::new(),
        });
        NodeId((self.nodes.len() - 1) as u32)
    }

    /// Append `to` to the outgoing edges of `from`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.check(to)?;
        self.nodes
            .get_mut(from.index())
            .ok_or(GraphError::UnknownNode(from.0))?
            .edges
            .push(to);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.node(id).map(|n| n.value)
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.edges.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn reachable(&self, source: NodeId, target: NodeId) -> Result<bool, GraphError> {
        crate::reach::reachable(self, source, target)
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id.0))
        }
    }
}
