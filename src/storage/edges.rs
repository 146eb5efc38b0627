//! Edge collection.

use crate::model::{Edge, NodeId};

/// Insertion-ordered sequence of edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeCollection {
    edges: Vec<Edge>,
}

impl EdgeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// `to` of every edge leaving `from`, in insertion order. Full scan.
    pub fn targets_of(&self, from: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter(move |e| e.from == from).map(|e| e.to)
    }
}

impl FromIterator<Edge> for EdgeCollection {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self { edges: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a EdgeCollection {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
