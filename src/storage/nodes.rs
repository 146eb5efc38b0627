//! Node collection and id allocation.

use hashbrown::HashSet;
use tracing::debug;

use super::{DisplayNode, EdgeCollection};
use crate::model::{Edge, ModelVariant, Node, NodeId};
use crate::{Error, Result};

/// Insertion-ordered set of nodes keyed by id.
///
/// No two nodes share an id: [`add`](Self::add) rejects a clash instead of
/// overwriting. Lookups are linear scans and return `None` for unknown ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCollection {
    nodes: Vec<Node>,
}

impl NodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding just `root`.
    pub fn from_root(root: Node) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn add(&mut self, node: Node) -> Result<NodeId> {
        if self.contains(node.id) {
            return Err(Error::DuplicateNodeId(node.id));
        }
        let id = node.id;
        self.nodes.push(node);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Smallest non-negative id not in use. With ids `{0, 1, 3}` this is `2`;
    /// with no gap it is `len()`.
    pub fn generate_unique_id(&self) -> NodeId {
        let taken: HashSet<NodeId> = self.nodes.iter().map(|n| n.id).collect();
        // By pigeonhole one of 0..=len is free.
        (0..=self.nodes.len() as u64)
            .map(NodeId)
            .find(|id| !taken.contains(id))
            .unwrap_or(NodeId(self.nodes.len() as u64))
    }

    /// Adds `child` and an edge `parent → child`. The parent need not be
    /// present; see [`add_child`](Self::add_child) for the checked form.
    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        child: Node,
        edges: &mut EdgeCollection,
    ) -> Result<NodeId> {
        let child_id = self.add(child)?;
        edges.add(Edge::new(parent, child_id));
        debug!(%parent, child = %child_id, "attached child");
        Ok(child_id)
    }

    /// [`Node::add_child`] addressed by id. Fails with `NotFound` when
    /// `parent` is not in the collection.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        child: Node,
        edges: &mut EdgeCollection,
    ) -> Result<NodeId> {
        if !self.contains(parent) {
            return Err(Error::NotFound(format!("Parent node {parent}")));
        }
        self.attach(parent, child, edges)
    }

    /// Every node rebuilt under `variant`, order preserved.
    pub fn rebuild_as(self, variant: ModelVariant) -> Self {
        Self {
            nodes: self.nodes.into_iter().map(|n| n.rebuild_as(variant)).collect(),
        }
    }

    /// Nodes as the visualization adapter consumes them, labels computed by
    /// each node's model.
    pub fn to_display_form(&self, edges: &EdgeCollection) -> Vec<DisplayNode> {
        self.nodes
            .iter()
            .map(|n| DisplayNode {
                id: n.id,
                label: n.display_label(edges, self),
                attributes: n.attributes.clone(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a NodeCollection {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
