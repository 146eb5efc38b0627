//! Node (attack step) in the attack tree.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::{AttributeMap, ModelVariant};
use crate::storage::{EdgeCollection, NodeCollection};
use crate::Result;

/// Node identifier, unique within a `NodeCollection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// A single attack step.
///
/// The `variant` is fixed at construction. Switching the tree's model
/// rebuilds nodes through [`Node::rebuild_as`] rather than mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub attributes: AttributeMap,
    variant: ModelVariant,
}

impl Node {
    /// A node of the `Default` model.
    pub fn new(id: NodeId, label: impl Into<String>, attributes: AttributeMap) -> Self {
        Self::new_as(ModelVariant::Default, id, label, attributes)
    }

    pub fn new_as(
        variant: ModelVariant,
        id: NodeId,
        label: impl Into<String>,
        attributes: AttributeMap,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            attributes,
            variant,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    /// Same id, label and attributes under another model.
    pub fn rebuild_as(self, variant: ModelVariant) -> Self {
        Self { variant, ..self }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Registers `child` in `nodes`, then appends `self.id → child.id` to `edges`.
    ///
    /// Id uniqueness comes from the caller (see
    /// [`NodeCollection::generate_unique_id`]); a clashing id is rejected by
    /// the collection and no edge is added.
    pub fn add_child(
        &self,
        child: Node,
        edges: &mut EdgeCollection,
        nodes: &mut NodeCollection,
    ) -> Result<NodeId> {
        nodes.attach(self.id, child, edges)
    }

    pub fn edit_label(&mut self, new_label: impl Into<String>) {
        self.label = new_label.into();
    }

    /// One-hop children in edge-insertion order. Edges pointing at ids that
    /// are not in `nodes` are skipped.
    pub fn children<'n>(
        &self,
        edges: &EdgeCollection,
        nodes: &'n NodeCollection,
    ) -> SmallVec<[&'n Node; 4]> {
        edges
            .targets_of(self.id)
            .filter_map(|to| {
                let child = nodes.get(to);
                if child.is_none() {
                    trace!(from = %self.id, %to, "skipping dangling edge");
                }
                child
            })
            .collect()
    }

    /// The text shown on the rendered node, computed by this node's model.
    pub fn display_label(&self, edges: &EdgeCollection, nodes: &NodeCollection) -> String {
        self.variant.display_label(self, edges, nodes)
    }
}
