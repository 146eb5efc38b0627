//! Tree import — rebuild collections from a [`TreeDocument`].
//!
//! Every node is constructed as the variant named by the document's
//! `dataModel`; an absent or unknown identifier means the default model.
//! Import is all-or-nothing: either the full tree comes back or an error
//! does, never a partially populated pair of collections.

use std::io::Read;

use hashbrown::HashSet;
use tracing::{debug, warn};

use crate::config::DuplicateIds;
use crate::format::TreeDocument;
use crate::model::{Edge, ModelVariant, Node};
use crate::storage::{EdgeCollection, NodeCollection};
use crate::{Error, Result};

/// Collections and model recovered from a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTree {
    pub nodes: NodeCollection,
    pub edges: EdgeCollection,
    pub model: ModelVariant,
}

/// Import rejecting duplicate node ids.
pub fn import_tree(doc: TreeDocument) -> Result<ImportedTree> {
    import_tree_with(doc, DuplicateIds::Reject)
}

pub fn import_tree_with(doc: TreeDocument, duplicates: DuplicateIds) -> Result<ImportedTree> {
    let model = ModelVariant::resolve(doc.data_model.as_deref());

    let mut nodes = NodeCollection::new();
    let mut seen = HashSet::with_capacity(doc.nodes.len());
    for wire in doc.nodes {
        if !seen.insert(wire.id) {
            match duplicates {
                DuplicateIds::Reject => return Err(Error::DuplicateNodeId(wire.id)),
                DuplicateIds::KeepFirst => {
                    warn!(id = %wire.id, "dropping node with duplicate id");
                    continue;
                }
            }
        }
        nodes.add(Node::new_as(model, wire.id, wire.label, wire.attributes))?;
    }

    let edges: EdgeCollection = doc.edges.into_iter().map(Edge::from).collect();

    debug!(nodes = nodes.len(), edges = edges.len(), %model, "imported tree");
    Ok(ImportedTree { nodes, edges, model })
}

pub fn from_json_str(json: &str) -> Result<ImportedTree> {
    import_tree(serde_json::from_str(json)?)
}

pub fn read_json(reader: impl Read) -> Result<ImportedTree> {
    import_tree(serde_json::from_reader(reader)?)
}
