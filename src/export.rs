//! Tree export — flatten the collections into a [`TreeDocument`].
//!
//! ```text
//! NodeCollection + EdgeCollection + model → export_tree() → TreeDocument
//!   → to_json_string() / write_json() → bytes for the download collaborator
//! ```
//!
//! Nothing is validated here: dangling edges, cycles and disconnected nodes
//! are written exactly as they sit in memory.

use std::io::Write;

use crate::format::{TreeDocument, WireEdge, WireNode};
use crate::model::ModelVariant;
use crate::storage::{EdgeCollection, NodeCollection};
use crate::{Error, Result};

/// Output flavour of [`export_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The JSON Standard Export Format.
    #[default]
    Standard,
    /// ADTool-compatible XML. No schema is pinned down yet.
    Adtool,
}

/// Every node and edge in collection order, plus the model identifier when
/// `model` is given.
pub fn export_tree(
    nodes: &NodeCollection,
    edges: &EdgeCollection,
    model: Option<ModelVariant>,
) -> TreeDocument {
    TreeDocument {
        nodes: nodes.iter().map(WireNode::from).collect(),
        edges: edges.iter().map(WireEdge::from).collect(),
        data_model: model.map(|m| m.model_id().to_string()),
    }
}

pub fn to_json_string(doc: &TreeDocument) -> Result<String> {
    Ok(serde_json::to_string(doc)?)
}

pub fn write_json(doc: &TreeDocument, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer(&mut *writer, doc)?;
    writer.flush()?;
    Ok(())
}

pub fn export_string(
    nodes: &NodeCollection,
    edges: &EdgeCollection,
    model: Option<ModelVariant>,
    format: ExportFormat,
) -> Result<String> {
    match format {
        ExportFormat::Standard => to_json_string(&export_tree(nodes, edges, model)),
        ExportFormat::Adtool => Err(Error::Unsupported("ADTool XML export".into())),
    }
}
