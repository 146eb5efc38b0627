//! Editing session — the "current tree" a UI works on.
//!
//! A `Session` owns one node collection, one edge collection and the active
//! model. UI events call into it one at a time. Import and model switches
//! replace the tree wholesale; adds and edits mutate it in place. Display
//! labels are recomputed on every [`display`](Session::display) call.

use std::io::{Read, Write};

use tracing::debug;

use crate::config::EditorConfig;
use crate::export::{self, ExportFormat};
use crate::format::TreeDocument;
use crate::import::{self, ImportedTree};
use crate::model::{AttributeMap, ModelVariant, Node, NodeId, ROOT_ATTRIBUTE};
use crate::storage::{DisplayNode, EdgeCollection, NodeCollection};
use crate::{Error, Result};

/// Id of the root created by [`Session::new`].
pub const ROOT_ID: NodeId = NodeId(0);

#[derive(Debug, Clone)]
pub struct Session {
    config: EditorConfig,
    nodes: NodeCollection,
    edges: EdgeCollection,
    model: ModelVariant,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    /// A tree holding only the root: id 0, the configured root label and
    /// `root=true`.
    pub fn new(config: EditorConfig) -> Self {
        let model = config.model();
        let mut attributes = AttributeMap::new();
        attributes.insert(ROOT_ATTRIBUTE.to_string(), "true".to_string());

        let root = Node::new_as(model, ROOT_ID, config.root_label.clone(), attributes);
        let nodes = NodeCollection::from_root(root);

        Self { config, nodes, edges: EdgeCollection::new(), model }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn nodes(&self) -> &NodeCollection {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeCollection {
        &self.edges
    }

    pub fn model(&self) -> ModelVariant {
        self.model
    }

    pub fn root_id(&self) -> NodeId {
        ROOT_ID
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(format!("Node {id}")))
    }

    // ========================================================================
    // Tree edits
    // ========================================================================

    /// Adds a child of the active model under `parent`, returning its id.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId> {
        let id = self.nodes.generate_unique_id();
        let label = format!("{}{}", self.config.child_label_prefix, id);
        let child = Node::new_as(self.model, id, label, AttributeMap::new());
        self.nodes.add_child(parent, child, &mut self.edges)
    }

    pub fn edit_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<()> {
        self.node_mut(id)?.edit_label(label);
        Ok(())
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.node_mut(id)?.attributes.insert(key.into(), value.into());
        Ok(())
    }

    /// Removes `key`, returning its old value. Remaining attributes keep
    /// their order.
    pub fn remove_attribute(&mut self, id: NodeId, key: &str) -> Result<Option<String>> {
        Ok(self.node_mut(id)?.attributes.shift_remove(key))
    }

    /// Direct access for an attribute editor that mutates the map in place.
    pub fn attributes_mut(&mut self, id: NodeId) -> Result<&mut AttributeMap> {
        Ok(&mut self.node_mut(id)?.attributes)
    }

    /// Rebuilds every node under `model`. Ids, labels, attributes and edges
    /// are untouched.
    pub fn switch_model(&mut self, model: ModelVariant) {
        debug!(from = %self.model, to = %model, "switching model");
        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = nodes.rebuild_as(model);
        self.model = model;
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Every node with its model-computed label, for the renderer.
    pub fn display(&self) -> Vec<DisplayNode> {
        self.nodes.to_display_form(&self.edges)
    }

    // ========================================================================
    // Interchange
    // ========================================================================

    pub fn export(&self) -> TreeDocument {
        export::export_tree(&self.nodes, &self.edges, Some(self.model))
    }

    pub fn export_json(&self) -> Result<String> {
        self.export_as(ExportFormat::Standard)
    }

    pub fn export_as(&self, format: ExportFormat) -> Result<String> {
        export::export_string(&self.nodes, &self.edges, Some(self.model), format)
    }

    pub fn write_json(&self, writer: &mut dyn Write) -> Result<()> {
        export::write_json(&self.export(), writer)
    }

    /// Replaces the whole tree with `doc`. On error the session is unchanged.
    pub fn import(&mut self, doc: TreeDocument) -> Result<()> {
        let ImportedTree { nodes, edges, model } =
            import::import_tree_with(doc, self.config.duplicate_ids)?;
        self.nodes = nodes;
        self.edges = edges;
        self.model = model;
        debug!(nodes = self.nodes.len(), %model, "session replaced by import");
        Ok(())
    }

    pub fn import_json(&mut self, json: &str) -> Result<()> {
        self.import(serde_json::from_str(json)?)
    }

    pub fn read_json(&mut self, reader: impl Read) -> Result<()> {
        self.import(serde_json::from_reader(reader)?)
    }
}
