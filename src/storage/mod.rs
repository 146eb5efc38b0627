//! # Tree Storage
//!
//! The two owning collections of an attack tree.
//!
//! | Collection | Module | Holds |
//! |------------|--------|-------|
//! | `NodeCollection` | `nodes` | every `Node`, insertion-ordered, unique ids |
//! | `EdgeCollection` | `edges` | every `Edge`, insertion-ordered |
//!
//! Neither collection references the other. Children are found by scanning
//! the full edge sequence each time; there is no adjacency index to keep in
//! sync.

pub mod nodes;
pub mod edges;

use serde::Serialize;
use crate::model::{AttributeMap, NodeId};

pub use nodes::NodeCollection;
pub use edges::EdgeCollection;

// ============================================================================
// Display form
// ============================================================================

/// What the visualization adapter renders for one node. `label` is the
/// model-computed display label, not the stored one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNode {
    pub id: NodeId,
    pub label: String,
    pub attributes: AttributeMap,
}
