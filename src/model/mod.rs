//! # Attack Tree Model
//!
//! Plain data types for an attack tree: nodes, edges, attribute maps, and the
//! node-model variants that decide how a node is displayed.
//!
//! Design rule: no collection state here. Relations between nodes live in
//! `storage::EdgeCollection` and are recovered by scanning.

pub mod node;
pub mod edge;
pub mod attributes;
pub mod variant;
pub mod effort;

pub use node::{Node, NodeId};
pub use edge::Edge;
pub use attributes::{AttributeMap, ROOT_ATTRIBUTE, EFFORT_ATTRIBUTE, OPERATOR_ATTRIBUTE};
pub use variant::{ModelVariant, ModelInfo, EVITA_SUFFIX};
pub use effort::{Effort, Operator, UNKNOWN_MARKER};
