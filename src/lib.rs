//! # attack-tree — Attack Tree Data Model
//!
//! The core of an attack-tree editor: a rooted tree of attack steps, each
//! annotated with free-form key/value attributes, plus a JSON interchange
//! format and a set of node models that decide how each step is displayed.
//!
//! ## Design Principles
//!
//! 1. **Pure data model**: `Node`, `Edge` and `AttributeMap` carry no UI state
//! 2. **Extrinsic relations**: children are recovered by scanning edges, never cached
//! 3. **Tagged variants**: node models dispatch on a stored `ModelVariant`, not on type identity
//! 4. **Explicit session**: the "current tree" is a `Session` value, never a global
//!
//! ## Quick Start
//!
//! ```rust
//! use attack_tree::{Session, EditorConfig, ModelVariant};
//!
//! # fn example() -> attack_tree::Result<()> {
//! let mut session = Session::new(EditorConfig::default());
//! session.switch_model(ModelVariant::MinMax);
//!
//! let child = session.add_child(session.root_id())?;
//! session.set_attribute(child, "effort", "3")?;
//! session.set_attribute(session.root_id(), "operator", "min")?;
//!
//! for node in session.display() {
//!     println!("{}: {}", node.id, node.label);
//! }
//!
//! let json = session.export_json()?;
//! let restored = attack_tree::import::from_json_str(&json)?;
//! assert_eq!(restored.model, ModelVariant::MinMax);
//! # Ok(())
//! # }
//! ```
//!
//! ## Node Models
//!
//! | Variant | Title | Display label |
//! |---------|-------|---------------|
//! | `Default` | Node | label as entered |
//! | `Evita` | EVITA | label + `" \| EVITA"` |
//! | `MinMax` | MinMax | label + aggregated effort |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod format;
pub mod export;
pub mod import;
pub mod session;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Node, NodeId, Edge, AttributeMap, ModelVariant, ModelInfo,
    Effort, Operator,
};

// ============================================================================
// Re-exports: Collections, interchange, session
// ============================================================================

pub use storage::{NodeCollection, EdgeCollection, DisplayNode};
pub use format::{TreeDocument, WireNode, WireEdge};
pub use export::ExportFormat;
pub use import::ImportedTree;
pub use session::Session;
pub use config::EditorConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(NodeId),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
