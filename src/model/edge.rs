//! Edge (parent → child) in the attack tree.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// A directed parent → child relation. No weight, no identity of its own;
/// duplicates are structurally legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}
