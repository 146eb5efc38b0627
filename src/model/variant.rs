//! Node model variants and their stable identifiers.

use serde::Serialize;
use tracing::warn;

use super::{effort, Node};
use crate::storage::{EdgeCollection, NodeCollection};

/// Appended to every label under the EVITA model.
pub const EVITA_SUFFIX: &str = " | EVITA";

/// How a node computes its displayed label.
///
/// Each variant owns a model identifier that tags exported trees. These
/// strings are part of the interchange format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelVariant {
    /// Label shown as entered.
    #[default]
    Default,
    /// Cosmetic EVITA marker; no aggregation.
    Evita,
    /// Label followed by min/max-aggregated effort.
    MinMax,
}

/// Catalog entry for a model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub title: &'static str,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 3] = [ModelVariant::Default, ModelVariant::Evita, ModelVariant::MinMax];

    pub const fn model_id(self) -> &'static str {
        match self {
            ModelVariant::Default => "43daa996-8208-499f-be1b-f6c34c84d9df",
            ModelVariant::Evita => "bf4397f7-93ae-4502-a4a2-397f40f5cc49",
            ModelVariant::MinMax => "7df52155-0330-435b-b022-55586ec188a1",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            ModelVariant::Default => "Node",
            ModelVariant::Evita => "EVITA",
            ModelVariant::MinMax => "MinMax",
        }
    }

    pub fn from_model_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.model_id() == id)
    }

    /// Like [`from_model_id`](Self::from_model_id), falling back to
    /// `Default` when the identifier is absent or unknown.
    pub fn resolve(id: Option<&str>) -> Self {
        match id {
            None => ModelVariant::Default,
            Some(id) => Self::from_model_id(id).unwrap_or_else(|| {
                warn!(model_id = id, "unrecognized model identifier, using default model");
                ModelVariant::Default
            }),
        }
    }

    pub fn catalog() -> Vec<ModelInfo> {
        Self::ALL
            .into_iter()
            .map(|v| ModelInfo { id: v.model_id(), title: v.title() })
            .collect()
    }

    pub fn display_label(self, node: &Node, edges: &EdgeCollection, nodes: &NodeCollection) -> String {
        match self {
            ModelVariant::Default => node.label.clone(),
            ModelVariant::Evita => format!("{}{}", node.label, EVITA_SUFFIX),
            ModelVariant::MinMax => {
                format!("{}\nEffort: {}", node.label, effort::aggregate(node, edges, nodes))
            }
        }
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
