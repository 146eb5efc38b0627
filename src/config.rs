//! Editor configuration.

use serde::{Deserialize, Serialize};

use crate::model::ModelVariant;
use crate::Result;

/// What import does with a node whose id was already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIds {
    /// Fail the whole import with `Error::DuplicateNodeId`.
    #[default]
    Reject,
    /// Keep the first node with the id and drop later ones.
    KeepFirst,
}

/// Settings for a [`Session`](crate::Session) and its imports.
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```rust
/// let config = attack_tree::EditorConfig::from_json(r#"{"root_label": "Goal"}"#).unwrap();
/// assert_eq!(config.root_label, "Goal");
/// assert_eq!(config.child_label_prefix, "Child Node ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Model identifier for a fresh session. Unknown ids fall back to the
    /// default model.
    pub default_model: String,
    pub root_label: String,
    /// New children are labelled with this prefix followed by their id.
    pub child_label_prefix: String,
    pub duplicate_ids: DuplicateIds,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_model: ModelVariant::Default.model_id().to_string(),
            root_label: "Root Node".to_string(),
            child_label_prefix: "Child Node ".to_string(),
            duplicate_ids: DuplicateIds::Reject,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn model(&self) -> ModelVariant {
        ModelVariant::resolve(Some(&self.default_model))
    }
}
