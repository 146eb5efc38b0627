//! Standard Export Format — the JSON interchange document.
//!
//! ```text
//! {
//!   "nodes": [ { "id": 0, "label": "Root Node", "attributes": { "root": "true" } } ],
//!   "edges": [ { "from": 0, "to": 1 } ],
//!   "dataModel": "43daa996-8208-499f-be1b-f6c34c84d9df"
//! }
//! ```
//!
//! `nodes`, `edges`, and each node's `id` and `label` are required. A missing
//! `attributes` reads as empty. Attribute values are written as strings; on
//! read, booleans and numbers are also accepted (older editors wrote
//! `"root": true`) and `null` entries are dropped.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{AttributeMap, Edge, Node, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDocument {
    pub nodes: Vec<WireNode>,
    pub edges: Vec<WireEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireNode {
    pub id: NodeId,
    pub label: String,
    #[serde(default, deserialize_with = "lenient_attributes")]
    pub attributes: AttributeMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEdge {
    pub from: NodeId,
    pub to: NodeId,
}

impl From<&Node> for WireNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            label: node.label.clone(),
            attributes: node.attributes.clone(),
        }
    }
}

impl From<&Edge> for WireEdge {
    fn from(edge: &Edge) -> Self {
        Self { from: edge.from, to: edge.to }
    }
}

impl From<WireEdge> for Edge {
    fn from(edge: WireEdge) -> Self {
        Edge::new(edge.from, edge.to)
    }
}

fn lenient_attributes<'de, D>(deserializer: D) -> Result<AttributeMap, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde_json::Value;

    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    let mut attributes = AttributeMap::with_capacity(raw.len());
    for (key, value) in raw {
        let text = match value {
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null => continue,
            Value::Array(_) | Value::Object(_) => {
                return Err(D::Error::custom(format!(
                    "attribute `{key}` must be a string, number or boolean"
                )));
            }
        };
        attributes.insert(key, text);
    }
    Ok(attributes)
}
