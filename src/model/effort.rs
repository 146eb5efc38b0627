//! Min/max effort aggregation for the MinMax model.
//!
//! A leaf shows its own `effort`. A node with children combines the stored
//! `effort` of its direct children with its `operator`; grandchildren are not
//! consulted. Unparseable values count as absent and every failure ends in
//! [`Effort::Unknown`].

use std::fmt;

use super::{AttributeMap, Node, EFFORT_ATTRIBUTE, OPERATOR_ATTRIBUTE};
use crate::storage::{EdgeCollection, NodeCollection};

/// Shown when no effort can be determined.
pub const UNKNOWN_MARKER: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effort {
    Known(u64),
    Unknown,
}

impl Effort {
    /// The node's own `effort` attribute, if it parses.
    pub fn of_attributes(attributes: &AttributeMap) -> Self {
        parse_effort(attributes).map_or(Effort::Unknown, Effort::Known)
    }

    pub fn value(self) -> Option<u64> {
        match self {
            Effort::Known(v) => Some(v),
            Effort::Unknown => None,
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effort::Known(v) => write!(f, "{v}"),
            Effort::Unknown => f.write_str(UNKNOWN_MARKER),
        }
    }
}

/// Child-combining operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `min` / `or`: the cheapest alternative.
    Min,
    /// `max` / `and`: every step is needed, the costliest dominates.
    Max,
}

impl Operator {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "or" => Some(Operator::Min),
            "max" | "and" => Some(Operator::Max),
            _ => None,
        }
    }

    pub fn of_attributes(attributes: &AttributeMap) -> Option<Self> {
        attributes.get(OPERATOR_ATTRIBUTE).and_then(|s| Self::parse(s))
    }

    pub fn fold(self, values: impl IntoIterator<Item = u64>) -> Option<u64> {
        let values = values.into_iter();
        match self {
            Operator::Min => values.min(),
            Operator::Max => values.max(),
        }
    }
}

fn parse_effort(attributes: &AttributeMap) -> Option<u64> {
    attributes.get(EFFORT_ATTRIBUTE)?.trim().parse().ok()
}

/// Effort displayed for `node`, recomputed on every call.
pub fn aggregate(node: &Node, edges: &EdgeCollection, nodes: &NodeCollection) -> Effort {
    let children = node.children(edges, nodes);
    if children.is_empty() {
        return Effort::of_attributes(&node.attributes);
    }

    let Some(op) = Operator::of_attributes(&node.attributes) else {
        return Effort::Unknown;
    };

    op.fold(children.iter().filter_map(|c| parse_effort(&c.attributes)))
        .map_or(Effort::Unknown, Effort::Known)
}
