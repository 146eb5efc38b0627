//! AttributeMap — the free-form key/value annotations on a node.

use indexmap::IndexMap;

/// Ordered map of attribute names to values. Iteration follows insertion
/// order, so exports and editor listings stay stable.
pub type AttributeMap = IndexMap<String, String>;

/// Marks the distinguished root node.
pub const ROOT_ATTRIBUTE: &str = "root";

/// Estimated attacker cost of a step, a non-negative base-10 integer.
pub const EFFORT_ATTRIBUTE: &str = "effort";

/// How a node combines its children's effort: `min`/`or` or `max`/`and`.
pub const OPERATOR_ATTRIBUTE: &str = "operator";
