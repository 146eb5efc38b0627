//! Export round-trip test: collections → TreeDocument → JSON → collections.
//!
//! Checks the Standard Export Format shape, the round-trip law for every
//! model variant, and the import fallbacks for documents written by other
//! editors.

use attack_tree::export::{self, ExportFormat};
use attack_tree::import;
use attack_tree::{
    AttributeMap, Edge, EdgeCollection, Error, ModelVariant, Node, NodeCollection, NodeId,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: a four-node tree with a dangling edge, built as `variant`.
fn seed_tree(variant: ModelVariant) -> (NodeCollection, EdgeCollection) {
    let mut nodes = NodeCollection::new();
    let mut edges = EdgeCollection::new();

    let root = Node::new_as(variant, NodeId(0), "Root Node", AttributeMap::new())
        .with_attribute("root", "true")
        .with_attribute("operator", "min");
    nodes.add(root).unwrap();

    let phish = Node::new_as(variant, NodeId(1), "Phish admin", AttributeMap::new())
        .with_attribute("effort", "3");
    let bribe = Node::new_as(variant, NodeId(2), "Bribe admin", AttributeMap::new())
        .with_attribute("effort", "10")
        .with_attribute("note", "");
    let leaf = Node::new_as(variant, NodeId(3), "Craft email", AttributeMap::new());

    nodes.add_child(NodeId(0), phish, &mut edges).unwrap();
    nodes.add_child(NodeId(0), bribe, &mut edges).unwrap();
    nodes.add_child(NodeId(1), leaf, &mut edges).unwrap();
    edges.add(Edge::new(NodeId(3), NodeId(77)));

    (nodes, edges)
}

// ============================================================================
// 1. Wire shape
// ============================================================================

#[test]
fn test_export_counts() {
    let (nodes, edges) = seed_tree(ModelVariant::Default);
    let doc = export::export_tree(&nodes, &edges, Some(ModelVariant::Default));
    assert_eq!(doc.nodes.len(), 4);
    assert_eq!(doc.edges.len(), 4);
    assert_eq!(doc.data_model.as_deref(), Some("43daa996-8208-499f-be1b-f6c34c84d9df"));
}

#[test]
fn test_export_field_names() {
    let (nodes, edges) = seed_tree(ModelVariant::MinMax);
    let json = export::export_string(&nodes, &edges, Some(ModelVariant::MinMax), ExportFormat::Standard)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["nodes"][1]["label"], "Phish admin");
    assert_eq!(value["nodes"][1]["attributes"]["effort"], "3");
    assert_eq!(value["edges"][2]["from"], 1);
    assert_eq!(value["edges"][2]["to"], 3);
    assert_eq!(value["dataModel"], "7df52155-0330-435b-b022-55586ec188a1");
}

// ============================================================================
// 2. Round-trip law
// ============================================================================

#[test]
fn test_round_trip_every_variant() {
    for variant in ModelVariant::ALL {
        let (nodes, edges) = seed_tree(variant);
        let json = export::to_json_string(&export::export_tree(&nodes, &edges, Some(variant))).unwrap();
        let tree = import::from_json_str(&json).unwrap();

        assert_eq!(tree.model, variant);
        assert_eq!(tree.nodes, nodes, "nodes differ for {variant}");
        assert_eq!(tree.edges, edges, "edges differ for {variant}");
    }
}

#[test]
fn test_round_trip_through_writer() {
    let (nodes, edges) = seed_tree(ModelVariant::Evita);
    let mut buf = Vec::new();
    export::write_json(&export::export_tree(&nodes, &edges, Some(ModelVariant::Evita)), &mut buf)
        .unwrap();
    let tree = import::read_json(buf.as_slice()).unwrap();
    assert_eq!(tree.nodes, nodes);
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-z]{1,8}", ".{0,12}"), 0..4)
}

proptest! {
    #[test]
    fn prop_round_trip(
        specs in proptest::collection::vec(("[A-Za-z ]{0,16}", arb_attributes()), 1..12),
        raw_edges in proptest::collection::vec((0u64..16, 0u64..16), 0..16),
        variant_idx in 0usize..3,
    ) {
        let variant = ModelVariant::ALL[variant_idx];
        let mut nodes = NodeCollection::new();
        for (label, attrs) in specs {
            let id = nodes.generate_unique_id();
            let attributes: AttributeMap = attrs.into_iter().collect();
            nodes.add(Node::new_as(variant, id, label, attributes)).unwrap();
        }
        let edges: EdgeCollection = raw_edges
            .into_iter()
            .map(|(f, t)| Edge::new(NodeId(f), NodeId(t)))
            .collect();

        let json = export::export_string(&nodes, &edges, Some(variant), ExportFormat::Standard).unwrap();
        let tree = import::from_json_str(&json).unwrap();

        prop_assert_eq!(tree.model, variant);
        prop_assert_eq!(tree.nodes, nodes);
        prop_assert_eq!(tree.edges, edges);
    }
}

// ============================================================================
// 3. Import fallbacks
// ============================================================================

#[test]
fn test_unknown_data_model_uses_default() {
    let json = r#"{
        "nodes": [{"id": 0, "label": "Root Node", "attributes": {}}],
        "edges": [],
        "dataModel": "00000000-0000-0000-0000-000000000000"
    }"#;
    let tree = import::from_json_str(json).unwrap();
    assert_eq!(tree.model, ModelVariant::Default);
    assert_eq!(tree.nodes.get(NodeId(0)).unwrap().variant(), ModelVariant::Default);
}

#[test]
fn test_missing_data_model_uses_default() {
    let json = r#"{"nodes": [{"id": 0, "label": "Root Node", "attributes": {"root": true}}], "edges": []}"#;
    let tree = import::from_json_str(json).unwrap();
    assert_eq!(tree.model, ModelVariant::Default);
    assert_eq!(tree.nodes.get(NodeId(0)).unwrap().attribute("root"), Some("true"));
}

#[test]
fn test_duplicate_ids_rejected() {
    let json = r#"{
        "nodes": [
            {"id": 0, "label": "Root Node", "attributes": {}},
            {"id": 1, "label": "A", "attributes": {}},
            {"id": 1, "label": "B", "attributes": {}}
        ],
        "edges": [{"from": 0, "to": 1}]
    }"#;
    match import::from_json_str(json) {
        Err(Error::DuplicateNodeId(id)) => assert_eq!(id, NodeId(1)),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_missing_label_is_error() {
    let json = r#"{"nodes": [{"id": 0, "attributes": {}}], "edges": []}"#;
    assert!(matches!(import::from_json_str(json), Err(Error::Json(_))));
}

#[test]
fn test_imported_minmax_aggregates() {
    let json = r#"{
        "nodes": [
            {"id": 0, "label": "Goal", "attributes": {"operator": "and"}},
            {"id": 1, "label": "A", "attributes": {"effort": "4"}},
            {"id": 2, "label": "B", "attributes": {"effort": 6}}
        ],
        "edges": [{"from": 0, "to": 1}, {"from": 0, "to": 2}],
        "dataModel": "7df52155-0330-435b-b022-55586ec188a1"
    }"#;
    let tree = import::from_json_str(json).unwrap();
    let display = tree.nodes.to_display_form(&tree.edges);
    assert_eq!(display[0].label, "Goal\nEffort: 6");
    assert_eq!(display[1].label, "A\nEffort: 4");
}
