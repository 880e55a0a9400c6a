#![allow(clippy::expect_used)]

use super::*;
use crate::newtypes::NodeId;

fn node_id(s: &str) -> NodeId {
    NodeId::try_from(s).expect("valid NodeId")
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A bare node with nothing but an id parses.
#[test]
fn node_minimal_parse() {
    let n: Node = serde_json::from_str(r#"{"id":"n1"}"#).expect("deserialize");
    assert_eq!(n.id, node_id("n1"));
    assert!(n.node_type.is_none());
    assert!(n.position.is_none());
    assert!(n.data.is_none());
    assert!(n.extra.is_empty());
}

/// A node shaped like an editor export parses with all declared fields.
#[test]
fn node_editor_shaped_parse() {
    let json = r#"{
        "id": "customInput-1",
        "type": "customInput",
        "position": {"x": 100, "y": 250.5},
        "data": {"inputName": "input_1", "inputType": "Text"}
    }"#;
    let n: Node = serde_json::from_str(json).expect("deserialize");
    assert_eq!(n.id, node_id("customInput-1"));
    assert_eq!(n.node_type.as_deref(), Some("customInput"));
    assert_eq!(
        n.position.as_ref().and_then(|p| p.get("x")).and_then(serde_json::Value::as_i64),
        Some(100)
    );
    assert_eq!(
        n.data.as_ref().and_then(|d| d.get("inputName")).and_then(|v| v.as_str()),
        Some("input_1")
    );
}

/// A node with a missing `id` fails to parse.
#[test]
fn node_missing_id_fails() {
    let result: Result<Node, _> = serde_json::from_str(r#"{"type":"llm"}"#);
    assert!(result.is_err(), "missing id should fail");
}

/// An integer node id is accepted and normalized to its string form.
#[test]
fn node_integer_id_parse() {
    let n: Node = serde_json::from_str(r#"{"id": 7}"#).expect("deserialize");
    assert_eq!(&*n.id, "7");
}

/// Unknown node fields survive a deserialize → serialize cycle.
#[test]
fn node_unknown_fields_preserved() {
    let json = r#"{"id":"n1","width":200,"selected":true,"dragging":false}"#;
    let n: Node = serde_json::from_str(json).expect("deserialize");
    assert_eq!(n.extra.len(), 3);
    assert_eq!(n.extra.get("width").and_then(serde_json::Value::as_i64), Some(200));

    let serialized = serde_json::to_string(&n).expect("serialize");
    let back: Node = serde_json::from_str(&serialized).expect("re-deserialize");
    assert_eq!(n, back);
}

/// Optional fields absent from a minimal node do not appear in the JSON.
#[test]
fn node_none_optionals_not_serialized() {
    let n: Node = serde_json::from_str(r#"{"id":"n1"}"#).expect("deserialize");
    let json = serde_json::to_string(&n).expect("serialize");
    for absent_key in &["type", "position", "data"] {
        assert!(
            !json.contains(absent_key),
            "`{absent_key}` must not appear when None"
        );
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A bare edge with just endpoints parses.
#[test]
fn edge_minimal_parse() {
    let e: Edge = serde_json::from_str(r#"{"source":"a","target":"b"}"#).expect("deserialize");
    assert_eq!(e.source, node_id("a"));
    assert_eq!(e.target, node_id("b"));
    assert!(e.id.is_none());
    assert!(e.extra.is_empty());
}

/// An edge shaped like an editor export parses with handles.
#[test]
fn edge_editor_shaped_parse() {
    let json = r#"{
        "id": "reactflow__edge-customInput-1-llm-1",
        "source": "customInput-1",
        "target": "llm-1",
        "sourceHandle": "customInput-1-value",
        "targetHandle": "llm-1-prompt"
    }"#;
    let e: Edge = serde_json::from_str(json).expect("deserialize");
    assert_eq!(e.id.as_deref(), Some("reactflow__edge-customInput-1-llm-1"));
    assert_eq!(e.source_handle.as_deref(), Some("customInput-1-value"));
    assert_eq!(e.target_handle.as_deref(), Some("llm-1-prompt"));
}

/// Null handles (the editor emits them for handle-less connections) parse as None.
#[test]
fn edge_null_handles_parse_as_none() {
    let json = r#"{"source":"a","target":"b","sourceHandle":null,"targetHandle":null}"#;
    let e: Edge = serde_json::from_str(json).expect("deserialize");
    assert!(e.source_handle.is_none());
    assert!(e.target_handle.is_none());
}

/// An edge with a missing `source` fails to parse.
#[test]
fn edge_missing_source_fails() {
    let result: Result<Edge, _> = serde_json::from_str(r#"{"target":"b"}"#);
    assert!(result.is_err(), "missing source should fail");
}

/// An edge with a missing `target` fails to parse.
#[test]
fn edge_missing_target_fails() {
    let result: Result<Edge, _> = serde_json::from_str(r#"{"source":"a"}"#);
    assert!(result.is_err(), "missing target should fail");
}

/// A self-loop is structurally valid at the parse layer.
#[test]
fn edge_self_loop_parses() {
    let e: Edge = serde_json::from_str(r#"{"source":"a","target":"a"}"#).expect("deserialize");
    assert_eq!(e.source, e.target);
}

/// Unknown edge fields survive a deserialize → serialize cycle.
#[test]
fn edge_unknown_fields_preserved() {
    let json = r##"{"source":"a","target":"b","animated":true,"style":{"stroke":"#888"}}"##;
    let e: Edge = serde_json::from_str(json).expect("deserialize");
    assert_eq!(e.extra.len(), 2);

    let serialized = serde_json::to_string(&e).expect("serialize");
    let back: Edge = serde_json::from_str(&serialized).expect("re-deserialize");
    assert_eq!(e, back);
}
