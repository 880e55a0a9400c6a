//! Implementation of `pipegraph init`.
//!
//! Generates a pipeline payload skeleton and writes it to stdout.
//!
//! Flags:
//! - `--example`: generate a realistic three-node example pipeline (input →
//!   llm → output, positioned as the editor would lay them out) instead of
//!   the minimal empty skeleton.
//!
//! Exit codes: 0 = always succeeds unless stdout write fails.
use pipegraph_core::{Edge, NewtypeError, Node, NodeId, PipelineSnapshot};
use serde_json::{Map, json};

use crate::error::CliError;

/// Runs the `init` command.
///
/// Generates and prints a pipeline payload to stdout. When `example` is
/// `true`, realistic sample content is included; otherwise only the empty
/// required arrays are emitted.
///
/// # Errors
///
/// Returns [`CliError`] if stdout cannot be written.
pub fn run(example: bool) -> Result<(), CliError> {
    let snapshot = if example {
        build_example_snapshot().map_err(|e| CliError::InternalError {
            detail: format!("failed to construct example payload: {e}"),
        })?
    } else {
        PipelineSnapshot::default()
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| CliError::IoError {
        source: "init".to_owned(),
        detail: format!("JSON serialization failed: {e}"),
    })?;

    println!("{json}");
    Ok(())
}

/// Builds a realistic example payload: a three-node linear pipeline shaped
/// like an editor export.
fn build_example_snapshot() -> Result<PipelineSnapshot, NewtypeError> {
    let nodes = vec![
        example_node("customInput-1", "customInput", 100, json!({"inputName": "input_1"}))?,
        example_node("llm-1", "llm", 400, json!({"model": "default"}))?,
        example_node("customOutput-1", "customOutput", 700, json!({"outputName": "output_1"}))?,
    ];
    let edges = vec![
        example_edge("e-1", "customInput-1", "llm-1")?,
        example_edge("e-2", "llm-1", "customOutput-1")?,
    ];

    Ok(PipelineSnapshot {
        nodes,
        edges,
        extra: Map::new(),
    })
}

/// Builds one example node at the given canvas x position.
fn example_node(
    id: &str,
    node_type: &str,
    x: i64,
    data: serde_json::Value,
) -> Result<Node, NewtypeError> {
    Ok(Node {
        id: NodeId::try_from(id)?,
        node_type: Some(node_type.to_owned()),
        position: Some(json!({"x": x, "y": 150})),
        data: Some(data),
        extra: Map::new(),
    })
}

/// Builds one example edge.
fn example_edge(id: &str, source: &str, target: &str) -> Result<Edge, NewtypeError> {
    Ok(Edge {
        id: Some(id.to_owned()),
        source: NodeId::try_from(source)?,
        target: NodeId::try_from(target)?,
        source_handle: None,
        target_handle: None,
        extra: Map::new(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
