//! Shared test helper functions for constructing test fixtures.
//!
//! Compiled only in test builds; provides common constructors for [`Node`],
//! [`Edge`], and [`PipelineSnapshot`] used across unit test modules.
//!
//! Integration tests in `crates/pipegraph-core/tests/` define their own local
//! helpers because they link against the non-test library build where this
//! module is not available.
#![allow(clippy::expect_used)]

use serde_json::Map;

use crate::newtypes::NodeId;
use crate::snapshot::PipelineSnapshot;
use crate::structures::{Edge, Node};

/// Creates a [`NodeId`] from a string slice, panicking on invalid input.
pub fn node_id(s: &str) -> NodeId {
    NodeId::try_from(s).expect("valid NodeId")
}

/// Builds a bare [`Node`] with the given id and no editor attributes.
pub fn node(id: &str) -> Node {
    Node {
        id: node_id(id),
        node_type: None,
        position: None,
        data: None,
        extra: Map::new(),
    }
}

/// Builds a [`Node`] with the given id and editor node kind.
pub fn typed_node(id: &str, node_type: &str) -> Node {
    Node {
        node_type: Some(node_type.to_owned()),
        ..node(id)
    }
}

/// Builds an anonymous [`Edge`] between the given node ids.
pub fn edge(source: &str, target: &str) -> Edge {
    Edge {
        id: None,
        source: node_id(source),
        target: node_id(target),
        source_handle: None,
        target_handle: None,
        extra: Map::new(),
    }
}

/// Builds an [`Edge`] carrying an editor-assigned id.
pub fn edge_with_id(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: Some(id.to_owned()),
        ..edge(source, target)
    }
}

/// Builds a [`PipelineSnapshot`] with the given nodes and edges.
pub fn snapshot(nodes: Vec<Node>, edges: Vec<Edge>) -> PipelineSnapshot {
    PipelineSnapshot {
        nodes,
        edges,
        extra: Map::new(),
    }
}
