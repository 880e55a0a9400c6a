/// Top-level pipeline payload representation.
///
/// [`PipelineSnapshot`] is the root type for one analysis request: the node
/// set plus the edge list exactly as submitted by the editor. It is immutable
/// for the duration of one analysis call and is never stored beyond it — the
/// analyzer is stateless across calls.
///
/// # Required fields
///
/// Both `nodes` and `edges` must be present (either may be empty). A payload
/// missing one of them is malformed and is rejected during deserialization,
/// before any analysis runs.
///
/// # Unknown field preservation
///
/// The `extra` catch-all (`#[serde(flatten)]`) absorbs every top-level key
/// that is not explicitly declared, so a payload from a newer editor version
/// round-trips without data loss. Do **not** add
/// `#[serde(deny_unknown_fields)]` here or on any child struct.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::structures::{Edge, Node};

/// One submitted pipeline: the node set plus the edge list.
///
/// Deserialize from JSON with [`serde_json::from_str`] /
/// [`serde_json::from_reader`]; serialize back with [`serde_json::to_string`]
/// etc. The round-trip preserves all unknown fields via
/// [`PipelineSnapshot::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PipelineSnapshot {
    /// Ordered list of all submitted nodes.
    pub nodes: Vec<Node>,

    /// Ordered list of all submitted edges.
    pub edges: Vec<Edge>,

    /// Unknown top-level fields preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
