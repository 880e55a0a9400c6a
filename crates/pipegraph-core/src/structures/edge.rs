use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::newtypes::NodeId;

/// A directed connection between two nodes in a submitted pipeline.
///
/// `source` and `target` are required and name node ids; an edge whose
/// endpoint names no submitted node is *dangling* — tolerated, counted, and
/// excluded from cycle analysis. The edge's own `id` and the editor's handle
/// attributes are optional passthrough. Unknown fields are preserved in
/// [`Edge::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Editor-assigned identifier for this edge, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// [`NodeId`] of the source (tail) node.
    pub source: NodeId,

    /// [`NodeId`] of the target (head) node.
    pub target: NodeId,

    /// Source connection handle within the node, as emitted by the editor.
    #[serde(rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,

    /// Target connection handle within the node, as emitted by the editor.
    #[serde(rename = "targetHandle", skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,

    /// Unknown fields preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
