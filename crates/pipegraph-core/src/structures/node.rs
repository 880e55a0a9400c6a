use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::newtypes::NodeId;

/// A single node in a submitted pipeline.
///
/// Only `id` is required. The editor attaches presentation attributes —
/// a node kind, a canvas position, a free-form data bag — which are
/// irrelevant to the structural analysis and pass through untouched.
/// Unknown fields are preserved in [`Node::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node within the submission.
    pub id: NodeId,

    /// Editor node kind (e.g. `"customInput"`, `"llm"`, `"customOutput"`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Canvas position as emitted by the editor (`{x, y}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Value>,

    /// Free-form node payload (field values, labels, template text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Unknown fields preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
