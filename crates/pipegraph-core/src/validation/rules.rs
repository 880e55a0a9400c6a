/// The inspection rules: tolerated irregularities in a parsed payload.
///
/// Each rule is a stateless struct implementing
/// [`crate::validation::ValidationRule`]. All rules collect every finding
/// without early exit. Rules are registered in
/// [`crate::validation::build_registry`].
use std::collections::{HashMap, HashSet};

use crate::snapshot::PipelineSnapshot;
use crate::structures::Edge;

use super::{Diagnostic, Location, RuleId, Severity, ValidationRule};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The set of node id strings declared in the payload.
///
/// Shared by the edge rules so endpoint resolution matches graph
/// construction exactly.
fn node_id_set(snapshot: &PipelineSnapshot) -> HashSet<&str> {
    snapshot.nodes.iter().map(|n| n.id.as_ref()).collect()
}

/// The [`Location`] for an edge in the submitted list.
fn edge_location(index: usize, edge: &Edge) -> Location {
    Location::Edge {
        index,
        edge_id: edge.id.clone(),
    }
}

// ---------------------------------------------------------------------------
// GRF-01: Duplicate node id
// ---------------------------------------------------------------------------

/// GRF-01 — A node id repeats an earlier entry.
///
/// The repeats are collapsed into a single node by identifier equality
/// during graph construction, while `num_nodes` reports the raw list count.
/// Each repeat (beyond the first occurrence) produces one diagnostic — this
/// is exactly where the raw count and the distinct count diverge.
pub struct DuplicateNodeIdRule;

impl ValidationRule for DuplicateNodeIdRule {
    fn id(&self) -> RuleId {
        RuleId::DuplicateNodeId
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, snapshot: &PipelineSnapshot, diags: &mut Vec<Diagnostic>) {
        let mut seen: HashSet<&str> = HashSet::new();
        for node in &snapshot.nodes {
            let id: &str = &node.id;
            if !seen.insert(id) {
                diags.push(Diagnostic::new(
                    RuleId::DuplicateNodeId,
                    Severity::Warning,
                    Location::Node {
                        node_id: id.to_owned(),
                    },
                    format!(
                        "duplicate node id \"{id}\": repeats are treated as a single node, \
                         but num_nodes counts them individually"
                    ),
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GRF-02: Dangling edge
// ---------------------------------------------------------------------------

/// GRF-02 — An edge's source or target references an unknown node id.
///
/// Dangling edges are counted in `num_edges` but excluded from cycle
/// analysis. Both endpoints are checked independently; each unresolvable
/// endpoint produces a separate diagnostic.
pub struct DanglingEdgeRule;

impl ValidationRule for DanglingEdgeRule {
    fn id(&self) -> RuleId {
        RuleId::DanglingEdge
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, snapshot: &PipelineSnapshot, diags: &mut Vec<Diagnostic>) {
        let known = node_id_set(snapshot);
        for (index, edge) in snapshot.edges.iter().enumerate() {
            for (endpoint, id) in [("source", &edge.source), ("target", &edge.target)] {
                if !known.contains(&**id) {
                    diags.push(Diagnostic::new(
                        RuleId::DanglingEdge,
                        Severity::Warning,
                        edge_location(index, edge),
                        format!(
                            "{endpoint} \"{id}\" names no submitted node: \
                             the edge is counted but excluded from cycle analysis"
                        ),
                    ));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GRF-03: Duplicate source/target pair
// ---------------------------------------------------------------------------

/// GRF-03 — A source/target pair repeats an earlier edge.
///
/// Duplicate edges are tolerated: each occurrence contributes in-degree
/// independently and the peeling decrements once per edge, so the result is
/// unaffected. Reported for context only.
pub struct DuplicateEdgePairRule;

impl ValidationRule for DuplicateEdgePairRule {
    fn id(&self) -> RuleId {
        RuleId::DuplicateEdgePair
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, snapshot: &PipelineSnapshot, diags: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<(&str, &str), usize> = HashMap::new();
        for (index, edge) in snapshot.edges.iter().enumerate() {
            let pair = (&*edge.source, &*edge.target);
            if let Some(first) = seen.get(&pair) {
                diags.push(Diagnostic::new(
                    RuleId::DuplicateEdgePair,
                    Severity::Info,
                    edge_location(index, edge),
                    format!(
                        "edge \"{}\" -> \"{}\" repeats edge [{first}]",
                        edge.source, edge.target
                    ),
                ));
            } else {
                seen.insert(pair, index);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GRF-04: Self-loop
// ---------------------------------------------------------------------------

/// GRF-04 — An edge connects a node to itself.
///
/// A self-looped node contributes to its own in-degree and can never be
/// peeled, so the pipeline cannot be a DAG. Only resolved self-loops are
/// reported; a self-loop on an unknown id is already covered by GRF-02.
pub struct SelfLoopRule;

impl ValidationRule for SelfLoopRule {
    fn id(&self) -> RuleId {
        RuleId::SelfLoop
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, snapshot: &PipelineSnapshot, diags: &mut Vec<Diagnostic>) {
        let known = node_id_set(snapshot);
        for (index, edge) in snapshot.edges.iter().enumerate() {
            if edge.source == edge.target && known.contains(&*edge.source) {
                diags.push(Diagnostic::new(
                    RuleId::SelfLoop,
                    Severity::Info,
                    edge_location(index, edge),
                    format!(
                        "self-loop on \"{}\": the node can never be peeled, \
                         so the pipeline is not a DAG",
                        edge.source
                    ),
                ));
            }
        }
    }
}
