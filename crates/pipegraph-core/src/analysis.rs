/// Structural analysis of a submitted pipeline.
///
/// [`analyze`] is the operation the boundary layer invokes: given one parsed
/// [`PipelineSnapshot`], produce the summary record the editor displays.
/// Pure computation — no I/O, no mutation of caller-owned data, no state
/// across calls — so concurrent invocations need no coordination.
use serde::{Deserialize, Serialize};

use crate::graph::{build_graph, is_acyclic};
use crate::snapshot::PipelineSnapshot;

/// Structural summary statistics for one submitted pipeline.
///
/// Serializes to the exact three-key record the boundary relays back:
/// `{"num_nodes": …, "num_edges": …, "is_dag": …}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Count of entries in the node list as submitted.
    ///
    /// This is the raw count: repeated ids are counted individually here even
    /// though the cycle check collapses them into a single node.
    pub num_nodes: usize,

    /// Count of entries in the edge list as submitted, dangling included.
    pub num_edges: usize,

    /// Whether the resolved graph is a directed acyclic graph.
    pub is_dag: bool,
}

/// Computes structural statistics for a submitted pipeline.
///
/// Counts are taken from the lists as given. The acyclicity check runs over
/// the constructed graph, where duplicate ids have been collapsed and
/// dangling edges dropped — a dangling edge is counted in `num_edges` but
/// cannot contribute to a cycle since one endpoint is unknown.
///
/// Total over any parsed snapshot: there is no failure path. Runs in
/// O(nodes + edges).
pub fn analyze(snapshot: &PipelineSnapshot) -> PipelineStats {
    let graph = build_graph(snapshot);

    PipelineStats {
        num_nodes: snapshot.nodes.len(),
        num_edges: snapshot.edges.len(),
        is_dag: is_acyclic(&graph),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::{edge, node, snapshot};

    /// Zero nodes, zero edges: vacuously acyclic.
    #[test]
    fn test_empty_snapshot() {
        let stats = analyze(&snapshot(vec![], vec![]));
        assert_eq!(
            stats,
            PipelineStats {
                num_nodes: 0,
                num_edges: 0,
                is_dag: true,
            }
        );
    }

    /// Any node set with zero edges is a DAG.
    #[test]
    fn test_edgeless_nodes_are_dag() {
        let stats = analyze(&snapshot(vec![node("a"), node("b"), node("c")], vec![]));
        assert_eq!(stats.num_nodes, 3);
        assert_eq!(stats.num_edges, 0);
        assert!(stats.is_dag);
    }

    /// A chain a → b → c is a DAG.
    #[test]
    fn test_chain() {
        let stats = analyze(&snapshot(
            vec![node("a"), node("b"), node("c")],
            vec![edge("a", "b"), edge("b", "c")],
        ));
        assert_eq!(stats.num_nodes, 3);
        assert_eq!(stats.num_edges, 2);
        assert!(stats.is_dag);
    }

    /// A cycle a → b → c → a is not a DAG.
    #[test]
    fn test_three_node_cycle() {
        let stats = analyze(&snapshot(
            vec![node("a"), node("b"), node("c")],
            vec![edge("a", "b"), edge("b", "c"), edge("c", "a")],
        ));
        assert_eq!(stats.num_nodes, 3);
        assert_eq!(stats.num_edges, 3);
        assert!(!stats.is_dag);
    }

    /// A single self-looped node is not a DAG.
    #[test]
    fn test_self_loop() {
        let stats = analyze(&snapshot(vec![node("a")], vec![edge("a", "a")]));
        assert_eq!(stats.num_nodes, 1);
        assert_eq!(stats.num_edges, 1);
        assert!(!stats.is_dag);
    }

    /// A dangling edge is counted but does not flip the DAG result.
    #[test]
    fn test_dangling_edge_counted_not_analyzed() {
        let stats = analyze(&snapshot(
            vec![node("a"), node("b")],
            vec![edge("a", "b"), edge("a", "zzz")],
        ));
        assert_eq!(stats.num_nodes, 2);
        assert_eq!(stats.num_edges, 2, "dangling edge still counts");
        assert!(stats.is_dag, "dangling edge cannot contribute a cycle");
    }

    /// Duplicate node ids are counted raw while the cycle check deduplicates.
    #[test]
    fn test_duplicate_node_ids_raw_count() {
        let stats = analyze(&snapshot(
            vec![node("a"), node("b"), node("a")],
            vec![edge("a", "b")],
        ));
        assert_eq!(stats.num_nodes, 3, "raw count includes the repeat");
        assert!(stats.is_dag);
    }

    /// Calling the analyzer twice with the same input yields identical output.
    #[test]
    fn test_idempotence() {
        let s = snapshot(
            vec![node("a"), node("b"), node("c")],
            vec![edge("a", "b"), edge("b", "c"), edge("c", "a")],
        );
        assert_eq!(analyze(&s), analyze(&s));
    }

    /// Permuting node and edge order does not change the result.
    #[test]
    fn test_order_independence() {
        let forward = snapshot(
            vec![node("a"), node("b"), node("c")],
            vec![edge("a", "b"), edge("b", "c"), edge("c", "a")],
        );
        let reversed = snapshot(
            vec![node("c"), node("b"), node("a")],
            vec![edge("c", "a"), edge("b", "c"), edge("a", "b")],
        );
        assert_eq!(analyze(&forward), analyze(&reversed));
    }

    /// The serialized record carries exactly the three wire keys.
    #[test]
    fn test_stats_wire_format() {
        let stats = analyze(&snapshot(vec![node("a")], vec![]));
        let json = serde_json::to_value(stats).expect("serialize");
        let obj = json.as_object().expect("object");
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.get("num_nodes").and_then(serde_json::Value::as_u64), Some(1));
        assert_eq!(obj.get("num_edges").and_then(serde_json::Value::as_u64), Some(0));
        assert_eq!(obj.get("is_dag").and_then(serde_json::Value::as_bool), Some(true));
    }

    /// The wire record deserializes back (the boundary's response contract).
    #[test]
    fn test_stats_round_trip() {
        let json = r#"{"num_nodes":3,"num_edges":2,"is_dag":true}"#;
        let stats: PipelineStats = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            stats,
            PipelineStats {
                num_nodes: 3,
                num_edges: 2,
                is_dag: true,
            }
        );
    }
}
