/// Graph construction from a [`PipelineSnapshot`] using `petgraph`.
///
/// Wraps a `StableDiGraph` with small typed node and edge weights and an
/// `id → NodeIndex` map for O(1) lookup. Construction is the tolerant half of
/// the analysis contract: it never fails.
///
/// # Two-Pass Construction
///
/// [`build_graph`] runs two passes over the snapshot:
/// 1. **Node pass** — inserts nodes and records the `id → NodeIndex`
///    mapping. A repeated id is treated as the same node: the first
///    occurrence wins and the repeat is recorded in `duplicate_nodes`.
/// 2. **Edge pass** — resolves `source`/`target` ids and inserts edges. An
///    edge with an unresolvable endpoint is *dangling*: it is skipped and its
///    index recorded in `dangling_edges`. Self-loops and repeated
///    source/target pairs are inserted as-is.
///
/// # Cycle Detection
///
/// See the [`cycles`] submodule for the Kahn's-algorithm acyclicity check and
/// cycle extraction over the constructed graph.
pub mod cycles;

pub use cycles::{detect_cycles, is_acyclic};

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::snapshot::PipelineSnapshot;

/// Weight stored inline on each petgraph node.
///
/// Kept small so traversal loops stay cache-friendly; full node data is
/// accessed via `data_index` into the originating snapshot's `nodes` vector.
#[derive(Debug, Clone)]
pub struct NodeWeight {
    /// Identifier copied from the submitted node's `id` field.
    pub local_id: String,
    /// Index into `PipelineSnapshot::nodes` for the full deserialized node.
    pub data_index: usize,
}

/// Weight stored inline on each petgraph edge.
#[derive(Debug, Clone)]
pub struct EdgeWeight {
    /// Index into `PipelineSnapshot::edges` for the full deserialized edge.
    pub data_index: usize,
}

/// A directed graph built from one [`PipelineSnapshot`].
///
/// Node identifiers have been deduplicated and dangling edges dropped, so the
/// graph is exactly the structure the cycle analysis runs over. The raw
/// submitted counts live on the snapshot, not here.
///
/// Construct with [`build_graph`].
#[derive(Debug)]
pub struct PipelineGraph {
    graph: StableDiGraph<NodeWeight, EdgeWeight>,
    id_to_index: HashMap<String, NodeIndex>,
    duplicate_nodes: Vec<usize>,
    dangling_edges: Vec<usize>,
}

impl PipelineGraph {
    /// Returns the number of distinct nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of resolved (non-dangling) edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the [`NodeIndex`] for a node id string.
    ///
    /// Returns `None` if no node with that id exists in the graph.
    pub fn node_index(&self, id: &str) -> Option<&NodeIndex> {
        self.id_to_index.get(id)
    }

    /// Returns the [`NodeWeight`] for the given index, or `None` if the index
    /// does not refer to a live node.
    pub fn node_weight(&self, idx: NodeIndex) -> Option<&NodeWeight> {
        self.graph.node_weight(idx)
    }

    /// Returns a reference to the underlying [`StableDiGraph`] for use by
    /// traversal algorithms.
    pub fn graph(&self) -> &StableDiGraph<NodeWeight, EdgeWeight> {
        &self.graph
    }

    /// Indices into the snapshot's node list whose id repeated an earlier
    /// entry. These entries were collapsed into the first occurrence.
    pub fn duplicate_nodes(&self) -> &[usize] {
        &self.duplicate_nodes
    }

    /// Indices into the snapshot's edge list whose source or target named no
    /// submitted node. These edges were excluded from the graph.
    pub fn dangling_edges(&self) -> &[usize] {
        &self.dangling_edges
    }
}

/// Constructs a [`PipelineGraph`] from a parsed [`PipelineSnapshot`].
///
/// Total over any parsed snapshot — duplicates and dangling edges are
/// tolerated and recorded rather than rejected. Construction is O(N + E)
/// where N is node count and E is edge count.
pub fn build_graph(snapshot: &PipelineSnapshot) -> PipelineGraph {
    let node_count = snapshot.nodes.len();
    let edge_count = snapshot.edges.len();

    let mut graph: StableDiGraph<NodeWeight, EdgeWeight> =
        StableDiGraph::with_capacity(node_count, edge_count);
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(node_count);
    let mut duplicate_nodes: Vec<usize> = Vec::new();
    let mut dangling_edges: Vec<usize> = Vec::new();

    for (data_index, node) in snapshot.nodes.iter().enumerate() {
        if id_to_index.contains_key(&*node.id) {
            duplicate_nodes.push(data_index);
            continue;
        }

        let local_id = node.id.to_string();
        let weight = NodeWeight {
            local_id: local_id.clone(),
            data_index,
        };

        let idx = graph.add_node(weight);
        id_to_index.insert(local_id, idx);
    }

    for (data_index, edge) in snapshot.edges.iter().enumerate() {
        let source_idx = id_to_index.get(&*edge.source).copied();
        let target_idx = id_to_index.get(&*edge.target).copied();

        if let (Some(source), Some(target)) = (source_idx, target_idx) {
            graph.add_edge(source, target, EdgeWeight { data_index });
        } else {
            // One endpoint is unknown: the edge cannot participate in a
            // cycle, so it stays out of the graph entirely.
            dangling_edges.push(data_index);
        }
    }

    PipelineGraph {
        graph,
        id_to_index,
        duplicate_nodes,
        dangling_edges,
    }
}
