/// Cycle detection over a [`PipelineGraph`].
///
/// Implements the acyclicity check at the heart of the analyzer using Kahn's
/// algorithm (BFS-based topological peeling). The primary consumer is
/// [`crate::analysis::analyze`], which only needs the boolean; the CLI also
/// calls [`detect_cycles`] to show *which* nodes form a cycle.
///
/// # Algorithm Overview
///
/// Kahn's algorithm computes an in-degree table for every node, seeds a FIFO
/// worklist with all zero-in-degree nodes, then repeatedly removes a node
/// from the worklist and decrements the in-degrees of its successors (once
/// per edge, so parallel edges require multiple decrements). Any node whose
/// in-degree falls to zero is added to the worklist.
///
/// The graph is acyclic exactly when every node gets peeled. A node carrying
/// a self-loop contributes to its own in-degree, can never reach zero, and is
/// therefore never peeled. Dangling edges were dropped during graph
/// construction and play no part here. Disconnected components peel
/// independently; the residue is the union of all cyclic regions.
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::{EdgeWeight, NodeWeight, PipelineGraph};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` when `graph` contains no directed cycle.
///
/// An empty graph is vacuously acyclic. Runs in O(nodes + edges) with no
/// allocation beyond the in-degree table and worklist.
pub fn is_acyclic(graph: &PipelineGraph) -> bool {
    peel_residue(graph).is_empty()
}

/// Detects the individual cycles in `graph`.
///
/// Runs the same peeling pass as [`is_acyclic`], then extracts cycles from
/// the unpeeled residue via DFS.
///
/// # Returns
///
/// - An empty `Vec` if the graph is acyclic.
/// - One or more `Vec<NodeIndex>` walks otherwise — each describing a cycle
///   in traversal order, with the first and last node being the same
///   (closed cycle representation).
pub fn detect_cycles(graph: &PipelineGraph) -> Vec<Vec<NodeIndex>> {
    let residue = peel_residue(graph);
    if residue.is_empty() {
        return Vec::new();
    }
    extract_cycles(graph, &residue)
}

// ---------------------------------------------------------------------------
// Internal: topological peeling
// ---------------------------------------------------------------------------

/// Runs Kahn's peeling pass and returns the set of nodes that were never
/// peeled. An empty residue means every node was processed — the DAG
/// condition from the analysis contract (processed count equals the distinct
/// node count).
fn peel_residue(graph: &PipelineGraph) -> HashSet<NodeIndex> {
    let g = graph.graph();

    // In-degree table, initialized to zero so isolated nodes are included.
    let mut in_degree: HashMap<NodeIndex, usize> = HashMap::with_capacity(g.node_count());
    for node_idx in g.node_indices() {
        in_degree.insert(node_idx, 0);
    }

    // Each edge contributes one unit of in-degree to its target. Parallel
    // edges contribute once each; a self-loop contributes to its own node.
    for edge_ref in g.edge_references() {
        if let Some(deg) = in_degree.get_mut(&edge_ref.target()) {
            *deg += 1;
        }
    }

    // Seed the worklist with zero-in-degree nodes in node-insertion order so
    // peeling is deterministic. Only the processed *count* matters for the
    // DAG check, but determinism keeps cycle extraction stable.
    let mut worklist: VecDeque<NodeIndex> = g
        .node_indices()
        .filter(|idx| in_degree.get(idx) == Some(&0))
        .collect();

    while let Some(node) = worklist.pop_front() {
        for edge_ref in g.edges(node) {
            let target = edge_ref.target();
            if let Some(deg) = in_degree.get_mut(&target) {
                if *deg > 0 {
                    *deg -= 1;
                    if *deg == 0 {
                        worklist.push_back(target);
                    }
                }
            }
        }
    }

    // Every peeled node ended at in-degree zero; the residue is whatever
    // still has incoming weight — the nodes trapped in cycles.
    in_degree
        .iter()
        .filter(|&(_, &deg)| deg > 0)
        .map(|(&idx, _)| idx)
        .collect()
}

// ---------------------------------------------------------------------------
// Internal: individual cycle extraction
// ---------------------------------------------------------------------------

/// Extracts individual cycles from a set of nodes known to be in cycles.
///
/// Performs iterative DFS rooted at each unvisited residue node, restricted
/// to the residue subgraph. When the DFS finds a back-edge to a node on the
/// current path, the path segment from that node to the current position
/// forms a cycle.
///
/// Roots are taken in node-insertion order so the reported cycles are
/// deterministic. Each returned cycle repeats its start node at the end.
fn extract_cycles(graph: &PipelineGraph, residue: &HashSet<NodeIndex>) -> Vec<Vec<NodeIndex>> {
    let g = graph.graph();
    let mut all_cycles: Vec<Vec<NodeIndex>> = Vec::new();
    let mut globally_visited: HashSet<NodeIndex> = HashSet::new();

    for start in g.node_indices().filter(|idx| residue.contains(idx)) {
        if globally_visited.contains(&start) {
            continue;
        }

        // Iterative DFS with an explicit stack. `path` tracks the current DFS
        // path; `on_path` is the corresponding membership set.
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut on_path: HashSet<NodeIndex> = HashSet::new();

        // Stack entry: (node, pre-computed residue successors, next child index).
        let mut stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> = Vec::new();

        let start_children = residue_successors(g, start, residue);
        stack.push((start, start_children, 0));
        path.push(start);
        on_path.insert(start);

        while let Some(frame) = stack.last_mut() {
            let (node, children, child_idx) = frame;
            let node = *node;

            if *child_idx >= children.len() {
                // All children explored: backtrack.
                stack.pop();
                path.pop();
                on_path.remove(&node);
                globally_visited.insert(node);
                continue;
            }

            let child = children[*child_idx];
            *child_idx += 1;

            if on_path.contains(&child) {
                // Back-edge: the path segment from `child` onward is a cycle.
                if let Some(cycle_start_pos) = path.iter().position(|&n| n == child) {
                    let mut cycle: Vec<NodeIndex> = path[cycle_start_pos..].to_vec();
                    cycle.push(child);
                    all_cycles.push(cycle);
                }
                continue;
            }

            if globally_visited.contains(&child) {
                continue;
            }

            let child_children = residue_successors(g, child, residue);
            path.push(child);
            on_path.insert(child);
            stack.push((child, child_children, 0));
        }
    }

    all_cycles
}

/// Returns the successors of `node` that are also in the residue.
///
/// Restricting traversal to the residue keeps the DFS confined to the cyclic
/// regions of the graph.
fn residue_successors(
    g: &StableDiGraph<NodeWeight, EdgeWeight>,
    node: NodeIndex,
    residue: &HashSet<NodeIndex>,
) -> Vec<NodeIndex> {
    g.edges(node)
        .map(|e| e.target())
        .filter(|t| residue.contains(t))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
