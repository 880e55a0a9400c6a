//! Implementation of `pipegraph inspect <file>`.
//!
//! Parses a pipeline payload and prints summary statistics to stdout:
//! - node count (raw and distinct) and node count by editor type
//! - edge count (raw and resolved), dangling edge count
//! - duplicate node id count
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = parse failure.
use std::collections::BTreeMap;

use pipegraph_core::{PipelineSnapshot, build_graph};

use crate::OutputFormat;
use crate::error::CliError;

/// Label used for nodes the editor submitted without a `type` field.
const UNTYPED: &str = "(untyped)";

/// Statistics gathered from a parsed [`PipelineSnapshot`].
pub struct InspectStats {
    /// Total number of submitted nodes (raw list count).
    pub node_count: usize,
    /// Number of distinct node ids after deduplication.
    pub distinct_node_count: usize,
    /// Node count grouped by editor type string.
    pub node_counts: BTreeMap<String, usize>,
    /// Total number of submitted edges (raw list count).
    pub edge_count: usize,
    /// Number of edges whose endpoints both resolved.
    pub resolved_edge_count: usize,
    /// Number of edges excluded because an endpoint named no submitted node.
    pub dangling_edge_count: usize,
    /// Number of node entries that repeated an earlier id.
    pub duplicate_node_count: usize,
}

impl InspectStats {
    /// Computes statistics from a parsed [`PipelineSnapshot`].
    pub fn from_snapshot(snapshot: &PipelineSnapshot) -> Self {
        let mut node_counts: BTreeMap<String, usize> = BTreeMap::new();
        for node in &snapshot.nodes {
            let type_str = node
                .node_type
                .clone()
                .unwrap_or_else(|| UNTYPED.to_owned());
            *node_counts.entry(type_str).or_insert(0) += 1;
        }

        let graph = build_graph(snapshot);

        Self {
            node_count: snapshot.nodes.len(),
            distinct_node_count: graph.node_count(),
            node_counts,
            edge_count: snapshot.edges.len(),
            resolved_edge_count: graph.edge_count(),
            dangling_edge_count: graph.dangling_edges().len(),
            duplicate_node_count: graph.duplicate_nodes().len(),
        }
    }
}

/// Runs the `inspect` command.
///
/// Parses `content` as a pipeline payload, computes statistics, and writes
/// them to stdout in the requested format.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] (exit code 2) if the content cannot be
/// parsed, or [`CliError::IoError`] if stdout cannot be written.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let snapshot: PipelineSnapshot =
        serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
            detail: format!("line {}, column {}: {e}", e.line(), e.column()),
        })?;

    let stats = InspectStats::from_snapshot(&snapshot);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "nodes:          {}", stats.node_count)?;
    writeln!(w, "  distinct:     {}", stats.distinct_node_count)?;
    if stats.duplicate_node_count > 0 {
        writeln!(w, "  duplicate:    {}", stats.duplicate_node_count)?;
    }
    for (type_str, count) in &stats.node_counts {
        writeln!(w, "  {type_str}: {count}")?;
    }
    writeln!(w, "edges:          {}", stats.edge_count)?;
    writeln!(w, "  resolved:     {}", stats.resolved_edge_count)?;
    if stats.dangling_edge_count > 0 {
        writeln!(w, "  dangling:     {}", stats.dangling_edge_count)?;
    }
    Ok(())
}

/// Writes inspect statistics as a single JSON object to stdout.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let node_counts: serde_json::Map<String, serde_json::Value> = stats
        .node_counts
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::Number((*v).into())))
        .collect();

    let obj = serde_json::json!({
        "node_count": stats.node_count,
        "distinct_node_count": stats.distinct_node_count,
        "duplicate_node_count": stats.duplicate_node_count,
        "node_counts": node_counts,
        "edge_count": stats.edge_count,
        "resolved_edge_count": stats.resolved_edge_count,
        "dangling_edge_count": stats.dangling_edge_count,
    });

    let json = serde_json::to_string_pretty(&obj).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
