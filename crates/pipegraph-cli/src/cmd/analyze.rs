//! Implementation of `pipegraph analyze <file>`.
//!
//! Parses a pipeline payload, emits boundary diagnostics to stderr, runs the
//! structural analysis, and writes the result record to stdout:
//! - `--format human` (default): aligned key/value lines; when the graph is
//!   cyclic the individual cycles are listed.
//! - `--format json`: the exact three-key wire object
//!   `{"num_nodes": …, "num_edges": …, "is_dag": …}`.
//!
//! Flags:
//! - `--fail-on-cycle`: exit with code 1 when `is_dag` is `false`.
//!
//! Exit codes: 0 = success, 1 = `--fail-on-cycle` on a cyclic graph,
//! 2 = parse failure.
use pipegraph_core::{
    PipelineSnapshot, PipelineStats, analyze, build_graph, detect_cycles, inspect_snapshot,
};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_diagnostic, write_summary};

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `analyze` command.
///
/// Parses `content` as a pipeline payload, emits diagnostics to stderr, and
/// writes the statistics record to stdout in the requested format.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — content is not a valid pipeline payload.
/// - [`CliError::CycleFound`] — `fail_on_cycle` is set and the graph is cyclic.
/// - [`CliError::IoError`] — stdout or stderr could not be written.
pub fn run(
    content: &str,
    fail_on_cycle: bool,
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let snapshot: PipelineSnapshot =
        serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
            detail: format!("line {}, column {}: {e}", e.line(), e.column()),
        })?;

    // --- Boundary diagnostics to stderr ---
    let result = inspect_snapshot(&snapshot);
    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(no_color, quiet, verbose);

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    for diag in &result.diagnostics {
        write_diagnostic(&mut err_out, diag, mode, &fmt_config).map_err(|e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        })?;
    }
    write_summary(
        &mut err_out,
        result.warnings().count(),
        result.infos().count(),
        mode,
        &fmt_config,
    )
    .map_err(|e| CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    })?;

    // --- Analysis to stdout ---
    let stats = analyze(&snapshot);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats, &snapshot),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    if fail_on_cycle && !stats.is_dag {
        return Err(CliError::CycleFound);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Writes the statistics in human-readable aligned format, listing the
/// individual cycles when the graph is not a DAG.
fn print_human<W: std::io::Write>(
    w: &mut W,
    stats: &PipelineStats,
    snapshot: &PipelineSnapshot,
) -> std::io::Result<()> {
    writeln!(w, "num_nodes:  {}", stats.num_nodes)?;
    writeln!(w, "num_edges:  {}", stats.num_edges)?;
    writeln!(w, "is_dag:     {}", stats.is_dag)?;

    if !stats.is_dag {
        let graph = build_graph(snapshot);
        for cycle in detect_cycles(&graph) {
            let walk: Vec<&str> = cycle
                .iter()
                .filter_map(|&idx| graph.node_weight(idx).map(|wt| wt.local_id.as_str()))
                .collect();
            writeln!(w, "cycle:      {}", walk.join(" -> "))?;
        }
    }
    Ok(())
}

/// Writes the statistics as the exact three-key wire object.
fn print_json<W: std::io::Write>(w: &mut W, stats: &PipelineStats) -> std::io::Result<()> {
    let json = serde_json::to_string(stats).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
