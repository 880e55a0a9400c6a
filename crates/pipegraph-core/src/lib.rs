#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod analysis;
pub mod graph;
pub mod newtypes;
pub mod snapshot;
pub mod structures;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use analysis::{PipelineStats, analyze};
pub use graph::{
    EdgeWeight, NodeWeight, PipelineGraph, build_graph, detect_cycles, is_acyclic,
};
pub use newtypes::{NewtypeError, NodeId};
pub use snapshot::PipelineSnapshot;
pub use structures::{Edge, Node};
pub use validation::{
    Diagnostic, Location, RuleId, Severity, ValidationResult, ValidationRule, build_registry,
    inspect_snapshot,
};

/// Returns the current version of the pipegraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
