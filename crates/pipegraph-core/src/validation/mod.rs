/// Diagnostic types and rule dispatch for boundary inspection.
///
/// Malformed payloads (missing `nodes`/`edges`/`id`/`source`/`target`, wrong
/// field types) never get this far — they are rejected during
/// deserialization. The rules here report the *tolerated* irregularities in a
/// payload that parsed: conditions the analyzer silently absorbs but a caller
/// probably wants to hear about. None of them is fatal; the analyzer is total.
///
/// This module defines [`Diagnostic`], [`Severity`], [`RuleId`], [`Location`],
/// and [`ValidationResult`], plus the [`ValidationRule`] trait,
/// [`build_registry`], and the [`inspect_snapshot`] dispatch function.
pub mod rules;

use std::fmt;

use crate::snapshot::PipelineSnapshot;


/// The severity of an inspection finding.
///
/// There is no `Error` tier: structural errors are parse failures handled at
/// the boundary, and everything the rules report is tolerated by the
/// analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The payload is irregular in a way that likely changes what the caller
    /// expects (collapsed duplicates, excluded edges).
    Warning,
    /// An observation about the payload's structure, reported for context.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("Warning"),
            Self::Info => f.write_str("Info"),
        }
    }
}

/// Machine-readable identifier for an inspection rule.
///
/// [`RuleId::code`] returns the canonical hyphenated form used in serialized
/// output (e.g. `"GRF-02"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RuleId {
    /// GRF-01: A node id repeats an earlier entry; the repeats were collapsed
    /// into a single node while `num_nodes` counts them individually.
    DuplicateNodeId,
    /// GRF-02: An edge references an unknown node id; it is counted in
    /// `num_edges` but excluded from cycle analysis.
    DanglingEdge,
    /// GRF-03: A source/target pair repeats an earlier edge; each occurrence
    /// contributes in-degree independently.
    DuplicateEdgePair,
    /// GRF-04: An edge connects a node to itself; that node can never be
    /// peeled, so the pipeline cannot be a DAG.
    SelfLoop,
}

impl RuleId {
    /// Returns the canonical hyphenated rule code string.
    pub fn code(self) -> &'static str {
        match self {
            Self::DuplicateNodeId => "GRF-01",
            Self::DanglingEdge => "GRF-02",
            Self::DuplicateEdgePair => "GRF-03",
            Self::SelfLoop => "GRF-04",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The location within the payload where a finding was detected.
///
/// Nodes are addressed by their submitted id. Edges may lack an id, so they
/// are addressed by their position in the submitted edge list with the
/// editor-assigned id attached when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A node, addressed by its submitted id.
    Node {
        /// The submitted `id` of the node.
        node_id: String,
    },
    /// An edge, addressed by its position in the submitted edge list.
    Edge {
        /// Zero-based index into the submitted edge list.
        index: usize,
        /// The editor-assigned edge id, when present.
        edge_id: Option<String>,
    },
    /// A payload-level finding not attributable to a single element.
    Global,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node { node_id } => write!(f, "node \"{node_id}\""),
            Self::Edge {
                index: _,
                edge_id: Some(edge_id),
            } => write!(f, "edge \"{edge_id}\""),
            Self::Edge {
                index,
                edge_id: None,
            } => write!(f, "edge [{index}]"),
            Self::Global => f.write_str("(global)"),
        }
    }
}

/// A single finding produced by the boundary inspection pass.
///
/// Diagnostics are collected across all rules and returned in a
/// [`ValidationResult`]. The pass never fails fast — all diagnostics for a
/// given payload are collected before results are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// The severity of this finding.
    pub severity: Severity,
    /// Where in the payload the condition was detected.
    pub location: Location,
    /// A human-readable explanation of the finding.
    pub message: String,
}

impl Diagnostic {
    /// Constructs a new [`Diagnostic`].
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            severity,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_char = match self.severity {
            Severity::Warning => 'W',
            Severity::Info => 'I',
        };
        write!(
            f,
            "[{level_char}] {} {}: {}",
            self.rule_id, self.location, self.message
        )
    }
}

/// The collected output of an inspection pass on a parsed payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// All diagnostics produced during the pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Creates an empty [`ValidationResult`] with no diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`ValidationResult`] from a pre-built list of diagnostics.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns an iterator over all diagnostics with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns an iterator over all diagnostics with [`Severity::Info`].
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
    }

    /// Returns an iterator over all diagnostics produced by the given rule.
    pub fn by_rule(&self, rule: RuleId) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule_id == rule)
    }

    /// Returns the total number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics (alias of [`is_clean`][Self::is_clean]).
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A single, stateless inspection rule over a [`PipelineSnapshot`].
///
/// Rules push zero or more [`Diagnostic`] values into the provided `diags`
/// vector; a rule that finds nothing pushes nothing. Rules hold no mutable
/// state between invocations and receive the payload only by shared
/// reference. The dispatch loop in [`inspect_snapshot`] calls each rule's
/// [`check`][ValidationRule::check] exactly once per pass.
///
/// The trait is object-safe; the registry stores rules as
/// `Vec<Box<dyn ValidationRule>>`.
pub trait ValidationRule {
    /// The unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// The severity of diagnostics produced by this rule.
    fn severity(&self) -> Severity;

    /// Inspect `snapshot` and push any findings into `diags`.
    fn check(&self, snapshot: &PipelineSnapshot, diags: &mut Vec<Diagnostic>);
}

/// Builds the full registry of inspection rules in report order.
pub fn build_registry() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(rules::DuplicateNodeIdRule),
        Box::new(rules::DanglingEdgeRule),
        Box::new(rules::DuplicateEdgePairRule),
        Box::new(rules::SelfLoopRule),
    ]
}

/// Runs every registered rule over `snapshot` and collects all findings.
///
/// Never fails fast: every rule runs to completion and every diagnostic is
/// collected before the result is returned.
pub fn inspect_snapshot(snapshot: &PipelineSnapshot) -> ValidationResult {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for rule in build_registry() {
        rule.check(snapshot, &mut diagnostics);
    }
    ValidationResult::from_diagnostics(diagnostics)
}
