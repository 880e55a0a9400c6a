/// Diagnostic formatting: human-readable and JSON (NDJSON) modes.
///
/// This module implements two output strategies for
/// [`pipegraph_core::Diagnostic`] values:
///
/// - **Human mode** (default): one line per diagnostic, color-coded by
///   severity to stderr. Colors are disabled when `--no-color` is set, the
///   `NO_COLOR` environment variable is present (per <https://no-color.org>),
///   or stderr is not a TTY.
/// - **JSON mode**: each diagnostic is serialized as a single-line JSON
///   object (NDJSON) to stderr.
///
/// Both modes support a **quiet** flag (suppress all diagnostics and the
/// summary — nothing the rules report is an error) and a **verbose** flag
/// (always emit the summary line, even when there were no findings).
use std::io::{IsTerminal as _, Write};

use pipegraph_core::{Diagnostic, Severity};

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present (any value).
/// - stderr is not a TTY (e.g. the output is piped to a file).
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatMode / FormatterConfig
// ---------------------------------------------------------------------------

/// Which output strategy to use for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// One human-readable line per diagnostic.
    Human,
    /// One JSON object per diagnostic (NDJSON).
    Json,
}

/// Configuration for the diagnostic formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all diagnostic and summary output.
    pub quiet: bool,
    /// Always emit the summary line.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    ///
    /// `no_color_flag` is the `--no-color` boolean. Color detection also
    /// checks the `NO_COLOR` env var and the stderr TTY state.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Diagnostic writing
// ---------------------------------------------------------------------------

/// Writes a single [`Diagnostic`] to `writer` in the requested mode.
///
/// Human format: `[W] GRF-02  edge [3]: target "z" names no submitted node`,
/// with the severity tag color-coded when `config.colors` is `true`
/// (`[W]` → yellow, `[I]` → cyan).
///
/// JSON format: a single-line object with `severity`, `rule`, `location`,
/// and `message` keys.
///
/// In quiet mode nothing is written.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic<W: Write>(
    writer: &mut W,
    diag: &Diagnostic,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }

    match mode {
        FormatMode::Human => {
            let (tag, color) = match diag.severity {
                Severity::Warning => ("[W]", ANSI_YELLOW),
                Severity::Info => ("[I]", ANSI_CYAN),
            };
            if config.colors {
                writeln!(
                    writer,
                    "{color}{tag}{ANSI_RESET} {}  {}: {}",
                    diag.rule_id, diag.location, diag.message
                )
            } else {
                writeln!(
                    writer,
                    "{tag} {}  {}: {}",
                    diag.rule_id, diag.location, diag.message
                )
            }
        }
        FormatMode::Json => {
            let severity = match diag.severity {
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            let obj = serde_json::json!({
                "severity": severity,
                "rule": diag.rule_id.code(),
                "location": diag.location.to_string(),
                "message": diag.message,
            });
            writeln!(writer, "{obj}")
        }
    }
}

/// Writes the diagnostic summary line to `writer`.
///
/// Emitted when there was at least one finding, or always in verbose mode;
/// never in quiet mode. Human format: `2 warnings, 1 info`. JSON format:
/// `{"summary":{"warnings":2,"infos":1}}`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    warning_count: usize,
    info_count: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    if warning_count == 0 && info_count == 0 && !config.verbose {
        return Ok(());
    }

    match mode {
        FormatMode::Human => {
            let warn_word = if warning_count == 1 { "warning" } else { "warnings" };
            let info_word = if info_count == 1 { "info" } else { "infos" };
            writeln!(writer, "{warning_count} {warn_word}, {info_count} {info_word}")
        }
        FormatMode::Json => {
            let obj = serde_json::json!({
                "summary": {
                    "warnings": warning_count,
                    "infos": info_count,
                }
            });
            writeln!(writer, "{obj}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
