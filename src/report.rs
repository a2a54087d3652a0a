// Text and JSON rendering of a comparison

use std::io::{self, Write};
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::routes::ParseResult;
use crate::routes::diff::{DiffResult, VrfDiff};

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Added and removed routes only
    Quiet,
    #[default]
    Normal,
    /// Normal output plus parser warnings
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub verbosity: Verbosity,
    pub show_unchanged: bool,
    pub show_drift: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            verbosity: Verbosity::Normal,
            show_unchanged: true,
            show_drift: true,
        }
    }
}

/// Write the human-readable report.
///
/// `captures` are the parsed inputs with their source paths; they are only
/// consulted for parser warnings in debug mode.
pub fn render_text<W: Write>(
    result: &DiffResult,
    captures: &[(&Path, &ParseResult)],
    options: ReportOptions,
    out: &mut W,
) -> io::Result<()> {
    let quiet = options.verbosity == Verbosity::Quiet;

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "ROUTE COMPARISON REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for vrf in result.vrfs() {
        if quiet && !vrf.has_changes() {
            continue;
        }
        render_vrf(vrf, options, out)?;
    }

    if options.verbosity == Verbosity::Debug {
        for (path, parsed) in captures {
            if parsed.warnings().is_empty() {
                continue;
            }
            writeln!(out)?;
            writeln!(
                out,
                "PARSER WARNINGS {} ({}):",
                path.display(),
                parsed.warnings().len()
            )?;
            for warning in parsed.warnings() {
                writeln!(
                    out,
                    "  line {}: {}: {}",
                    warning.line, warning.reason, warning.text
                )?;
            }
        }
    }

    let summary = result.summary();
    writeln!(out)?;
    writeln!(
        out,
        "SUMMARY: {} VRF(s), {} pre-change route(s), {} post-change route(s): {} added, {} removed, {} unchanged, {} drifted",
        summary.vrfs,
        summary.pre_routes,
        summary.post_routes,
        summary.added,
        summary.removed,
        summary.unchanged,
        summary.drifted
    )
}

fn render_vrf<W: Write>(vrf: &VrfDiff, options: ReportOptions, out: &mut W) -> io::Result<()> {
    let quiet = options.verbosity == Verbosity::Quiet;

    writeln!(out)?;
    writeln!(out, "VRF {}", vrf.vrf)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    if !vrf.added.is_empty() {
        writeln!(out, "  ADDED ({}):", vrf.added.len())?;
        for route in &vrf.added {
            writeln!(out, "    + {}", route)?;
        }
    }
    if !vrf.removed.is_empty() {
        writeln!(out, "  REMOVED ({}):", vrf.removed.len())?;
        for route in &vrf.removed {
            writeln!(out, "    - {}", route)?;
        }
    }
    if !quiet && options.show_unchanged && !vrf.unchanged.is_empty() {
        writeln!(out, "  UNCHANGED ({}):", vrf.unchanged.len())?;
        for route in &vrf.unchanged {
            writeln!(out, "      {}", route)?;
        }
    }
    if !quiet && options.show_drift && !vrf.drifted.is_empty() {
        writeln!(out, "  DRIFTED ({}):", vrf.drifted.len())?;
        for drift in &vrf.drifted {
            writeln!(
                out,
                "    ~ {} via {}: {}",
                drift.post.prefix,
                if drift.post.next_hop.is_empty() { "-" } else { drift.post.next_hop.as_str() },
                drift.changes.join("; ")
            )?;
        }
    }
    if !vrf.has_changes() {
        writeln!(out, "  no routes added or removed")?;
    }

    Ok(())
}

/// Pretty JSON document for the comparison, newline terminated.
pub fn to_json_string(result: &DiffResult) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

pub fn write_json(result: &DiffResult, path: &Path) -> AppResult<()> {
    let json = to_json_string(result)?;
    std::fs::write(path, json).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Detailed report saved to: {}", path.display());
    Ok(())
}
