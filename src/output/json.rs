//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing run metadata, a count
//! summary, the denied and deprecated usages, and the full usage inventory.

use crate::audit::{AuditReport, ParseFailure};
use crate::usage::ActionUsage;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    root: &'a str,
    audit_timestamp: &'a str,
    passed: bool,
    summary: Summary,
    denied: &'a [String],
    denied_usages: &'a [ActionUsage],
    deprecated_usages: &'a [ActionUsage],
    parse_failures: &'a [ParseFailure],
    usages: &'a [ActionUsage],
}

#[derive(serde::Serialize)]
struct Summary {
    files_scanned: usize,
    usages: usize,
    approved: usize,
    denied: usize,
    deprecated: usize,
}

/// Formats an [`AuditReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &AuditReport) -> String {
    let output = JsonOutput {
        root: &report.root,
        audit_timestamp: &report.audit_timestamp,
        passed: report.passed,
        summary: Summary {
            files_scanned: report.files_scanned,
            usages: report.usages.len(),
            approved: report.verdict.approved_count,
            denied: report.verdict.denied_count,
            deprecated: report.verdict.deprecated_count,
        },
        denied: &report.verdict.denied,
        denied_usages: &report.verdict.denied_usages,
        deprecated_usages: &report.verdict.deprecated_usages,
        parse_failures: &report.parse_failures,
        usages: &report.usages,
    };

    let mut out = serde_json::to_string_pretty(&output).expect("JSON serialization failed");
    out.push('\n');
    out
}
