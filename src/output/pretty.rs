//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes, showing parse
//! failures, denied and deprecated usages with their source workflows, and a
//! one-line summary.

use crate::audit::AuditReport;
use crate::usage::ActionUsage;
use colored::Colorize;

/// Formats an [`AuditReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — audited root and timestamp.
/// 2. **Parse failures** — workflow documents that could not be read.
/// 3. **Denied** — usages with no allowlist coverage.
/// 4. **Deprecated** — approved usages on deprecated version pins.
/// 5. **Summary** — overall result and counts.
pub fn format(report: &AuditReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Workflow Audit: {}  ", report.root)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n", report.audit_timestamp));
    out.push_str(&format!(
        "  Workflows: {} files, {} action usages\n\n",
        report.files_scanned,
        report.usages.len()
    ));

    if !report.parse_failures.is_empty() {
        out.push_str(&format!(
            "{} ({})\n",
            "Parse Failures".bold().underline(),
            report.parse_failures.len()
        ));
        for failure in &report.parse_failures {
            out.push_str(&format!(
                "  [{}] {:<28} {}\n",
                "SKIP".dimmed(),
                failure.file,
                failure.reason.dimmed(),
            ));
        }
        out.push('\n');
    }

    if !report.verdict.denied_usages.is_empty() {
        out.push_str(&format!("{}\n", "Denied".bold().underline()));
        for usage in &report.verdict.denied_usages {
            out.push_str(&format!(
                "  [{}] {:<45} {}\n",
                "ERROR".red().bold(),
                format!("{}@{}", usage.action, usage.version),
                usage.workflow.dimmed(),
            ));
        }
        out.push('\n');
    }

    if !report.verdict.deprecated_usages.is_empty() {
        out.push_str(&format!("{}\n", "Deprecated".bold().underline()));
        for usage in &report.verdict.deprecated_usages {
            out.push_str(&format!(
                "  [{}] {:<45} {}\n",
                " WARN".yellow().bold(),
                format!("{}@{}", usage.action, usage.version),
                usage.workflow.dimmed(),
            ));
        }
        out.push('\n');
    }

    // Summary
    let status_str = if report.passed {
        "PASSED".green().bold().to_string()
    } else {
        "FAILED".red().bold().to_string()
    };

    out.push_str(&format!(
        "Result: {status_str}  |  {} approved, {} denied, {} deprecated, {} parse failures\n",
        report.verdict.approved_count,
        report.verdict.denied_count,
        report.verdict.deprecated_count,
        report.parse_failures.len(),
    ));

    out
}

/// Renders a usage inventory as a plain table.
pub fn format_usages(usages: &[ActionUsage]) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "Action Usages".bold().underline()));
    if usages.is_empty() {
        out.push_str("  (none found)\n");
        return out;
    }

    for usage in usages {
        out.push_str(&format!(
            "  {:<40} {:<14} {}\n",
            usage.action,
            usage.version,
            usage.workflow.dimmed(),
        ));
    }

    out.push_str(&format!("\n  Total: {} usages\n", usages.len()));
    out
}
