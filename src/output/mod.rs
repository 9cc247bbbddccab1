//! Output formatting for audit reports.
//!
//! Three formats are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |
//!
//! Use [`format_report`] to render an [`AuditReport`] in any of the above.
//! Usage listings (the `collect` command) have their own, smaller
//! [`UsageFormat`]: SARIF has no meaningful rendering for a bare inventory.

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::audit::AuditReport;
use crate::usage::ActionUsage;

/// Supported output formats for audit reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text with a summary line.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Supported output formats for usage listings.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum UsageFormat {
    /// Human-readable table.
    Pretty,
    /// Wire-format JSON array, reusable as `validate --usages` input.
    Json,
}

/// Formats an [`AuditReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use actions_allowlist::output::{format_report, OutputFormat};
/// # use actions_allowlist::audit::AuditReport;
/// # fn example(report: &AuditReport) {
/// let json = format_report(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &AuditReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}

/// Formats a usage listing in the requested [`UsageFormat`].
///
/// # Panics
///
/// Panics if the usages cannot be serialized (should not happen with valid data).
pub fn format_usages(usages: &[ActionUsage], format: &UsageFormat) -> String {
    match format {
        UsageFormat::Pretty => pretty::format_usages(usages),
        UsageFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(usages).expect("JSON serialization failed");
            out.push('\n');
            out
        }
    }
}
