//! Audit orchestration.
//!
//! [`run_audit`] is the main entry-point: it discovers workflow documents
//! under a repository root, extracts action usages from each (in parallel
//! via [rayon]), loads the allowlist, validates, and assembles a final
//! [`AuditReport`]. Per-document parse failures are logged and recorded but
//! never abort the run; an allowlist load failure is fatal.

use crate::allowlist;
use crate::events::EventSink;
use crate::usage::{self, ActionUsage};
use crate::validate::{self, Verdict};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// A workflow document that could not be read or parsed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ParseFailure {
    pub file: String,
    pub reason: String,
}

/// Result of scanning a repository root for action usages.
#[derive(Debug)]
pub struct Collection {
    /// Number of workflow documents discovered (including unparseable ones).
    pub files_scanned: usize,
    pub usages: Vec<ActionUsage>,
    pub parse_failures: Vec<ParseFailure>,
}

/// Discovers workflow documents under `root` and extracts every action usage.
///
/// Documents are independent, so they are scanned in parallel. The
/// order-preserving collect keeps the concatenated usage list in discovery
/// order, with job-then-step order intact within each document. A document
/// that fails to read or parse is recorded in
/// [`parse_failures`](Collection::parse_failures) and the scan continues
/// with the rest. Zero documents found yields an empty collection, not an
/// error.
pub fn collect_usages(root: &Path, sink: &dyn EventSink) -> Collection {
    sink.info("Loading Actions YAML files");

    let files = usage::discover_workflows(root);
    if files.is_empty() {
        sink.info("Could not find workflow files in the specified directory");
        return Collection {
            files_scanned: 0,
            usages: vec![],
            parse_failures: vec![],
        };
    }

    sink.info(&format!(
        "Found [{}] files in the workflows directory",
        files.len()
    ));

    let scans: Vec<(String, Result<Vec<ActionUsage>, String>)> = files
        .par_iter()
        .map(|f| (usage::file_label(f), usage::scan_document(f, sink)))
        .collect();

    let mut usages = Vec::new();
    let mut parse_failures = Vec::new();
    for (file, result) in scans {
        match result {
            Ok(found) => usages.extend(found),
            Err(reason) => {
                sink.warning("Workflow Parse Failure", &reason);
                parse_failures.push(ParseFailure { file, reason });
            }
        }
    }

    Collection {
        files_scanned: files.len(),
        usages,
        parse_failures,
    }
}

/// Final report for one audit run.
#[derive(Debug, serde::Serialize)]
pub struct AuditReport {
    /// Repository root (or usage-list label) the run covered.
    pub root: String,
    pub audit_timestamp: String,
    pub files_scanned: usize,
    pub parse_failures: Vec<ParseFailure>,
    /// Every usage that was extracted and classified.
    pub usages: Vec<ActionUsage>,
    pub verdict: Verdict,
    /// `true` exactly when no usage was denied. Deprecations and parse
    /// failures do not affect this.
    pub passed: bool,
}

impl AuditReport {
    fn from_parts(root: &str, collection: Collection, verdict: Verdict) -> Self {
        let passed = !verdict.failed;
        AuditReport {
            root: root.to_string(),
            audit_timestamp: chrono::Utc::now().to_rfc3339(),
            files_scanned: collection.files_scanned,
            parse_failures: collection.parse_failures,
            usages: collection.usages,
            verdict,
            passed,
        }
    }
}

/// Runs a complete audit: discover, extract, load allowlist, validate.
///
/// # Errors
///
/// Returns `Err(String)` only when the allowlist cannot be loaded. Missing
/// workflow files and unparseable documents are recoverable and reflected
/// in the report instead.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use actions_allowlist::{audit, events::ConsoleSink};
///
/// let sink = ConsoleSink::new(false);
/// let report = audit::run_audit(
///     Path::new("."),
///     Path::new("approved-actions.json"),
///     &sink,
/// )
/// .expect("allowlist failed to load");
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_audit(
    root: &Path,
    allowlist_path: &Path,
    sink: &dyn EventSink,
) -> Result<AuditReport, String> {
    let collection = collect_usages(root, sink);

    sink.info("Checking if used actions are approved");
    let approved = allowlist::load_allowlist(allowlist_path)?;

    let verdict = validate::validate(&approved, &collection.usages, sink);
    Ok(AuditReport::from_parts(
        &root.display().to_string(),
        collection,
        verdict,
    ))
}

/// Validates a pre-collected usage list (e.g. the JSON emitted by the
/// `collect` CLI command) against an allowlist.
///
/// `source` labels the report; `files_scanned` is derived from the distinct
/// workflow files referenced by the usages.
///
/// # Errors
///
/// Returns `Err(String)` when the allowlist cannot be loaded.
pub fn validate_usages(
    source: &str,
    usages: Vec<ActionUsage>,
    allowlist_path: &Path,
    sink: &dyn EventSink,
) -> Result<AuditReport, String> {
    sink.info("Checking if used actions are approved");
    let approved = allowlist::load_allowlist(allowlist_path)?;

    let files_scanned = usages
        .iter()
        .map(|u| u.workflow.as_str())
        .collect::<HashSet<_>>()
        .len();

    let verdict = validate::validate(&approved, &usages, sink);
    let collection = Collection {
        files_scanned,
        usages,
        parse_failures: vec![],
    };
    Ok(AuditReport::from_parts(source, collection, verdict))
}
