//! Workflow discovery and action-usage extraction.
//!
//! A workflow document is treated as a generic YAML tree; the extractor only
//! cares about the `jobs.*.steps[].uses` subset of the GitHub Actions schema
//! and traverses it permissively — missing keys yield empty results, never
//! errors. Unpinned or malformed `uses` values are skipped without a record:
//! flagging unpinned actions is a separate concern, not this tool's.

use crate::events::EventSink;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single external action reference found in a workflow step.
///
/// Serialized with camelCase wire names (`actionLink`, `actionVersion`,
/// `workflowFileName`), the same convention the allowlist document uses,
/// so collected usage lists can be stored and fed back to `validate`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActionUsage {
    /// Identifier portion of `uses`, before the `@` — typically `owner/repo`
    /// or `owner/repo/subpath`.
    #[serde(rename = "actionLink")]
    pub action: String,
    /// Tag, branch, or commit SHA after the `@`. Compared as an opaque
    /// string, never resolved semantically.
    #[serde(rename = "actionVersion")]
    pub version: String,
    /// Workflow file the reference was found in.
    #[serde(rename = "workflowFileName")]
    pub workflow: String,
}

/// Extracts every pinned external action reference from a parsed workflow.
///
/// Walks `jobs.*.steps[].uses` in job-then-step order. A `uses` value is
/// recorded only when splitting on `@` yields exactly two non-empty parts;
/// anything else (no pin, empty reference, multiple `@`) is skipped
/// silently. Emits one [`info`](EventSink::info) event per job encountered
/// and one per usage found — log-only, the return value does not depend on
/// the sink.
///
/// # Examples
///
/// ```
/// use actions_allowlist::events::NullSink;
/// use actions_allowlist::usage::extract_usages;
///
/// let doc = serde_yaml::from_str(
///     "jobs:\n  build:\n    steps:\n      - uses: actions/checkout@v4\n",
/// )
/// .unwrap();
/// let usages = extract_usages(&doc, "ci.yml", &NullSink);
/// assert_eq!(usages[0].action, "actions/checkout");
/// assert_eq!(usages[0].version, "v4");
/// ```
pub fn extract_usages(doc: &Value, source: &str, sink: &dyn EventSink) -> Vec<ActionUsage> {
    let mut usages = Vec::new();

    let Some(jobs) = doc.get("jobs").and_then(Value::as_mapping) else {
        return usages;
    };

    for (name, job) in jobs {
        let job_name = name.as_str().unwrap_or("?");
        sink.info(&format!("  Job found: [{job_name}] in {source}"));

        let Some(steps) = job.get("steps").and_then(Value::as_sequence) else {
            continue;
        };

        for step in steps {
            let Some(uses) = step.get("uses").and_then(Value::as_str) else {
                continue;
            };

            let parts: Vec<&str> = uses.split('@').collect();
            let &[action, version] = parts.as_slice() else {
                continue;
            };
            if action.is_empty() || version.is_empty() {
                continue;
            }

            sink.info(&format!("   Found action used: [{uses}]"));
            usages.push(ActionUsage {
                action: action.to_string(),
                version: version.to_string(),
                workflow: source.to_string(),
            });
        }
    }

    usages
}

/// Reads and parses one workflow file, then extracts its usages.
///
/// Records are labeled with the file name (not the full path), matching the
/// `workflowFileName` wire field.
///
/// # Errors
///
/// Returns `Err(reason)` when the file cannot be read or is not valid YAML.
/// The caller decides whether to abort or continue with other documents.
pub fn scan_document(path: &Path, sink: &dyn EventSink) -> Result<Vec<ActionUsage>, String> {
    let source = file_label(path);
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error occurred while reading {}: {}", path.display(), e))?;
    let doc: Value = serde_yaml::from_str(&content)
        .map_err(|e| format!("Error occurred while parsing {}: {}", path.display(), e))?;
    Ok(extract_usages(&doc, &source, sink))
}

/// Locates workflow documents under a repository root.
///
/// Looks in `<root>/.github/workflows`, falling back to
/// `<root>/testing-repo/.github/workflows` when the primary directory does
/// not exist. Only immediate `.yml` files are considered. The result is
/// sorted by path; zero files found is not an error.
pub fn discover_workflows(root: &Path) -> Vec<PathBuf> {
    let primary = root.join(".github").join("workflows");
    let dir = if primary.is_dir() {
        primary
    } else {
        root.join("testing-repo").join(".github").join("workflows")
    };

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().map(|ext| ext == "yml").unwrap_or(false))
        .collect();

    files.sort();
    files
}

/// Returns the last path component, or the full path when there is none.
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
