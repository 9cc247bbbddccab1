//! Approved-actions allowlist.
//!
//! The allowlist is a JSON document: an ordered sequence of approved action
//! references, each carrying the version pins that have been reviewed and an
//! optional deprecation flag per pin.
//!
//! # File format
//!
//! ```json
//! [
//!   {
//!     "actionLink": "some/custom-action",
//!     "versions": [
//!       { "version": "v1", "deprecated": false },
//!       { "version": "v0", "deprecated": true }
//!     ]
//!   }
//! ]
//! ```
//!
//! A malformed document is a fatal load error, not per-entry tolerant:
//! validating against a partially-read allowlist would silently deny (or
//! worse, pass) actions the maintainer believes are covered.

use std::path::Path;

/// One approved action reference and its reviewed version pins.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApprovedAction {
    /// Exact action reference this entry covers. Lookups are
    /// case-sensitive string equality.
    #[serde(rename = "actionLink")]
    pub action: String,
    /// Reviewed version pins. Absent in the document means none are approved.
    #[serde(default)]
    pub versions: Vec<ApprovedVersion>,
}

/// A single reviewed version pin.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApprovedVersion {
    /// Opaque version string (tag, branch, or commit SHA).
    pub version: String,
    /// Approved but flagged for eventual removal. Usage is permitted and
    /// triggers an advisory warning, never a failure.
    #[serde(default)]
    pub deprecated: bool,
}

impl ApprovedAction {
    /// Finds the entry for `version` by exact string equality.
    pub fn find_version(&self, version: &str) -> Option<&ApprovedVersion> {
        self.versions.iter().find(|v| v.version == version)
    }
}

/// Loads the allowlist from a JSON file.
///
/// # Errors
///
/// Returns `Err(String)` when the file cannot be read or fails to parse.
/// Both are fatal to the run — no degraded validation is attempted.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use actions_allowlist::allowlist::load_allowlist;
///
/// let approved = load_allowlist(Path::new("approved-actions.json"))?;
/// # Ok::<(), String>(())
/// ```
pub fn load_allowlist(path: &Path) -> Result<Vec<ApprovedAction>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read allowlist {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse allowlist {}: {}", path.display(), e))
}
