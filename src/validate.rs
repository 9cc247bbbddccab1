//! Usage classification and verdict aggregation.
//!
//! Each [`ActionUsage`] gets exactly one [`Classification`]; the outcomes
//! are mutually exclusive and collectively exhaustive. Classification order
//! matters: the auto-approval prefix check takes unconditional precedence
//! over any allowlist lookup, so a `github/*` reference is approved even
//! when the allowlist carries a conflicting (e.g. deprecated) entry for it.

use crate::allowlist::ApprovedAction;
use crate::events::EventSink;
use crate::usage::ActionUsage;

/// Namespaces trusted without an allowlist entry. Prefix matching is
/// case-sensitive: `GitHub/x` does not qualify.
const AUTO_APPROVED_PREFIXES: &[&str] = &["github/", "actions/"];

/// Outcome of classifying one usage against the allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Trusted by namespace prefix; the allowlist is never consulted and
    /// the usage is never counted as deprecated.
    AutoApproved,
    /// Explicit allowlist hit for the exact version pin.
    Approved {
        /// The matched version's deprecation flag.
        deprecated: bool,
    },
    /// The reference has no allowlist entry.
    DeniedAction,
    /// The reference is known but the exact version pin is not approved.
    DeniedVersion,
}

impl Classification {
    /// Returns `true` for both denial variants.
    pub fn is_denied(&self) -> bool {
        matches!(self, Classification::DeniedAction | Classification::DeniedVersion)
    }
}

/// Classifies a single usage. Pure — no events, no state.
///
/// # Examples
///
/// ```
/// use actions_allowlist::usage::ActionUsage;
/// use actions_allowlist::validate::{classify, Classification};
///
/// let usage = ActionUsage {
///     action: "actions/checkout".to_string(),
///     version: "v4".to_string(),
///     workflow: "ci.yml".to_string(),
/// };
/// // Auto-approved regardless of allowlist contents, even an empty one.
/// assert_eq!(classify(&[], &usage), Classification::AutoApproved);
/// ```
pub fn classify(approved: &[ApprovedAction], usage: &ActionUsage) -> Classification {
    if AUTO_APPROVED_PREFIXES
        .iter()
        .any(|p| usage.action.starts_with(p))
    {
        return Classification::AutoApproved;
    }

    let Some(entry) = approved.iter().find(|a| a.action == usage.action) else {
        return Classification::DeniedAction;
    };

    match entry.find_version(&usage.version) {
        Some(v) => Classification::Approved {
            deprecated: v.deprecated,
        },
        None => Classification::DeniedVersion,
    }
}

/// Aggregate outcome of validating a usage list.
///
/// `approved_count` and `deprecated_count` are independent counters: a
/// usage on a deprecated approved version increments both. `failed` is the
/// run's exit signal — `true` exactly when at least one usage was denied.
/// Deprecation alone never fails a run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    pub approved_count: usize,
    pub denied_count: usize,
    pub deprecated_count: usize,
    /// Every denied `"reference version"` pair, in input order.
    pub denied: Vec<String>,
    /// Full records behind `denied`, for report locations.
    pub denied_usages: Vec<ActionUsage>,
    /// Approved usages whose matched version is deprecated.
    pub deprecated_usages: Vec<ActionUsage>,
    pub failed: bool,
}

impl Verdict {
    fn empty() -> Self {
        Verdict {
            approved_count: 0,
            denied_count: 0,
            deprecated_count: 0,
            denied: Vec::new(),
            denied_usages: Vec::new(),
            deprecated_usages: Vec::new(),
            failed: false,
        }
    }

    fn deny(&mut self, usage: &ActionUsage) {
        self.denied_count += 1;
        self.denied.push(format!("{} {}", usage.action, usage.version));
        self.denied_usages.push(usage.clone());
    }
}

/// Validates every usage against the allowlist and aggregates a [`Verdict`].
///
/// Usages are classified independently, in input order. Order affects only
/// diagnostic emission — the final counts and lists are deterministic for a
/// given `(approved, usages)` pair, and running twice yields identical
/// results.
///
/// After classification, one summary event is emitted: an error titled
/// `Denied Actions` enumerating every denied pair when the run failed,
/// otherwise a success line with the approved count plus, when deprecated
/// usages exist, a warning titled `Deprecated Actions`.
pub fn validate(
    approved: &[ApprovedAction],
    usages: &[ActionUsage],
    sink: &dyn EventSink,
) -> Verdict {
    let mut verdict = Verdict::empty();

    for usage in usages {
        sink.debug(&format!(
            "Processing {} version {}",
            usage.action, usage.version
        ));

        match classify(approved, usage) {
            Classification::AutoApproved => {
                // The namespace discriminator is purely for the log line.
                let namespace = AUTO_APPROVED_PREFIXES
                    .iter()
                    .find(|p| usage.action.starts_with(*p))
                    .map(|p| p.trim_end_matches('/'))
                    .unwrap_or("first-party");
                sink.debug(&format!(
                    "Auto-approving {namespace} action: {}",
                    usage.action
                ));
                verdict.approved_count += 1;
            }
            Classification::Approved { deprecated } => {
                sink.debug(&format!(
                    "Version approved: {} {}",
                    usage.action, usage.version
                ));
                verdict.approved_count += 1;
                if deprecated {
                    sink.info(&format!("Using a deprecated version of {}", usage.action));
                    verdict.deprecated_count += 1;
                    verdict.deprecated_usages.push(usage.clone());
                }
            }
            Classification::DeniedAction => {
                sink.debug(&format!(
                    "No approved versions for {} were found",
                    usage.action
                ));
                verdict.deny(usage);
            }
            Classification::DeniedVersion => {
                sink.debug(&format!(
                    "Version not approved: {} version {}",
                    usage.action, usage.version
                ));
                verdict.deny(usage);
            }
        }
    }

    verdict.failed = verdict.denied_count > 0;

    if verdict.failed {
        sink.error(
            "Denied Actions",
            &format!(
                "The following {} actions/versions were denied: {}",
                verdict.denied_count,
                verdict.denied.join(", ")
            ),
        );
    } else {
        sink.info(&format!(
            "All {} actions/versions are approved.",
            verdict.approved_count
        ));
        if verdict.deprecated_count > 0 {
            sink.warning(
                "Deprecated Actions",
                &format!("Deprecated actions found: {}", verdict.deprecated_count),
            );
        }
    }

    verdict
}
