//! # actions-allowlist
//!
//! Supply-chain auditing for GitHub Actions workflows.
//!
//! `actions-allowlist` statically parses a repository's CI workflow
//! definitions, enumerates every referenced external action together with
//! its version pin, and validates each reference against a structured
//! allowlist. First-party namespaces (`github/`, `actions/`) are trusted
//! automatically; everything else needs an explicit, version-pinned
//! allowlist entry — a deny-by-default posture for third-party CI code.
//! Approved versions can additionally be flagged as deprecated, which warns
//! without failing the run.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use actions_allowlist::{audit, events::ConsoleSink, output};
//!
//! let sink = ConsoleSink::new(false);
//! let report = audit::run_audit(
//!     Path::new("."),
//!     Path::new("approved-actions.json"),
//!     &sink,
//! )
//! .expect("allowlist failed to load");
//!
//! if !report.passed {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`usage`]** — discover workflow documents and extract
//!    [`usage::ActionUsage`] records from their `jobs.*.steps[].uses` fields.
//! 2. **[`allowlist`]** — load the JSON allowlist of
//!    [`allowlist::ApprovedAction`] entries.
//! 3. **[`validate`]** — classify every usage
//!    ([`validate::Classification`]) and aggregate a [`validate::Verdict`].
//! 4. **[`audit`]** — orchestrate the fan-out over documents and assemble
//!    the final [`audit::AuditReport`].
//! 5. **[`events`]** — injected diagnostic sink; return values never depend
//!    on it.
//! 6. **[`output`]** — format reports as pretty text, JSON, or [SARIF].
//!
//! ## Classification outcomes
//!
//! | Outcome | Condition | Effect |
//! |---------|-----------|--------|
//! | auto-approved | reference starts with `github/` or `actions/` | approved, never deprecated |
//! | approved | allowlist entry with the exact version pin | approved; deprecated pins also warn |
//! | denied | no entry, or entry without the exact pin | fails the run |
//!
//! Comparisons are exact-string and case-sensitive throughout.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod allowlist;
pub mod audit;
pub mod events;
pub mod output;
pub mod usage;
pub mod validate;
