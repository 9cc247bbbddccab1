//! Diagnostic event emission.
//!
//! The extraction and validation pipeline reports progress through an
//! injected [`EventSink`] instead of printing directly. Sinks only observe
//! the run — every return value in the pipeline is computed independently of
//! what a sink does with its messages, so library consumers can route
//! diagnostics anywhere (or drop them entirely with [`NullSink`]).

use colored::Colorize;

/// Receiver for pipeline diagnostics.
///
/// Implementers **must** be [`Send`] + [`Sync`] because
/// [`audit::collect_usages`](crate::audit::collect_usages) scans workflow
/// documents in parallel via [rayon] and shares one sink across threads.
pub trait EventSink: Send + Sync {
    /// Low-level trace detail (per-usage classification steps).
    fn debug(&self, message: &str);

    /// Normal progress message (files found, jobs visited, final tallies).
    fn info(&self, message: &str);

    /// Advisory problem that does not fail the run.
    fn warning(&self, title: &str, message: &str);

    /// Failure-level diagnostic.
    fn error(&self, title: &str, message: &str);
}

/// Writes events to stderr, leaving stdout free for formatted reports.
///
/// With `annotations` enabled the sink emits GitHub Actions workflow
/// commands (`::debug::`, `::warning::`, `::error::`) so that problems
/// surface as inline annotations when the audit itself runs inside CI.
/// Debug events map to `::debug::`, which the Actions runner hides unless
/// step debug logging is turned on.
pub struct ConsoleSink {
    annotations: bool,
}

impl ConsoleSink {
    pub fn new(annotations: bool) -> Self {
        ConsoleSink { annotations }
    }
}

impl EventSink for ConsoleSink {
    fn debug(&self, message: &str) {
        if self.annotations {
            eprintln!("::debug::{message}");
        } else {
            eprintln!("{}", message.dimmed());
        }
    }

    fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn warning(&self, title: &str, message: &str) {
        if self.annotations {
            eprintln!("::warning title={title}::{message}");
        } else {
            eprintln!("{} {message}", "WARN".yellow().bold());
        }
    }

    fn error(&self, title: &str, message: &str) {
        if self.annotations {
            eprintln!("::error title={title}::{message}");
        } else {
            eprintln!("{} {message}", "ERROR".red().bold());
        }
    }
}

/// Discards every event. Useful for library callers that only want the
/// returned records and verdicts.
pub struct NullSink;

impl EventSink for NullSink {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warning(&self, _title: &str, _message: &str) {}
    fn error(&self, _title: &str, _message: &str) {}
}
