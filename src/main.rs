mod cli;

use actions_allowlist::events::ConsoleSink;
use actions_allowlist::usage::ActionUsage;
use actions_allowlist::{audit, output};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            allowlist,
            format,
            output: output_path,
            annotations,
        } => {
            require_path(&path);
            let sink = ConsoleSink::new(annotations);

            let report = match audit::run_audit(&path, &allowlist, &sink) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(2);
                }
            };

            emit(&output::format_report(&report, &format), output_path);
            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::Collect {
            path,
            format,
            annotations,
        } => {
            require_path(&path);
            let sink = ConsoleSink::new(annotations);

            let collection = audit::collect_usages(&path, &sink);
            print!("{}", output::format_usages(&collection.usages, &format));
        }

        Commands::Validate {
            usages,
            allowlist,
            format,
            output: output_path,
            annotations,
        } => {
            require_path(&usages);
            let sink = ConsoleSink::new(annotations);

            let list = load_usage_list(&usages);
            let label = usages.display().to_string();
            let report = match audit::validate_usages(&label, list, &allowlist, &sink) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(2);
                }
            };

            emit(&output::format_report(&report, &format), output_path);
            std::process::exit(if report.passed { 0 } else { 1 });
        }
    }
}

fn require_path(path: &Path) {
    if !path.exists() {
        eprintln!("Error: path does not exist: {}", path.display());
        std::process::exit(2);
    }
}

/// Reads a wire-format JSON usage list (an array of
/// `{actionLink, actionVersion, workflowFileName}` objects).
fn load_usage_list(path: &Path) -> Vec<ActionUsage> {
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error: failed to read usage list {}: {e}", path.display());
        std::process::exit(2);
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error: failed to parse usage list {}: {e}", path.display());
        std::process::exit(2);
    })
}

fn emit(formatted: &str, output_path: Option<PathBuf>) {
    if let Some(out_path) = output_path {
        std::fs::write(&out_path, formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(2);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }
}
