use actions_allowlist::output::{OutputFormat, UsageFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actions-allowlist",
    version,
    about = "Supply-chain auditing for GitHub Actions workflows"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit a repository's workflows against an approved-actions allowlist
    Check {
        /// Repository root containing .github/workflows
        path: PathBuf,

        /// Path to the approved-actions JSON allowlist
        #[arg(long, short)]
        allowlist: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit GitHub Actions workflow-command annotations on stderr
        #[arg(long)]
        annotations: bool,
    },

    /// List every external action referenced by a repository's workflows
    Collect {
        /// Repository root containing .github/workflows
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: UsageFormat,

        /// Emit GitHub Actions workflow-command annotations on stderr
        #[arg(long)]
        annotations: bool,
    },

    /// Validate a pre-collected usage list against an allowlist
    Validate {
        /// JSON usage list, as produced by `collect --format json`
        #[arg(long, short)]
        usages: PathBuf,

        /// Path to the approved-actions JSON allowlist
        #[arg(long, short)]
        allowlist: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit GitHub Actions workflow-command annotations on stderr
        #[arg(long)]
        annotations: bool,
    },
}
