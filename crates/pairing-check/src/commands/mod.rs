mod check;
mod mirror;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use pairing_core::NewFilePolicy;
use pairing_github::DEFAULT_API_URL;

use crate::error::Result;
use crate::output::OutputFormat;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check a pull request for unpaired ate_tests/otg_tests changes
    Check(CheckArgs),
    /// Print the mirror path of each given path
    Mirror(MirrorArgs),
}

#[derive(Args)]
pub(crate) struct SegmentArgs {
    /// Path substring of the authoritative test tree
    #[arg(long)]
    pub source_segment: Option<String>,

    /// Path substring of the mirrored test tree
    #[arg(long)]
    pub mirror_segment: Option<String>,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Pull request number (read from the event payload when omitted)
    #[arg(long, env = "PAIRING_CHECK_PULL_REQUEST")]
    pub pull_request: Option<u64>,

    /// Workflow event payload to read the pull request number from
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Reference whose tree decides which mirror files exist [default: main]
    #[arg(long)]
    pub base_ref: Option<String>,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Config file [default: .github/pairing-check.toml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to report results
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// How to treat files added or copied into the source tree [default: warn]
    #[arg(long, value_enum)]
    pub new_files: Option<NewFilePolicy>,

    #[command(flatten)]
    pub segments: SegmentArgs,

    /// Timeout for each API request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Args)]
pub(crate) struct MirrorArgs {
    /// Paths to translate
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Config file [default: .github/pairing-check.toml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub segments: SegmentArgs,
}

impl Commands {
    pub(crate) fn execute(self, quiet: bool) -> Result<()> {
        match self {
            Self::Check(args) => check::run(args, quiet),
            Self::Mirror(args) => mirror::run(args, quiet),
        }
    }
}
