use std::path::PathBuf;

use thiserror::Error;

/// Exit status for runs that found pairing violations.
pub(crate) const POLICY_FAILURE_EXIT: u8 = 1;
/// Exit status for runs that could not complete.
pub(crate) const INFRASTRUCTURE_FAILURE_EXIT: u8 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] pairing_operations::OperationError),

    #[error("failed to set up GitHub client")]
    GitHub(#[from] pairing_github::GitHubError),

    #[error("invalid check configuration")]
    Core(#[from] pairing_core::CoreError),

    #[error("failed to read config file '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no repository given; pass --repository or set GITHUB_REPOSITORY")]
    MissingRepository,

    #[error(
        "no pull request number given; pass --pull-request, set PAIRING_CHECK_PULL_REQUEST, or run on a pull_request event"
    )]
    MissingPullRequest,

    #[error("failed to read event payload '{path}'")]
    EventRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload '{path}'")]
    EventParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize report")]
    Report(#[source] serde_json::Error),

    #[error("pairing check failed with {count} violation(s)")]
    PolicyViolation { count: usize },
}

impl CliError {
    #[must_use]
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation { .. })
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_policy_violation() {
            POLICY_FAILURE_EXIT
        } else {
            INFRASTRUCTURE_FAILURE_EXIT
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
