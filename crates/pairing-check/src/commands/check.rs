use std::time::Duration;

use pairing_core::RepositoryRef;
use pairing_github::{ClientConfig, GitHubClient};
use pairing_operations::operations::{CheckInput, CheckOperation, CheckOutcome};
use pairing_operations::providers::GitHubProvider;
use tracing::info;

use super::CheckArgs;
use crate::config::{FileConfig, Overrides, Settings};
use crate::environment::pull_request_from_event;
use crate::error::{CliError, Result};

pub(crate) fn run(args: CheckArgs, quiet: bool) -> Result<()> {
    let repository: RepositoryRef = args
        .repository
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(CliError::MissingRepository)?
        .parse()?;

    let pull_request = match (args.pull_request, &args.event_path) {
        (Some(number), _) => number,
        (None, Some(path)) => pull_request_from_event(path)?.ok_or(CliError::MissingPullRequest)?,
        (None, None) => return Err(CliError::MissingPullRequest),
    };

    let file_config = FileConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(
        Overrides {
            base_ref: args.base_ref,
            source_segment: args.segments.source_segment,
            mirror_segment: args.segments.mirror_segment,
            new_files: args.new_files,
        },
        file_config,
    )?;

    let client = GitHubClient::new(ClientConfig {
        api_url: args.api_url,
        token: args.token,
        timeout: Duration::from_secs(args.timeout_secs),
    })?;

    info!(
        %repository,
        pull_request,
        api = %client.api_base(),
        source = settings.pair.source(),
        mirror = settings.pair.mirror(),
        "checking pull request"
    );

    let provider = GitHubProvider::new(client);
    let operation = CheckOperation::new(provider.clone(), provider);

    let input = CheckInput {
        repository,
        pull_request,
        base_ref: settings.base_ref,
        pair: settings.pair,
        new_file_policy: settings.new_file_policy,
    };

    let outcome = operation.execute(&input)?;

    let formatter = args.format.formatter();

    match outcome {
        CheckOutcome::NoChanges => {
            if !quiet {
                print!("{}", formatter.format_no_changes()?);
            }
            Ok(())
        }
        CheckOutcome::Passed(result) => {
            if !quiet {
                print!("{}", formatter.format_success(&result, &input.pair)?);
            }
            Ok(())
        }
        CheckOutcome::Failed(result) => {
            if !quiet {
                print!("{}", formatter.format_failure(&result, &input.pair)?);
            }
            Err(CliError::PolicyViolation {
                count: result.failure_count(),
            })
        }
    }
}
