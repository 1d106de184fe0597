use std::path::Path;

use serde_json::Value;

use crate::error::{CliError, Result};

pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

/// Reads the pull request number from a workflow event payload.
///
/// Returns `None` for payloads of events that are not about a pull request.
pub fn pull_request_from_event(path: &Path) -> Result<Option<u64>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::EventRead {
        path: path.to_path_buf(),
        source,
    })?;

    let event: Value = serde_json::from_str(&contents).map_err(|source| CliError::EventParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(event
        .pointer("/pull_request/number")
        .or_else(|| event.get("number"))
        .and_then(Value::as_u64))
}
