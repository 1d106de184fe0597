//! GitHub Actions workflow commands.
//!
//! Each violation becomes one `::error` line and the new-file list becomes a
//! single `::warning` line, which the runner turns into annotations on the
//! pull request.

use pairing_core::TreePair;
use pairing_operations::verification::VerificationResult;

use super::{OutputFormatter, join_paths};
use crate::error::Result;

pub(crate) struct GitHubAnnotationFormatter;

impl GitHubAnnotationFormatter {
    fn command(kind: &str, properties: &[(&str, &str)], message: &str) -> String {
        let properties = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect::<Vec<_>>()
            .join(",");

        if properties.is_empty() {
            format!("::{kind}::{}\n", escape_data(message))
        } else {
            format!("::{kind} {properties}::{}\n", escape_data(message))
        }
    }

    fn format_annotations(result: &VerificationResult, pair: &TreePair) -> String {
        let mut output = String::new();

        if !result.new_source_files.is_empty() {
            let kind = if result.new_files_are_errors() {
                "error"
            } else {
                "warning"
            };
            let title = format!("New files under {}", pair.source());
            let message = format!(
                "New files are not permitted under {}: {}",
                pair.source(),
                join_paths(&result.new_source_files)
            );
            output.push_str(&Self::command(kind, &[("title", title.as_str())], &message));
        }

        let title = format!("Missing {} update", pair.mirror());
        for missing in &result.missing_mirror_updates {
            let message = format!(
                "{} needs to be updated to match {}",
                missing.mirror, missing.source
            );
            output.push_str(&Self::command(
                "error",
                &[("file", missing.mirror.as_str()), ("title", title.as_str())],
                &message,
            ));
        }

        output
    }
}

impl OutputFormatter for GitHubAnnotationFormatter {
    fn format_no_changes(&self) -> Result<String> {
        Ok(String::new())
    }

    fn format_success(&self, result: &VerificationResult, pair: &TreePair) -> Result<String> {
        Ok(Self::format_annotations(result, pair))
    }

    fn format_failure(&self, result: &VerificationResult, pair: &TreePair) -> Result<String> {
        Ok(Self::format_annotations(result, pair))
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
