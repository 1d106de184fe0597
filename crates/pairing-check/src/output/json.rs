use pairing_core::TreePair;
use pairing_operations::verification::VerificationResult;
use serde::Serialize;

use super::OutputFormatter;
use crate::error::{CliError, Result};

pub(crate) struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ReportStatus {
    NoChanges,
    Passed,
    Failed,
}

#[derive(Serialize)]
struct Report<'a> {
    status: ReportStatus,
    source_segment: Option<&'a str>,
    mirror_segment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a VerificationResult>,
}

impl JsonFormatter {
    fn render(report: &Report<'_>) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report).map_err(CliError::Report)?;
        output.push('\n');
        Ok(output)
    }

    fn render_result(
        status: ReportStatus,
        result: &VerificationResult,
        pair: &TreePair,
    ) -> Result<String> {
        Self::render(&Report {
            status,
            source_segment: Some(pair.source()),
            mirror_segment: Some(pair.mirror()),
            result: Some(result),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_no_changes(&self) -> Result<String> {
        Self::render(&Report {
            status: ReportStatus::NoChanges,
            source_segment: None,
            mirror_segment: None,
            result: None,
        })
    }

    fn format_success(&self, result: &VerificationResult, pair: &TreePair) -> Result<String> {
        Self::render_result(ReportStatus::Passed, result, pair)
    }

    fn format_failure(&self, result: &VerificationResult, pair: &TreePair) -> Result<String> {
        Self::render_result(ReportStatus::Failed, result, pair)
    }
}
