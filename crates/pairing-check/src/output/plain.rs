use pairing_core::TreePair;
use pairing_operations::verification::{MirrorPair, VerificationResult};

use super::{OutputFormatter, join_paths};
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_considered(output: &mut String, result: &VerificationResult, pair: &TreePair) {
        output.push_str(&format!(
            "Changed {} files: {}\n",
            pair.source(),
            result.considered_files.len()
        ));
        for path in &result.considered_files {
            output.push_str(&format!("  {path}\n"));
        }
    }

    fn format_pairs(output: &mut String, title: &str, pairs: &[MirrorPair]) {
        if pairs.is_empty() {
            return;
        }
        output.push_str(&format!("\n{title}:\n"));
        for pair in pairs {
            output.push_str(&format!("  {} -> {}\n", pair.source, pair.mirror));
        }
    }

    fn format_new_files(output: &mut String, result: &VerificationResult, pair: &TreePair) {
        if result.new_source_files.is_empty() {
            return;
        }
        let label = if result.new_files_are_errors() {
            "error"
        } else {
            "warning"
        };
        output.push_str(&format!(
            "\n{label}: new files are not permitted under {}: {}\n",
            pair.source(),
            join_paths(&result.new_source_files)
        ));
    }

    fn format_common_sections(output: &mut String, result: &VerificationResult, pair: &TreePair) {
        Self::format_considered(output, result, pair);
        Self::format_pairs(output, "Paired updates", &result.paired_updates);
        Self::format_new_files(output, result, pair);
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_no_changes(&self) -> Result<String> {
        Ok("No files changed\n".to_string())
    }

    fn format_success(&self, result: &VerificationResult, pair: &TreePair) -> Result<String> {
        let mut output = String::new();
        Self::format_common_sections(&mut output, result, pair);
        output.push_str(&format!(
            "\nEvery modified {} file with an existing {} counterpart is paired\n",
            pair.source(),
            pair.mirror()
        ));
        Ok(output)
    }

    fn format_failure(&self, result: &VerificationResult, pair: &TreePair) -> Result<String> {
        let mut output = String::new();
        Self::format_common_sections(&mut output, result, pair);

        if !result.missing_mirror_updates.is_empty() {
            output.push_str(&format!("\nMissing {} updates:\n", pair.mirror()));
            for missing in &result.missing_mirror_updates {
                output.push_str(&format!(
                    "  {} needs to be updated to match {}\n",
                    missing.mirror, missing.source
                ));
            }
        }

        Ok(output)
    }
}
