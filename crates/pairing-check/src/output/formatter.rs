use pairing_core::TreePair;
use pairing_operations::verification::VerificationResult;

use crate::error::Result;

pub(crate) trait OutputFormatter {
    fn format_no_changes(&self) -> Result<String>;
    fn format_success(&self, result: &VerificationResult, pair: &TreePair) -> Result<String>;
    fn format_failure(&self, result: &VerificationResult, pair: &TreePair) -> Result<String>;
}
