use pairing_core::NewFilePolicy;

use super::{VerificationContext, VerificationResult, VerificationRule};

/// Files may not be added or copied into the source tree.
pub struct NewSourceFileRule {
    policy: NewFilePolicy,
}

impl NewSourceFileRule {
    #[must_use]
    pub fn new(policy: NewFilePolicy) -> Self {
        Self { policy }
    }
}

impl VerificationRule for NewSourceFileRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) {
        result.new_file_policy = self.policy;

        if self.policy == NewFilePolicy::Allow {
            return;
        }

        result.new_source_files = context
            .changed_files
            .iter()
            .filter(|file| file.status.is_new() && context.pair.is_source_path(&file.path))
            .map(|file| file.path.clone())
            .collect();
    }
}
