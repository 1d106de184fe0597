use tracing::info;

use super::rules::VerificationRule;
use super::{VerificationContext, VerificationResult};

pub struct VerificationEngine<'a> {
    rules: Vec<&'a dyn VerificationRule>,
}

impl<'a> VerificationEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: &'a dyn VerificationRule) {
        self.rules.push(rule);
    }

    /// Runs every rule against the context. Rules record violations in the
    /// result and never stop evaluation early.
    #[must_use]
    pub fn verify(&self, context: &VerificationContext) -> VerificationResult {
        let mut result = VerificationResult {
            considered_files: considered_files(context),
            ..VerificationResult::default()
        };

        for rule in &self.rules {
            rule.check(context, &mut result);
        }

        result
    }
}

impl Default for VerificationEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn considered_files(context: &VerificationContext) -> Vec<String> {
    context
        .changed_files
        .iter()
        .filter(|file| context.pair.is_source_path(&file.path))
        .inspect(|file| {
            info!(path = %file.path, status = %file.status, "considering changed file");
        })
        .map(|file| file.path.clone())
        .collect()
}
