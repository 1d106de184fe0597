use pairing_core::{NewFilePolicy, RepositoryRef, TreePair};
use tracing::info;

use crate::Result;
use crate::traits::{DiffLister, TreeLister};
use crate::verification::rules::{MirrorUpdateRule, NewSourceFileRule};
use crate::verification::{VerificationContext, VerificationEngine, VerificationResult};

pub struct CheckInput {
    pub repository: RepositoryRef,
    pub pull_request: u64,
    pub base_ref: String,
    pub pair: TreePair,
    pub new_file_policy: NewFilePolicy,
}

#[derive(Debug)]
pub enum CheckOutcome {
    NoChanges,
    /// No failures. The result may still carry warnings.
    Passed(VerificationResult),
    Failed(VerificationResult),
}

impl CheckOutcome {
    #[must_use]
    pub fn result(&self) -> Option<&VerificationResult> {
        match self {
            Self::NoChanges => None,
            Self::Passed(result) | Self::Failed(result) => Some(result),
        }
    }
}

pub struct CheckOperation<T, D> {
    tree_lister: T,
    diff_lister: D,
}

impl<T, D> CheckOperation<T, D>
where
    T: TreeLister,
    D: DiffLister,
{
    pub fn new(tree_lister: T, diff_lister: D) -> Self {
        Self {
            tree_lister,
            diff_lister,
        }
    }

    /// Fetches the pull request's changed files and the base tree, then runs
    /// every pairing rule over them.
    ///
    /// Rule violations are returned as [`CheckOutcome::Failed`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if either listing cannot be fetched.
    pub fn execute(&self, input: &CheckInput) -> Result<CheckOutcome> {
        let changed_files = self
            .diff_lister
            .pull_request_files(&input.repository, input.pull_request)?;

        info!(
            repository = %input.repository,
            pull_request = input.pull_request,
            changed_file_count = changed_files.len(),
            "fetched changed files"
        );

        if changed_files.is_empty() {
            return Ok(CheckOutcome::NoChanges);
        }

        let repository_files = self
            .tree_lister
            .repository_files(&input.repository, &input.base_ref)?;

        info!(
            reference = %input.base_ref,
            file_count = repository_files.len(),
            "fetched repository tree"
        );

        let context = VerificationContext {
            pair: input.pair.clone(),
            repository_files,
            changed_files,
        };

        let mirror_rule = MirrorUpdateRule;
        let new_file_rule = NewSourceFileRule::new(input.new_file_policy);

        let mut engine = VerificationEngine::new();
        engine.add_rule(&mirror_rule);
        engine.add_rule(&new_file_rule);

        let result = engine.verify(&context);

        if result.is_success() {
            Ok(CheckOutcome::Passed(result))
        } else {
            Ok(CheckOutcome::Failed(result))
        }
    }
}
