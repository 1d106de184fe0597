use pairing_core::NewFilePolicy;
use serde::Serialize;

/// A changed source file and its counterpart in the mirror tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorPair {
    pub source: String,
    pub mirror: String,
}

#[derive(Debug, Default, Serialize)]
pub struct VerificationResult {
    /// Changed source-tree files the rules looked at.
    pub considered_files: Vec<String>,
    /// Modified source files whose existing mirror is also part of the change.
    pub paired_updates: Vec<MirrorPair>,
    /// Modified source files whose existing mirror was left untouched.
    pub missing_mirror_updates: Vec<MirrorPair>,
    /// Files added or copied into the source tree.
    pub new_source_files: Vec<String>,
    pub new_file_policy: NewFilePolicy,
}

impl VerificationResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.missing_mirror_updates.is_empty() && !self.new_files_are_errors()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.new_file_policy == NewFilePolicy::Warn && !self.new_source_files.is_empty()
    }

    #[must_use]
    pub fn new_files_are_errors(&self) -> bool {
        self.new_file_policy == NewFilePolicy::Deny && !self.new_source_files.is_empty()
    }

    /// Number of failure annotations this result produces.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.missing_mirror_updates.len() + usize::from(self.new_files_are_errors())
    }
}
