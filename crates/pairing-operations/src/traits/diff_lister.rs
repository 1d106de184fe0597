use pairing_core::{ChangedFileSet, RepositoryRef};

use crate::Result;

pub trait DiffLister: Send + Sync {
    /// Returns every file touched by the pull request, all pages merged.
    ///
    /// # Errors
    ///
    /// Returns an error if any page of the listing cannot be fetched.
    fn pull_request_files(&self, repository: &RepositoryRef, number: u64)
    -> Result<ChangedFileSet>;
}
