use pairing_core::{RepositoryFileSet, RepositoryRef};

use crate::Result;

pub trait TreeLister: Send + Sync {
    /// Returns every file path reachable from `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be fetched completely.
    fn repository_files(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<RepositoryFileSet>;
}
