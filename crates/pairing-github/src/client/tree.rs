use pairing_core::{RepositoryFileSet, RepositoryRef};
use tracing::debug;

use super::GitHubClient;
use crate::types::TreeResponse;
use crate::{GitHubError, Result};

impl GitHubClient {
    /// Lists every file reachable from `reference`, recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be decoded,
    /// or GitHub truncated the listing.
    pub fn repository_files(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<RepositoryFileSet> {
        // Slashes in branch names stay path separators.
        let mut url = self.endpoint(
            ["repos", repository.owner.as_str(), repository.name.as_str(), "git", "trees"]
                .into_iter()
                .chain(reference.split('/')),
        )?;
        url.query_pairs_mut().append_pair("recursive", "1");

        let response: TreeResponse = self.get_json(&url)?;

        if response.truncated {
            return Err(GitHubError::TreeTruncated {
                reference: reference.to_string(),
            });
        }

        let files: RepositoryFileSet = response
            .tree
            .into_iter()
            .filter(|entry| entry.is_file())
            .map(|entry| entry.path)
            .collect();

        debug!(
            repository = %repository,
            reference,
            file_count = files.len(),
            "listed repository tree"
        );

        Ok(files)
    }
}
