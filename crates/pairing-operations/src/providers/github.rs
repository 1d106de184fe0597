use pairing_core::{ChangedFileSet, RepositoryFileSet, RepositoryRef};
use pairing_github::GitHubClient;

use crate::traits::{DiffLister, TreeLister};
use crate::{OperationError, Result};

#[derive(Clone)]
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    #[must_use]
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

impl TreeLister for GitHubProvider {
    fn repository_files(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<RepositoryFileSet> {
        self.client
            .repository_files(repository, reference)
            .map_err(|source| OperationError::TreeListing {
                repository: repository.to_string(),
                reference: reference.to_string(),
                source,
            })
    }
}

impl DiffLister for GitHubProvider {
    fn pull_request_files(
        &self,
        repository: &RepositoryRef,
        number: u64,
    ) -> Result<ChangedFileSet> {
        let files = self
            .client
            .pull_request_files(repository, number)
            .map_err(|source| OperationError::DiffListing {
                repository: repository.to_string(),
                number,
                source,
            })?;
        Ok(files.into_iter().collect())
    }
}
