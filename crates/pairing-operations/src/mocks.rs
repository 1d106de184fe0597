use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pairing_core::{ChangedFile, ChangedFileSet, RepositoryFileSet, RepositoryRef};
use pairing_github::GitHubError;

use crate::traits::{DiffLister, TreeLister};
use crate::{OperationError, Result};

fn unavailable(url: &str) -> GitHubError {
    GitHubError::Status {
        url: url.to_string(),
        status: 503,
        message: "Service Unavailable".to_string(),
    }
}

#[derive(Default)]
pub struct MockTreeLister {
    files: RepositoryFileSet,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockTreeLister {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_files(mut self, files: &[&str]) -> Self {
        self.files = files.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl TreeLister for MockTreeLister {
    fn repository_files(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<RepositoryFileSet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(OperationError::TreeListing {
                repository: repository.to_string(),
                reference: reference.to_string(),
                source: unavailable("mock://tree"),
            });
        }
        Ok(self.files.clone())
    }
}

#[derive(Default)]
pub struct MockDiffLister {
    files: Vec<ChangedFile>,
    fail: bool,
}

impl MockDiffLister {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<ChangedFile>) -> Self {
        self.files = files;
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl DiffLister for MockDiffLister {
    fn pull_request_files(
        &self,
        repository: &RepositoryRef,
        number: u64,
    ) -> Result<ChangedFileSet> {
        if self.fail {
            return Err(OperationError::DiffListing {
                repository: repository.to_string(),
                number,
                source: unavailable("mock://pulls"),
            });
        }
        Ok(self.files.iter().cloned().collect())
    }
}
