use pairing_github::GitHubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("failed to list files of '{repository}' at '{reference}'")]
    TreeListing {
        repository: String,
        reference: String,
        #[source]
        source: GitHubError,
    },

    #[error("failed to list changed files of pull request #{number} in '{repository}'")]
    DiffListing {
        repository: String,
        number: u64,
        #[source]
        source: GitHubError,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_listing_error_includes_repository_and_reference() {
        let err = OperationError::TreeListing {
            repository: "openconfig/featureprofiles".to_string(),
            reference: "main".to_string(),
            source: GitHubError::TreeTruncated {
                reference: "main".to_string(),
            },
        };

        let msg = err.to_string();

        assert!(msg.contains("openconfig/featureprofiles"));
        assert!(msg.contains("'main'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn diff_listing_error_includes_pull_request_number() {
        let err = OperationError::DiffListing {
            repository: "o/r".to_string(),
            number: 1234,
            source: GitHubError::Status {
                url: "http://localhost/repos/o/r/pulls/1234/files".to_string(),
                status: 502,
                message: "Bad Gateway".to_string(),
            },
        };

        assert!(err.to_string().contains("#1234"));
    }
}
