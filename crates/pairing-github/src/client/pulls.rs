use pairing_core::{ChangedFile, RepositoryRef};
use tracing::{debug, warn};

use super::{GitHubClient, MAX_FILE_PAGES, PER_PAGE};
use crate::Result;
use crate::types::PullRequestFile;

impl GitHubClient {
    /// Lists the files changed by a pull request, draining every page.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails or cannot be decoded.
    pub fn pull_request_files(
        &self,
        repository: &RepositoryRef,
        number: u64,
    ) -> Result<Vec<ChangedFile>> {
        let number_segment = number.to_string();
        let files_url = self.endpoint([
            "repos",
            repository.owner.as_str(),
            repository.name.as_str(),
            "pulls",
            number_segment.as_str(),
            "files",
        ])?;
        let mut files = Vec::new();

        for page in 1..=MAX_FILE_PAGES {
            let mut url = files_url.clone();
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let entries: Vec<PullRequestFile> = self.get_json(&url)?;
            let entry_count = entries.len();
            debug!(page, entry_count, "fetched pull request files page");

            files.extend(
                entries
                    .into_iter()
                    .map(|entry| ChangedFile::new(entry.filename, entry.status)),
            );

            if entry_count < PER_PAGE {
                return Ok(files);
            }
        }

        warn!(
            pull_request = number,
            file_count = files.len(),
            "stopped after {MAX_FILE_PAGES} pages; GitHub does not list further files"
        );
        Ok(files)
    }
}
