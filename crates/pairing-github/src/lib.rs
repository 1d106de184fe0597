mod client;
mod error;
mod types;

pub use client::{ClientConfig, DEFAULT_API_URL, GitHubClient, MAX_FILE_PAGES, PER_PAGE};
pub use error::GitHubError;

pub type Result<T> = std::result::Result<T, GitHubError>;
