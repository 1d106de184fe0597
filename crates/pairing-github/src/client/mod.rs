mod pulls;
mod tree;

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::types::ApiErrorBody;
use crate::{GitHubError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const PER_PAGE: usize = 100;
/// GitHub stops listing pull request files after 3000 entries.
pub const MAX_FILE_PAGES: usize = 30;

const API_VERSION: &str = "2022-11-28";
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking client for the handful of GitHub REST endpoints the check needs.
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
    token: Option<String>,
}

impl GitHubClient {
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidApiUrl`] if the API URL cannot be parsed,
    /// [`GitHubError::ApiUrlNotBase`] if it cannot carry endpoint paths, and
    /// [`GitHubError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_base = parse_api_base(&config.api_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );

        let http = Client::builder()
            .user_agent(concat!("pairing-check/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(GitHubError::ClientBuild)?;

        Ok(Self {
            http,
            api_base,
            token: config.token.filter(|token| !token.is_empty()),
        })
    }

    #[must_use]
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Appends each segment to the API base, percent-encoding as needed.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| GitHubError::ApiUrlNotBase {
                url: self.api_base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!(%url, "GET");

        let mut request = self.http.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| GitHubError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GitHubError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response.json().map_err(|source| GitHubError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn parse_api_base(api_url: &str) -> Result<Url> {
    let trimmed = api_url.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&normalized).map_err(|source| GitHubError::InvalidApiUrl {
        url: api_url.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(GitHubError::ApiUrlNotBase {
            url: api_url.to_string(),
        });
    }
    Ok(url)
}

fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
