use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid API URL '{url}'")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL '{url}' cannot be used as a base for endpoint paths")]
    ApiUrlNotBase { url: String },

    #[error("request to '{url}' failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to '{url}' returned HTTP {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("failed to decode response from '{url}'")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("tree listing for '{reference}' was truncated; repository file set is incomplete")]
    TreeTruncated { reference: String },
}
