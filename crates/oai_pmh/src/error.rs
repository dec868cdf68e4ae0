use thiserror::Error;
use url::Url;

/// Errors that may occur while talking to an OAI-PMH repository.
#[derive(Debug, Error)]
pub enum OaiError {
    #[error("invalid repository URL `{input}`: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("repository URL `{url}` cannot carry a query string")]
    CannotBeABase { url: Url },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("request to `{url}` failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed reading response body from `{url}`: {source}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

/// A response handed to the resumption-token extractor was not well-formed XML.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed XML at byte {position}: {message}")]
pub struct XmlParseError {
    pub position: u64,
    pub message: String,
}
