use std::time::Duration;

use url::Url;

use crate::{client::Repository, OaiError};

#[derive(Debug, Clone)]
pub struct RepositoryBuilder {
    pub(crate) endpoint: Url,
    pub(crate) http_client: Option<reqwest::Client>,
    pub(crate) timeout: Option<Duration>,
}

impl RepositoryBuilder {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http_client: None,
            timeout: None,
        }
    }

    /// Reuse an existing HTTP client (connection pool, proxy settings, TLS roots).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Per-request timeout. Unset by default, which waits on the repository indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Repository, OaiError> {
        if self.endpoint.cannot_be_a_base() {
            return Err(OaiError::CannotBeABase { url: self.endpoint });
        }

        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(OaiError::HttpClient)?,
        };

        let mut endpoint = self.endpoint;
        endpoint.set_query(None);

        Ok(Repository {
            endpoint,
            http,
            timeout: self.timeout,
        })
    }
}
