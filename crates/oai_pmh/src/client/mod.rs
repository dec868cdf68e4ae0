use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::{
    builder::RepositoryBuilder, extract_resumption_token, fetch, GetRecordRequest,
    IdentifyRequest, ListIdentifiersRequest, OaiError, OaiRequest, ResumptionTokenLookup,
};

/// One OAI-PMH endpoint.
///
/// The stored endpoint never carries a query string and is never modified by a call; each
/// verb builds its own URL from it.
#[derive(Debug, Clone)]
pub struct Repository {
    pub(crate) endpoint: Url,
    pub(crate) http: reqwest::Client,
    pub(crate) timeout: Option<Duration>,
}

impl Repository {
    pub fn builder(endpoint: Url) -> RepositoryBuilder {
        RepositoryBuilder::new(endpoint)
    }

    pub fn new(endpoint: Url) -> Result<Self, OaiError> {
        RepositoryBuilder::new(endpoint).build()
    }

    /// Parses `input` as an absolute URL and builds a repository with default settings.
    pub fn parse(input: &str) -> Result<Self, OaiError> {
        let endpoint = Url::parse(input).map_err(|source| OaiError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The exact URL `request` would be sent to.
    pub fn request_url(&self, request: &OaiRequest) -> Url {
        request.to_url(&self.endpoint)
    }

    pub async fn send(&self, request: &OaiRequest) -> Result<String, OaiError> {
        let url = self.request_url(request);
        debug!(verb = %request.verb(), "sending OAI-PMH request");
        fetch(&self.http, &url, self.timeout).await
    }

    pub async fn get_record(&self, request: GetRecordRequest) -> Result<String, OaiError> {
        self.send(&request.into_request()).await
    }

    pub async fn identify(&self) -> Result<String, OaiError> {
        self.send(&IdentifyRequest::new().into_request()).await
    }

    /// Fetches one page of identifiers and reports its resumption token.
    ///
    /// The token lookup is diagnostic only. A body that is not well-formed XML is still
    /// returned; the lookup carries the parse error.
    pub async fn list_identifiers(
        &self,
        request: ListIdentifiersRequest,
    ) -> Result<ListIdentifiersResponse, OaiError> {
        let body = self.send(&request.into_request()).await?;
        let resumption_token = extract_resumption_token(&body);

        match &resumption_token {
            ResumptionTokenLookup::Found(token) => info!(
                resumption_token = %token.value,
                cursor = ?token.cursor,
                complete_list_size = ?token.complete_list_size,
                "resumption token"
            ),
            ResumptionTokenLookup::NotFound => info!(resumption_token = "", "resumption token"),
            ResumptionTokenLookup::ParseError(err) => {
                debug!(error = %err, "response is not well-formed XML")
            }
        }

        Ok(ListIdentifiersResponse {
            body,
            resumption_token,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListIdentifiersResponse {
    pub body: String,
    pub resumption_token: ResumptionTokenLookup,
}
