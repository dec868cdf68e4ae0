use crate::request::{OaiRequest, Verb, FROM, METADATA_PREFIX, RESUMPTION_TOKEN, SET, UNTIL};

/// `ListIdentifiers`: headers of the records matching a selective-harvest window.
///
/// A resumption token is exclusive: when it is non-empty it is the only argument sent
/// besides `verb`, and `from`/`until`/`set`/`metadataPrefix` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListIdentifiersRequest {
    pub from: String,
    pub until: String,
    pub metadata_prefix: String,
    pub set: String,
    pub resumption_token: String,
}

impl ListIdentifiersRequest {
    pub fn new(metadata_prefix: impl Into<String>) -> Self {
        Self {
            metadata_prefix: metadata_prefix.into(),
            ..Self::default()
        }
    }

    /// Lower datestamp bound (`YYYY-MM-DD` or the repository's finer granularity).
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = until.into();
        self
    }

    pub fn set(mut self, set: impl Into<String>) -> Self {
        self.set = set.into();
        self
    }

    pub fn resumption_token(mut self, token: impl Into<String>) -> Self {
        self.resumption_token = token.into();
        self
    }

    pub fn into_request(self) -> OaiRequest {
        let req = OaiRequest::new(Verb::ListIdentifiers);
        if !self.resumption_token.is_empty() {
            return req.param(RESUMPTION_TOKEN, self.resumption_token);
        }
        req.optional_param(FROM, &self.from)
            .optional_param(UNTIL, &self.until)
            .optional_param(SET, &self.set)
            .optional_param(METADATA_PREFIX, &self.metadata_prefix)
    }
}
