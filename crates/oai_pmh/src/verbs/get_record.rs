use crate::request::{OaiRequest, Verb, IDENTIFIER, METADATA_PREFIX};

/// `GetRecord`: one item's metadata in one format.
///
/// Both parameters are always sent, even when empty, so the repository reports
/// `badArgument` instead of the client guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRecordRequest {
    pub identifier: String,
    pub metadata_prefix: String,
}

impl GetRecordRequest {
    pub fn new(identifier: impl Into<String>, metadata_prefix: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            metadata_prefix: metadata_prefix.into(),
        }
    }

    pub fn into_request(self) -> OaiRequest {
        OaiRequest::new(Verb::GetRecord)
            .param(IDENTIFIER, self.identifier)
            .param(METADATA_PREFIX, self.metadata_prefix)
    }
}
