use crate::request::{OaiRequest, Verb};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifyRequest;

impl IdentifyRequest {
    pub fn new() -> Self {
        Self
    }

    pub fn into_request(self) -> OaiRequest {
        OaiRequest::new(Verb::Identify)
    }
}
