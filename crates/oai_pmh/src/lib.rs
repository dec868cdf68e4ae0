#![forbid(unsafe_code)]
//! Async client for OAI-PMH (Open Archives Initiative Protocol for Metadata Harvesting)
//! repositories.
//!
//! A [`Repository`] wraps one base endpoint and exposes the `GetRecord`, `Identify`, and
//! `ListIdentifiers` verbs. Every call clones the endpoint, attaches a fresh query string,
//! performs a single HTTP GET, and hands back the raw response body untouched.
//!
//! - Responses are opaque text: the HTTP status is not inspected and nothing is deserialized.
//! - `ListIdentifiers` additionally looks up `OAI-PMH/ListIdentifiers/resumptionToken` in the
//!   body and reports it through [`ListIdentifiersResponse::resumption_token`]. The token is
//!   never re-submitted; callers page manually with [`ListIdentifiersRequest::resumption_token`].
//! - Malformed XML is reported as [`ResumptionTokenLookup::ParseError`], never as a panic or a
//!   process exit. Callers decide how loud to be about it.
//! - No timeout is applied unless one is set on the builder; a stalled repository stalls the
//!   call.
//! - Diagnostics go through `tracing` (the request URL at `info`, status/size at `debug`).
//!   Install a subscriber to see them.
//!
//! ```rust,no_run
//! use oai_pmh::{GetRecordRequest, Repository};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = Repository::parse("http://export.arxiv.org/oai2")?;
//! let xml = repository
//!     .get_record(GetRecordRequest::new("oai:arXiv.org:cs/0112017", "oai_dc"))
//!     .await?;
//! print!("{xml}");
//! # Ok(()) }
//! ```

mod builder;
mod client;
mod error;
mod fetch;
mod request;
mod resumption;
mod verbs;

pub use builder::RepositoryBuilder;
pub use client::{ListIdentifiersResponse, Repository};
pub use error::{OaiError, XmlParseError};
pub use fetch::fetch;
pub use request::{OaiRequest, Verb};
pub use resumption::{extract_resumption_token, ResumptionToken, ResumptionTokenLookup};
pub use verbs::{GetRecordRequest, IdentifyRequest, ListIdentifiersRequest};

/// Metadata format every OAI-PMH repository is required to support.
pub const DEFAULT_METADATA_PREFIX: &str = "oai_dc";
