use std::io;

use oai_pmh::{OaiError, XmlParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Oai(#[from] OaiError),
    /// A `ListIdentifiers` page that is not well-formed XML stops the harvest; the page is
    /// not printed.
    #[error("ListIdentifiers response is not well-formed XML: {0}")]
    MalformedListPage(#[source] XmlParseError),
    #[error("failed to write response to stdout: {0}")]
    Stdout(#[source] io::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
}
