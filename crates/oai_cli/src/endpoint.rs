use oai_pmh::Repository;

use crate::error::Error;

pub const DEFAULT_ENDPOINT: &str = "http://arXiv.org/oai2";

#[derive(Debug, clap::Args)]
pub struct EndpointArgs {
    /// repository URL
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub url: String,
}

impl EndpointArgs {
    pub fn repository(&self) -> Result<Repository, Error> {
        Ok(Repository::parse(&self.url)?)
    }
}
