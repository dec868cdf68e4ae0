use oai_pmh::{GetRecordRequest, DEFAULT_METADATA_PREFIX};

use crate::{endpoint::EndpointArgs, error::Error, output};

pub const DEFAULT_IDENTIFIER: &str = "oai:arXiv.org:cs/0112017";

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// identifier
    #[arg(short, long, default_value = DEFAULT_IDENTIFIER)]
    pub id: String,

    /// metadataPrefix
    #[arg(short, long, default_value = DEFAULT_METADATA_PREFIX)]
    pub prefix: String,
}

pub async fn run(args: Args, dry_run: bool) -> Result<(), Error> {
    let repository = args.endpoint.repository()?;
    let request = GetRecordRequest::new(args.id, args.prefix);

    if dry_run {
        return output::print_dry_run(&repository.request_url(&request.into_request()));
    }

    let body = repository.get_record(request).await?;
    output::print_body(&body)
}
