use oai_pmh::IdentifyRequest;

use crate::{endpoint::EndpointArgs, error::Error, output};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

pub async fn run(args: Args, dry_run: bool) -> Result<(), Error> {
    let repository = args.endpoint.repository()?;

    if dry_run {
        return output::print_dry_run(
            &repository.request_url(&IdentifyRequest::new().into_request()),
        );
    }

    let body = repository.identify().await?;
    output::print_body(&body)
}
