use oai_pmh::{ListIdentifiersRequest, ResumptionTokenLookup, DEFAULT_METADATA_PREFIX};

use crate::{endpoint::EndpointArgs, error::Error, output};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// earliest date
    #[arg(short, long, default_value = "")]
    pub from: String,

    /// latest date
    #[arg(short = 't', long, default_value = "")]
    pub until: String,

    /// metadataPrefix
    #[arg(short, long, default_value = DEFAULT_METADATA_PREFIX)]
    pub prefix: String,

    /// resumptionToken (sent alone; from/until/prefix/set are ignored when set)
    #[arg(short = 'r', long, default_value = "")]
    pub token: String,

    /// set name
    #[arg(short, long, default_value = "")]
    pub set: String,
}

impl Args {
    fn request(self) -> ListIdentifiersRequest {
        ListIdentifiersRequest::new(self.prefix)
            .from(self.from)
            .until(self.until)
            .set(self.set)
            .resumption_token(self.token)
    }
}

pub async fn run(args: Args, dry_run: bool) -> Result<(), Error> {
    let repository = args.endpoint.repository()?;
    let request = args.request();

    if dry_run {
        return output::print_dry_run(&repository.request_url(&request.into_request()));
    }

    let page = repository.list_identifiers(request).await?;
    if let ResumptionTokenLookup::ParseError(err) = page.resumption_token {
        return Err(Error::MalformedListPage(err));
    }
    output::print_body(&page.body)
}
