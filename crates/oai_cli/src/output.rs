use std::io::{self, Write};

use tracing::info;
use url::Url;

use crate::error::Error;

/// Writes the body exactly as received, without a trailing newline.
pub fn print_body(body: &str) -> Result<(), Error> {
    let mut out = io::stdout().lock();
    out.write_all(body.as_bytes()).map_err(Error::Stdout)?;
    out.flush().map_err(Error::Stdout)
}

pub fn print_dry_run(url: &Url) -> Result<(), Error> {
    info!(url = %url, "dry run, request not sent");
    let mut out = io::stdout().lock();
    writeln!(out, "{url}").map_err(Error::Stdout)?;
    out.flush().map_err(Error::Stdout)
}
