use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::OaiError;

/// Issues one GET for `url` and returns the whole body as text.
///
/// The status code is not inspected: a 404 or 500 page comes back exactly like a 200. Bytes
/// that are not UTF-8 are replaced rather than rejected. Without `timeout` the call waits as
/// long as the remote side keeps the connection open.
pub async fn fetch(
    client: &reqwest::Client,
    url: &Url,
    timeout: Option<Duration>,
) -> Result<String, OaiError> {
    info!(url = %url, "GET");

    let mut request = client.get(url.clone());
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(|source| OaiError::Transport {
        url: url.clone(),
        source,
    })?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(|source| OaiError::Body {
        url: url.clone(),
        source,
    })?;

    debug!(
        status = status.as_u16(),
        bytes = bytes.len(),
        "received repository response"
    );
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
