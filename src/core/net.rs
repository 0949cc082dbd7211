// src/core/net.rs
// Blocking HTTPS GET returning the body as text. One client per provider.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{FetchError, FetchResult};

pub fn build_client() -> FetchResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

pub fn http_get(client: &Client, url: &str) -> FetchResult<String> {
    let t = std::time::Instant::now();
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }
    let body = resp.text()?;
    debug!(url, bytes = body.len(), elapsed = ?t.elapsed(), "GET ok");
    Ok(body)
}
