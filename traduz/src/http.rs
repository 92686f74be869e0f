//! HTTP features

use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::HttpConfig;
use crate::error::Error;

/// Returns a HTTP client builder configured from `config`.
pub fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
    reqwest::ClientBuilder::new()
        .gzip(true)
        .redirect(Policy::none())
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
}

/// Builds a dictionary client from `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client fails to build or the base url is invalid.
pub fn build_client(config: &HttpConfig) -> Result<wordreference::Client, Error> {
    let http = builder(config).build().map_err(Error::HttpClient)?;
    let client = wordreference::Client::with_client(http).with_base_url(&config.base_url)?;

    debug!(base_url = %config.base_url, timeout = ?config.timeout, "built http client");

    Ok(client)
}
