//! A client for looking up words on WordReference.
//!
//! This module provides a high-level async interface for fetching result pages and parsing them
//! into translations.

use std::time::Duration;

use reqwest::{ClientBuilder, header::LOCATION, redirect::Policy};
use url::Url;

use crate::log::trace;
use crate::{Direction, Error, Parser, Translation};

/// The base URL of the dictionary's website.
pub const BASE_URL: &str = "https://www.wordreference.com";
/// The `User-Agent` header sent by default, as the site turns away unknown clients.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:141.0) Gecko/20100101 Firefox/141.0";

/// An asynchronous client for WordReference.
///
/// This client handles the construction of HTTP requests, sending them to the website, and
/// parsing the HTML response.
#[derive(Debug, Clone)]
pub struct Client {
    /// The base URL of the website.
    base_url: Url,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// The client is configured with gzip support, a browser `User-Agent`, a 30-second timeout,
    /// and redirects disabled.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .gzip(true)
            .redirect(Policy::none())
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// This is useful if you want to share an HTTP client between multiple services or require
    /// custom configuration (e.g., proxies, custom headers).
    ///
    /// # Panics
    ///
    /// Never, the built-in base url is always valid.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let base_url = Url::parse(BASE_URL).expect("valid base url");

        Client { base_url, client }
    }

    /// Replaces the base url of the website, e.g. to point at a mirror.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` cannot be parsed or cannot have path
    /// segments appended to it.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Client, Error> {
        let url = Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl(base_url.to_owned()))?;

        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_owned()));
        }

        self.base_url = url;

        Ok(self)
    }

    /// Returns the url of the results page for `word` in the given `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the base url cannot have path segments appended.
    pub fn lookup_url(&self, word: &str, direction: Direction) -> Result<Url, Error> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&direction.prefix())
            .push(word.trim());

        Ok(url)
    }

    /// Fetches the raw results page for `word` in the given `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the request fails due to network issues or a timeout,
    /// [`Error::Redirect`] if the server redirects, and [`Error::UnexpectedStatus`] for any other
    /// non-successful status code.
    pub async fn fetch(&self, word: &str, direction: Direction) -> Result<String, Error> {
        let url = self.lookup_url(word, direction)?;

        trace!(%url, "fetching results page");

        let response = self.client.get(url).send().await.map_err(Error::Request)?;
        let status = response.status();

        if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            return Err(Error::Redirect {
                status: status.as_u16(),
                location,
            });
        }

        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        response.text().await.map_err(Error::Request)
    }

    /// Looks up `word` in the given `direction` and returns its principal translations.
    ///
    /// Malformed entries on the page are skipped, see [`Parser::parse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the page could not be fetched, see [`Client::fetch`].
    pub async fn query(&self, word: &str, direction: Direction) -> Result<Vec<Translation>, Error> {
        let body = self.fetch(word, direction).await?;

        Ok(Parser::new(direction).parse(&body))
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}
