//! NewsAPI client with a swappable transport.
//!
//! This module provides the interface for talking to the upstream NewsAPI
//! service and its production implementation.
//!
//! # Architecture
//!
//! The module uses a trait-based design so the network edge can be replaced
//! in tests:
//! - [`NewsApi`]: core trait with one operation per response shape
//!   (`fetch_articles`, `fetch_sources`)
//! - [`HttpNewsApi`]: reqwest-backed implementation used by the binary
//!
//! # Failure Contract
//!
//! Both operations are fail-soft: a transport error or non-2xx status is
//! logged with its cause and yields an empty vector. Callers render whatever
//! they get and the process still exits cleanly. The fallible plumbing stays
//! in private helpers that propagate `Result`s; only the trait boundary
//! degrades to empty.

use crate::models::{Article, ArticlesResponse, Source, SourcesResponse};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;
use tracing::{error, info, instrument};
use url::Url;

static TOP_HEADLINES_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://newsapi.org/v2/top-headlines").expect("valid endpoint URL"));
static EVERYTHING_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://newsapi.org/v2/everything").expect("valid endpoint URL"));
static SOURCES_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://newsapi.org/v2/top-headlines/sources").expect("valid endpoint URL")
});

/// Query parameters for a single request, in the order they were built.
pub type Params = Vec<(&'static str, String)>;

/// The three fixed upstream endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /v2/top-headlines`
    TopHeadlines,
    /// `GET /v2/everything`
    Everything,
    /// `GET /v2/top-headlines/sources`
    Sources,
}

impl Endpoint {
    /// The full URL this endpoint resolves to.
    pub fn url(self) -> &'static Url {
        match self {
            Endpoint::TopHeadlines => &TOP_HEADLINES_URL,
            Endpoint::Everything => &EVERYTHING_URL,
            Endpoint::Sources => &SOURCES_URL,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::TopHeadlines => "top-headlines",
            Endpoint::Everything => "everything",
            Endpoint::Sources => "sources",
        };
        f.write_str(name)
    }
}

/// Trait over the two NewsAPI response shapes.
///
/// Implementors issue one GET per call and return the parsed top-level array.
/// The production implementation is [`HttpNewsApi`]; tests substitute a stub
/// that serves canned records and captures the parameters it was called with.
pub trait NewsApi {
    /// Fetch the `articles` array from an article-bearing endpoint.
    ///
    /// Returns an empty vector on any transport or HTTP failure.
    async fn fetch_articles(&self, endpoint: Endpoint, params: &Params) -> Vec<Article>;

    /// Fetch the `sources` array from the sources endpoint.
    ///
    /// Returns an empty vector on any transport or HTTP failure.
    async fn fetch_sources(&self, endpoint: Endpoint, params: &Params) -> Vec<Source>;
}

/// Production [`NewsApi`] implementation backed by a [`reqwest::Client`].
///
/// Holds the API key and attaches it as the `apiKey` query parameter on every
/// outgoing request, so no request can leave the process unauthenticated.
#[derive(Debug)]
pub struct HttpNewsApi {
    client: reqwest::Client,
    api_key: String,
}

impl HttpNewsApi {
    /// Create a client authenticating with the given API key.
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Issue the GET and deserialize the body, treating non-2xx as an error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &Params,
    ) -> Result<T, Box<dyn Error>> {
        let response = self
            .client
            .get(endpoint.url().clone())
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

impl NewsApi for HttpNewsApi {
    #[instrument(level = "info", skip_all, fields(endpoint = %endpoint))]
    async fn fetch_articles(&self, endpoint: Endpoint, params: &Params) -> Vec<Article> {
        match self.get_json::<ArticlesResponse>(endpoint, params).await {
            Ok(body) => {
                info!(
                    count = body.articles.len(),
                    total_results = body.total_results,
                    "Fetched articles"
                );
                body.articles
            }
            Err(e) => {
                error!(error = %e, "Article request failed");
                Vec::new()
            }
        }
    }

    #[instrument(level = "info", skip_all, fields(endpoint = %endpoint))]
    async fn fetch_sources(&self, endpoint: Endpoint, params: &Params) -> Vec<Source> {
        match self.get_json::<SourcesResponse>(endpoint, params).await {
            Ok(body) => {
                info!(count = body.sources.len(), "Fetched sources");
                body.sources
            }
            Err(e) => {
                error!(error = %e, "Sources request failed");
                Vec::new()
            }
        }
    }
}
