//! Data models for the NewsAPI wire format.
//!
//! This module defines the types deserialized from NewsAPI response bodies:
//! - [`Article`]: a single article record from `top-headlines` or `everything`
//! - [`SourceRef`]: the nested publisher reference embedded in each article
//! - [`Source`]: a publisher entity from the `top-headlines/sources` endpoint
//! - [`ArticlesResponse`] / [`SourcesResponse`]: the top-level envelopes
//!
//! Article fields use camelCase on the wire (`urlToImage`, `publishedAt`),
//! mapped to snake_case here via `#[serde(rename_all = "camelCase")]`.
//! Nearly every field is optional: the upstream API routinely returns `null`
//! for title, description, author, and content, so the models must tolerate
//! missing data and leave filtering to the display layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news article as returned by the `top-headlines` and `everything`
/// endpoints.
///
/// All content fields are optional because the upstream API emits `null` for
/// removed or partial records. Whether a record is complete enough to show is
/// decided by [`Article::is_displayable`], not at deserialization time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The publisher this article came from.
    #[serde(default)]
    pub source: SourceRef,
    /// Author byline, often missing.
    pub author: Option<String>,
    /// Article headline.
    pub title: Option<String>,
    /// Short description or excerpt.
    pub description: Option<String>,
    /// Canonical URL of the article.
    pub url: Option<String>,
    /// URL of the lead image, if any.
    pub url_to_image: Option<String>,
    /// Publication timestamp, RFC 3339 on the wire.
    pub published_at: Option<DateTime<Utc>>,
    /// Truncated article body (the API caps this at ~200 chars).
    pub content: Option<String>,
}

impl Article {
    /// Whether this record carries the fields required for display.
    ///
    /// `title`, `description`, and `url` must all be present. Records failing
    /// this invariant are silently dropped by the output layer rather than
    /// reported as errors.
    pub fn is_displayable(&self) -> bool {
        self.title.is_some() && self.description.is_some() && self.url.is_some()
    }
}

/// The publisher reference nested inside each [`Article`].
///
/// Articles from unregistered outlets carry `"id": null` with only a display
/// name, so `id` is optional while `name` defaults to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SourceRef {
    /// Registered source identifier, e.g. `"cbs-news"`.
    pub id: Option<String>,
    /// Human-readable publisher name.
    #[serde(default)]
    pub name: String,
}

/// A news publisher entity from the `top-headlines/sources` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Source {
    /// Registered source identifier, e.g. `"ars-technica"`.
    pub id: Option<String>,
    /// Human-readable publisher name.
    pub name: String,
    /// Short description of the outlet's coverage.
    pub description: Option<String>,
    /// Homepage URL.
    pub url: Option<String>,
    /// Topic category served by this outlet.
    pub category: Option<String>,
    /// Two-letter language code.
    pub language: Option<String>,
    /// Two-letter country code.
    pub country: Option<String>,
}

/// Top-level envelope for article-bearing responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    /// `"ok"` on success; errors are surfaced via HTTP status first.
    pub status: String,
    /// Total matches upstream, which may exceed the page returned.
    #[serde(default)]
    pub total_results: u64,
    /// The page of article records.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Top-level envelope for the sources response.
#[derive(Debug, Deserialize)]
pub struct SourcesResponse {
    /// `"ok"` on success.
    pub status: String,
    /// The full list of matching publishers.
    #[serde(default)]
    pub sources: Vec<Source>,
}
