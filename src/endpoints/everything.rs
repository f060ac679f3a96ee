//! Keyword search across everything the API indexes.
//!
//! Queries `GET /v2/everything` sorted by popularity. The search text and the
//! article language are caller-supplied; the CLI defaults the language to
//! `en` rather than pinning it here, so the flag always wins.

use crate::api::{Endpoint, NewsApi, Params};
use crate::models::Article;
use tracing::{debug, instrument};

/// Search articles matching `query` in the given language.
#[instrument(level = "info", skip(client))]
pub async fn articles_by_query<C: NewsApi>(
    query: &str,
    language: &str,
    client: &C,
) -> Vec<Article> {
    let params: Params = vec![
        ("q", query.to_string()),
        ("language", language.to_string()),
        ("sortBy", "popularity".to_string()),
    ];
    debug!(?params, "Built everything query");

    client.fetch_articles(Endpoint::Everything, &params).await
}
