//! News sources by country.
//!
//! Queries `GET /v2/top-headlines/sources` with the country as the only
//! parameter.

use crate::api::{Endpoint, NewsApi, Params};
use crate::models::Source;
use tracing::{debug, instrument};

/// List the publishers the API indexes for a two-letter country code.
#[instrument(level = "info", skip(client))]
pub async fn sources_by_country<C: NewsApi>(country: &str, client: &C) -> Vec<Source> {
    let params: Params = vec![("country", country.to_string())];
    debug!(?params, "Built sources query");

    client.fetch_sources(Endpoint::Sources, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubNewsApi;

    fn source(id: &str, name: &str, url: &str) -> Source {
        Source {
            id: Some(id.to_string()),
            name: name.to_string(),
            description: Some("description".to_string()),
            url: Some(url.to_string()),
            category: Some("general".to_string()),
            language: Some("en".to_string()),
            country: Some("us".to_string()),
        }
    }

    #[tokio::test]
    async fn test_sources_by_country_preserves_order() {
        let stub = StubNewsApi::with_sources(vec![
            source("ars-technica", "Ars Technica", "http://arstechnica.com"),
            source("associated-press", "Associated Press", "https://apnews.com/"),
        ]);

        let result = sources_by_country("us", &stub).await;

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Ars Technica");
        assert_eq!(result[1].url.as_deref(), Some("https://apnews.com/"));
        assert_eq!(result, stub.sources);
    }

    #[tokio::test]
    async fn test_sources_by_country_params() {
        let stub = StubNewsApi::default();
        sources_by_country("gb", &stub).await;

        let (endpoint, params) = stub.only_call();
        assert_eq!(endpoint, Endpoint::Sources);
        assert_eq!(params, vec![("country", "gb".to_string())]);
    }
}
