//! Top headlines by category.
//!
//! Queries `GET /v2/top-headlines` with a fixed country (`us`) and sort order
//! (`top`). The category is the only variable input and is a closed
//! enumeration: clap validates it during argument parsing, so an invalid
//! category never reaches this module and performs zero network calls.

use crate::api::{Endpoint, NewsApi, Params};
use crate::models::Article;
use clap::ValueEnum;
use std::fmt;
use tracing::{debug, instrument};

/// The seven topic categories accepted by the `top-headlines` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// The lowercase name the upstream API expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetch top US headlines for the given category.
///
/// Returns whatever the client returns, unmodified in content and order;
/// with the HTTP-backed client that means an empty vector on failure.
#[instrument(level = "info", skip(client), fields(category = %category))]
pub async fn articles_by_category<C: NewsApi>(category: Category, client: &C) -> Vec<Article> {
    let params: Params = vec![
        ("category", category.as_str().to_string()),
        ("country", "us".to_string()),
        ("sortBy", "top".to_string()),
    ];
    debug!(?params, "Built top-headlines query");

    client.fetch_articles(Endpoint::TopHeadlines, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubNewsApi;
    use crate::models::SourceRef;

    fn article(title: &str, author: &str) -> Article {
        Article {
            source: SourceRef {
                id: Some("usa-today".to_string()),
                name: "USA Today".to_string(),
            },
            author: Some(author.to_string()),
            title: Some(title.to_string()),
            description: Some("description".to_string()),
            url: Some("https://example.com/story".to_string()),
            url_to_image: None,
            published_at: None,
            content: Some("content".to_string()),
        }
    }

    #[tokio::test]
    async fn test_articles_by_category_passes_stub_through() {
        let stub = StubNewsApi::with_articles(vec![
            article("FIFA president Infantino: World Cup kiss shouldn't have happened", "USA TODAY"),
            article("Romi Bean sits down with Coach Prime ahead of the season opener", "Ben Warwick"),
        ]);

        let result = articles_by_category(Category::Business, &stub).await;

        assert_eq!(result.len(), 2);
        assert_eq!(result, stub.articles);
        assert_eq!(result[1].author.as_deref(), Some("Ben Warwick"));
    }

    #[tokio::test]
    async fn test_articles_by_category_fixed_params() {
        let stub = StubNewsApi::default();
        articles_by_category(Category::Business, &stub).await;

        let (endpoint, params) = stub.only_call();
        assert_eq!(endpoint, Endpoint::TopHeadlines);
        assert!(params.contains(&("category", "business".to_string())));
        assert!(params.contains(&("country", "us".to_string())));
        assert!(params.contains(&("sortBy", "top".to_string())));
    }

    #[test]
    fn test_category_rejects_unknown_value() {
        assert!(Category::from_str("weather", true).is_err());
        assert_eq!(Category::from_str("science", true).unwrap(), Category::Science);
    }

    #[test]
    fn test_category_names_match_api() {
        assert_eq!(Category::Business.to_string(), "business");
        assert_eq!(Category::Technology.to_string(), "technology");
    }
}
