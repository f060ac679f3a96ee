//! Article shaping and text rendering.
//!
//! Projects raw [`Article`] records to the four displayed fields and drops
//! any record missing title, description, or url. The dropped records are not
//! errors: the upstream API routinely pads result pages with removed
//! articles whose fields are all `null`.

use crate::models::Article;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

/// Display projection of an [`Article`].
///
/// `title`, `description`, and `url` are guaranteed present by construction;
/// `content` stays optional since the API truncates or omits it freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub title: String,
    pub description: String,
    pub url: String,
    pub content: Option<String>,
}

/// Project articles to their display subset, dropping incomplete records.
///
/// Order is preserved; only records failing
/// [`Article::is_displayable`](crate::models::Article::is_displayable) are
/// removed.
pub fn shape(articles: &[Article]) -> Vec<ArticleSummary> {
    let shaped: Vec<ArticleSummary> = articles
        .iter()
        .filter(|article| article.is_displayable())
        .map(|article| ArticleSummary {
            title: article.title.clone().unwrap_or_default(),
            description: article.description.clone().unwrap_or_default(),
            url: article.url.clone().unwrap_or_default(),
            content: article.content.clone(),
        })
        .collect();

    debug!(
        kept = shaped.len(),
        dropped = articles.len() - shaped.len(),
        "Shaped articles"
    );
    shaped
}

/// Render summaries as labeled text blocks separated by blank lines.
pub fn render(summaries: &[ArticleSummary]) -> String {
    summaries
        .iter()
        .map(|summary| {
            let mut block = String::new();
            writeln!(block, "{:<12}: {}", "Title", summary.title).unwrap();
            writeln!(block, "{:<12}: {}", "Description", summary.description).unwrap();
            writeln!(block, "{:<12}: {}", "Link", summary.url).unwrap();
            block
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceRef;

    fn article(
        title: Option<&str>,
        description: Option<&str>,
        url: Option<&str>,
    ) -> Article {
        Article {
            source: SourceRef::default(),
            author: None,
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            url: url.map(str::to_string),
            url_to_image: None,
            published_at: None,
            content: Some("content".to_string()),
        }
    }

    #[test]
    fn test_shape_drops_records_missing_required_fields() {
        let articles = vec![
            article(Some("Kept"), Some("desc"), Some("https://a.example")),
            article(None, Some("desc"), Some("https://b.example")),
            article(Some("No description"), None, Some("https://c.example")),
            article(Some("No url"), Some("desc"), None),
        ];

        let shaped = shape(&articles);

        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].title, "Kept");
    }

    #[test]
    fn test_shape_preserves_order() {
        let articles = vec![
            article(Some("First"), Some("d"), Some("https://1.example")),
            article(Some("Second"), Some("d"), Some("https://2.example")),
            article(Some("Third"), Some("d"), Some("https://3.example")),
        ];

        let titles: Vec<String> = shape(&articles).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_render_block_layout() {
        let summaries = vec![ArticleSummary {
            title: "Headline".to_string(),
            description: "What happened".to_string(),
            url: "https://example.com/story".to_string(),
            content: None,
        }];

        let text = render(&summaries);

        assert_eq!(
            text,
            "Title       : Headline\n\
             Description : What happened\n\
             Link        : https://example.com/story\n"
        );
    }

    #[test]
    fn test_render_separates_blocks_with_blank_line() {
        let summary = |title: &str| ArticleSummary {
            title: title.to_string(),
            description: "d".to_string(),
            url: "https://example.com".to_string(),
            content: None,
        };

        let text = render(&[summary("One"), summary("Two")]);

        assert!(text.contains("Link        : https://example.com\n\nTitle       : Two"));
    }

    #[test]
    fn test_render_empty_is_empty() {
        assert_eq!(render(&[]), "");
    }
}
