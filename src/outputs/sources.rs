//! Source listing shaping and text rendering.
//!
//! Unlike articles, sources carry no required-field invariant: every record
//! is listed, with a missing homepage rendered as an empty link.

use crate::models::Source;
use itertools::Itertools;
use serde::Serialize;

/// Display projection of a [`Source`]: publisher name and homepage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceListing {
    pub name: String,
    pub url: String,
}

/// Project sources to their display subset, preserving order.
pub fn shape(sources: &[Source]) -> Vec<SourceListing> {
    sources
        .iter()
        .map(|source| SourceListing {
            name: source.name.clone(),
            url: source.url.clone().unwrap_or_default(),
        })
        .collect()
}

/// Render listings as 1-based indexed lines, one per source.
pub fn render(listings: &[SourceListing]) -> String {
    let mut text = listings
        .iter()
        .enumerate()
        .map(|(i, listing)| format!("{} - {} : {}", i + 1, listing.name, listing.url))
        .join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}
