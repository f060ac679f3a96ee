//! Per-endpoint request builders for the three NewsAPI operations.
//!
//! Each submodule owns one upstream endpoint: it assembles that endpoint's
//! query parameters (fixed values plus the caller-supplied variable ones) and
//! delegates the network call to a [`NewsApi`](crate::api::NewsApi)
//! implementation.
//!
//! # Endpoints
//!
//! | Operation | Module | Fixed parameters | Variable parameters |
//! |-----------|--------|------------------|---------------------|
//! | Top headlines by category | [`headlines`] | `country=us`, `sortBy=top` | `category` |
//! | Keyword search | [`everything`] | `sortBy=popularity` | `q`, `language` |
//! | Sources by country | [`sources`] | — | `country` |
//!
//! The API key is not built here; [`HttpNewsApi`](crate::api::HttpNewsApi)
//! attaches it to every request it sends.

pub mod everything;
pub mod headlines;
pub mod sources;
