//! Result shaping and rendering.
//!
//! This module turns raw API records into what the user actually sees. Each
//! submodule handles one record kind in two steps:
//!
//! 1. **Shape**: project the record down to the display field subset,
//!    dropping articles that fail the required-field invariant
//! 2. **Render**: format the projections as plain text for stdout
//!
//! # Submodules
//!
//! - [`articles`]: `Title / Description / Link` blocks for article listings
//! - [`sources`]: one `"{i} - {name} : {url}"` line per publisher
//!
//! The shaped projections implement `Serialize`, so `--json` can emit them
//! as pretty-printed JSON instead of the text rendering. No ordering beyond
//! API response order is imposed.

pub mod articles;
pub mod sources;
