//! Scrape pipeline: fetch the source page, extract article records.
//!
//! Two phases, both synchronous with respect to the request that triggers
//! them:
//!
//! 1. **Fetching** ([`fetch`]): one GET for the configured source page
//! 2. **Extraction** ([`extract`]): a single pass over the parsed markup

pub mod extract;
pub mod fetch;
