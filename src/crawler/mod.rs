use crate::config::Config;
use crate::crawler::models::Listing;

mod fetcher;
mod parser;

pub mod filter;
pub mod models;
pub mod service;

/// Fetches the configured listing page and extracts every item entry on
/// it, in document order. One page, one request; pagination is out of
/// scope.
pub async fn crawl_listing_page(cfg: &Config) -> anyhow::Result<Vec<Listing>> {
    let client = fetcher::build_client(cfg);
    let html = fetcher::fetch_html(&client, &cfg.listing_url).await?;
    Ok(parser::extract_listings(&html))
}
