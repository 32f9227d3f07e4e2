use std::time::Duration;

use reqwest::Client;

use crate::config::Config;

pub fn build_client(cfg: &Config) -> Client {
    Client::builder()
        .user_agent("ebay-listing-scraper/0.1")
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .build()
        .expect("failed to build http client")
}

/// Fetches one page body. Non-2xx statuses count as fetch failures.
pub async fn fetch_html(client: &Client, url: &str) -> anyhow::Result<String> {
    let res = client.get(url).send().await?.error_for_status()?;
    Ok(res.text().await?)
}
