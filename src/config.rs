use std::env;
use std::path::PathBuf;

use anyhow::Context;

use crate::crawler::filter::FilterMode;

const DEFAULT_LISTING_URL: &str = "https://www.ebay.com/sch/garlandcomputer/m.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub listing_url: String,
    pub output_dir: PathBuf,
    pub mode: FilterMode,
    pub target_condition: String,
    pub request_timeout_secs: u64,
    pub keep_queryless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            output_dir: PathBuf::from("data"),
            mode: FilterMode::All,
            target_condition: "Totalmente nuevo".to_string(),
            request_timeout_secs: 30,
            keep_queryless: false,
        }
    }
}

impl Config {
    /// Reads the configuration from the environment. Every variable has a
    /// default, so an empty environment is runnable; malformed values fail
    /// here, before anything is fetched or written.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        if let Ok(v) = env::var("EBAY_LISTING_URL") {
            cfg.listing_url = v;
        }
        if let Ok(v) = env::var("OUTPUT_DIR") {
            cfg.output_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("FILTER_MODE") {
            cfg.mode = v.parse().context("invalid FILTER_MODE")?;
        }
        if let Ok(v) = env::var("TARGET_CONDITION") {
            cfg.target_condition = v;
        }
        if let Ok(v) = env::var("REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout_secs = v.parse().context("invalid REQUEST_TIMEOUT_SECS")?;
        }
        if let Ok(v) = env::var("KEEP_QUERYLESS_URLS") {
            cfg.keep_queryless = v.parse().context("invalid KEEP_QUERYLESS_URLS")?;
        }

        Ok(cfg)
    }
}
