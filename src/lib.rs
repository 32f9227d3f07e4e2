//! Scrapes an eBay seller listing page and stores every matching item as
//! an individual JSON file named after its item id.
//!
//! The pipeline is one pass over one page: fetch the configured
//! search-result page, map each `.s-item` fragment to a [`Listing`],
//! keep the entries the configured [`FilterMode`] selects, and write one
//! artifact per resolvable item id. The number of files written is the
//! run's result.

pub mod config;
pub mod crawler;
pub mod storage;

pub use config::Config;
pub use crawler::filter::FilterMode;
pub use crawler::models::Listing;
pub use crawler::service::ScrapeService;
