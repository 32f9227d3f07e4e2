use crate::{
    config::Config,
    crawler::{self, filter::should_keep},
    storage::artifacts::ArtifactStore,
};
use tracing::{debug, error, info};

/// Drives one crawl: fetch the listing page, map and filter its entries,
/// persist one artifact per resolvable item id.
pub struct ScrapeService {
    cfg: Config,
    store: ArtifactStore,
}

impl ScrapeService {
    pub async fn new(cfg: Config) -> anyhow::Result<Self> {
        let store = ArtifactStore::open(&cfg.output_dir).await?;
        Ok(Self { cfg, store })
    }

    /// Runs the pipeline once and returns the number of artifacts written.
    ///
    /// Per-item failures are logged and skipped; a failed page fetch ends
    /// the run with a count of zero. Neither aborts the process.
    pub async fn run(&self) -> anyhow::Result<usize> {
        info!(
            url = %self.cfg.listing_url,
            mode = ?self.cfg.mode,
            "Fetching listing page"
        );

        let listings = match crawler::crawl_listing_page(&self.cfg).await {
            Ok(listings) => listings,
            Err(e) => {
                error!(url = %self.cfg.listing_url, error = %e, "Failed to fetch listing page");
                return Ok(0);
            }
        };

        info!(count = listings.len(), "Extracted listings");

        let mut written = 0usize;

        for listing in &listings {
            if !should_keep(self.cfg.mode, &self.cfg.target_condition, &listing.condition) {
                debug!(
                    title = %listing.title,
                    condition = %listing.condition,
                    "Filtered out"
                );
                continue;
            }

            let id = match listing.item_id(self.cfg.keep_queryless) {
                Some(id) => id,
                None => {
                    debug!(url = %listing.product_url, "No item id in product url, skipping");
                    continue;
                }
            };

            match self.store.write_listing(id, listing).await {
                Ok(path) => {
                    written += 1;
                    debug!(id, path = %path.display(), "Saved listing");
                }
                Err(e) => {
                    error!(id, error = %e, "Failed to save listing");
                }
            }
        }

        info!(written, total = listings.len(), "Crawl finished");
        Ok(written)
    }
}
