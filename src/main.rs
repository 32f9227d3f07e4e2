use ebay_listing_scraper::{Config, ScrapeService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::from_env()?;
    let service = ScrapeService::new(cfg).await?;
    let written = service.run().await?;

    println!("\n==============================");
    println!("FILES GENERATED: {}", written);
    println!("==============================\n");

    Ok(())
}
