#![forbid(unsafe_code)]
use anyhow::Result;
use snowify_site::{
    refresh_download_targets, DownloadCards, DownloadTargets, Platform, ReleaseClient, SiteConfig,
};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        warn!("No .env loaded: {}", e);
    }

    let config = SiteConfig::from_env()?;
    info!("Resolving downloads for {}", config.repo);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let client = ReleaseClient::from_config(http, &config);

    let mut targets = DownloadTargets::fallback(&config.releases_page());
    if !refresh_download_targets(&client, &mut targets).await {
        info!("Keeping fallback download links");
    }

    let cards = DownloadCards::for_user_agent(config.user_agent.as_deref().unwrap_or_default());
    match cards.detected() {
        Some(platform) => info!("Detected platform: {}", platform),
        None => info!("No platform detected, showing every download"),
    }

    for platform in Platform::ALL {
        let marker = if cards.is_highlighted(platform) { "*" } else { " " };
        println!("{marker} {:<8} {}", platform, targets.get(platform));
    }
    if let Some(badge) = &targets.badge {
        println!("  badge    {badge}");
    }
    Ok(())
}
