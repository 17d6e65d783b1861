//! essential-feed: fetch a remote feed once and print its items.
//!
//! ```text
//! essential-feed [URL]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::runtime::Handle;
use tracing::info;
use url::Url;

use essential_feed::{RemoteFeedLoader, ReqwestHttpClient};

const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8080/feed.json";

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // -- parse arguments -----------------------------------------------------
    let raw_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FEED_URL.into());
    let url = Url::parse(&raw_url).with_context(|| format!("invalid feed URL: {raw_url}"))?;

    // -- wire the loader -----------------------------------------------------
    let client =
        ReqwestHttpClient::new(Handle::current()).context("failed to build HTTP client")?;
    let loader = RemoteFeedLoader::new(url, Arc::new(client));

    info!(url = %loader.url(), "Fetching feed");

    let items = match loader.load_async().await {
        Ok(items) => items,
        Err(e) => bail!("loading {} failed: {e}", loader.url()),
    };

    info!(count = items.len(), "Feed loaded");

    for item in &items {
        println!("{}  {}", item.id, item.image_url);
        if let Some(description) = &item.description {
            println!("    {description}");
        }
        if let Some(location) = &item.location {
            println!("    @ {location}");
        }
    }

    Ok(())
}
