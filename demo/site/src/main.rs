/* demo/site/src/main.rs */

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use vitrina_axum::SiteApp;
use vitrina_content::Site;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let content_dir =
    std::env::var("VITRINA_CONTENT_DIR").unwrap_or_else(|_| "demo/site/content".to_string());
  tracing::info!(content_dir = %content_dir, "opening site content");

  let site = Arc::new(Site::open(&content_dir)?);
  SiteApp::new(site).base_url("http://localhost:3000").serve("0.0.0.0:3000").await
}
