//! Product API - CRUD HTTP service for the Product catalog
//!
//! This binary serves the product endpoints over HTTP, backed by the
//! document store selected by the configuration.

use product_api::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    product_api::start_server(config).await?;

    Ok(())
}
