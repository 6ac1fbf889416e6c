//! Product API - CRUD HTTP service for the Product catalog
//!
//! This crate provides an HTTP server exposing create/read/update/delete
//! operations for a single resource type, Product, backed by a document
//! store. It supports:
//!
//! - **Validation**: closed-schema create and partial-update input contracts
//! - **Storage**: MongoDB in production, an in-memory store for development
//!   and tests, behind one `ProductStore` trait
//! - **Middleware**: CORS, timeouts, compression, request ID tracking,
//!   structured logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Graceful shutdown**: proper signal handling for deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use product_api::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     product_api::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (pings the store)
//! - `POST /products` - Create a product
//! - `GET /products` - List all products
//! - `GET /products/{id}` - Get a product by ID
//! - `PUT /products/{id}` - Partially update a product
//! - `DELETE /products/{id}` - Delete a product

pub mod config;
pub mod error;
pub mod middleware;
pub mod product;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{build_router, start_server};
pub use state::AppState;
