//! Document store abstraction for products.
//!
//! The service talks to a [`ProductStore`] handle and never to a concrete
//! backend. Two backends exist:
//!
//! - [`memory::MemoryStore`]: insertion-ordered in-memory collection, used
//!   when no MongoDB URI is configured and by the test suite
//! - [`mongo::MongoStore`]: one MongoDB document per product in the
//!   `products` collection
//!
//! "No such identifier" is `Ok(None)`, never an error — absence is a routine
//! outcome for a CRUD-by-id API. A malformed identifier collapses to the same
//! absent result as a well-formed identifier with no match.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::product::dto::{CreateProduct, UpdateProduct};
use crate::product::model::Product;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while communicating with the store. Never locally recovered;
/// each request makes at most one attempt.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    #[error("document store error: {0}")]
    Backend(String),
}

/// Handle to the persisted product collection.
///
/// Every operation is one self-contained round trip; implementations hold no
/// per-request state and rely on the backend's native single-document
/// atomicity for concurrent mutations of the same identifier.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product. The store assigns the identifier and stamps
    /// both timestamps (equal at creation).
    async fn insert(&self, input: CreateProduct) -> StoreResult<Product>;

    /// All persisted products in store-native insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Merge the supplied fields into the document and refresh `updatedAt`.
    /// Returns the post-merge product, or `None` if the id matches nothing.
    async fn update_by_id(&self, id: &str, patch: UpdateProduct) -> StoreResult<Option<Product>>;

    /// Hard delete. Returns the product as it existed immediately before
    /// deletion, or `None` if the id matches nothing.
    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Connectivity probe for the readiness endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
