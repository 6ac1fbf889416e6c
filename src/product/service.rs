//! Product CRUD operations over an injected store handle.

use std::sync::Arc;

use crate::product::dto::{CreateProduct, UpdateProduct};
use crate::product::model::Product;
use crate::store::{ProductStore, StoreResult};

/// The five product operations. Holds nothing but the store handle — no
/// cache, no cross-request state; every call is one round trip to the store.
///
/// `get_by_id`, `update`, and `remove` signal "no such identifier" as
/// `Ok(None)` rather than an error, so the routing layer can apply one
/// uniform absent-to-404 rule across all three.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Persist a new product from validated input. The store assigns the id
    /// and stamps both timestamps.
    pub async fn create(&self, input: CreateProduct) -> StoreResult<Product> {
        let product = self.store.insert(input).await?;
        tracing::debug!(id = %product.id, "product created");
        Ok(product)
    }

    /// Every persisted product, in store-native insertion order.
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        self.store.find_by_id(id).await
    }

    /// Merge validated patch fields into the product; omitted fields keep
    /// their prior values and `updatedAt` refreshes on success.
    pub async fn update(&self, id: &str, patch: UpdateProduct) -> StoreResult<Option<Product>> {
        let updated = self.store.update_by_id(id, patch).await?;
        if updated.is_some() {
            tracing::debug!(id = %id, "product updated");
        }
        Ok(updated)
    }

    /// Hard delete, returning the pre-delete state.
    pub async fn remove(&self, id: &str) -> StoreResult<Option<Product>> {
        let removed = self.store.delete_by_id(id).await?;
        if removed.is_some() {
            tracing::debug!(id = %id, "product removed");
        }
        Ok(removed)
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryStore::new()))
    }

    fn laptop() -> CreateProduct {
        CreateProduct {
            product_name: "Laptop".to_string(),
            memory: "16GB".to_string(),
            storage: "512GB".to_string(),
            color: "Silver".to_string(),
            price: 999.99,
        }
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let service = service();

        let created = service.create(laptop()).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = service.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let patch = UpdateProduct {
            price: Some(899.99),
            ..Default::default()
        };
        let updated = service.update(&created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.price, 899.99);
        assert_eq!(updated.color, "Silver");

        let removed = service.remove(&created.id).await.unwrap().unwrap();
        assert_eq!(removed, updated);

        assert_eq!(service.get_by_id(&created.id).await.unwrap(), None);
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn absent_id_is_none_for_all_three_by_id_operations() {
        let service = service();

        assert_eq!(service.get_by_id("nope").await.unwrap(), None);
        assert_eq!(
            service
                .update("nope", UpdateProduct::default())
                .await
                .unwrap(),
            None
        );
        assert_eq!(service.remove("nope").await.unwrap(), None);
    }
}
