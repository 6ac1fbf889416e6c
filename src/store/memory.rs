//! In-memory product store.
//!
//! Insertion-ordered, process-local, no persistence across restarts. This is
//! the backend the server falls back to when no MongoDB URI is configured,
//! and the backend the test suite runs against.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::product::dto::{CreateProduct, UpdateProduct};
use crate::product::model::Product;
use crate::store::{ProductStore, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    // Vec keeps listAll in insertion order; the lock gives the same
    // single-document atomicity a real backend would.
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Backend("memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn insert(&self, input: CreateProduct) -> StoreResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            product_name: input.product_name,
            memory: input.memory,
            storage: input.storage,
            color: input.color,
            price: input.price,
            created_at: now,
            updated_at: now,
        };

        let mut products = self.products.write().map_err(|_| Self::lock_poisoned())?;
        products.push(product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| Self::lock_poisoned())?;
        Ok(products.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let products = self.products.read().map_err(|_| Self::lock_poisoned())?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: &str, patch: UpdateProduct) -> StoreResult<Option<Product>> {
        let mut products = self.products.write().map_err(|_| Self::lock_poisoned())?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply(product);
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let mut products = self.products.write().map_err(|_| Self::lock_poisoned())?;
        let Some(position) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        Ok(Some(products.remove(position)))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    async fn insert_assigns_id_and_equal_timestamps() {
        let store = MemoryStore::new();
        let product = store.insert(laptop()).await.unwrap();

        assert!(!product.id.is_empty());
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.product_name, "Laptop");
        assert_eq!(product.price, 999.99);
    }

    #[tokio::test]
    async fn find_by_id_returns_created_product() {
        let store = MemoryStore::new();
        let created = store.insert(laptop()).await.unwrap();

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn unknown_id_is_absent_everywhere() {
        let store = MemoryStore::new();
        store.insert(laptop()).await.unwrap();

        assert_eq!(store.find_by_id("missing").await.unwrap(), None);
        assert_eq!(
            store
                .update_by_id("missing", UpdateProduct::default())
                .await
                .unwrap(),
            None
        );
        assert_eq!(store.delete_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        let mut first = laptop();
        first.product_name = "First".to_string();
        let mut second = laptop();
        second.product_name = "Second".to_string();

        store.insert(first).await.unwrap();
        store.insert(second).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].product_name, "First");
        assert_eq!(all[1].product_name, "Second");
    }

    #[tokio::test]
    async fn update_merges_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let created = store.insert(laptop()).await.unwrap();

        let patch = UpdateProduct {
            price: Some(899.99),
            ..Default::default()
        };
        let updated = store.update_by_id(&created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.price, 899.99);
        assert_eq!(updated.product_name, created.product_name);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn empty_patch_still_refreshes_updated_at() {
        let store = MemoryStore::new();
        let created = store.insert(laptop()).await.unwrap();

        let updated = store
            .update_by_id(&created.id, UpdateProduct::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, created.price);
        assert_eq!(updated.product_name, created.product_name);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn delete_returns_pre_delete_state() {
        let store = MemoryStore::new();
        let created = store.insert(laptop()).await.unwrap();

        let deleted = store.delete_by_id(&created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), None);
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
