//! MongoDB product store.
//!
//! One document per product in the `products` collection. `_id` is the
//! store-assigned ObjectId, exposed to the rest of the crate as its hex
//! string. [`ProductDocument`] owns the BSON mapping so the domain entity
//! never sees the wire format.
//!
//! Concurrent mutations of the same document get exactly MongoDB's native
//! single-document atomicity; this layer adds no locking of its own.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, DateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::product::dto::{CreateProduct, UpdateProduct};
use crate::product::model::Product;
use crate::store::{ProductStore, StoreError, StoreResult};

const COLLECTION: &str = "products";

/// Persisted shape of a product document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    product_name: String,
    memory: String,
    storage: String,
    color: String,
    price: f64,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Product {
            id: doc.id.to_hex(),
            product_name: doc.product_name,
            memory: doc.memory,
            storage: doc.storage,
            color: doc.color,
            price: doc.price,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

pub struct MongoStore {
    database: Database,
    collection: Collection<ProductDocument>,
}

impl MongoStore {
    /// Create a store handle for the given connection string and database.
    /// The driver connects lazily; `ping` verifies actual reachability.
    pub async fn connect(uri: &str, db_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(db_name);
        let collection = database.collection::<ProductDocument>(COLLECTION);
        Ok(Self {
            database,
            collection,
        })
    }

    /// A malformed identifier can never match a store-assigned ObjectId, so
    /// it collapses to the same absent result as a valid id with no match.
    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

#[async_trait]
impl ProductStore for MongoStore {
    async fn insert(&self, input: CreateProduct) -> StoreResult<Product> {
        let now = DateTime::now();
        let document = ProductDocument {
            id: ObjectId::new(),
            product_name: input.product_name,
            memory: input.memory,
            storage: input.storage,
            color: input.color,
            price: input.price,
            created_at: now,
            updated_at: now,
        };

        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        // Natural (physical) order, matching insertion order in practice.
        let documents: Vec<ProductDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Product::from))
    }

    async fn update_by_id(&self, id: &str, patch: UpdateProduct) -> StoreResult<Option<Product>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };

        // $set only the supplied fields; updatedAt refreshes unconditionally,
        // which also makes the empty patch a valid re-stamp.
        let mut set: Document = doc! { "updatedAt": DateTime::now() };
        if let Some(name) = patch.product_name {
            set.insert("productName", name);
        }
        if let Some(memory) = patch.memory {
            set.insert("memory", memory);
        }
        if let Some(storage) = patch.storage {
            set.insert("storage", storage);
        }
        if let Some(color) = patch.color {
            set.insert("color", color);
        }
        if let Some(price) = patch.price {
            set.insert("price", Bson::Double(price));
        }

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(Product::from))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };
        let document = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?;
        Ok(document.map(Product::from))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
