use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted Product.
///
/// Plain data only — the entity carries no persistence behavior. The store
/// backends own the mapping between this struct and their document format.
/// Field names are camelCase on the wire, matching the persisted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier. Immutable, never reused.
    pub id: String,

    pub product_name: String,

    /// Free-form descriptor, e.g. "16GB".
    pub memory: String,

    /// Free-form descriptor, e.g. "512GB".
    pub storage: String,

    pub color: String,

    /// Always >= 0, enforced at write time.
    pub price: f64,

    /// Set once at creation.
    pub created_at: DateTime<Utc>,

    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}
