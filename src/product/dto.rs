//! Input contracts for the product endpoints.
//!
//! Both contracts are closed schemas: any field not declared here is a
//! deserialization error, so a typo'd or unexpected field can never be
//! silently dropped. Field constraints that serde cannot express (non-empty
//! strings, non-negative price) live in `validate()`, which reports every
//! violated field at once.

use serde::{Deserialize, Deserializer};

use crate::product::model::Product;

/// Create contract: all five domain fields required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProduct {
    pub product_name: String,
    pub memory: String,
    pub storage: String,
    pub color: String,
    pub price: f64,
}

/// Update contract: same fields, all optional.
///
/// A field that is present must carry a full value — explicit `null` fails
/// deserialization, so "omitted" and "present-but-null" stay distinct and
/// only presence triggers a field change. The empty patch `{}` is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "present_non_null")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "present_non_null")]
    pub memory: Option<String>,
    #[serde(default, deserialize_with = "present_non_null")]
    pub storage: Option<String>,
    #[serde(default, deserialize_with = "present_non_null")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "present_non_null")]
    pub price: Option<f64>,
}

/// Runs only when the field is present, and deserializes the inner type
/// directly, so `null` is rejected instead of collapsing into `None`.
fn present_non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn check_non_empty(value: &str, field: &str, violations: &mut Vec<String>) {
    if value.is_empty() {
        violations.push(format!("{field} must not be empty"));
    }
}

fn check_price(value: f64, violations: &mut Vec<String>) {
    if !value.is_finite() || value < 0.0 {
        violations.push("price must be a non-negative number".to_string());
    }
}

impl CreateProduct {
    /// Validate all field constraints, trimming `productName` first.
    ///
    /// Returns the (trimmed) input on success, or every violation at once.
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        self.product_name = self.product_name.trim().to_string();

        let mut violations = Vec::new();
        check_non_empty(&self.product_name, "productName", &mut violations);
        check_non_empty(&self.memory, "memory", &mut violations);
        check_non_empty(&self.storage, "storage", &mut violations);
        check_non_empty(&self.color, "color", &mut violations);
        check_price(self.price, &mut violations);

        if violations.is_empty() {
            Ok(self)
        } else {
            Err(violations)
        }
    }
}

impl UpdateProduct {
    /// Validate the constraints of every supplied field. An empty patch is
    /// valid.
    pub fn validate(mut self) -> Result<Self, Vec<String>> {
        if let Some(name) = self.product_name.take() {
            self.product_name = Some(name.trim().to_string());
        }

        let mut violations = Vec::new();
        if let Some(name) = &self.product_name {
            check_non_empty(name, "productName", &mut violations);
        }
        if let Some(memory) = &self.memory {
            check_non_empty(memory, "memory", &mut violations);
        }
        if let Some(storage) = &self.storage {
            check_non_empty(storage, "storage", &mut violations);
        }
        if let Some(color) = &self.color {
            check_non_empty(color, "color", &mut violations);
        }
        if let Some(price) = self.price {
            check_price(price, &mut violations);
        }

        if violations.is_empty() {
            Ok(self)
        } else {
            Err(violations)
        }
    }

    /// Merge the patch into an existing product: only supplied fields change.
    ///
    /// The caller is responsible for refreshing `updatedAt`, which happens on
    /// every successful update regardless of how many fields were supplied.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.product_name {
            product.product_name = name.clone();
        }
        if let Some(memory) = &self.memory {
            product.memory = memory.clone();
        }
        if let Some(storage) = &self.storage {
            product.storage = storage.clone();
        }
        if let Some(color) = &self.color {
            product.color = color.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.memory.is_none()
            && self.storage.is_none()
            && self.color.is_none()
            && self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_create() -> CreateProduct {
        serde_json::from_value(serde_json::json!({
            "productName": "Laptop",
            "memory": "16GB",
            "storage": "512GB",
            "color": "Silver",
            "price": 999.99
        }))
        .unwrap()
    }

    #[test]
    fn create_accepts_valid_input() {
        let input = valid_create().validate().unwrap();
        assert_eq!(input.product_name, "Laptop");
        assert_eq!(input.price, 999.99);
    }

    #[test]
    fn create_rejects_missing_field() {
        let result: Result<CreateProduct, _> = serde_json::from_value(serde_json::json!({
            "productName": "Laptop",
            "memory": "16GB",
            "storage": "512GB",
            "color": "Silver"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_unknown_field() {
        let result: Result<CreateProduct, _> = serde_json::from_value(serde_json::json!({
            "productName": "Laptop",
            "memory": "16GB",
            "storage": "512GB",
            "color": "Silver",
            "price": 999.99,
            "discount": 10
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_non_numeric_price() {
        let result: Result<CreateProduct, _> = serde_json::from_value(serde_json::json!({
            "productName": "Laptop",
            "memory": "16GB",
            "storage": "512GB",
            "color": "Silver",
            "price": "999.99"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_empty_strings_and_negative_price() {
        let mut input = valid_create();
        input.color = String::new();
        input.memory = String::new();
        input.price = -1.0;

        let violations = input.validate().unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().any(|v| v.contains("color")));
        assert!(violations.iter().any(|v| v.contains("memory")));
        assert!(violations.iter().any(|v| v.contains("price")));
    }

    #[test]
    fn create_trims_product_name() {
        let mut input = valid_create();
        input.product_name = "  Laptop  ".to_string();
        assert_eq!(input.validate().unwrap().product_name, "Laptop");
    }

    #[test]
    fn create_rejects_whitespace_only_name() {
        let mut input = valid_create();
        input.product_name = "   ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_empty_patch_is_valid() {
        let patch: UpdateProduct = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(patch.is_empty());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn update_rejects_explicit_null() {
        let result: Result<UpdateProduct, _> =
            serde_json::from_value(serde_json::json!({ "price": null }));
        assert!(result.is_err());
    }

    #[test]
    fn update_rejects_unknown_field() {
        let result: Result<UpdateProduct, _> =
            serde_json::from_value(serde_json::json!({ "sku": "X100" }));
        assert!(result.is_err());
    }

    #[test]
    fn update_allows_zero_price() {
        let patch: UpdateProduct =
            serde_json::from_value(serde_json::json!({ "price": 0.0 })).unwrap();
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn update_rejects_negative_price_and_empty_field() {
        let patch: UpdateProduct =
            serde_json::from_value(serde_json::json!({ "price": -0.01, "storage": "" })).unwrap();
        let violations = patch.validate().unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let now = Utc::now();
        let mut product = Product {
            id: "p1".to_string(),
            product_name: "Laptop".to_string(),
            memory: "16GB".to_string(),
            storage: "512GB".to_string(),
            color: "Silver".to_string(),
            price: 999.99,
            created_at: now,
            updated_at: now,
        };

        let patch: UpdateProduct =
            serde_json::from_value(serde_json::json!({ "price": 899.99 })).unwrap();
        patch.apply(&mut product);

        assert_eq!(product.price, 899.99);
        assert_eq!(product.product_name, "Laptop");
        assert_eq!(product.memory, "16GB");
        assert_eq!(product.storage, "512GB");
        assert_eq!(product.color, "Silver");
    }
}
