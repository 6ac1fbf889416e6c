//! Product domain: entity, input contracts, and the CRUD service.

pub mod dto;
pub mod model;
pub mod service;

pub use dto::{CreateProduct, UpdateProduct};
pub use model::Product;
pub use service::ProductService;
