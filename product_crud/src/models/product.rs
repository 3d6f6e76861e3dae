// product_crud/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String, // Empty string when the client sent none
  pub price: f64,
  pub stock: i64,
  pub created_at: DateTime<Utc>,
}

/// The client-writable fields of a product, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub stock: i64,
}
