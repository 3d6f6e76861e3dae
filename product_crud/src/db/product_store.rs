// product_crud/src/db/product_store.rs

//! The persistence layer: sole owner of the `products` table.

use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::errors::{AppError, Result};
use crate::models::{NewProduct, Product};

const SELECT_BY_ID: &str = "SELECT id, name, description, price, stock, created_at FROM products WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, description, price, stock, created_at FROM products ORDER BY id ASC";

/// Cheaply cloneable handle to the product table.
///
/// Reads go straight to the pool. The four write operations are serialized
/// through `write_lock` so concurrent writers never interleave on id
/// assignment, however many connections the pool holds.
#[derive(Clone, Debug)]
pub struct ProductStore {
  pool: SqlitePool,
  write_lock: Arc<Mutex<()>>,
}

impl ProductStore {
  /// Wraps an already opened pool. The schema must exist.
  pub fn new(pool: SqlitePool) -> Self {
    Self {
      pool,
      write_lock: Arc::new(Mutex::new(())),
    }
  }

  /// Opens the database at `database_url` and makes sure the table exists.
  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
    let pool = super::open_pool(database_url, max_connections).await?;
    super::init_schema(&pool).await?;
    Ok(Self::new(pool))
  }

  /// A private, empty in-memory store.
  pub async fn in_memory() -> Result<Self> {
    Self::connect("sqlite::memory:", 1).await
  }

  #[instrument(name = "product_store::create", skip(self, product), fields(product_name = %product.name))]
  pub async fn create(&self, product: &NewProduct) -> Result<i64> {
    let _guard = self.write_lock.lock().await;
    let result = sqlx::query("INSERT INTO products (name, description, price, stock, created_at) VALUES (?, ?, ?, ?, ?)")
      .bind(&product.name)
      .bind(&product.description)
      .bind(product.price)
      .bind(product.stock)
      .bind(Utc::now())
      .execute(&self.pool)
      .await
      .map_err(AppError::storage("Failed to create product"))?;

    let id = result.last_insert_rowid();
    info!(product_id = id, "Product row inserted.");
    Ok(id)
  }

  #[instrument(name = "product_store::get", skip(self))]
  pub async fn get(&self, id: i64) -> Result<Product> {
    let product: Option<Product> = sqlx::query_as(SELECT_BY_ID)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(AppError::storage("Failed to fetch product"))?;

    product.ok_or_else(|| AppError::NotFound("Product not found".to_string()))
  }

  /// Overwrites every client-writable column. `created_at` is left alone.
  #[instrument(name = "product_store::update", skip(self, product))]
  pub async fn update(&self, id: i64, product: &NewProduct) -> Result<()> {
    let _guard = self.write_lock.lock().await;
    let result = sqlx::query("UPDATE products SET name = ?, description = ?, price = ?, stock = ? WHERE id = ?")
      .bind(&product.name)
      .bind(&product.description)
      .bind(product.price)
      .bind(product.stock)
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(AppError::storage("Failed to update product"))?;

    if result.rows_affected() == 0 {
      return Err(AppError::NotFound("Product not found".to_string()));
    }
    debug!("Product row updated.");
    Ok(())
  }

  #[instrument(name = "product_store::delete", skip(self))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    let _guard = self.write_lock.lock().await;
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(AppError::storage("Failed to delete product"))?;

    if result.rows_affected() == 0 {
      return Err(AppError::NotFound("Product not found".to_string()));
    }
    info!("Product row deleted.");
    Ok(())
  }

  #[instrument(name = "product_store::list", skip(self))]
  pub async fn list(&self) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(SELECT_ALL)
      .fetch_all(&self.pool)
      .await
      .map_err(AppError::storage("Failed to list products"))?;

    debug!(count = products.len(), "Products listed.");
    Ok(products)
  }

  pub async fn close(&self) {
    self.pool.close().await;
  }
}
