// product_crud/src/db/mod.rs

//! SQLite persistence for the product catalogue.

pub mod product_store;

pub use product_store::ProductStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{info, warn};

use crate::errors::{AppError, Result};

const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  description TEXT NOT NULL DEFAULT '',
  price REAL NOT NULL,
  stock INTEGER NOT NULL DEFAULT 0,
  created_at TEXT NOT NULL
)";

fn is_in_memory(database_url: &str) -> bool {
  database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Opens (creating if needed) the database at `database_url`.
///
/// Every connection to an in-memory database sees its own private database, so
/// such URLs get exactly one connection that is never recycled.
pub async fn open_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)
    .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL '{}': {}", database_url, e)))?
    .create_if_missing(true);

  let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
  if is_in_memory(database_url) {
    if max_connections > 1 {
      warn!(max_connections, "In-memory database requested; pool limited to a single connection.");
    }
    pool_options = pool_options
      .max_connections(1)
      .min_connections(1)
      .idle_timeout(None)
      .max_lifetime(None);
  }

  let pool = pool_options
    .connect_with(options)
    .await
    .map_err(AppError::storage("Failed to open database"))?;
  info!(database_url, "Database connection pool opened.");
  Ok(pool)
}

/// Creates the `products` table when it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
  sqlx::query(CREATE_PRODUCTS_TABLE)
    .execute(pool)
    .await
    .map_err(AppError::storage("Failed to initialize schema"))?;
  Ok(())
}
