// product_crud/src/lib.rs

//! Product catalogue CRUD over HTTP, backed by a single embedded SQLite table.
//!
//! Layers, bottom-up:
//!  - [`db::ProductStore`]: owns the `products` table (create/get/update/delete/list).
//!  - [`web::routes`]: exact `(method, path)` routing with a plain-text 404 fallback.
//!  - [`web::handlers`]: decode, validate, call the store, answer with the JSON envelope.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod server;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::db::ProductStore;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
