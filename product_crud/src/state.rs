// product_crud/src/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::ProductStore;

/// Shared with every handler through `web::Data`. Holds no request state.
#[derive(Clone, Debug)]
pub struct AppState {
  pub store: ProductStore,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(store: ProductStore, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }
}
