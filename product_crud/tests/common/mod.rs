// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test as actix_test, web, App};
use once_cell::sync::Lazy;
use product_crud::web::configure_app_routes;
use product_crud::{AppConfig, AppState, ProductStore};
use serde_json::Value;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub async fn fresh_store() -> ProductStore {
  ProductStore::in_memory().await.expect("in-memory store")
}

/// Defaults for every setting, as if the environment were empty.
pub fn default_config() -> AppConfig {
  AppConfig::from_lookup(|_| None).expect("default configuration")
}

/// The production router over the given store, without the server wrapper.
pub fn test_app(
  store: ProductStore,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  test_app_with(store, default_config())
}

pub fn test_app_with(
  store: ProductStore,
  config: AppConfig,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(AppState::new(store, Arc::new(config))))
    .configure(configure_app_routes)
}

pub fn post_raw(uri: &str, body: &'static str) -> actix_test::TestRequest {
  actix_test::TestRequest::post()
    .uri(uri)
    .insert_header(("content-type", "application/json"))
    .set_payload(body)
}

pub fn post_json(uri: &str, body: &Value) -> actix_test::TestRequest {
  actix_test::TestRequest::post().uri(uri).set_json(body)
}

pub fn get(uri: &str) -> actix_test::TestRequest {
  actix_test::TestRequest::get().uri(uri)
}

pub async fn json_body<B: MessageBody>(response: ServiceResponse<B>) -> Value {
  let body = actix_test::read_body(response).await;
  serde_json::from_slice(&body).expect("JSON envelope")
}
