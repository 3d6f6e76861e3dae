// product_crud/src/web/handlers/product_handlers.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::field::Empty;
use tracing::{info, instrument, Span};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::envelope::Envelope;
use crate::web::payload;

#[derive(Deserialize, Debug)]
pub struct GetProductQuery {
  pub id: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CreatedProduct {
  pub id: i64,
}

async fn read_limited(app_state: &AppState, body: web::Payload) -> Result<web::BytesMut, AppError> {
  let body = payload::read_body(body, app_state.config.max_body_bytes).await?;
  Span::current().record("body_len", body.len() as u64);
  Ok(body)
}

#[instrument(name = "handler::get_product", skip(app_state, req), fields(query = %req.query_string()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  // Duplicate or undecodable parameters count as a missing id.
  let query = web::Query::<GetProductQuery>::from_query(req.query_string())
    .map_err(|_| AppError::Validation(payload::MISSING_PRODUCT_ID.to_string()))?;
  let product_id = payload::query_id(query.id.as_deref())?;

  let product = app_state.store.get(product_id).await?;
  info!(product_id, "Product fetched successfully.");

  Ok(Envelope::with_data(StatusCode::OK, "Success", product).into_response())
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list().await?;
  info!("Successfully fetched {} products.", products.len());

  Ok(Envelope::with_data(StatusCode::OK, "Success", products).into_response())
}

#[instrument(name = "handler::create_product", skip(app_state, body), fields(body_len = Empty))]
pub async fn create_product_handler(app_state: web::Data<AppState>, body: web::Payload) -> Result<HttpResponse, AppError> {
  let body = read_limited(&app_state, body).await?;
  let object = payload::json_object(&body)?;
  let new_product = payload::product_fields(&object)?;

  let id = app_state.store.create(&new_product).await?;
  info!(product_id = id, "Product created.");

  Ok(Envelope::with_data(StatusCode::CREATED, "Product created", CreatedProduct { id }).into_response())
}

#[instrument(name = "handler::update_product", skip(app_state, body), fields(body_len = Empty))]
pub async fn update_product_handler(app_state: web::Data<AppState>, body: web::Payload) -> Result<HttpResponse, AppError> {
  let body = read_limited(&app_state, body).await?;
  let object = payload::json_object(&body)?;
  let product_id = payload::body_id(&object)?;
  let changes = payload::product_fields(&object)?;

  app_state.store.update(product_id, &changes).await?;
  info!(product_id, "Product updated.");

  Ok(Envelope::<()>::without_data(StatusCode::OK, "Product updated").into_response())
}

#[instrument(name = "handler::delete_product", skip(app_state, body), fields(body_len = Empty))]
pub async fn delete_product_handler(app_state: web::Data<AppState>, body: web::Payload) -> Result<HttpResponse, AppError> {
  let body = read_limited(&app_state, body).await?;
  let object = payload::json_object(&body)?;
  let product_id = payload::body_id(&object)?;

  app_state.store.delete(product_id).await?;
  info!(product_id, "Product deleted.");

  Ok(Envelope::<()>::without_data(StatusCode::OK, "Product deleted").into_response())
}

/// Fallback for every request the route table does not match, including a
/// known path with the wrong method.
pub async fn not_found_handler(req: HttpRequest) -> HttpResponse {
  tracing::debug!(method = %req.method(), path = %req.path(), "No route matched.");
  HttpResponse::NotFound()
    .content_type(ContentType::plaintext())
    .body("Not Found")
}
