// product_crud/src/web/payload.rs

//! Decoding and type checks for product request bodies and query strings.
//!
//! Bodies are decoded into a loose JSON object first so each defect maps to
//! its own client message instead of a generic deserializer error.

use actix_web::web;
use futures_util::StreamExt;
use serde_json::{Map, Value};

use crate::errors::{AppError, Result};
use crate::models::NewProduct;

pub const MISSING_PRODUCT_ID: &str = "Missing product id";
pub const INVALID_PRODUCT_ID: &str = "Invalid product id";
pub const EMPTY_BODY: &str = "Empty request body";
pub const INVALID_JSON: &str = "Invalid JSON";
pub const MISSING_OR_INVALID_ID: &str = "Missing or invalid product id";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_FIELD_VALUE: &str = "Invalid field value";
pub const BODY_TOO_LARGE: &str = "Request body too large";
pub const UNREADABLE_BODY: &str = "Unreadable request body";

fn invalid(message: &str) -> AppError {
  AppError::Validation(message.to_string())
}

/// Parses the `id` query parameter of a lookup.
pub fn query_id(raw: Option<&str>) -> Result<i64> {
  let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| invalid(MISSING_PRODUCT_ID))?;
  raw.parse::<i64>().map_err(|_| invalid(INVALID_PRODUCT_ID))
}

/// Collects the request body, refusing to buffer more than `limit` bytes.
pub async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut> {
  let mut body = web::BytesMut::new();
  while let Some(chunk) = payload.next().await {
    let chunk = chunk.map_err(|e| {
      tracing::debug!(error = %e, "Request body stream failed.");
      invalid(UNREADABLE_BODY)
    })?;
    if body.len() + chunk.len() > limit {
      return Err(invalid(BODY_TOO_LARGE));
    }
    body.extend_from_slice(&chunk);
  }
  Ok(body)
}

/// Decodes a request body that must be a JSON object. Only a zero-length
/// body is "empty"; whitespace is handed to the parser.
pub fn json_object(body: &[u8]) -> Result<Map<String, Value>> {
  if body.is_empty() {
    return Err(invalid(EMPTY_BODY));
  }
  match serde_json::from_slice::<Value>(body) {
    Ok(Value::Object(map)) => Ok(map),
    Ok(_) | Err(_) => Err(invalid(INVALID_JSON)),
  }
}

/// The integer `id` field of an update or delete body.
pub fn body_id(object: &Map<String, Value>) -> Result<i64> {
  object
    .get("id")
    .and_then(Value::as_i64)
    .ok_or_else(|| invalid(MISSING_OR_INVALID_ID))
}

/// Extracts the writable product fields, applying the defaults for the
/// optional ones (`description` → `""`, `stock` → `0`).
pub fn product_fields(object: &Map<String, Value>) -> Result<NewProduct> {
  let name = match object.get("name") {
    Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
    _ => return Err(invalid(MISSING_REQUIRED_FIELDS)),
  };
  let price = object
    .get("price")
    .and_then(Value::as_f64)
    .ok_or_else(|| invalid(MISSING_REQUIRED_FIELDS))?;
  if price < 0.0 {
    return Err(invalid(INVALID_FIELD_VALUE));
  }

  let description = match object.get("description") {
    None | Some(Value::Null) => String::new(),
    Some(Value::String(description)) => description.clone(),
    Some(_) => return Err(invalid(INVALID_FIELD_VALUE)),
  };
  let stock = match object.get("stock") {
    None | Some(Value::Null) => 0,
    Some(value) => value.as_i64().ok_or_else(|| invalid(INVALID_FIELD_VALUE))?,
  };

  Ok(NewProduct {
    name,
    description,
    price,
    stock,
  })
}
