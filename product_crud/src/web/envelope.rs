// product_crud/src/web/envelope.rs

//! The uniform `{"code", "message", "data"}` body every JSON response uses.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
  #[serde(skip)]
  status: StatusCode,
  pub code: u16,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
  pub fn with_data(status: StatusCode, message: impl Into<String>, data: T) -> Self {
    Self {
      status,
      code: status.as_u16(),
      message: message.into(),
      data: Some(data),
    }
  }

  pub fn into_response(self) -> HttpResponse {
    HttpResponse::build(self.status).json(self)
  }
}

impl Envelope<()> {
  pub fn without_data(status: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status,
      code: status.as_u16(),
      message: message.into(),
      data: None,
    }
  }
}
