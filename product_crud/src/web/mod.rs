// product_crud/src/web/mod.rs

pub mod envelope;
pub mod handlers;
pub mod payload;
pub mod routes;

pub use routes::configure_app_routes;
