// product_crud/src/web/handlers/mod.rs

pub mod product_handlers;

pub use product_handlers::not_found_handler;
