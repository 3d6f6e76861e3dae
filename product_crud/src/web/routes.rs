// product_crud/src/web/routes.rs

use actix_web::{web, Resource, Route};

use crate::web::handlers::{not_found_handler, product_handlers};

/// One exact-match `(method, path)` entry. Any other method on the same path
/// falls through to the plain-text 404 rather than actix's default 405.
fn exact(path: &str, route: Route) -> Resource {
  web::resource(path)
    .route(route)
    .default_service(web::to(not_found_handler))
}

// This function will be called in `server.rs` (and by the tests) to build the router.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(exact(
      "/api/product/get",
      web::get().to(product_handlers::get_product_handler),
    ))
    .service(exact(
      "/api/product/list",
      web::get().to(product_handlers::list_products_handler),
    ))
    .service(exact(
      "/api/product/create",
      web::post().to(product_handlers::create_product_handler),
    ))
    .service(exact(
      "/api/product/update",
      web::post().to(product_handlers::update_product_handler),
    ))
    .service(exact(
      "/api/product/delete",
      web::post().to(product_handlers::delete_product_handler),
    ))
    .default_service(web::to(not_found_handler));
}
