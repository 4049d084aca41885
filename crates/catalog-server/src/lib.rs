//! # catalog-server
//!
//! actix-web dispatcher over `CatalogEngine`. Handlers deserialize input,
//! call the engine, and wrap results in `{ message, ... }` envelopes;
//! `ApiError` turns `CatalogError` into a status code.

pub mod errors;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use errors::{ApiError, ApiResult};

/// Register every catalog route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(handlers::product_handlers::configure)
        .configure(handlers::reference_handlers::configure);
}
