//! # catalog-core
//!
//! Domain types and contracts for the product catalog: reference entities,
//! nested product records, listing criteria, pagination, errors, config,
//! and the `ICatalogStorage` trait implemented by storage backends.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::CatalogConfig;
pub use errors::{CatalogError, CatalogResult};
