//! ICatalogStorage: the catalog's contract with its storage backend.

use crate::errors::CatalogResult;
use crate::models::{
    Brand, CatalogCriteria, CatalogPage, Model, NewBrand, NewModel, NewProduct, NewSpace,
    Product, Space,
};

/// Catalog reads and writes.
///
/// Listings return an empty, well-formed page when nothing matches;
/// single-entity lookups return `NotFound`.
#[allow(async_fn_in_trait)]
pub trait ICatalogStorage: Send + Sync {
    // Products
    async fn list_products(&self, criteria: &CatalogCriteria) -> CatalogResult<CatalogPage>;
    async fn list_all_products(&self) -> CatalogResult<Vec<Product>>;
    async fn get_product(&self, id: i64) -> CatalogResult<Product>;
    async fn get_product_by_name(&self, name: &str) -> CatalogResult<Product>;
    /// Product row and its space links commit together or not at all.
    async fn create_product(&self, input: &NewProduct) -> CatalogResult<Product>;

    // Reference entities
    async fn create_brand(&self, input: &NewBrand) -> CatalogResult<Brand>;
    async fn list_brands(&self) -> CatalogResult<Vec<Brand>>;
    async fn create_model(&self, input: &NewModel) -> CatalogResult<Model>;
    async fn list_models(&self) -> CatalogResult<Vec<Model>>;
    async fn create_space(&self, input: &NewSpace) -> CatalogResult<Space>;
    async fn list_spaces(&self) -> CatalogResult<Vec<Space>>;
}
