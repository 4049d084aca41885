//! `CatalogEngine`: the storage engine implementing `ICatalogStorage`.
//!
//! Owns the `ConnectionPool`. Reads go through `with_reader()`, writes
//! through `with_writer()`; query modules only ever see a borrowed
//! connection.

use std::path::Path;

use tracing::{debug, info, warn};

use catalog_core::config::{CatalogConfig, QueryConfig, StorageConfig};
use catalog_core::errors::CatalogResult;
use catalog_core::models::{
    Brand, CatalogCriteria, CatalogPage, Model, NewBrand, NewModel, NewProduct, NewSpace,
    Product, Space,
};
use catalog_core::traits::ICatalogStorage;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::aggregation::aggregate;
use crate::queries::filter::FilterPredicate;
use crate::queries::{product_crud, product_query, reference_ops};
use crate::transaction::in_read_snapshot;

pub struct CatalogEngine {
    pool: ConnectionPool,
    query: QueryConfig,
}

impl CatalogEngine {
    /// Open the engine described by `config`: file-backed when
    /// `storage.db_path` is set, in-memory otherwise.
    pub fn open(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        let pool = match &config.storage.db_path {
            Some(path) => ConnectionPool::open(Path::new(path), &config.storage)?,
            None => ConnectionPool::open_in_memory(&config.storage)?,
        };
        Self::with_pool(pool, config.query.clone())
    }

    /// Open an in-memory engine (for testing).
    pub fn open_in_memory() -> CatalogResult<Self> {
        let pool = ConnectionPool::open_in_memory(&StorageConfig::default())?;
        Self::with_pool(pool, QueryConfig::default())
    }

    fn with_pool(mut pool: ConnectionPool, query: QueryConfig) -> CatalogResult<Self> {
        let applied = migrations::run_migrations(pool.writer_mut())?;
        info!(
            path = ?pool.path(),
            readers = pool.reader_count(),
            migrations = applied,
            "catalog storage opened"
        );
        Ok(Self { pool, query })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn query_config(&self) -> &QueryConfig {
        &self.query
    }
}

impl ICatalogStorage for CatalogEngine {
    async fn list_products(&self, criteria: &CatalogCriteria) -> CatalogResult<CatalogPage> {
        let window = criteria.window(self.query.max_limit)?;
        let predicate = FilterPredicate::from_criteria(criteria);

        let (total, items) = self
            .pool
            .with_reader(|conn| {
                in_read_snapshot(conn, |conn| {
                    let total = product_query::count_products(conn, &predicate)?;
                    let rows = product_query::fetch_page_rows(conn, &predicate, window)?;
                    Ok((total, aggregate(rows)?))
                })
            })
            .await?;

        debug!(
            page = window.page,
            limit = window.limit,
            total,
            returned = items.len(),
            "listed products"
        );
        Ok(CatalogPage::new(window, total, items))
    }

    async fn list_all_products(&self) -> CatalogResult<Vec<Product>> {
        self.pool
            .with_reader(product_crud::list_all_products)
            .await
    }

    async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        self.pool
            .with_reader(|conn| product_crud::get_product(conn, id))
            .await
    }

    async fn get_product_by_name(&self, name: &str) -> CatalogResult<Product> {
        self.pool
            .with_reader(|conn| product_crud::get_product_by_name(conn, name))
            .await
    }

    async fn create_product(&self, input: &NewProduct) -> CatalogResult<Product> {
        let result = self
            .pool
            .with_writer(|conn| product_crud::create_product(conn, input))
            .await;

        match &result {
            Ok(product) => info!(
                product_id = product.id,
                spaces = product.spaces.len(),
                "product created"
            ),
            Err(e) => warn!(name = %input.name, error = %e, "product creation rolled back"),
        }
        result
    }

    async fn create_brand(&self, input: &NewBrand) -> CatalogResult<Brand> {
        self.pool
            .with_writer(|conn| reference_ops::create_brand(conn, input))
            .await
    }

    async fn list_brands(&self) -> CatalogResult<Vec<Brand>> {
        self.pool.with_reader(reference_ops::list_brands).await
    }

    async fn create_model(&self, input: &NewModel) -> CatalogResult<Model> {
        self.pool
            .with_writer(|conn| reference_ops::create_model(conn, input))
            .await
    }

    async fn list_models(&self) -> CatalogResult<Vec<Model>> {
        self.pool.with_reader(reference_ops::list_models).await
    }

    async fn create_space(&self, input: &NewSpace) -> CatalogResult<Space> {
        self.pool
            .with_writer(|conn| reference_ops::create_space(conn, input))
            .await
    }

    async fn list_spaces(&self) -> CatalogResult<Vec<Space>> {
        self.pool.with_reader(reference_ops::list_spaces).await
    }
}
