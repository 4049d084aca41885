//! Product writes and single-product lookups.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use catalog_core::errors::{CatalogError, CatalogResult};
use catalog_core::models::{NewProduct, Product};

use super::aggregation::aggregate;
use super::product_query;
use crate::transaction::in_transaction;
use crate::{constraint_violation, to_storage_err, Constraint};

/// Create a product and its space links in one transaction.
///
/// Either the product row and every link commit, or nothing does.
pub fn create_product(conn: &mut Connection, input: &NewProduct) -> CatalogResult<Product> {
    in_transaction(conn, |tx| {
        let product_id = insert_product(tx, input)?;
        let space_ids = input.distinct_space_ids();
        insert_space_links(tx, product_id, &space_ids)?;
        debug!(product_id, links = space_ids.len(), "product staged");
        get_product(tx, product_id)
    })
}

/// Insert the product row. Returns the generated id.
pub fn insert_product(conn: &Connection, input: &NewProduct) -> CatalogResult<i64> {
    let images_json = serde_json::to_string(&input.images)?;

    let result = conn.execute(
        "INSERT INTO products (name, description, is_active, images, model_id, brand_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            input.name,
            input.description,
            input.is_active,
            images_json,
            input.model_id,
            input.brand_id,
        ],
    );

    match result {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) => match constraint_violation(&e) {
            Some(Constraint::Unique) => Err(CatalogError::AlreadyExists {
                entity: "product",
                name: input.name.clone(),
            }),
            Some(Constraint::ForeignKey) => Err(unresolved_product_reference(conn, input)?),
            None => Err(to_storage_err(e)),
        },
    }
}

/// Work out which of model_id / brand_id failed to resolve.
fn unresolved_product_reference(conn: &Connection, input: &NewProduct) -> CatalogResult<CatalogError> {
    if !row_exists(conn, "models", input.model_id)? {
        return Ok(CatalogError::InvalidReference {
            field: "model_id",
            id: input.model_id,
        });
    }
    match input.brand_id {
        Some(brand_id) if !row_exists(conn, "brands", brand_id)? => {
            Ok(CatalogError::InvalidReference {
                field: "brand_id",
                id: brand_id,
            })
        }
        _ => Ok(CatalogError::InvalidArgument(
            "product references could not be resolved".to_string(),
        )),
    }
}

/// Link a product to each space id. Ids must already be distinct.
pub fn insert_space_links(
    conn: &Connection,
    product_id: i64,
    space_ids: &[i64],
) -> CatalogResult<usize> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO products_in_spaces (product_id, space_id) VALUES (?1, ?2)")
        .map_err(to_storage_err)?;

    let mut count = 0;
    for &space_id in space_ids {
        stmt.execute(params![product_id, space_id]).map_err(|e| {
            match constraint_violation(&e) {
                Some(Constraint::ForeignKey) => CatalogError::InvalidReference {
                    field: "space_ids",
                    id: space_id,
                },
                _ => to_storage_err(e),
            }
        })?;
        count += 1;
    }
    Ok(count)
}

/// Get a single product by id, with model, brand and spaces.
pub fn get_product(conn: &Connection, id: i64) -> CatalogResult<Product> {
    let rows = product_query::fetch_rows_by_id(conn, id)?;
    aggregate(rows)?
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::not_found("product", id))
}

/// Get a single product by exact name.
pub fn get_product_by_name(conn: &Connection, name: &str) -> CatalogResult<Product> {
    let rows = product_query::fetch_rows_by_name(conn, name)?;
    aggregate(rows)?
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::not_found("product", name))
}

/// Every product, nested, ordered by id.
pub fn list_all_products(conn: &Connection) -> CatalogResult<Vec<Product>> {
    aggregate(product_query::fetch_all_rows(conn)?)
}

fn row_exists(conn: &Connection, table: &'static str, id: i64) -> CatalogResult<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE id = ?1");
    let found = conn
        .query_row(&sql, params![id], |_| Ok(()))
        .optional()
        .map_err(to_storage_err)?;
    Ok(found.is_some())
}
