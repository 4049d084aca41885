//! Catalog query planner: the filtered page fetch and its count.
//!
//! The page is cut over distinct product ids first and only then joined to
//! spaces, so `LIMIT` bounds products rather than join rows.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use catalog_core::errors::CatalogResult;
use catalog_core::models::PageWindow;

use super::aggregation::JoinRow;
use super::filter::{FilterPredicate, CATALOG_FROM};
use crate::to_storage_err;

/// Join-row projection, one row per (product, space) or one row with NULL
/// space columns for a product without spaces.
const JOIN_ROW_SELECT: &str = "
    SELECT p.id, p.name, p.description, p.is_active, p.images,
           m.id, m.name, b.id, b.name,
           s.id, s.name, s.description, s.image
    FROM products p
    JOIN models m ON m.id = p.model_id
    LEFT JOIN brands b ON b.id = p.brand_id
    LEFT JOIN products_in_spaces ps ON ps.product_id = p.id
    LEFT JOIN spaces s ON s.id = ps.space_id";

/// Products by id, spaces in link insertion order.
const JOIN_ROW_ORDER: &str = " ORDER BY p.id, ps.rowid";

/// Count distinct products matching the predicate.
pub fn count_products(conn: &Connection, predicate: &FilterPredicate) -> CatalogResult<u64> {
    let sql = format!(
        "SELECT COUNT(DISTINCT p.id){CATALOG_FROM}{}",
        predicate.where_clause()
    );
    let count: i64 = conn
        .query_row(&sql, params_from_iter(predicate.params()), |row| row.get(0))
        .map_err(to_storage_err)?;
    Ok(count.max(0) as u64)
}

/// Join rows for the products in `window`, after filtering.
pub fn fetch_page_rows(
    conn: &Connection,
    predicate: &FilterPredicate,
    window: PageWindow,
) -> CatalogResult<Vec<JoinRow>> {
    let sql = format!(
        "{JOIN_ROW_SELECT}
         WHERE p.id IN (
             SELECT p.id{CATALOG_FROM}{}
             ORDER BY p.id
             LIMIT ? OFFSET ?
         ){JOIN_ROW_ORDER}",
        predicate.where_clause()
    );

    let mut bound: Vec<Value> = predicate.params().to_vec();
    bound.push(Value::Integer(i64::from(window.limit)));
    bound.push(Value::Integer(window.offset() as i64));

    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params_from_iter(bound.iter()), map_join_row)
        .map_err(to_storage_err)?;
    collect_rows(rows)
}

/// Join rows for every product.
pub fn fetch_all_rows(conn: &Connection) -> CatalogResult<Vec<JoinRow>> {
    let sql = format!("{JOIN_ROW_SELECT}{JOIN_ROW_ORDER}");
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt.query_map([], map_join_row).map_err(to_storage_err)?;
    collect_rows(rows)
}

/// Join rows for a single product id.
pub fn fetch_rows_by_id(conn: &Connection, id: i64) -> CatalogResult<Vec<JoinRow>> {
    let sql = format!("{JOIN_ROW_SELECT} WHERE p.id = ?1{JOIN_ROW_ORDER}");
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![id], map_join_row)
        .map_err(to_storage_err)?;
    collect_rows(rows)
}

/// Join rows for a product by exact name.
pub fn fetch_rows_by_name(conn: &Connection, name: &str) -> CatalogResult<Vec<JoinRow>> {
    let sql = format!("{JOIN_ROW_SELECT} WHERE p.name = ?1{JOIN_ROW_ORDER}");
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![name], map_join_row)
        .map_err(to_storage_err)?;
    collect_rows(rows)
}

/// Shared row mapper for join-row queries.
fn map_join_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<JoinRow> {
    Ok(JoinRow {
        product_id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        is_active: row.get(3)?,
        images: row.get(4)?,
        model_id: row.get(5)?,
        model_name: row.get(6)?,
        brand_id: row.get(7)?,
        brand_name: row.get(8)?,
        space_id: row.get(9)?,
        space_name: row.get(10)?,
        space_description: row.get(11)?,
        space_image: row.get(12)?,
    })
}

fn collect_rows(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<JoinRow>>,
) -> CatalogResult<Vec<JoinRow>> {
    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(to_storage_err)?);
    }
    Ok(result)
}
