//! Brand, model and space CRUD. Single-table, no aggregation.

use rusqlite::{params, Connection};

use catalog_core::errors::{CatalogError, CatalogResult};
use catalog_core::models::{Brand, Model, NewBrand, NewModel, NewSpace, Space};

use crate::{constraint_violation, to_storage_err, Constraint};

pub fn create_brand(conn: &Connection, input: &NewBrand) -> CatalogResult<Brand> {
    conn.execute(
        "INSERT INTO brands (name, description, logo_image, is_active) VALUES (?1, ?2, ?3, ?4)",
        params![input.name, input.description, input.logo_image, input.is_active],
    )
    .map_err(|e| unique_or_storage(e, "brand", &input.name))?;

    Ok(Brand {
        id: conn.last_insert_rowid(),
        name: input.name.clone(),
        description: input.description.clone(),
        logo_image: input.logo_image.clone(),
        is_active: input.is_active,
    })
}

pub fn list_brands(conn: &Connection) -> CatalogResult<Vec<Brand>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, description, logo_image, is_active FROM brands ORDER BY id",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Brand {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                logo_image: row.get(3)?,
                is_active: row.get(4)?,
            })
        })
        .map_err(to_storage_err)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(to_storage_err)?);
    }
    Ok(result)
}

pub fn create_model(conn: &Connection, input: &NewModel) -> CatalogResult<Model> {
    conn.execute(
        "INSERT INTO models (name, description, image, is_active) VALUES (?1, ?2, ?3, ?4)",
        params![input.name, input.description, input.image, input.is_active],
    )
    .map_err(|e| unique_or_storage(e, "model", &input.name))?;

    Ok(Model {
        id: conn.last_insert_rowid(),
        name: input.name.clone(),
        description: input.description.clone(),
        image: input.image.clone(),
        is_active: input.is_active,
    })
}

pub fn list_models(conn: &Connection) -> CatalogResult<Vec<Model>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, description, image, is_active FROM models ORDER BY id")
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Model {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                image: row.get(3)?,
                is_active: row.get(4)?,
            })
        })
        .map_err(to_storage_err)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(to_storage_err)?);
    }
    Ok(result)
}

pub fn create_space(conn: &Connection, input: &NewSpace) -> CatalogResult<Space> {
    conn.execute(
        "INSERT INTO spaces (name, description, image) VALUES (?1, ?2, ?3)",
        params![input.name, input.description, input.image],
    )
    .map_err(|e| unique_or_storage(e, "space", &input.name))?;

    Ok(Space {
        id: conn.last_insert_rowid(),
        name: input.name.clone(),
        description: input.description.clone(),
        image: input.image.clone(),
    })
}

pub fn list_spaces(conn: &Connection) -> CatalogResult<Vec<Space>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, description, image FROM spaces ORDER BY id")
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Space {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                image: row.get(3)?,
            })
        })
        .map_err(to_storage_err)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(to_storage_err)?);
    }
    Ok(result)
}

fn unique_or_storage(e: rusqlite::Error, entity: &'static str, name: &str) -> CatalogError {
    match constraint_violation(&e) {
        Some(Constraint::Unique) => CatalogError::AlreadyExists {
            entity,
            name: name.to_string(),
        },
        _ => to_storage_err(e),
    }
}
