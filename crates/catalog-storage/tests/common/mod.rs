//! Shared fixtures for catalog-storage integration tests.
#![allow(dead_code)]

use catalog_core::models::{Brand, Model, NewBrand, NewModel, NewProduct, NewSpace, Product, Space};
use catalog_core::traits::ICatalogStorage;
use catalog_storage::CatalogEngine;

pub struct Fixture {
    pub engine: CatalogEngine,
    pub acme: Brand,
    pub globex: Brand,
    pub chair: Model,
    pub table: Model,
    pub kitchen: Space,
    pub office: Space,
    pub garden: Space,
}

pub fn brand(name: &str) -> NewBrand {
    NewBrand {
        name: name.to_string(),
        description: format!("{name} furniture"),
        logo_image: format!("{}.svg", name.to_lowercase()),
        is_active: true,
    }
}

pub fn model(name: &str) -> NewModel {
    NewModel {
        name: name.to_string(),
        description: format!("{name} line"),
        image: format!("{}.png", name.to_lowercase()),
        is_active: true,
    }
}

pub fn space(name: &str) -> NewSpace {
    NewSpace {
        name: name.to_string(),
        description: format!("the {name}"),
        image: format!("{}.jpg", name.to_lowercase()),
    }
}

pub fn product(name: &str, model_id: i64, brand_id: Option<i64>, space_ids: &[i64]) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{name} description"),
        is_active: true,
        images: vec![format!("{}-1.jpg", name.to_lowercase())],
        model_id,
        brand_id,
        space_ids: space_ids.to_vec(),
    }
}

/// Engine with two brands, two models and three spaces, no products.
pub async fn reference_fixture(engine: CatalogEngine) -> Fixture {
    let acme = engine.create_brand(&brand("Acme")).await.unwrap();
    let globex = engine.create_brand(&brand("Globex")).await.unwrap();
    let chair = engine.create_model(&model("Chair")).await.unwrap();
    let table = engine.create_model(&model("Table")).await.unwrap();
    let kitchen = engine.create_space(&space("Kitchen")).await.unwrap();
    let office = engine.create_space(&space("Office")).await.unwrap();
    let garden = engine.create_space(&space("Garden")).await.unwrap();
    Fixture {
        engine,
        acme,
        globex,
        chair,
        table,
        kitchen,
        office,
        garden,
    }
}

pub async fn in_memory_fixture() -> Fixture {
    reference_fixture(CatalogEngine::open_in_memory().unwrap()).await
}

/// Catalog used by listing tests:
///
/// | name          | brand  | model | spaces                 |
/// |---------------|--------|-------|------------------------|
/// | Acme Stool    | Acme   | Chair | Kitchen, Office        |
/// | Acme Armchair | Acme   | Chair | Office, Garden, Kitchen|
/// | Acme Desk     | Acme   | Table | (none)                 |
/// | Globex Bench  | Globex | Chair | Garden                 |
/// | Plain Table   | (none) | Table | Kitchen                |
pub async fn catalog_fixture() -> (Fixture, Vec<Product>) {
    let f = in_memory_fixture().await;
    let inputs = vec![
        product("Acme Stool", f.chair.id, Some(f.acme.id), &[f.kitchen.id, f.office.id]),
        product(
            "Acme Armchair",
            f.chair.id,
            Some(f.acme.id),
            &[f.office.id, f.garden.id, f.kitchen.id],
        ),
        product("Acme Desk", f.table.id, Some(f.acme.id), &[]),
        product("Globex Bench", f.chair.id, Some(f.globex.id), &[f.garden.id]),
        product("Plain Table", f.table.id, None, &[f.kitchen.id]),
    ];
    let mut created = Vec::new();
    for input in &inputs {
        created.push(f.engine.create_product(input).await.unwrap());
    }
    (f, created)
}

pub fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

pub fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}
