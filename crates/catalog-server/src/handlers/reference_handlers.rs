//! Brand, model and space routes.
//!
//! Brand and space listings also answer on `/all`, the path older clients use.

use actix_web::{get, post, routes, web, HttpResponse};
use serde::Serialize;

use catalog_core::models::{Brand, Model, NewBrand, NewModel, NewSpace, Space};
use catalog_core::traits::ICatalogStorage;
use catalog_storage::CatalogEngine;

use super::Envelope;
use crate::errors::{ApiError, ApiResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/brands")
            .service(list_brands)
            .service(create_brand),
    )
    .service(
        web::scope("/models")
            .service(list_models)
            .service(create_model),
    )
    .service(
        web::scope("/spaces")
            .service(list_spaces)
            .service(create_space),
    );
}

fn require_name(name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    Ok(())
}

#[derive(Serialize)]
struct BrandsPayload {
    brands: Vec<Brand>,
}

#[derive(Serialize)]
struct BrandPayload {
    brand: Brand,
}

#[derive(Serialize)]
struct ModelsPayload {
    models: Vec<Model>,
}

#[derive(Serialize)]
struct ModelPayload {
    model: Model,
}

#[derive(Serialize)]
struct SpacesPayload {
    spaces: Vec<Space>,
}

#[derive(Serialize)]
struct SpacePayload {
    space: Space,
}

#[routes]
#[get("")]
#[get("/all")]
async fn list_brands(engine: web::Data<CatalogEngine>) -> ApiResult<HttpResponse> {
    let brands = engine.list_brands().await?;
    Ok(HttpResponse::Ok().json(Envelope::new(
        "Brands obtained successfully",
        BrandsPayload { brands },
    )))
}

#[post("")]
async fn create_brand(
    engine: web::Data<CatalogEngine>,
    body: web::Json<NewBrand>,
) -> ApiResult<HttpResponse> {
    require_name(&body.name)?;
    let brand = engine.create_brand(&body).await?;
    Ok(HttpResponse::Created().json(Envelope::new(
        "Brand created successfully",
        BrandPayload { brand },
    )))
}

#[get("")]
async fn list_models(engine: web::Data<CatalogEngine>) -> ApiResult<HttpResponse> {
    let models = engine.list_models().await?;
    Ok(HttpResponse::Ok().json(Envelope::new(
        "Models obtained successfully",
        ModelsPayload { models },
    )))
}

#[post("")]
async fn create_model(
    engine: web::Data<CatalogEngine>,
    body: web::Json<NewModel>,
) -> ApiResult<HttpResponse> {
    require_name(&body.name)?;
    let model = engine.create_model(&body).await?;
    Ok(HttpResponse::Created().json(Envelope::new(
        "Model created successfully",
        ModelPayload { model },
    )))
}

#[routes]
#[get("")]
#[get("/all")]
async fn list_spaces(engine: web::Data<CatalogEngine>) -> ApiResult<HttpResponse> {
    let spaces = engine.list_spaces().await?;
    Ok(HttpResponse::Ok().json(Envelope::new(
        "Spaces obtained successfully",
        SpacesPayload { spaces },
    )))
}

#[post("")]
async fn create_space(
    engine: web::Data<CatalogEngine>,
    body: web::Json<NewSpace>,
) -> ApiResult<HttpResponse> {
    require_name(&body.name)?;
    let space = engine.create_space(&body).await?;
    Ok(HttpResponse::Created().json(Envelope::new(
        "Space created successfully",
        SpacePayload { space },
    )))
}
