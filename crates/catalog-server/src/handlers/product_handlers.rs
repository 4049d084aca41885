//! Product routes: paginated listing, full listing, lookups, creation.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_core::config::QueryConfig;
use catalog_core::models::{CatalogCriteria, CatalogPage, EntityRef, NewProduct, Product};
use catalog_core::traits::ICatalogStorage;
use catalog_storage::CatalogEngine;

use super::Envelope;
use crate::errors::{ApiError, ApiResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .service(list_products)
            .service(list_all_products)
            .service(get_product)
            .service(create_product),
    );
}

/// Query string of `GET /products`.
///
/// `brand`, `model` and `space` accept either an id or an exact name.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub space: Option<String>,
    pub name: Option<String>,
}

impl ProductQuery {
    pub fn into_criteria(self, defaults: &QueryConfig) -> CatalogCriteria {
        CatalogCriteria {
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(defaults.default_limit),
            brand: entity_ref(self.brand),
            model: entity_ref(self.model),
            space: entity_ref(self.space),
            name: self.name,
        }
    }
}

fn entity_ref(raw: Option<String>) -> Option<EntityRef> {
    raw.filter(|s| !s.trim().is_empty())
        .and_then(|s| s.parse().ok())
}

#[derive(Serialize)]
struct ProductsPayload {
    products: Vec<Product>,
}

#[derive(Serialize)]
struct ProductPayload {
    product: Product,
}

#[get("")]
async fn list_products(
    engine: web::Data<CatalogEngine>,
    query: web::Query<ProductQuery>,
) -> ApiResult<HttpResponse> {
    let criteria = query.into_inner().into_criteria(engine.query_config());
    debug!(?criteria, "listing products");

    let page: CatalogPage = engine.list_products(&criteria).await?;
    let message = if page.paginate.total_items == 0 {
        "No products found"
    } else {
        "Products obtained successfully"
    };
    Ok(HttpResponse::Ok().json(Envelope::new(message, page)))
}

#[get("/all")]
async fn list_all_products(engine: web::Data<CatalogEngine>) -> ApiResult<HttpResponse> {
    let products = engine.list_all_products().await?;
    Ok(HttpResponse::Ok().json(Envelope::new(
        "Products obtained successfully",
        ProductsPayload { products },
    )))
}

#[get("/{id}")]
async fn get_product(
    engine: web::Data<CatalogEngine>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let product = engine.get_product(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Envelope::new(
        "Product obtained successfully",
        ProductPayload { product },
    )))
}

#[post("")]
async fn create_product(
    engine: web::Data<CatalogEngine>,
    body: web::Json<NewProduct>,
) -> ApiResult<HttpResponse> {
    let input = body.into_inner();
    if input.name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }

    let product = engine.create_product(&input).await?;
    Ok(HttpResponse::Created().json(Envelope::new(
        "Product created successfully",
        ProductPayload { product },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_window_falls_back_to_defaults() {
        let criteria = ProductQuery::default().into_criteria(&QueryConfig::default());
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.limit, QueryConfig::default().default_limit);
        assert!(criteria.brand.is_none());
    }

    #[test]
    fn filters_parse_as_id_or_name() {
        let query = ProductQuery {
            brand: Some("7".into()),
            model: Some("Chair".into()),
            space: Some("  ".into()),
            ..Default::default()
        };
        let criteria = query.into_criteria(&QueryConfig::default());
        assert_eq!(criteria.brand, Some(EntityRef::Id(7)));
        assert_eq!(criteria.model, Some(EntityRef::Name("Chair".into())));
        assert_eq!(criteria.space, None);
    }
}
