//! End-to-end route tests against an in-memory engine.

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use catalog_server::middleware::LoggingMiddleware;
use catalog_storage::CatalogEngine;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(LoggingMiddleware)
                .app_data(web::Data::new(CatalogEngine::open_in_memory().unwrap()))
                .configure(catalog_server::configure),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! get {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn create_then_list_with_filters() {
    let app = app!();

    let resp = post_json!(
        app,
        "/brands",
        json!({"name": "Acme", "description": "", "logoImage": "a.svg", "isActive": true})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let brand: Value = test::read_body_json(resp).await;
    let brand_id = brand["brand"]["id"].as_i64().unwrap();

    let resp = post_json!(
        app,
        "/models",
        json!({"name": "Chair", "description": "", "image": "c.png", "isActive": true})
    );
    let model: Value = test::read_body_json(resp).await;
    let model_id = model["model"]["id"].as_i64().unwrap();

    let mut space_ids = Vec::new();
    for name in ["Kitchen", "Office"] {
        let resp = post_json!(app, "/spaces", json!({"name": name, "description": "", "image": ""}));
        let space: Value = test::read_body_json(resp).await;
        space_ids.push(space["space"]["id"].as_i64().unwrap());
    }

    for (i, name) in ["Stool", "Armchair", "Bench"].iter().enumerate() {
        let spaces: Vec<i64> = if i == 2 { Vec::new() } else { space_ids.clone() };
        let resp = post_json!(
            app,
            "/products",
            json!({
                "name": name,
                "description": "",
                "is_active": true,
                "images": ["x.jpg"],
                "model_id": model_id,
                "brand_id": brand_id,
                "spacesIds": spaces,
            })
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = get!(app, "/products?page=1&limit=2&brand=Acme");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Products obtained successfully");
    assert_eq!(body["paginate"]["totalItems"], 3);
    assert_eq!(body["paginate"]["totalPages"], 2);
    assert_eq!(body["paginate"]["limit"], 2);
    assert_eq!(body["paginate"]["page"], 1);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["spaces"].as_array().unwrap().len(), 2);

    let resp = get!(app, &format!("/products?space={}", space_ids[1]));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["paginate"]["totalItems"], 2);

    let resp = get!(app, "/products/all");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn empty_catalog_lists_no_products() {
    let app = app!();
    let resp = get!(app, "/products?name=anything");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No products found");
    assert_eq!(body["paginate"]["totalItems"], 0);
    assert_eq!(body["paginate"]["totalPages"], 0);
    assert_eq!(body["items"], json!([]));
}

#[actix_web::test]
async fn invalid_window_is_bad_request() {
    let app = app!();
    for uri in ["/products?page=0&limit=10", "/products?page=1&limit=0", "/products?limit=101"] {
        let resp = get!(app, uri);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn unknown_space_is_unprocessable_and_not_persisted() {
    let app = app!();
    let resp = post_json!(
        app,
        "/models",
        json!({"name": "Chair", "description": "", "image": "", "isActive": true})
    );
    let model: Value = test::read_body_json(resp).await;

    let resp = post_json!(
        app,
        "/products",
        json!({
            "name": "Ghost",
            "description": "",
            "isActive": true,
            "modelId": model["model"]["id"],
            "spaceIds": [404],
        })
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_REFERENCE");

    let resp = get!(app, "/products?name=Ghost");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["paginate"]["totalItems"], 0);
}

#[actix_web::test]
async fn duplicates_conflict_and_missing_is_not_found() {
    let app = app!();
    let space = json!({"name": "Garden", "description": "", "image": ""});
    assert_eq!(post_json!(app, "/spaces", &space).status(), StatusCode::CREATED);
    assert_eq!(post_json!(app, "/spaces", &space).status(), StatusCode::CONFLICT);

    assert_eq!(get!(app, "/products/99").status(), StatusCode::NOT_FOUND);
    assert_eq!(
        post_json!(app, "/spaces", json!({"name": " ", "description": "", "image": ""})).status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn brand_and_space_listings_answer_on_all() {
    let app = app!();
    post_json!(
        app,
        "/brands",
        json!({"name": "Acme", "description": "", "logoImage": "", "isActive": true})
    );
    post_json!(app, "/spaces", json!({"name": "Kitchen", "description": "", "image": ""}));

    for (uri, key) in [
        ("/brands", "brands"),
        ("/brands/all", "brands"),
        ("/spaces", "spaces"),
        ("/spaces/all", "spaces"),
    ] {
        let resp = get!(app, uri);
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[key].as_array().unwrap().len(), 1, "{uri}");
    }
}
