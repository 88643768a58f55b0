mod common;

use axum::http::{Method, StatusCode, header};
use serde_json::{Value, json};

use common::{TestApp, spawn_app};
use shopapi::entities::adress_entity;
use shopapi::rest::types::AdressEntityDto;

const DEFAULT_CITY: &str = "AAAAAAAAAA";
const UPDATED_CITY: &str = "BBBBBBBBBB";

const DEFAULT_STREET: &str = "AAAAAAAAAA";
const UPDATED_STREET: &str = "BBBBBBBBBB";

fn default_adress() -> AdressEntityDto {
    AdressEntityDto::default()
        .city(DEFAULT_CITY)
        .street(DEFAULT_STREET)
}

async fn saved_adress(app: &TestApp) -> adress_entity::Model {
    app.state
        .adress_entity_service
        .create(&default_adress())
        .await
        .expect("failed to save adress entity")
}

async fn count(app: &TestApp) -> u64 {
    app.state.adress_entity_service.count().await.unwrap()
}

async fn all(app: &TestApp) -> Vec<adress_entity::Model> {
    app.state
        .adress_entity_service
        .find_all(&Default::default())
        .await
        .unwrap()
        .items
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn create_adress_entity() {
    let app = spawn_app().await;
    let size_before_create = count(&app).await;

    let response = app
        .request(
            Method::POST,
            "/api/adress-entities",
            Some(&app.admin_token),
            Some(serde_json::to_value(default_adress()).unwrap()),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().expect("created entity has an id");
    assert_eq!(
        response.header("location"),
        Some(format!("/api/adress-entities/{}", id).as_str())
    );
    assert_eq!(
        response.header("x-shopapiapp-alert"),
        Some("shopapiApp.adressEntity.created")
    );
    assert_eq!(response.header("x-shopapiapp-params"), Some(id.to_string().as_str()));

    let adress_list = all(&app).await;
    assert_eq!(adress_list.len() as u64, size_before_create + 1);
    let created = adress_list.last().unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.city.as_deref(), Some(DEFAULT_CITY));
    assert_eq!(created.street.as_deref(), Some(DEFAULT_STREET));
}

#[tokio::test]
async fn create_adress_entity_with_existing_id() {
    let app = spawn_app().await;
    let size_before_create = count(&app).await;

    let mut adress = default_adress();
    adress.id = Some(1);

    // An entity with an existing ID cannot be created
    let response = app
        .request(
            Method::POST,
            "/api/adress-entities",
            Some(&app.admin_token),
            Some(serde_json::to_value(adress).unwrap()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorKey"], "idexists");
    assert_eq!(response.body["entityName"], "adressEntity");
    assert_eq!(response.body["message"], "error.idexists");
    assert_eq!(
        response.header(header::CONTENT_TYPE.as_str()),
        Some("application/problem+json")
    );
    assert_eq!(count(&app).await, size_before_create);
}

#[tokio::test]
async fn create_adress_entity_with_malformed_body() {
    let app = spawn_app().await;

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/adress-entities")
        .header(header::AUTHORIZATION, format!("Bearer {}", app.admin_token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"city\": "))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn get_all_adress_entities() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;

    let response = app.get("/api/adress-entities?sort=id,desc").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_TYPE.as_str()),
        Some("application/json")
    );
    assert_eq!(response.header("x-total-count"), Some("1"));
    let items = response.body.as_array().unwrap();
    assert!(items.iter().any(|item| item["id"] == adress.id));
    assert!(items.iter().any(|item| item["city"] == DEFAULT_CITY));
    assert!(items.iter().any(|item| item["street"] == DEFAULT_STREET));
}

#[tokio::test]
async fn get_all_adress_entities_honours_sort() {
    let app = spawn_app().await;
    let first = saved_adress(&app).await;
    let second = saved_adress(&app).await;

    let descending = app.get("/api/adress-entities?sort=id,desc").await;
    assert_eq!(ids(&descending.body), vec![second.id, first.id]);

    let ascending = app.get("/api/adress-entities?sort=id").await;
    assert_eq!(ids(&ascending.body), vec![first.id, second.id]);
}

#[tokio::test]
async fn get_all_adress_entities_with_unknown_sort_property() {
    let app = spawn_app().await;

    let response = app.get("/api/adress-entities?sort=zipCode,asc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_adress_entities_page() {
    let app = spawn_app().await;
    for _ in 0..3 {
        saved_adress(&app).await;
    }

    let response = app.get("/api/adress-entities?page=0&size=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);
    assert_eq!(response.header("x-total-count"), Some("3"));
    let link = response.header("link").expect("paged listing has a Link header");
    assert!(link.contains("</api/adress-entities?page=1&size=2>; rel=\"next\""));
    assert!(link.contains("</api/adress-entities?page=1&size=2>; rel=\"last\""));
    assert!(!link.contains("rel=\"prev\""));

    let last_page = app.get("/api/adress-entities?page=1&size=2").await;
    assert_eq!(last_page.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_adress_entities_page_out_of_range() {
    let app = spawn_app().await;
    saved_adress(&app).await;

    for uri in [
        "/api/adress-entities?page=1000000000000000000&size=20",
        "/api/adress-entities?page=500000000000000000&size=20",
        "/api/adress-entities?page=18446744073709551615",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
    }

    let beyond_last = app.get("/api/adress-entities?page=1000&size=20").await;
    assert_eq!(beyond_last.status, StatusCode::OK);
    assert_eq!(beyond_last.body, json!([]));
    assert_eq!(beyond_last.header("x-total-count"), Some("1"));
}

#[tokio::test]
async fn get_adress_entity() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;

    let response = app.get(&format!("/api/adress-entities/{}", adress.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_TYPE.as_str()),
        Some("application/json")
    );
    assert_eq!(response.body["id"], adress.id);
    assert_eq!(response.body["city"], DEFAULT_CITY);
    assert_eq!(response.body["street"], DEFAULT_STREET);
}

#[tokio::test]
async fn get_non_existing_adress_entity() {
    let app = spawn_app().await;

    let response = app.get(&format!("/api/adress-entities/{}", i64::MAX)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_adress_entity() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;
    let size_before_update = count(&app).await;

    let updated = AdressEntityDto {
        id: Some(adress.id),
        ..Default::default()
    }
    .city(UPDATED_CITY)
    .street(UPDATED_STREET);

    let response = app
        .request(
            Method::PUT,
            "/api/adress-entities",
            Some(&app.admin_token),
            Some(serde_json::to_value(updated).unwrap()),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("x-shopapiapp-alert"),
        Some("shopapiApp.adressEntity.updated")
    );

    let adress_list = all(&app).await;
    assert_eq!(adress_list.len() as u64, size_before_update);
    let stored = adress_list.last().unwrap();
    assert_eq!(stored.city.as_deref(), Some(UPDATED_CITY));
    assert_eq!(stored.street.as_deref(), Some(UPDATED_STREET));
}

#[tokio::test]
async fn update_replaces_omitted_fields() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;

    let response = app
        .request(
            Method::PUT,
            "/api/adress-entities",
            Some(&app.admin_token),
            Some(json!({ "id": adress.id, "city": UPDATED_CITY })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["city"], UPDATED_CITY);
    assert_eq!(response.body["street"], Value::Null);
}

#[tokio::test]
async fn update_adress_entity_without_id() {
    let app = spawn_app().await;
    let size_before_update = count(&app).await;

    // Without an ID the entity cannot be updated
    let response = app
        .request(
            Method::PUT,
            "/api/adress-entities",
            Some(&app.admin_token),
            Some(serde_json::to_value(default_adress()).unwrap()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorKey"], "idnull");
    assert_eq!(count(&app).await, size_before_update);
}

#[tokio::test]
async fn update_unknown_adress_entity() {
    let app = spawn_app().await;

    let response = app
        .request(
            Method::PUT,
            "/api/adress-entities",
            Some(&app.admin_token),
            Some(json!({ "id": i64::MAX, "city": UPDATED_CITY })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn partial_update_adress_entity() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/api/adress-entities/{}", adress.id),
            Some(&app.admin_token),
            Some(json!({ "city": UPDATED_CITY })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["city"], UPDATED_CITY);
    assert_eq!(response.body["street"], DEFAULT_STREET);

    let stored = app
        .state
        .adress_entity_service
        .find_one(adress.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.city.as_deref(), Some(UPDATED_CITY));
    assert_eq!(stored.street.as_deref(), Some(DEFAULT_STREET));
}

#[tokio::test]
async fn partial_update_with_mismatched_id() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;

    let response = app
        .request(
            Method::PATCH,
            &format!("/api/adress-entities/{}", adress.id),
            Some(&app.admin_token),
            Some(json!({ "id": adress.id + 1, "city": UPDATED_CITY })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorKey"], "idinvalid");
}

#[tokio::test]
async fn delete_adress_entity() {
    let app = spawn_app().await;
    let adress = saved_adress(&app).await;
    let size_before_delete = count(&app).await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/adress-entities/{}", adress.id),
            Some(&app.admin_token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(
        response.header("x-shopapiapp-alert"),
        Some("shopapiApp.adressEntity.deleted")
    );
    assert_eq!(count(&app).await, size_before_delete - 1);

    let again = app
        .request(
            Method::DELETE,
            &format!("/api/adress-entities/{}", adress.id),
            Some(&app.admin_token),
            None,
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = spawn_app().await;

    let response = app.get("/api/adress-entities/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let app = spawn_app().await;

    let listing = app
        .request(Method::GET, "/api/adress-entities", None, None)
        .await;
    assert_eq!(listing.status, StatusCode::UNAUTHORIZED);

    let create = app
        .request(
            Method::POST,
            "/api/adress-entities",
            None,
            Some(serde_json::to_value(default_adress()).unwrap()),
        )
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn requests_with_forged_token_are_unauthorized() {
    let app = spawn_app().await;

    let response = app
        .request(
            Method::GET,
            "/api/adress-entities",
            Some("not-a-real-token"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn plain_users_can_manage_adress_entities() {
    let app = spawn_app().await;

    let response = app
        .request(
            Method::POST,
            "/api/adress-entities",
            Some(&app.user_token),
            Some(serde_json::to_value(default_adress()).unwrap()),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}
