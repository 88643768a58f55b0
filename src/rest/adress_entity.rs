use anyhow::Context;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::IntoResponse,
};
use tracing::debug;

use crate::app::AppState;
use crate::error::{AppError, AppResult};
use crate::pagination::PageRequest;
use crate::rest::headers::pagination_headers;
use crate::rest::types::AdressEntityDto;
use crate::rest::{json_rejection, path_rejection, query_rejection};

const ENTITY_NAME: &str = "adressEntity";
const BASE_URL: &str = "/api/adress-entities";

/// `POST /api/adress-entities`
pub async fn create_adress_entity(
    State(state): State<AppState>,
    payload: Result<Json<AdressEntityDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(dto) = payload.map_err(json_rejection)?;
    debug!("REST request to save AdressEntity: {:?}", dto);

    if dto.id.is_some() {
        return Err(AppError::bad_request_alert(
            "A new adressEntity cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ));
    }

    let created = state.adress_entity_service.create(&dto).await?;
    let id = created.id.to_string();

    let mut headers = state.alerts.entity_created(ENTITY_NAME, &id);
    let location = HeaderValue::from_str(&format!("{}/{}", BASE_URL, id))
        .context("created entity produced an invalid Location header")?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(AdressEntityDto::from(created))))
}

/// `PUT /api/adress-entities`: full replace of the entity named by the body id.
pub async fn update_adress_entity(
    State(state): State<AppState>,
    payload: Result<Json<AdressEntityDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(dto) = payload.map_err(json_rejection)?;
    debug!("REST request to update AdressEntity: {:?}", dto);

    let Some(id) = dto.id else {
        return Err(AppError::bad_request_alert("Invalid id", ENTITY_NAME, "idnull"));
    };

    let updated = state
        .adress_entity_service
        .update(id, &dto)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok((
        state.alerts.entity_updated(ENTITY_NAME, &id.to_string()),
        Json(AdressEntityDto::from(updated)),
    ))
}

/// `PATCH /api/adress-entities/{id}`: only fields present in the body change.
pub async fn partial_update_adress_entity(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AdressEntityDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path.map_err(path_rejection)?;
    let Json(dto) = payload.map_err(json_rejection)?;
    debug!("REST request to partially update AdressEntity {}: {:?}", id, dto);

    if dto.id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::bad_request_alert("Invalid ID", ENTITY_NAME, "idinvalid"));
    }

    let updated = state
        .adress_entity_service
        .partial_update(id, &dto)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok((
        state.alerts.entity_updated(ENTITY_NAME, &id.to_string()),
        Json(AdressEntityDto::from(updated)),
    ))
}

/// `GET /api/adress-entities?page=&size=&sort=`
pub async fn get_all_adress_entities(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query.map_err(query_rejection)?;
    let request = PageRequest::from_query(&params)?;

    let page = state.adress_entity_service.find_all(&request).await?;
    let headers = pagination_headers(BASE_URL, &page);
    let page = page.map(AdressEntityDto::from);

    Ok((headers, Json(page.items)))
}

/// `GET /api/adress-entities/{id}`
pub async fn get_adress_entity(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<AdressEntityDto>> {
    let Path(id) = path.map_err(path_rejection)?;

    let found = state
        .adress_entity_service
        .find_one(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(found.into()))
}

/// `DELETE /api/adress-entities/{id}`
pub async fn delete_adress_entity(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path.map_err(path_rejection)?;
    debug!("REST request to delete AdressEntity {}", id);

    if !state.adress_entity_service.delete(id).await? {
        return Err(AppError::NotFound);
    }

    Ok((
        StatusCode::NO_CONTENT,
        state.alerts.entity_deleted(ENTITY_NAME, &id.to_string()),
    ))
}
